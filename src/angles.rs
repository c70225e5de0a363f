use std::f64::consts::{PI, TAU};

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / PI)
}

/// Remainder with the sign of the dividend, as `%` on floats.
pub fn truncated_mod(value: f64, modulus: f64) -> f64 {
    value % modulus
}

/// `value mod 360`, with a negative remainder shifted once into [0, 360).
pub fn normalize_degrees(angle: f64) -> f64 {
    let r = truncated_mod(angle, 360.0);
    if r < 0.0 {
        r + 360.0
    } else {
        r
    }
}

/// Wraps an angle lying within one turn of [-π, π] back into it.
///
/// Only a single correction is applied; inputs further out stay out.
pub fn wrap_once_to_pi(angle: f64) -> f64 {
    if angle < -PI {
        angle + TAU
    } else if angle > PI {
        angle - TAU
    } else {
        angle
    }
}
