use std::f64::consts::{FRAC_PI_2, PI, TAU};

use sun_position::angles::*;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

// ── Degree/radian conversion ──

#[test]
fn test_deg_to_rad_known_values() {
    assert_approx!(deg_to_rad(0.0), 0.0, 1e-15);
    assert_approx!(deg_to_rad(90.0), FRAC_PI_2, 1e-15);
    assert_approx!(deg_to_rad(180.0), PI, 1e-15);
    assert_approx!(deg_to_rad(-360.0), -TAU, 1e-15);
}

#[test]
fn test_rad_to_deg_inverts_deg_to_rad() {
    for deg in [-720.0, -90.0, 0.0, 23.439, 139.751073, 359.9] {
        assert_approx!(rad_to_deg(deg_to_rad(deg)), deg, 1e-9);
    }
}

// ── NormalizeDegrees ──

#[test]
fn test_normalize_degrees_basic() {
    let cases: &[(f64, f64)] = &[
        (0.0, 0.0),
        (45.0, 45.0),
        (360.0, 0.0),
        (361.0, 1.0),
        (-1.0, 359.0),
        (-90.0, 270.0),
        (405.0, 45.0),
        (-180.0, 180.0),
    ];
    for &(input, expected) in cases {
        assert_approx!(normalize_degrees(input), expected, 1e-9);
    }
}

#[test]
fn test_normalize_degrees_large() {
    let cases: &[(f64, f64)] = &[
        (720.0, 0.0),
        (810.0, 90.0),
        (-720.0, 0.0),
        (-450.0, 270.0),
        (5835.0, 75.0),
    ];
    for &(input, expected) in cases {
        assert_approx!(normalize_degrees(input), expected, 1e-9);
    }
}

#[test]
fn test_normalize_degrees_near_zero() {
    assert_approx!(normalize_degrees(0.001), 0.001, 1e-9);
    assert_approx!(normalize_degrees(-0.001), 359.999, 1e-9);
}

#[test]
fn test_normalize_degrees_negative_full_turn() {
    // -360 % 360 is -0.0, which is not shifted
    assert_eq!(normalize_degrees(-360.0), 0.0);
}

// ── TruncatedMod ──

#[test]
fn test_truncated_mod_keeps_dividend_sign() {
    assert_approx!(truncated_mod(370.0, 360.0), 10.0, 1e-12);
    assert_approx!(truncated_mod(-370.0, 360.0), -10.0, 1e-12);
    assert_approx!(truncated_mod(25.5, 24.0), 1.5, 1e-12);
    assert_approx!(truncated_mod(-1.5, 24.0), -1.5, 1e-12);
}

// ── WrapOnceToPi ──

#[test]
fn test_wrap_once_to_pi_inside_range_untouched() {
    for a in [-3.0, -1.0, 0.0, 0.5, 3.0] {
        assert_eq!(wrap_once_to_pi(a), a);
    }
}

#[test]
fn test_wrap_once_to_pi_boundaries_untouched() {
    assert_eq!(wrap_once_to_pi(PI), PI);
    assert_eq!(wrap_once_to_pi(-PI), -PI);
}

#[test]
fn test_wrap_once_to_pi_single_correction() {
    assert_approx!(wrap_once_to_pi(4.0), 4.0 - TAU, 1e-12);
    assert_approx!(wrap_once_to_pi(-4.0), -4.0 + TAU, 1e-12);
    // more than one turn out: only one turn is removed
    assert_approx!(wrap_once_to_pi(10.0), 10.0 - TAU, 1e-12);
    assert!(wrap_once_to_pi(10.0) > PI);
}
