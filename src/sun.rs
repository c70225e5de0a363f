//! Low-order solar ephemeris: civil time to ecliptic, equatorial and finally
//! horizontal coordinates.
//!
//! Angles are carried in degrees while they go through modulo arithmetic and
//! converted to radians right before a trigonometric call.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use chrono::{DateTime, NaiveDateTime, Offset, TimeZone};
use log::{debug, trace, warn};

use crate::angles::{deg_to_rad, normalize_degrees, truncated_mod, wrap_once_to_pi};
use crate::error::{Error, Result, Stage};
use crate::time::{days_since_reference, julian_day};
use crate::types::{CivilMoment, GeoLocation, SunPosition, SunPositionConfig};

pub const DEGREES_PER_HOUR: f64 = 15.0;

fn checked_asin(stage: Stage, value: f64) -> Result<f64> {
    if (-1.0..=1.0).contains(&value) {
        Ok(value.asin())
    } else {
        warn!("{} argument {} outside [-1, 1]", stage, value);
        Err(Error::UndefinedPosition { stage, value })
    }
}

fn ensure_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFiniteInput { name, value })
    }
}

/// Degrees, remainder keeps the sign of `t`.
pub fn mean_longitude(t: f64) -> f64 {
    truncated_mod(280.460 + 0.9856474 * t, 360.0)
}

/// Radians.
pub fn mean_anomaly(t: f64) -> f64 {
    deg_to_rad(normalize_degrees(357.528 + 0.9856003 * t))
}

/// Radians, from the mean longitude in degrees and the mean anomaly in radians.
pub fn ecliptic_longitude(mean_longitude: f64, mean_anomaly: f64) -> f64 {
    let lambda = mean_longitude + 1.915 * mean_anomaly.sin() + 0.020 * (2.0 * mean_anomaly).sin();
    deg_to_rad(normalize_degrees(lambda))
}

/// Obliquity of the ecliptic, radians.
pub fn obliquity(t: f64) -> f64 {
    deg_to_rad(23.439 - 0.0000004 * t)
}

/// Right ascension in radians, resolved into [0, 2π) by hand.
///
/// `cos λ < 0` adds a half turn, otherwise a negative numerator adds a full
/// turn. `cos λ == 0` is an error.
pub fn right_ascension(obliquity: f64, ecliptic_longitude: f64) -> Result<f64> {
    let num = obliquity.cos() * ecliptic_longitude.sin();
    let den = ecliptic_longitude.cos();
    let ratio = num / den;
    if !ratio.is_finite() {
        warn!("right ascension ratio {} / {} is not finite", num, den);
        return Err(Error::UndefinedPosition {
            stage: Stage::RightAscension,
            value: ratio,
        });
    }
    let ra = ratio.atan();
    Ok(match (den < 0.0, num < 0.0) {
        (true, _) => ra + PI,
        (false, true) => ra + TAU,
        (false, false) => ra,
    })
}

pub fn declination(obliquity: f64, ecliptic_longitude: f64) -> Result<f64> {
    checked_asin(
        Stage::Declination,
        obliquity.sin() * ecliptic_longitude.sin(),
    )
}

/// Hours.
pub fn greenwich_mean_sidereal_time(t: f64, hour_utc: f64) -> f64 {
    truncated_mod(6.697375 + 0.0657098242 * t + hour_utc, 24.0)
}

/// Radians.
pub fn local_mean_sidereal_time(gmst: f64, longitude: f64) -> f64 {
    deg_to_rad(truncated_mod(gmst + longitude / DEGREES_PER_HOUR, 24.0) * DEGREES_PER_HOUR)
}

pub fn hour_angle(lmst: f64, right_ascension: f64) -> f64 {
    wrap_once_to_pi(lmst - right_ascension)
}

/// Signed elevation in radians. `latitude` is in radians.
pub fn elevation(declination: f64, latitude: f64, hour_angle: f64) -> Result<f64> {
    checked_asin(
        Stage::Elevation,
        declination.sin() * latitude.sin()
            + declination.cos() * latitude.cos() * hour_angle.cos(),
    )
}

/// Azimuth clockwise from north in radians. `latitude` is in radians.
pub fn compass_azimuth(
    declination: f64,
    latitude: f64,
    hour_angle: f64,
    elevation: f64,
) -> Result<f64> {
    let azimuth = checked_asin(
        Stage::Azimuth,
        -declination.cos() * hour_angle.sin() / elevation.cos(),
    )?;

    let cos_non_negative = declination.sin() - elevation.sin() * latitude.sin() >= 0.0;
    let sin_negative = azimuth.sin() < 0.0;

    Ok(if !cos_non_negative {
        PI - azimuth
    } else if sin_negative {
        azimuth + TAU
    } else {
        azimuth
    })
}

pub fn sun_position_for_moment(moment: &CivilMoment, location: &GeoLocation) -> Result<SunPosition> {
    ensure_finite("latitude", location.latitude)?;
    ensure_finite("longitude", location.longitude)?;
    ensure_finite("utc offset", moment.utc_offset_hours)?;

    let hour_utc = moment.utc_hour();
    let jd = julian_day(moment);
    let t = days_since_reference(jd);

    let l = mean_longitude(t);
    let m = mean_anomaly(t);
    let lambda = ecliptic_longitude(l, m);
    let epsilon = obliquity(t);

    let ra = right_ascension(epsilon, lambda)?;
    let dec = declination(epsilon, lambda)?;

    let gmst = greenwich_mean_sidereal_time(t, hour_utc);
    let lmst = local_mean_sidereal_time(gmst, location.longitude);
    let ha = hour_angle(lmst, ra);

    let phi = deg_to_rad(location.latitude);
    let h = elevation(dec, phi, ha)?;
    let a = compass_azimuth(dec, phi, ha, h)?;

    trace!(
        "jd={} t={} L={} M={} lambda={} eps={} ra={} dec={} gmst={} lmst={} H={} h={} A={}",
        jd, t, l, m, lambda, epsilon, ra, dec, gmst, lmst, ha, h, a
    );

    Ok(SunPosition {
        azimuth: a + FRAC_PI_2,
        elevation: h,
    })
}

/// Sun position for a local wall-clock time and an offset in hours east of UTC.
pub fn sun_position(
    local: &NaiveDateTime,
    location: &GeoLocation,
    utc_offset_hours: f64,
) -> Result<SunPosition> {
    sun_position_for_moment(&CivilMoment::from_naive(local, utc_offset_hours), location)
}

/// Same as [`sun_position`], reading the offset carried by `dt`.
pub fn sun_position_at<Tz: TimeZone>(dt: &DateTime<Tz>, location: &GeoLocation) -> Result<SunPosition> {
    let offset_seconds = dt.offset().fix().local_minus_utc();
    sun_position(&dt.naive_local(), location, offset_seconds as f64 / 3600.0)
}

pub fn cull_below_horizon(position: SunPosition, cull: bool) -> Option<SunPosition> {
    if cull && position.elevation < 0.0 {
        debug!("culled sun position below horizon: elevation {}", position.elevation);
        None
    } else {
        Some(position)
    }
}

/// `Ok(None)` when `cull` is set and the sun is below the horizon.
pub fn sun_position_culled(
    local: &NaiveDateTime,
    location: &GeoLocation,
    utc_offset_hours: f64,
    cull: bool,
) -> Result<Option<SunPosition>> {
    let position = sun_position(local, location, utc_offset_hours)?;
    Ok(cull_below_horizon(position, cull))
}

impl SunPositionConfig {
    pub fn compute(&self, local: &NaiveDateTime) -> Result<Option<SunPosition>> {
        sun_position_culled(
            local,
            &self.location,
            self.utc_offset_hours,
            self.cull_below_horizon,
        )
    }
}
