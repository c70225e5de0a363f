use std::f64::consts::FRAC_PI_2;

use chrono::NaiveDateTime;

/// Degrees. No range is enforced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl Default for GeoLocation {
    fn default() -> Self {
        // Nikken Sekkei, Tokyo
        Self {
            latitude: 35.699402,
            longitude: 139.751073,
        }
    }
}

/// Local civil time split the way the solar pipeline consumes it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CivilMoment {
    pub year: i32,
    pub day_of_year: u32,
    pub hour: f64,
    pub utc_offset_hours: f64,
}

/// Apparent sun position in radians.
///
/// `azimuth` is reported in the host's plan convention: the compass azimuth
/// (clockwise from north) shifted by a quarter turn, so north sits on +Y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    pub azimuth: f64,
    pub elevation: f64,
}

impl SunPosition {
    /// Azimuth measured clockwise from north, in [0, 2π]. The closed end is
    /// reached when a tiny negative angle plus a full turn rounds to 2π.
    pub fn compass_azimuth(&self) -> f64 {
        self.azimuth - FRAC_PI_2
    }

    pub fn zenith(&self) -> f64 {
        FRAC_PI_2 - self.elevation
    }

    pub fn is_above_horizon(&self) -> bool {
        self.elevation >= 0.0
    }

    pub fn azimuth_degrees(&self) -> f64 {
        self.azimuth.to_degrees()
    }

    pub fn elevation_degrees(&self) -> f64 {
        self.elevation.to_degrees()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPositionConfig {
    pub location: GeoLocation,
    pub utc_offset_hours: f64,
    pub cull_below_horizon: bool,
}

impl Default for SunPositionConfig {
    fn default() -> Self {
        Self {
            location: GeoLocation::default(),
            utc_offset_hours: 9.0,
            cull_below_horizon: true,
        }
    }
}

/// Daily hour window repeated over every day of a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnnualSchedule {
    pub year: i32,
    pub start_hour: i32,
    pub end_hour: i32,
    pub interval_hours: i32,
}

impl Default for AnnualSchedule {
    fn default() -> Self {
        Self {
            year: 2015,
            start_hour: 6,
            end_hour: 21,
            interval_hours: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SunPathConfig {
    pub schedule: AnnualSchedule,
    pub position: SunPositionConfig,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPathEntry {
    pub timestamp: NaiveDateTime,
    pub position: Option<SunPosition>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SunPathDay {
    pub day_of_year: u32,
    pub entries: Vec<SunPathEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableMetadata {
    pub generated_at: String,
    pub total_entries: usize,
    pub daylight_entries: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SunPathTable {
    pub config: SunPathConfig,
    pub days: Vec<SunPathDay>,
    pub metadata: TableMetadata,
}
