//! Error type shared by the solar-position and timestamp components.

use thiserror::Error;

/// Result type alias for operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Stage of the solar pipeline that left its trigonometric domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    RightAscension,
    Declination,
    Elevation,
    Azimuth,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::RightAscension => "right ascension",
            Self::Declination => "declination",
            Self::Elevation => "elevation",
            Self::Azimuth => "azimuth",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A latitude, longitude or offset was NaN or infinite.
    #[error("non-finite {name}: {value}")]
    NonFiniteInput { name: &'static str, value: f64 },

    /// An intermediate value fell outside the domain of its trig function,
    /// or a ratio divided by zero.
    #[error("undefined sun position: {stage} argument {value} is out of domain")]
    UndefinedPosition { stage: Stage, value: f64 },

    #[error("day of year {day} is out of range for {year} (1..={days_in_year})")]
    DayOutOfRange {
        year: i32,
        day: u32,
        days_in_year: u32,
    },

    #[error("{name} {value} is out of range (0..=23)")]
    HourOutOfRange { name: &'static str, value: i32 },

    #[error("end hour {end} is before start hour {start}")]
    EndBeforeStart { start: i32, end: i32 },

    #[error("interval must be a positive number of hours, got {interval}")]
    NonPositiveInterval { interval: i32 },

    #[error("year {year} is not representable")]
    YearOutOfRange { year: i32 },
}
