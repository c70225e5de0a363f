pub mod angles;
pub mod annual;
pub mod error;
pub mod sun;
pub mod sun_path;
pub mod time;
pub mod types;

pub use angles::{deg_to_rad, normalize_degrees, rad_to_deg, truncated_mod, wrap_once_to_pi};

pub use annual::{annual_timestamps, AnnualTimestamps};

pub use error::{Error, Result, Stage};

pub use sun::{
    compass_azimuth, cull_below_horizon, declination, ecliptic_longitude, elevation,
    greenwich_mean_sidereal_time, hour_angle, local_mean_sidereal_time, mean_anomaly,
    mean_longitude, obliquity, right_ascension, sun_position, sun_position_at,
    sun_position_culled, sun_position_for_moment, DEGREES_PER_HOUR,
};

pub use sun_path::{
    generate_sun_path_table, generate_sun_path_table_at, lookup_sun_path, lookup_sun_path_at,
    sun_path_table_to_compact,
};

pub use time::{
    civil_from_julian_day, day_of_year, days_in_year, days_since_reference, julian_day,
    leap_year, EPOCH_YEAR, JULIAN_DAY_AT_EPOCH, REFERENCE_DAY,
};

pub use types::{
    AnnualSchedule, CivilMoment, GeoLocation, SunPathConfig, SunPathDay, SunPathEntry,
    SunPathTable, SunPosition, SunPositionConfig, TableMetadata,
};
