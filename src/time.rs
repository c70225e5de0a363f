//! Calendar helpers and the fixed-epoch day count used by the solar series.
//!
//! The day count is anchored on 1949 rather than on the astronomical Julian
//! epoch: [`julian_day`] returns `32916.5` plus the days elapsed since
//! 1949-01-00, and the series in [`crate::sun`] measures time from
//! [`REFERENCE_DAY`]. Leap days are counted as `(year - 1949) / 4`, which
//! agrees with the Gregorian calendar from 1949 through 2099.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::error::{Error, Result};
use crate::types::CivilMoment;

pub const EPOCH_YEAR: i32 = 1949;
pub const JULIAN_DAY_AT_EPOCH: f64 = 32916.5;
pub const REFERENCE_DAY: f64 = 51545.0;

pub fn leap_year(year: i32) -> bool {
    (year % 400 == 0) || (year % 4 == 0 && year % 100 != 0)
}

pub fn days_in_year(year: i32) -> u32 {
    if leap_year(year) {
        366
    } else {
        365
    }
}

pub fn day_of_year(year: i32, month: u32, day: u32) -> Result<u32> {
    NaiveDate::from_ymd_opt(year, month, day)
        .map(|date| date.ordinal())
        .ok_or(Error::DayOutOfRange {
            year,
            day,
            days_in_year: days_in_year(year),
        })
}

impl CivilMoment {
    pub fn new(year: i32, day_of_year: u32, hour: f64, utc_offset_hours: f64) -> Result<Self> {
        let days = days_in_year(year);
        if day_of_year == 0 || day_of_year > days {
            return Err(Error::DayOutOfRange {
                year,
                day: day_of_year,
                days_in_year: days,
            });
        }
        Ok(Self {
            year,
            day_of_year,
            hour,
            utc_offset_hours,
        })
    }

    /// Whole seconds only; sub-second precision is dropped.
    pub fn from_naive(local: &NaiveDateTime, utc_offset_hours: f64) -> Self {
        let hour = local.hour() as f64 + local.minute() as f64 / 60.0 + local.second() as f64 / 3600.0;
        Self {
            year: local.year(),
            day_of_year: local.ordinal(),
            hour,
            utc_offset_hours,
        }
    }

    /// Hour of the day in UTC. May leave [0, 24) when the offset crosses midnight.
    pub fn utc_hour(&self) -> f64 {
        self.hour - self.utc_offset_hours
    }
}

fn leap_days_since_epoch(delta_years: i64) -> i64 {
    // integer division truncates toward zero, also before the epoch
    delta_years / 4
}

fn days_before_year(delta_years: i64) -> f64 {
    (delta_years * 365 + leap_days_since_epoch(delta_years)) as f64
}

pub fn julian_day(moment: &CivilMoment) -> f64 {
    let delta_years = (moment.year - EPOCH_YEAR) as i64;
    JULIAN_DAY_AT_EPOCH
        + days_before_year(delta_years)
        + moment.day_of_year as f64
        + moment.utc_hour() / 24.0
}

/// Days elapsed since [`REFERENCE_DAY`], the `T` of the solar series.
pub fn days_since_reference(julian_day: f64) -> f64 {
    julian_day - REFERENCE_DAY
}

/// Inverse of [`julian_day`], returning the moment in UTC.
///
/// Fails with [`Error::DayOutOfRange`] where the fixed leap count and the
/// calendar disagree on the length of the year.
pub fn civil_from_julian_day(julian_day: f64) -> Result<CivilMoment> {
    if !julian_day.is_finite() {
        return Err(Error::NonFiniteInput {
            name: "julian day",
            value: julian_day,
        });
    }
    let elapsed = julian_day - JULIAN_DAY_AT_EPOCH - 1.0;
    let estimate = (elapsed / 365.25).floor();
    let max_delta = i32::MAX as f64 - EPOCH_YEAR as f64 - 1.0;
    let min_delta = i32::MIN as f64 - EPOCH_YEAR as f64 + 1.0;
    if estimate > max_delta || estimate < min_delta {
        return Err(Error::YearOutOfRange {
            year: if estimate > 0.0 { i32::MAX } else { i32::MIN },
        });
    }

    let mut delta_years = estimate as i64;
    while days_before_year(delta_years) > elapsed {
        delta_years -= 1;
    }
    while days_before_year(delta_years + 1) <= elapsed {
        delta_years += 1;
    }

    let into_year = elapsed - days_before_year(delta_years);
    let whole_days = into_year.floor();
    // outside 1949..=2099 the day count can give a common year a 366th day
    CivilMoment::new(
        (EPOCH_YEAR as i64 + delta_years) as i32,
        whole_days as u32 + 1,
        (into_year - whole_days) * 24.0,
        0.0,
    )
}
