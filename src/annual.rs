use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use log::debug;

use crate::error::{Error, Result};
use crate::time::days_in_year;
use crate::types::AnnualSchedule;

fn check_hour(name: &'static str, value: i32) -> Result<()> {
    if (0..=23).contains(&value) {
        Ok(())
    } else {
        Err(Error::HourOutOfRange { name, value })
    }
}

impl AnnualSchedule {
    pub fn new(year: i32, start_hour: i32, end_hour: i32, interval_hours: i32) -> Self {
        Self {
            year,
            start_hour,
            end_hour,
            interval_hours,
        }
    }

    pub fn validate(&self) -> Result<()> {
        check_hour("start hour", self.start_hour)?;
        check_hour("end hour", self.end_hour)?;
        if self.end_hour < self.start_hour {
            return Err(Error::EndBeforeStart {
                start: self.start_hour,
                end: self.end_hour,
            });
        }
        if self.interval_hours <= 0 {
            return Err(Error::NonPositiveInterval {
                interval: self.interval_hours,
            });
        }
        Ok(())
    }

    pub fn days(&self) -> u32 {
        days_in_year(self.year)
    }

    /// Samples per day. Zero for a schedule that fails [`validate`](Self::validate)
    /// on its interval or hour order.
    pub fn slots_per_day(&self) -> u32 {
        if self.end_hour < self.start_hour || self.interval_hours <= 0 {
            return 0;
        }
        let span = self.end_hour as i64 - self.start_hour as i64;
        u32::try_from(span / self.interval_hours as i64 + 1).unwrap_or(u32::MAX)
    }

    pub fn len(&self) -> usize {
        self.days() as usize * self.slots_per_day() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lazily walks the grid, day by day and slot by slot.
    pub fn iter(&self) -> Result<AnnualTimestamps> {
        self.validate()?;
        let first = NaiveDate::from_ymd_opt(self.year, 1, 1)
            .and_then(|date| date.and_hms_opt(self.start_hour as u32, 0, 0))
            .ok_or(Error::YearOutOfRange { year: self.year })?;
        Ok(AnnualTimestamps {
            first,
            interval_hours: self.interval_hours as i64,
            slots: self.slots_per_day() as usize,
            total: self.len(),
            index: 0,
        })
    }

    pub fn timestamps(&self) -> Result<Vec<NaiveDateTime>> {
        let timestamps: Vec<NaiveDateTime> = self.iter()?.collect();
        debug!(
            "generated {} timestamps for {} ({} days x {} slots)",
            timestamps.len(),
            self.year,
            self.days(),
            self.slots_per_day()
        );
        Ok(timestamps)
    }
}

#[derive(Debug, Clone)]
pub struct AnnualTimestamps {
    first: NaiveDateTime,
    interval_hours: i64,
    slots: usize,
    total: usize,
    index: usize,
}

impl Iterator for AnnualTimestamps {
    type Item = NaiveDateTime;

    fn next(&mut self) -> Option<NaiveDateTime> {
        if self.index >= self.total {
            return None;
        }
        let day = (self.index / self.slots) as i64;
        let slot = (self.index % self.slots) as i64;
        self.index += 1;
        self.first
            .checked_add_signed(TimeDelta::days(day))?
            .checked_add_signed(TimeDelta::hours(slot * self.interval_hours))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for AnnualTimestamps {}

/// Every day of `year` sampled from `start_hour` to `end_hour` every `interval_hours`.
pub fn annual_timestamps(
    year: i32,
    start_hour: i32,
    end_hour: i32,
    interval_hours: i32,
) -> Result<Vec<NaiveDateTime>> {
    AnnualSchedule::new(year, start_hour, end_hour, interval_hours).timestamps()
}
