use chrono::{DateTime, Datelike, NaiveDateTime, Utc};
use log::debug;

use crate::error::Result;
use crate::types::{SunPathConfig, SunPathDay, SunPathEntry, SunPathTable, TableMetadata};

/// Sun positions over the schedule's annual grid, one row per day.
///
/// Samples below the horizon hold `None` when the position config culls them.
/// The metadata is stamped with the current time; see
/// [`generate_sun_path_table_at`] for a reproducible table.
pub fn generate_sun_path_table(config: &SunPathConfig) -> Result<SunPathTable> {
    generate_sun_path_table_at(config, Utc::now())
}

/// Same as [`generate_sun_path_table`], stamped with `generated_at`.
pub fn generate_sun_path_table_at(
    config: &SunPathConfig,
    generated_at: DateTime<Utc>,
) -> Result<SunPathTable> {
    let schedule = &config.schedule;
    let timestamps = schedule.timestamps()?;
    let slots = schedule.slots_per_day() as usize;

    let mut days: Vec<SunPathDay> = Vec::with_capacity(schedule.days() as usize);
    for row in timestamps.chunks(slots) {
        let mut entries = Vec::with_capacity(row.len());
        for timestamp in row {
            entries.push(SunPathEntry {
                timestamp: *timestamp,
                position: config.position.compute(timestamp)?,
            });
        }
        days.push(SunPathDay {
            day_of_year: row[0].ordinal(),
            entries,
        });
    }

    let total_entries: usize = days.iter().map(|d| d.entries.len()).sum();
    let daylight_entries = days
        .iter()
        .flat_map(|d| &d.entries)
        .filter(|e| e.position.is_some_and(|p| p.is_above_horizon()))
        .count();
    debug!(
        "sun path table for {}: {} entries, {} in daylight",
        schedule.year, total_entries, daylight_entries
    );

    Ok(SunPathTable {
        config: *config,
        days,
        metadata: TableMetadata {
            generated_at: generated_at.to_rfc3339(),
            total_entries,
            daylight_entries,
        },
    })
}

pub fn lookup_sun_path(table: &SunPathTable, day_of_year: u32, slot: usize) -> Option<&SunPathEntry> {
    let index = day_of_year.checked_sub(1)? as usize;
    table.days.get(index)?.entries.get(slot)
}

/// Exact match on one of the table's sample times.
pub fn lookup_sun_path_at<'a>(table: &'a SunPathTable, timestamp: &NaiveDateTime) -> Option<&'a SunPathEntry> {
    if timestamp.year() != table.config.schedule.year {
        return None;
    }
    let entries = &table.days.get(timestamp.ordinal0() as usize)?.entries;
    let idx = entries
        .binary_search_by(|e| e.timestamp.cmp(timestamp))
        .ok()?;
    entries.get(idx)
}

/// `(azimuth, elevation)` pairs per day, `None` where culled.
pub fn sun_path_table_to_compact(table: &SunPathTable) -> Vec<Vec<Option<(f64, f64)>>> {
    table
        .days
        .iter()
        .map(|day| {
            day.entries
                .iter()
                .map(|e| e.position.map(|p| (p.azimuth, p.elevation)))
                .collect()
        })
        .collect()
}
