use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use proptest::prelude::*;

use sun_position::annual::*;
use sun_position::error::Error;
use sun_position::types::AnnualSchedule;

fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, 0, 0)
        .unwrap()
}

// ── Config ──

#[test]
fn test_default_schedule() {
    let s = AnnualSchedule::default();
    assert_eq!(s.year, 2015);
    assert_eq!(s.start_hour, 6);
    assert_eq!(s.end_hour, 21);
    assert_eq!(s.interval_hours, 1);
    assert_eq!(s.slots_per_day(), 16);
    assert_eq!(s.len(), 5840);
}

// ── Grid size ──

#[test]
fn test_2015_hourly_daylight_window() {
    let ts = annual_timestamps(2015, 6, 21, 1).unwrap();
    assert_eq!(ts.len(), 365 * 16);
    assert_eq!(ts.len(), 5840);
    assert_eq!(ts[0], at(2015, 1, 1, 6));
    assert_eq!(ts[15], at(2015, 1, 1, 21));
    assert_eq!(ts[16], at(2015, 1, 2, 6));
    assert_eq!(*ts.last().unwrap(), at(2015, 12, 31, 21));
}

#[test]
fn test_leap_year_has_extra_day() {
    let ts = annual_timestamps(2016, 6, 21, 1).unwrap();
    assert_eq!(ts.len(), 366 * 16);
    assert!(ts.contains(&at(2016, 2, 29, 12)));
    assert_eq!(*ts.last().unwrap(), at(2016, 12, 31, 21));
}

#[test]
fn test_century_years() {
    assert_eq!(annual_timestamps(1900, 0, 0, 1).unwrap().len(), 365);
    assert_eq!(annual_timestamps(2000, 0, 0, 1).unwrap().len(), 366);
}

#[test]
fn test_interval_not_dividing_window() {
    // 6, 9, 12, 15, 18, 21 then 8 from the inclusive end
    let ts = annual_timestamps(2015, 6, 22, 3).unwrap();
    assert_eq!(ts.len(), 365 * 6);
    let first_day: Vec<u32> = ts[..6].iter().map(|t| t.hour()).collect();
    assert_eq!(first_day, vec![6, 9, 12, 15, 18, 21]);
}

#[test]
fn test_interval_wider_than_window_gives_one_slot() {
    let ts = annual_timestamps(2015, 6, 21, 24).unwrap();
    assert_eq!(ts.len(), 365);
    assert!(ts.iter().all(|t| t.hour() == 6));
}

#[test]
fn test_single_hour_window() {
    let ts = annual_timestamps(2015, 12, 12, 1).unwrap();
    assert_eq!(ts.len(), 365);
    assert_eq!(ts[79], at(2015, 3, 21, 12));
}

#[test]
fn test_full_day_window() {
    let ts = annual_timestamps(2015, 0, 23, 1).unwrap();
    assert_eq!(ts.len(), 365 * 24);
    assert_eq!(ts[24], at(2015, 1, 2, 0));
}

// ── Iterator ──

#[test]
fn test_iterator_is_exact_size_and_lazy() {
    let schedule = AnnualSchedule::new(2015, 6, 21, 1);
    let mut iter = schedule.iter().unwrap();
    assert_eq!(iter.len(), 5840);
    assert_eq!(iter.next(), Some(at(2015, 1, 1, 6)));
    assert_eq!(iter.len(), 5839);
    assert_eq!(iter.nth(5838), Some(at(2015, 12, 31, 21)));
    assert_eq!(iter.next(), None);
}

#[test]
fn test_iterator_matches_vec() {
    let schedule = AnnualSchedule::new(2016, 8, 17, 2);
    let collected: Vec<_> = schedule.iter().unwrap().collect();
    assert_eq!(collected, schedule.timestamps().unwrap());
}

// ── Preconditions ──

#[test]
fn test_end_before_start_is_rejected() {
    assert_eq!(
        annual_timestamps(2015, 21, 6, 1),
        Err(Error::EndBeforeStart { start: 21, end: 6 })
    );
}

#[test]
fn test_non_positive_interval_is_rejected() {
    assert_eq!(
        annual_timestamps(2015, 6, 21, 0),
        Err(Error::NonPositiveInterval { interval: 0 })
    );
    assert_eq!(
        annual_timestamps(2015, 6, 21, -2),
        Err(Error::NonPositiveInterval { interval: -2 })
    );
}

#[test]
fn test_hours_out_of_range_are_rejected() {
    assert_eq!(
        annual_timestamps(2015, -1, 21, 1),
        Err(Error::HourOutOfRange {
            name: "start hour",
            value: -1
        })
    );
    assert_eq!(
        annual_timestamps(2015, 6, 24, 1),
        Err(Error::HourOutOfRange {
            name: "end hour",
            value: 24
        })
    );
}

#[test]
fn test_unrepresentable_year_is_rejected() {
    assert_eq!(
        annual_timestamps(i32::MAX, 6, 21, 1),
        Err(Error::YearOutOfRange { year: i32::MAX })
    );
}

#[test]
fn test_invalid_schedule_has_no_slots() {
    assert_eq!(AnnualSchedule::new(2015, 21, 6, 1).slots_per_day(), 0);
    assert_eq!(AnnualSchedule::new(2015, 6, 21, 0).slots_per_day(), 0);
    assert!(AnnualSchedule::new(2015, 6, 21, 0).is_empty());
}

proptest! {
    #[test]
    fn prop_grid_is_ordered_and_sized(
        year in 1900i32..2400,
        start in 0i32..24,
        span in 0i32..24,
        interval in 1i32..30,
    ) {
        let end = (start + span).min(23);
        let schedule = AnnualSchedule::new(year, start, end, interval);
        let ts = schedule.timestamps().unwrap();
        let slots = ((end - start) / interval + 1) as usize;
        prop_assert_eq!(ts.len(), schedule.days() as usize * slots);
        prop_assert!(ts.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(ts.iter().all(|t| t.year() == year));
        prop_assert!(ts.iter().all(|t| (start..=end).contains(&(t.hour() as i32))));
        prop_assert_eq!(ts.last().unwrap().ordinal(), schedule.days());
    }
}
