//! Derive high and low water events from a day's tide-height curve.
//!
//! The curve is sampled once per hour. Interior local maxima above
//! [`HIGH_WATER_THRESHOLD`] become high-water events and interior local
//! minima below [`LOW_WATER_THRESHOLD`] become low-water events. Curves that
//! yield fewer than two events are replaced by a fixed four-event schedule so
//! callers always have something to display.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::numeric::round_tenth;

/// Peaks must exceed this height, in metres, to count as high water.
pub const HIGH_WATER_THRESHOLD: f64 = 2.5;

/// Troughs must fall below this height, in metres, to count as low water.
pub const LOW_WATER_THRESHOLD: f64 = 2.0;

/// Minimum number of detected events before the curve is trusted.
const MIN_EVENTS: usize = 2;

/// Schedule substituted when a curve yields too few events: hour, minute,
/// kind and height.
const FALLBACK_SCHEDULE: [(u32, u32, TideKind, f64); 4] = [
    (5, 30, TideKind::Low, 1.1),
    (11, 45, TideKind::High, 3.7),
    (17, 20, TideKind::Low, 1.3),
    (23, 50, TideKind::High, 3.9),
];

/// Whether an event is high or low water.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TideKind {
    /// High water.
    High,
    /// Low water.
    Low,
}

/// A single high or low water event.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TideEvent {
    /// When the event occurs.
    pub at: NaiveDateTime,
    /// High or low water.
    pub kind: TideKind,
    /// Water height in metres, rounded to one decimal.
    pub height: f64,
}

impl TideEvent {
    /// Format the event time as `HH:MM`.
    #[must_use]
    pub fn time_label(&self) -> String {
        self.at.format("%H:%M").to_string()
    }
}

/// Extract tide events from hourly `heights` for `date`.
///
/// Index `i` of `heights` is the height at hour `i`. Only interior points are
/// inspected, so the first and last hours never produce events. Events are
/// returned in chronological order.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use surfside_core::{extract_tide_events, TideKind};
///
/// let date = NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date");
/// let mut heights = vec![2.2; 24];
/// heights[4] = 1.2;
/// heights[10] = 3.4;
///
/// let events = extract_tide_events(&heights, date);
/// assert_eq!(events.len(), 2);
/// assert_eq!(events[0].kind, TideKind::Low);
/// assert_eq!(events[0].time_label(), "04:00");
/// assert_eq!(events[1].height, 3.4);
/// ```
#[must_use]
pub fn extract_tide_events(heights: &[f64], date: NaiveDate) -> Vec<TideEvent> {
    let mut events: Vec<TideEvent> = heights
        .windows(3)
        .zip(1_u32..)
        .filter_map(|(window, hour)| {
            let &[prev, curr, next] = window else {
                return None;
            };
            let kind = classify(prev, curr, next)?;
            let at = date.and_time(NaiveTime::from_hms_opt(hour, 0, 0)?);
            Some(TideEvent {
                at,
                kind,
                height: round_tenth(curr),
            })
        })
        .collect();

    if events.len() < MIN_EVENTS {
        log::warn!(
            "tide curve for {date} produced {} event(s); using fallback schedule",
            events.len()
        );
        return fallback_schedule(date);
    }
    events.sort_by_key(|event| event.at);
    events
}

/// The fixed schedule used when a curve yields too few events.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use surfside_core::fallback_schedule;
///
/// let date = NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date");
/// let labels: Vec<_> = fallback_schedule(date).iter().map(|e| e.time_label()).collect();
/// assert_eq!(labels, ["05:30", "11:45", "17:20", "23:50"]);
/// ```
#[must_use]
pub fn fallback_schedule(date: NaiveDate) -> Vec<TideEvent> {
    FALLBACK_SCHEDULE
        .iter()
        .filter_map(|&(hour, minute, kind, height)| {
            let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
            Some(TideEvent {
                at: date.and_time(time),
                kind,
                height,
            })
        })
        .collect()
}

fn classify(prev: f64, curr: f64, next: f64) -> Option<TideKind> {
    if prev < curr && curr > next && curr > HIGH_WATER_THRESHOLD {
        Some(TideKind::High)
    } else if prev > curr && curr < next && curr < LOW_WATER_THRESHOLD {
        Some(TideKind::Low)
    } else {
        None
    }
}
