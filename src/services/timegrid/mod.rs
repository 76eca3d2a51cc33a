//! Time-grid math for the agenda views.
//!
//! Pure functions over `HH:MM` opening bounds: the ordered slot sequence,
//! the current-time indicator offset, and the day-end clamp used by the
//! drag-reflow pass. Everything here is quantized to the 15-minute grid.

use chrono::{NaiveTime, Timelike};
use thiserror::Error;

/// Width of one grid slot in minutes, system-wide.
pub const SLOT_MINUTES: i64 = 15;
/// Slots per hour at the fixed granularity.
pub const SLOTS_PER_HOUR: u32 = 4;
/// Pixel height of one slot row.
pub const ROW_HEIGHT: f32 = 40.0;
/// Additive correction for the desktop header above the grid body.
pub const DESKTOP_TIME_OFFSET: f32 = 124.0;
/// Default appointment length in slots when created from the dialog.
pub const DEFAULT_DURATION_SLOTS: u32 = 2;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeGridError {
    #[error("invalid time label '{0}', expected HH:MM")]
    InvalidLabel(String),
}

/// Parse an `HH:MM` label into a time on the grid.
pub fn parse_label(label: &str) -> Result<NaiveTime, TimeGridError> {
    NaiveTime::parse_from_str(label.trim(), "%H:%M")
        .map_err(|_| TimeGridError::InvalidLabel(label.to_string()))
}

/// Format a grid time back into its `HH:MM` label.
pub fn slot_label(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Generate the ordered slot sequence between two `HH:MM` bounds, inclusive
/// of the close boundary.
///
/// Malformed labels or an inverted range yield an empty sequence; the walk
/// itself is bounded by the minutes in a day, so bad input can never loop.
pub fn time_slots(open_time: &str, close_time: &str) -> Vec<NaiveTime> {
    let (open, close) = match (parse_label(open_time), parse_label(close_time)) {
        (Ok(open), Ok(close)) => (open, close),
        _ => {
            log::warn!(
                "Ignoring malformed grid bounds '{}'..'{}'",
                open_time,
                close_time
            );
            return Vec::new();
        }
    };

    slot_times(open, close)
}

/// Slot sequence between two already-parsed bounds, inclusive of `close`.
pub fn slot_times(open: NaiveTime, close: NaiveTime) -> Vec<NaiveTime> {
    if close < open {
        return Vec::new();
    }

    let mut slots = Vec::new();
    let mut current = open;
    while current <= close {
        slots.push(current);
        match next_slot(current) {
            Some(next) => current = next,
            // 23:45 has no successor on the grid
            None => break,
        }
    }
    slots
}

/// The next slot on the grid, or `None` when it would cross midnight.
pub fn next_slot(time: NaiveTime) -> Option<NaiveTime> {
    let minutes = time.num_seconds_from_midnight() as i64 / 60 + SLOT_MINUTES;
    if minutes >= 24 * 60 {
        return None;
    }
    NaiveTime::from_hms_opt((minutes / 60) as u32, (minutes % 60) as u32, 0)
}

/// Number of whole slots that fit between `start` and 23:59:59.
pub fn slots_until_day_end(start: NaiveTime) -> u32 {
    let day_end_secs = 24 * 3600 - 1;
    let remaining = day_end_secs - start.num_seconds_from_midnight() as i64;
    if remaining <= 0 {
        return 0;
    }
    (remaining / (SLOT_MINUTES * 60)) as u32
}

/// Clamp a duration so the appointment ends no later than 23:59:59.
pub fn clamp_duration_to_day(start: NaiveTime, duration_slots: u32) -> u32 {
    duration_slots.min(slots_until_day_end(start))
}

/// Pixel offset of the current-time indicator within the grid body.
///
/// `None` when `now` falls outside `[open, close)` or the bounds are
/// malformed. Desktop rendering adds the fixed header correction; mobile
/// positions against the grid body directly.
pub fn current_time_position(
    now: NaiveTime,
    open_time: &str,
    close_time: &str,
    mobile: bool,
) -> Option<f32> {
    let open = parse_label(open_time).ok()?;
    let close = parse_label(close_time).ok()?;

    if now < open || now >= close {
        return None;
    }

    let diff_minutes = (now.num_seconds_from_midnight() - open.num_seconds_from_midnight()) as f32 / 60.0;
    let position = diff_minutes / SLOT_MINUTES as f32 * ROW_HEIGHT;

    if mobile {
        Some(position)
    } else {
        Some(position + DESKTOP_TIME_OFFSET)
    }
}

/// Initial scroll offset that places "now" two rows below the top edge.
pub fn scroll_target(now: NaiveTime, open_time: &str, close_time: &str) -> Option<f32> {
    current_time_position(now, open_time, close_time, false)
        .map(|position| (position - ROW_HEIGHT * 2.0).max(0.0))
}
