use chrono::{Datelike, Duration, NaiveDate};

use crate::models::appointment::Appointment;
use crate::models::clinic::ClinicConfig;
use crate::services::appointment::SlotRef;

pub mod day_view;
pub mod grid;
mod palette;
pub mod week_view;

pub(crate) use palette::GridPalette;

/// Result of pointer interactions inside the agenda grid.
#[derive(Default)]
pub struct GridOutcome {
    /// Empty active cell was clicked: the pending slot for a new booking.
    pub slot_clicked: Option<SlotRef>,
    /// An existing appointment block was clicked for editing.
    pub appointment_clicked: Option<Appointment>,
    /// A day header was clicked (week view jumps to that day).
    pub day_header_clicked: Option<NaiveDate>,
    /// A drag gesture committed a reflow this frame.
    pub moved: bool,
    /// A resize gesture committed this frame.
    pub resized: bool,
}

impl GridOutcome {
    pub fn merge(&mut self, other: GridOutcome) {
        if other.slot_clicked.is_some() {
            self.slot_clicked = other.slot_clicked;
        }
        if other.appointment_clicked.is_some() {
            self.appointment_clicked = other.appointment_clicked;
        }
        if other.day_header_clicked.is_some() {
            self.day_header_clicked = other.day_header_clicked;
        }
        self.moved |= other.moved;
        self.resized |= other.resized;
    }
}

/// Week columns for the given date: Monday through Sunday, with the weekend
/// days present only when the clinic opens them.
pub fn week_days(current_date: NaiveDate, config: &ClinicConfig) -> Vec<NaiveDate> {
    let monday = current_date
        - Duration::days(current_date.weekday().num_days_from_monday() as i64);

    (0..7)
        .map(|offset| monday + Duration::days(offset))
        .filter(|day| match day.weekday() {
            chrono::Weekday::Sat => config.saturday_open,
            chrono::Weekday::Sun => config.sunday_open,
            _ => true,
        })
        .collect()
}

/// Spanish weekday name, as the agenda headers show it.
pub fn weekday_name_es(date: NaiveDate) -> &'static str {
    match date.weekday() {
        chrono::Weekday::Mon => "lunes",
        chrono::Weekday::Tue => "martes",
        chrono::Weekday::Wed => "miércoles",
        chrono::Weekday::Thu => "jueves",
        chrono::Weekday::Fri => "viernes",
        chrono::Weekday::Sat => "sábado",
        chrono::Weekday::Sun => "domingo",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::clinic::Clinic;

    fn monday() -> NaiveDate {
        // 2025-02-24 is a Monday
        NaiveDate::from_ymd_opt(2025, 2, 24).unwrap()
    }

    #[test]
    fn test_week_days_respects_weekend_flags() {
        // builtin clinic 1: saturday open, sunday closed
        let config = Clinic::builtin().remove(0).config;
        let days = week_days(monday(), &config);
        assert_eq!(days.len(), 6);
        assert_eq!(days[0], monday());
        assert_eq!(days[5].weekday(), chrono::Weekday::Sat);
    }

    #[test]
    fn test_week_days_from_mid_week_starts_monday() {
        let config = Clinic::builtin().remove(0).config;
        let wednesday = monday() + Duration::days(2);
        assert_eq!(week_days(wednesday, &config)[0], monday());
    }

    #[test]
    fn test_week_days_all_seven_when_fully_open() {
        let mut config = Clinic::builtin().remove(0).config;
        config.sunday_open = true;
        assert_eq!(week_days(monday(), &config).len(), 7);
    }

    #[test]
    fn test_weekday_names() {
        assert_eq!(weekday_name_es(monday()), "lunes");
        assert_eq!(weekday_name_es(monday() + Duration::days(5)), "sábado");
    }
}
