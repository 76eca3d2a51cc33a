// Weekly schedule module
// Per-weekday opening ranges, editable in the clinic settings dialog

use serde::{Deserialize, Serialize};

/// A single opening range within a day, `HH:MM` bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: String,
    pub end: String,
}

impl TimeRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// Opening configuration for one weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub open: bool,
    pub ranges: Vec<TimeRange>,
}

impl DaySchedule {
    pub fn open_with(ranges: Vec<TimeRange>) -> Self {
        Self { open: true, ranges }
    }

    pub fn closed() -> Self {
        Self {
            open: false,
            ranges: Vec::new(),
        }
    }
}

/// Weekly opening schedule, Monday through Sunday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSchedule {
    pub monday: DaySchedule,
    pub tuesday: DaySchedule,
    pub wednesday: DaySchedule,
    pub thursday: DaySchedule,
    pub friday: DaySchedule,
    pub saturday: DaySchedule,
    pub sunday: DaySchedule,
}

impl WeekSchedule {
    /// Weekdays open 09:00-20:00, weekend closed.
    pub fn standard() -> Self {
        let weekday = || DaySchedule::open_with(vec![TimeRange::new("09:00", "20:00")]);
        Self {
            monday: weekday(),
            tuesday: weekday(),
            wednesday: weekday(),
            thursday: weekday(),
            friday: weekday(),
            saturday: DaySchedule::closed(),
            sunday: DaySchedule::closed(),
        }
    }

    pub fn day(&self, weekday: chrono::Weekday) -> &DaySchedule {
        use chrono::Weekday::*;
        match weekday {
            Mon => &self.monday,
            Tue => &self.tuesday,
            Wed => &self.wednesday,
            Thu => &self.thursday,
            Fri => &self.friday,
            Sat => &self.saturday,
            Sun => &self.sunday,
        }
    }

    pub fn day_mut(&mut self, weekday: chrono::Weekday) -> &mut DaySchedule {
        use chrono::Weekday::*;
        match weekday {
            Mon => &mut self.monday,
            Tue => &mut self.tuesday,
            Wed => &mut self.wednesday,
            Thu => &mut self.thursday,
            Fri => &mut self.friday,
            Sat => &mut self.saturday,
            Sun => &mut self.sunday,
        }
    }
}

impl Default for WeekSchedule {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn test_standard_week() {
        let schedule = WeekSchedule::standard();
        assert!(schedule.day(Weekday::Mon).open);
        assert!(schedule.day(Weekday::Fri).open);
        assert!(!schedule.day(Weekday::Sat).open);
        assert_eq!(schedule.monday.ranges.len(), 1);
        assert_eq!(schedule.monday.ranges[0].start, "09:00");
    }

    #[test]
    fn test_day_mut_updates() {
        let mut schedule = WeekSchedule::standard();
        schedule.day_mut(Weekday::Sat).open = true;
        schedule
            .day_mut(Weekday::Sat)
            .ranges
            .push(TimeRange::new("10:00", "14:00"));
        assert!(schedule.saturday.open);
        assert_eq!(schedule.saturday.ranges.len(), 1);
    }
}
