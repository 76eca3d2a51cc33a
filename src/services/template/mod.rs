//! Named weekly-schedule templates for the settings dialog.

use crate::models::schedule::{DaySchedule, TimeRange, WeekSchedule};

/// A reusable weekly schedule the settings dialog can apply wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleTemplate {
    pub id: String,
    pub description: String,
    pub schedule: WeekSchedule,
}

/// Provider of the built-in template set.
#[derive(Debug, Clone)]
pub struct TemplateService {
    templates: Vec<ScheduleTemplate>,
}

impl TemplateService {
    pub fn builtin() -> Self {
        let split_shift = || {
            DaySchedule::open_with(vec![
                TimeRange::new("09:00", "14:00"),
                TimeRange::new("16:00", "20:00"),
            ])
        };

        let mut continuous_with_saturday = WeekSchedule::standard();
        continuous_with_saturday.saturday =
            DaySchedule::open_with(vec![TimeRange::new("10:00", "15:00")]);

        let split_week = WeekSchedule {
            monday: split_shift(),
            tuesday: split_shift(),
            wednesday: split_shift(),
            thursday: split_shift(),
            friday: split_shift(),
            saturday: DaySchedule::closed(),
            sunday: DaySchedule::closed(),
        };

        Self {
            templates: vec![
                ScheduleTemplate {
                    id: "continuous".to_string(),
                    description: "Jornada continua (L-V)".to_string(),
                    schedule: WeekSchedule::standard(),
                },
                ScheduleTemplate {
                    id: "continuous-saturday".to_string(),
                    description: "Jornada continua con sábado".to_string(),
                    schedule: continuous_with_saturday,
                },
                ScheduleTemplate {
                    id: "split".to_string(),
                    description: "Jornada partida (L-V)".to_string(),
                    schedule: split_week,
                },
            ],
        }
    }

    pub fn list_all(&self) -> &[ScheduleTemplate] {
        &self.templates
    }

    pub fn get(&self, id: &str) -> Option<&ScheduleTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }
}
