// Clinic module
// Clinic record and per-clinic configuration that drives the agenda grid

use serde::{Deserialize, Serialize};

use super::cabin::Cabin;
use super::schedule::WeekSchedule;

/// Per-clinic configuration consumed by the agenda.
///
/// Open/close bounds are `HH:MM` strings; they feed the time grid directly.
/// Weekend bounds apply when Saturday/Sunday columns are enabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicConfig {
    pub open_time: String,
    pub close_time: String,
    pub weekend_open_time: String,
    pub weekend_close_time: String,
    pub saturday_open: bool,
    pub sunday_open: bool,
    pub cabins: Vec<Cabin>,
    pub schedule: WeekSchedule,
}

/// Partial config update applied through the clinic directory.
///
/// `None` fields are left untouched, matching the settings dialog which
/// only submits the sections the user edited.
#[derive(Debug, Clone, Default)]
pub struct ClinicConfigPatch {
    pub open_time: Option<String>,
    pub close_time: Option<String>,
    pub weekend_open_time: Option<String>,
    pub weekend_close_time: Option<String>,
    pub saturday_open: Option<bool>,
    pub sunday_open: Option<bool>,
    pub cabins: Option<Vec<Cabin>>,
    pub schedule: Option<WeekSchedule>,
}

impl ClinicConfig {
    pub fn apply(&mut self, patch: ClinicConfigPatch) {
        if let Some(v) = patch.open_time {
            self.open_time = v;
        }
        if let Some(v) = patch.close_time {
            self.close_time = v;
        }
        if let Some(v) = patch.weekend_open_time {
            self.weekend_open_time = v;
        }
        if let Some(v) = patch.weekend_close_time {
            self.weekend_close_time = v;
        }
        if let Some(v) = patch.saturday_open {
            self.saturday_open = v;
        }
        if let Some(v) = patch.sunday_open {
            self.sunday_open = v;
        }
        if let Some(v) = patch.cabins {
            self.cabins = v;
        }
        if let Some(v) = patch.schedule {
            self.schedule = v;
        }
    }
}

/// A clinic of the business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clinic {
    pub id: u32,
    /// Accounting prefix shown in the selector.
    pub prefix: String,
    pub name: String,
    pub city: String,
    pub config: ClinicConfig,
}

impl Clinic {
    /// Built-in seed clinics used when no saved state exists.
    pub fn builtin() -> Vec<Clinic> {
        vec![
            Clinic {
                id: 1,
                prefix: "000001".to_string(),
                name: "Californie Multilaser - Organicare".to_string(),
                city: "Casablanca".to_string(),
                config: ClinicConfig {
                    open_time: "10:00".to_string(),
                    close_time: "19:30".to_string(),
                    weekend_open_time: "10:00".to_string(),
                    weekend_close_time: "15:00".to_string(),
                    saturday_open: true,
                    sunday_open: false,
                    cabins: vec![
                        Cabin::new(1, "Con", "Consultation", "#ff0000"),
                        Cabin::new(2, "Con", "Consultation2", "#00ff00"),
                        Cabin::new(3, "Lun", "Lunula", "#0000ff"),
                        Cabin::new(4, "For", "Forte/Bal", "#ff0000"),
                        Cabin {
                            is_active: false,
                            ..Cabin::new(5, "Ski", "SkinShape", "#ff0000")
                        },
                        Cabin::new(6, "WB", "Won/Bal", "#ff0000"),
                        Cabin::new(7, "Ver", "Verju/Bal", "#ff0000"),
                        Cabin {
                            is_active: false,
                            ..Cabin::new(8, "WB", "Won/Bal", "#ff0000")
                        },
                        Cabin::new(9, "Eme", "Emerald", "#ff0000"),
                    ],
                    schedule: WeekSchedule::standard(),
                },
            },
            Clinic {
                id: 2,
                prefix: "Cafc".to_string(),
                name: "Cafc Multilaser".to_string(),
                city: "Casablanca".to_string(),
                config: ClinicConfig {
                    open_time: "09:00".to_string(),
                    close_time: "18:00".to_string(),
                    weekend_open_time: "09:00".to_string(),
                    weekend_close_time: "14:00".to_string(),
                    saturday_open: true,
                    sunday_open: false,
                    cabins: vec![
                        Cabin::new(1, "Con", "Consultation", "#0000ff"),
                        Cabin::new(2, "Tre", "Treatment", "#00ff00"),
                    ],
                    schedule: WeekSchedule::standard(),
                },
            },
            Clinic {
                id: 3,
                prefix: "TEST".to_string(),
                name: "CENTRO TEST".to_string(),
                city: "Casablanca".to_string(),
                config: ClinicConfig {
                    open_time: "08:00".to_string(),
                    close_time: "20:00".to_string(),
                    weekend_open_time: "10:00".to_string(),
                    weekend_close_time: "16:00".to_string(),
                    saturday_open: true,
                    sunday_open: false,
                    cabins: vec![Cabin::new(1, "Tes", "Test Cabin", "#ff00ff")],
                    schedule: WeekSchedule::standard(),
                },
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_clinics() {
        let clinics = Clinic::builtin();
        assert_eq!(clinics.len(), 3);
        assert_eq!(clinics[0].config.cabins.len(), 9);
        assert!(clinics[0].config.saturday_open);
        assert!(!clinics[0].config.sunday_open);
    }

    #[test]
    fn test_patch_applies_partially() {
        let mut config = Clinic::builtin()[1].config.clone();
        let patch = ClinicConfigPatch {
            close_time: Some("19:00".to_string()),
            sunday_open: Some(true),
            ..Default::default()
        };
        config.apply(patch);
        assert_eq!(config.close_time, "19:00");
        assert!(config.sunday_open);
        // untouched fields survive
        assert_eq!(config.open_time, "09:00");
        assert_eq!(config.cabins.len(), 2);
    }

    #[test]
    fn test_clinic_serde_round_trip() {
        let clinic = Clinic::builtin().remove(0);
        let json = serde_json::to_string(&clinic).unwrap();
        let back: Clinic = serde_json::from_str(&json).unwrap();
        assert_eq!(clinic, back);
    }
}
