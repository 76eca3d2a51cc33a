//! Clinic directory: the explicit context object behind the agenda.
//!
//! Holds the clinic list and the active clinic, applies configuration
//! updates, and mirrors the active record into local storage on every
//! change. All mutation goes through the setters here.

use crate::models::clinic::{Clinic, ClinicConfig, ClinicConfigPatch};
use crate::services::storage::ActiveClinicStore;

pub struct ClinicDirectory {
    clinics: Vec<Clinic>,
    active: Clinic,
    store: Option<ActiveClinicStore>,
}

impl ClinicDirectory {
    /// Build from the built-in clinics, restoring the saved active clinic
    /// when the store has one.
    pub fn load_or_default(store: Option<ActiveClinicStore>) -> Self {
        let clinics = Clinic::builtin();
        let saved = store.as_ref().and_then(|s| s.load());

        let active = match saved {
            Some(clinic) => {
                log::info!("Restored active clinic '{}'", clinic.name);
                clinic
            }
            None => clinics[0].clone(),
        };

        Self {
            clinics,
            active,
            store,
        }
    }

    pub fn clinics(&self) -> &[Clinic] {
        &self.clinics
    }

    pub fn active_clinic(&self) -> &Clinic {
        &self.active
    }

    pub fn active_config(&self) -> &ClinicConfig {
        &self.active.config
    }

    /// Switch the active clinic and persist the selection.
    pub fn set_active(&mut self, clinic_id: u32) -> bool {
        let Some(clinic) = self.clinics.iter().find(|c| c.id == clinic_id) else {
            log::warn!("Ignoring switch to unknown clinic {}", clinic_id);
            return false;
        };
        self.active = clinic.clone();
        self.persist_active();
        true
    }

    /// Apply a configuration patch to a clinic; when it targets the active
    /// clinic the active copy and local storage follow.
    pub fn update_config(&mut self, clinic_id: u32, patch: ClinicConfigPatch) -> bool {
        let Some(clinic) = self.clinics.iter_mut().find(|c| c.id == clinic_id) else {
            log::warn!("Ignoring config update for unknown clinic {}", clinic_id);
            return false;
        };
        clinic.config.apply(patch);

        if self.active.id == clinic_id {
            self.active = clinic.clone();
            self.persist_active();
        }
        true
    }

    fn persist_active(&self) {
        if let Some(store) = &self.store {
            if let Err(err) = store.save(&self.active) {
                log::error!("Failed to persist active clinic: {:#}", err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cabin::Cabin;

    #[test]
    fn test_defaults_to_first_builtin() {
        let directory = ClinicDirectory::load_or_default(None);
        assert_eq!(directory.active_clinic().id, 1);
        assert_eq!(directory.clinics().len(), 3);
    }

    #[test]
    fn test_set_active_unknown_is_noop() {
        let mut directory = ClinicDirectory::load_or_default(None);
        assert!(!directory.set_active(99));
        assert_eq!(directory.active_clinic().id, 1);
    }

    #[test]
    fn test_set_active_switches() {
        let mut directory = ClinicDirectory::load_or_default(None);
        assert!(directory.set_active(2));
        assert_eq!(directory.active_clinic().name, "Cafc Multilaser");
    }

    #[test]
    fn test_update_config_refreshes_active_copy() {
        let mut directory = ClinicDirectory::load_or_default(None);
        let patch = ClinicConfigPatch {
            cabins: Some(vec![Cabin::new(1, "Nue", "Nueva", "#123456")]),
            ..Default::default()
        };
        assert!(directory.update_config(1, patch));
        assert_eq!(directory.active_config().cabins.len(), 1);
        assert_eq!(directory.clinics()[0].config.cabins.len(), 1);
    }

    #[test]
    fn test_update_config_inactive_clinic_leaves_active_alone() {
        let mut directory = ClinicDirectory::load_or_default(None);
        let patch = ClinicConfigPatch {
            open_time: Some("07:00".to_string()),
            ..Default::default()
        };
        assert!(directory.update_config(2, patch));
        assert_eq!(directory.active_config().open_time, "10:00");
        assert_eq!(directory.clinics()[1].config.open_time, "07:00");
    }

    #[test]
    fn test_persists_on_switch() {
        let dir = tempfile::tempdir().unwrap();
        let store = ActiveClinicStore::at_path(dir.path().join("active_clinic.json"));

        let mut directory = ClinicDirectory::load_or_default(Some(store.clone()));
        directory.set_active(3);

        assert_eq!(store.load().map(|c| c.id), Some(3));
    }
}
