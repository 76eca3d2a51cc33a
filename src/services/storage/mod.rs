//! Local persistence of the active-clinic selection.
//!
//! The one artifact that survives a restart: the full active clinic record
//! (nested configuration included) as a JSON file under the platform config
//! directory. Read once at startup, written on every clinic switch and
//! configuration update.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::models::clinic::Clinic;

const ACTIVE_CLINIC_FILE: &str = "active_clinic.json";

/// File-backed store for the active clinic record.
#[derive(Debug, Clone)]
pub struct ActiveClinicStore {
    path: PathBuf,
}

impl ActiveClinicStore {
    /// Store under the platform config directory.
    pub fn at_default_location() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "clinic-agenda")
            .context("Could not determine a config directory")?;
        Ok(Self {
            path: dirs.config_dir().join(ACTIVE_CLINIC_FILE),
        })
    }

    /// Store at an explicit path (tests, portable installs).
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the saved active clinic.
    ///
    /// A missing file is a normal first launch; a corrupt file is logged and
    /// treated the same way so startup always succeeds.
    pub fn load(&self) -> Option<Clinic> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
            Err(err) => {
                log::warn!("Could not read {}: {}", self.path.display(), err);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(clinic) => Some(clinic),
            Err(err) => {
                log::warn!("Ignoring corrupt active-clinic file: {}", err);
                None
            }
        }
    }

    /// Persist the active clinic record.
    pub fn save(&self, clinic: &Clinic) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(clinic).context("Failed to encode clinic")?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> ActiveClinicStore {
        ActiveClinicStore::at_path(dir.path().join("state").join(ACTIVE_CLINIC_FILE))
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(store_in(&dir).load().is_none());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let clinic = Clinic::builtin().remove(1);

        store.save(&clinic).unwrap();
        assert_eq!(store.load(), Some(clinic));
    }

    #[test]
    fn test_corrupt_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "{not json").unwrap();

        assert!(store.load().is_none());
    }
}
