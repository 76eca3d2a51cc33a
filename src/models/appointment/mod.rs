// Appointment module
// Booking record placed on the agenda grid

use chrono::{NaiveDate, NaiveTime};
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Opaque appointment identifier.
///
/// Generated as a short random alphanumeric token; identity is the token
/// itself, there is no sequence behind it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AppointmentId(String);

impl AppointmentId {
    /// Generate a fresh random id (9 lowercase alphanumeric characters).
    pub fn generate() -> Self {
        let token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(9)
            .map(|c| (c as char).to_ascii_lowercase())
            .collect();
        Self(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AppointmentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A booked slot on the agenda grid.
///
/// Placement is the `(date, cabin_id, start)` triple; `duration_slots` counts
/// 15-minute grid slots. At most one appointment is intended to occupy a
/// given triple. The drag-reflow pass keeps that true, the collection
/// itself does not enforce it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: AppointmentId,
    pub client_name: String,
    pub client_phone: Option<String>,
    /// Comma-joined service names shown on the block.
    pub service: String,
    pub date: NaiveDate,
    pub cabin_id: u32,
    pub start: NaiveTime,
    pub duration_slots: u32,
    /// Hex color, normally inherited from the cabin.
    pub color: String,
    pub completed: bool,
}

impl Appointment {
    /// Create a new appointment with a fresh random id.
    ///
    /// # Arguments
    /// * `client_name` - Client display name (required, non-empty)
    /// * `service` - Service description line
    /// * `date`, `cabin_id`, `start` - Grid placement
    ///
    /// # Returns
    /// Returns `Result<Appointment, String>` with validation applied.
    pub fn new(
        client_name: impl Into<String>,
        service: impl Into<String>,
        date: NaiveDate,
        cabin_id: u32,
        start: NaiveTime,
        duration_slots: u32,
        color: impl Into<String>,
    ) -> Result<Self, String> {
        let appointment = Self {
            id: AppointmentId::generate(),
            client_name: client_name.into(),
            client_phone: None,
            service: service.into(),
            date,
            cabin_id,
            start,
            duration_slots,
            color: color.into(),
            completed: false,
        };
        appointment.validate()?;
        Ok(appointment)
    }

    /// Validate the appointment
    pub fn validate(&self) -> Result<(), String> {
        if self.client_name.trim().is_empty() {
            return Err("Appointment client name cannot be empty".to_string());
        }

        if self.duration_slots == 0 {
            return Err("Appointment duration must be at least one slot".to_string());
        }

        // Color should be hex (#RRGGBB or #RGB)
        if !self.color.starts_with('#') || (self.color.len() != 7 && self.color.len() != 4) {
            return Err("Color must be in hex format (#RRGGBB or #RGB)".to_string());
        }

        Ok(())
    }

    /// Duration in minutes on the 15-minute grid.
    pub fn duration_minutes(&self) -> i64 {
        self.duration_slots as i64 * crate::services::timegrid::SLOT_MINUTES
    }
}
