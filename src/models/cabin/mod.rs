// Cabin module
// Bookable treatment room within a clinic

use serde::{Deserialize, Serialize};

/// A bookable treatment room.
///
/// `order` drives the display sequence among active cabins; `is_active`
/// gates both grid presence and booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cabin {
    pub id: u32,
    /// Short code shown on the column header strip (e.g. "Con", "Lun").
    pub code: String,
    pub name: String,
    /// Hex color used for the header strip and new appointments.
    pub color: String,
    pub is_active: bool,
    pub order: u32,
}

impl Cabin {
    pub fn new(id: u32, code: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
            color: color.into(),
            is_active: true,
            order: id,
        }
    }

    /// Validate the cabin
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Cabin name cannot be empty".to_string());
        }

        if !self.color.starts_with('#') || (self.color.len() != 7 && self.color.len() != 4) {
            return Err("Color must be in hex format (#RRGGBB or #RGB)".to_string());
        }

        Ok(())
    }
}
