// Test fixtures - reusable test data
// Provides consistent test data across all test files

use chrono::{NaiveDate, NaiveTime};

use clinic_agenda::models::appointment::Appointment;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns Monday, Feb 24 2025 - the seeded agenda week
    pub fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 24).unwrap()
    }
}

/// Shorthand for grid times
pub fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

/// Sample appointments for testing
pub mod appointments {
    use super::*;

    /// A one-hour treatment in the given cabin
    pub fn treatment(cabin_id: u32, start: NaiveTime) -> Appointment {
        Appointment::new(
            "Maria Garcia",
            "Masaje",
            dates::monday(),
            cabin_id,
            start,
            4,
            "#9333ea",
        )
        .unwrap()
    }

    /// A short consultation blocking a single slot
    pub fn blocker(cabin_id: u32, start: NaiveTime) -> Appointment {
        Appointment::new(
            "nadia anachad",
            "Consulta",
            dates::monday(),
            cabin_id,
            start,
            1,
            "#10b981",
        )
        .unwrap()
    }
}
