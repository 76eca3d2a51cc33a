use chrono::NaiveDate;

use crate::models::client::Client;
use crate::services::appointment::SlotRef;
use crate::ui::dialogs::appointment_dialog::AppointmentDialogState;
use crate::ui::dialogs::client_search::ClientSearchState;
use crate::ui::dialogs::clinic_settings::ClinicSettingsState;
use crate::ui::dialogs::new_client::NewClientState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgendaView {
    Week,
    Day,
}

/// Aggregated dialog/control state of the running app.
pub struct AppState {
    pub view: AgendaView,
    pub current_date: NaiveDate,
    /// Cell picked for a booking in progress.
    pub pending_slot: Option<SlotRef>,
    /// Client picked for the booking in progress.
    pub selected_client: Option<Client>,
    pub show_client_search: bool,
    pub show_appointment_dialog: bool,
    pub show_new_client: bool,
    pub show_settings: bool,
    pub client_search_state: ClientSearchState,
    pub appointment_dialog_state: Option<AppointmentDialogState>,
    pub new_client_state: NewClientState,
    pub settings_state: Option<ClinicSettingsState>,
    /// One-shot scroll offset applied to the next grid frame.
    pub pending_scroll: Option<f32>,
}

impl AppState {
    pub fn new(current_date: NaiveDate, pending_scroll: Option<f32>) -> Self {
        Self {
            view: AgendaView::Week,
            current_date,
            pending_slot: None,
            selected_client: None,
            show_client_search: false,
            show_appointment_dialog: false,
            show_new_client: false,
            show_settings: false,
            client_search_state: ClientSearchState::default(),
            appointment_dialog_state: None,
            new_client_state: NewClientState::default(),
            settings_state: None,
            pending_scroll,
        }
    }

    /// Drop every booking-flow dialog at once (after a terminal grid action).
    pub fn close_booking_dialogs(&mut self) {
        self.show_client_search = false;
        self.show_appointment_dialog = false;
        self.show_new_client = false;
        self.appointment_dialog_state = None;
    }
}
