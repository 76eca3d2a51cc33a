//! Appointment dialog: service selection and save/delete for a pending slot.

use chrono::NaiveTime;
use egui::{Color32, RichText};

use crate::models::appointment::Appointment;
use crate::models::client::Client;
use crate::services::appointment::SlotRef;
use crate::services::timegrid;

/// One bookable service from the treatment catalog.
pub struct ServiceOption {
    pub name: &'static str,
    pub category: &'static str,
}

/// Treatment catalog offered across the clinics.
pub const SERVICE_CATALOG: &[ServiceOption] = &[
    ServiceOption { name: "Consulta", category: "Consulta" },
    ServiceOption { name: "Verju Amincissement", category: "Láser" },
    ServiceOption { name: "Lunula Tratamiento", category: "Láser" },
    ServiceOption { name: "Forte Balance", category: "Corporal" },
    ServiceOption { name: "Masaje", category: "Corporal" },
    ServiceOption { name: "Emerald", category: "Láser" },
];

/// What the dialog hands back on save.
pub struct AppointmentDraft {
    pub client: Client,
    pub services: Vec<&'static ServiceOption>,
    pub time: NaiveTime,
    pub comment: Option<String>,
}

impl AppointmentDraft {
    /// Comma-joined service line, the form stored on the appointment.
    pub fn service_line(&self) -> String {
        self.services
            .iter()
            .map(|s| s.name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

pub struct AppointmentDialogState {
    pub client: Client,
    pub slot: SlotRef,
    selected: Vec<bool>,
    pub time_label: String,
    pub comment: String,
    /// True when opened from an existing appointment block.
    pub editing_existing: bool,
    pub error_message: Option<String>,
}

impl AppointmentDialogState {
    pub fn for_new(client: Client, slot: SlotRef) -> Self {
        Self {
            client,
            slot,
            selected: vec![false; SERVICE_CATALOG.len()],
            time_label: timegrid::slot_label(slot.time),
            comment: String::new(),
            editing_existing: false,
            error_message: None,
        }
    }

    pub fn for_existing(appointment: &Appointment) -> Self {
        let client = Client {
            id: 0,
            name: appointment.client_name.clone(),
            phone: appointment.client_phone.clone().unwrap_or_default(),
            email: None,
        };
        let selected = SERVICE_CATALOG
            .iter()
            .map(|s| appointment.service.contains(s.name))
            .collect();
        Self {
            client,
            slot: SlotRef::new(appointment.date, appointment.cabin_id, appointment.start),
            selected,
            time_label: timegrid::slot_label(appointment.start),
            comment: String::new(),
            editing_existing: true,
            error_message: None,
        }
    }

    fn draft(&self) -> Result<AppointmentDraft, String> {
        let services: Vec<&'static ServiceOption> = SERVICE_CATALOG
            .iter()
            .zip(&self.selected)
            .filter_map(|(service, picked)| picked.then_some(service))
            .collect();
        if services.is_empty() {
            return Err("Selecciona al menos un servicio".to_string());
        }

        let time = timegrid::parse_label(&self.time_label)
            .map_err(|_| format!("Hora no válida: {}", self.time_label))?;

        let comment = {
            let trimmed = self.comment.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };

        Ok(AppointmentDraft {
            client: self.client.clone(),
            services,
            time,
            comment,
        })
    }
}

pub enum AppointmentDialogAction {
    None,
    Save(AppointmentDraft),
    Delete,
    /// Reopen the client search to pick a different client.
    SearchClient,
    NewClient,
}

/// Render the appointment dialog.
///
/// `slot_times` restricts the time picker to the clinic's grid for the day.
pub fn render_appointment_dialog(
    ctx: &egui::Context,
    show_dialog: &mut bool,
    state: &mut AppointmentDialogState,
    slot_times: &[NaiveTime],
) -> AppointmentDialogAction {
    let mut action = AppointmentDialogAction::None;
    let mut dialog_open = *show_dialog;

    egui::Window::new("Cita")
        .open(&mut dialog_open)
        .collapsible(false)
        .resizable(false)
        .default_width(380.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            if let Some(ref error) = state.error_message {
                ui.colored_label(Color32::RED, RichText::new(error).strong());
                ui.add_space(6.0);
            }

            ui.horizontal(|ui| {
                ui.label(RichText::new(&state.client.name).strong());
                if !state.client.phone.is_empty() {
                    ui.label(RichText::new(&state.client.phone).weak());
                }
                if ui.small_button("🔍").on_hover_text("Buscar otro cliente").clicked() {
                    action = AppointmentDialogAction::SearchClient;
                }
                if ui.small_button("➕").on_hover_text("Nuevo cliente").clicked() {
                    action = AppointmentDialogAction::NewClient;
                }
            });
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                ui.label("Hora:");
                egui::ComboBox::from_id_source("appointment_time_combo")
                    .selected_text(state.time_label.clone())
                    .show_ui(ui, |ui| {
                        for time in slot_times {
                            let label = timegrid::slot_label(*time);
                            ui.selectable_value(&mut state.time_label, label.clone(), label);
                        }
                    });
            });
            ui.add_space(6.0);

            ui.label(RichText::new("Servicios").strong());
            let mut category: Option<&str> = None;
            for (index, service) in SERVICE_CATALOG.iter().enumerate() {
                if category != Some(service.category) {
                    category = Some(service.category);
                    ui.label(RichText::new(service.category).size(11.0).weak());
                }
                ui.checkbox(&mut state.selected[index], service.name);
            }
            ui.add_space(6.0);

            ui.label("Comentario:");
            ui.add(
                egui::TextEdit::multiline(&mut state.comment)
                    .desired_rows(2)
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("Guardar").clicked() {
                    match state.draft() {
                        Ok(draft) => action = AppointmentDialogAction::Save(draft),
                        Err(message) => state.error_message = Some(message),
                    }
                }
                if state.editing_existing && ui.button("🗑 Borrar").clicked() {
                    action = AppointmentDialogAction::Delete;
                }
            });
        });

    *show_dialog = dialog_open;
    match action {
        AppointmentDialogAction::None => {}
        _ => *show_dialog = false,
    }
    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn slot() -> SlotRef {
        SlotRef::new(
            NaiveDate::from_ymd_opt(2025, 2, 24).unwrap(),
            3,
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_draft_requires_a_service() {
        let state = AppointmentDialogState::for_new(Client::new(1, "Maria", "06"), slot());
        assert!(state.draft().is_err());
    }

    #[test]
    fn test_draft_joins_service_names() {
        let mut state = AppointmentDialogState::for_new(Client::new(1, "Maria", "06"), slot());
        state.selected[1] = true;
        state.selected[4] = true;
        let draft = state.draft().unwrap();
        assert_eq!(draft.service_line(), "Verju Amincissement, Masaje");
        assert_eq!(draft.time, NaiveTime::from_hms_opt(10, 0, 0).unwrap());
    }

    #[test]
    fn test_draft_rejects_bad_time() {
        let mut state = AppointmentDialogState::for_new(Client::new(1, "Maria", "06"), slot());
        state.selected[0] = true;
        state.time_label = "25:99".to_string();
        assert!(state.draft().is_err());
    }

    #[test]
    fn test_for_existing_preselects_services() {
        let appointment = Appointment::new(
            "Maria Garcia",
            "Masaje",
            NaiveDate::from_ymd_opt(2025, 2, 24).unwrap(),
            3,
            NaiveTime::from_hms_opt(11, 30, 0).unwrap(),
            2,
            "#9333ea",
        )
        .unwrap();
        let state = AppointmentDialogState::for_existing(&appointment);
        assert!(state.editing_existing);
        let draft = state.draft().unwrap();
        assert_eq!(draft.service_line(), "Masaje");
    }
}
