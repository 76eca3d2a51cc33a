//! The eframe application: top bar, agenda views and dialog routing.

mod lifecycle;
mod state;

use std::time::Duration;

use self::state::{AgendaView, AppState};
use crate::models::appointment::Appointment;
use crate::services::appointment::{AppointmentBook, SlotRef};
use crate::services::client::ClientDirectory;
use crate::services::clinic::ClinicDirectory;
use crate::services::template::TemplateService;
use crate::services::timegrid;
use crate::ui::dialogs::appointment_dialog::{
    render_appointment_dialog, AppointmentDialogAction, AppointmentDialogState, AppointmentDraft,
};
use crate::ui::dialogs::client_search::{render_client_search, ClientSearchAction};
use crate::ui::dialogs::clinic_settings::{
    render_clinic_settings, ClinicSettingsAction, ClinicSettingsState,
};
use crate::ui::dialogs::new_client::{render_new_client, NewClientAction};
use crate::ui::theme::AgendaTheme;
use crate::ui::views::day_view::DayView;
use crate::ui::views::week_view::WeekView;
use crate::ui::views::GridOutcome;

/// Refresh cadence of the current-time indicator.
const TIME_INDICATOR_TICK: Duration = Duration::from_secs(60);

pub struct AgendaApp {
    directory: ClinicDirectory,
    book: AppointmentBook,
    clients: ClientDirectory,
    templates: TemplateService,
    active_theme: AgendaTheme,
    state: AppState,
}

impl eframe::App for AgendaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Read-only tick that keeps the indicator line moving
        ctx.request_repaint_after(TIME_INDICATOR_TICK);

        self.render_top_bar(ctx);

        let outcome = egui::CentralPanel::default()
            .show(ctx, |ui| {
                let config = self.directory.active_config().clone();
                let scroll = self.state.pending_scroll.take();
                match self.state.view {
                    AgendaView::Week => WeekView::show(
                        ui,
                        self.state.current_date,
                        &config,
                        &mut self.book,
                        &self.active_theme,
                        scroll,
                    ),
                    AgendaView::Day => DayView::show(
                        ui,
                        self.state.current_date,
                        &config,
                        &mut self.book,
                        &self.active_theme,
                        scroll,
                    ),
                }
            })
            .inner;

        self.handle_grid_outcome(outcome);
        self.render_dialogs(ctx);
    }
}

impl AgendaApp {
    fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("agenda_top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            let title = match self.state.view {
                AgendaView::Week => "Agenda semanal",
                AgendaView::Day => "Agenda diaria",
            };
            ui.heading(title);
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                if ui.button("◀").clicked() {
                    self.navigate_previous();
                }

                let label = match self.state.view {
                    AgendaView::Week => WeekView::range_label(
                        self.state.current_date,
                        self.directory.active_config(),
                    ),
                    AgendaView::Day => DayView::date_label(self.state.current_date),
                };
                ui.label(egui::RichText::new(label).color(self.active_theme.text_secondary));

                if ui.button("▶").clicked() {
                    self.navigate_next();
                }
                if ui.button("Hoy").clicked() {
                    self.jump_to_today();
                }
                ui.add(egui_extras::DatePickerButton::new(
                    &mut self.state.current_date,
                ));

                let toggle_label = match self.state.view {
                    AgendaView::Week => "📅 Ver día",
                    AgendaView::Day => "📅 Ver semana completa",
                };
                if ui.button(toggle_label).clicked() {
                    self.state.view = match self.state.view {
                        AgendaView::Week => AgendaView::Day,
                        AgendaView::Day => AgendaView::Week,
                    };
                }

                ui.separator();
                self.render_clinic_selector(ui);

                if ui.button("⚙").on_hover_text("Configuración de clínica").clicked() {
                    self.state.settings_state = Some(ClinicSettingsState::from_config(
                        self.directory.active_config(),
                    ));
                    self.state.show_settings = true;
                }
            });
            ui.add_space(6.0);
        });
    }

    fn render_clinic_selector(&mut self, ui: &mut egui::Ui) {
        let choices: Vec<(u32, String)> = self
            .directory
            .clinics()
            .iter()
            .map(|c| (c.id, format!("{} - {}", c.prefix, c.name)))
            .collect();
        let active_id = self.directory.active_clinic().id;
        let active_name = self.directory.active_clinic().name.clone();

        let mut switch_to: Option<u32> = None;
        egui::ComboBox::from_id_source("clinic_selector")
            .selected_text(active_name)
            .width(240.0)
            .show_ui(ui, |ui| {
                for (id, label) in &choices {
                    if ui.selectable_label(*id == active_id, label).clicked() {
                        switch_to = Some(*id);
                    }
                }
            });

        if let Some(clinic_id) = switch_to {
            if clinic_id != active_id && self.directory.set_active(clinic_id) {
                // New opening hours, new grid
                self.state.close_booking_dialogs();
                self.state.pending_slot = None;
            }
        }
    }

    fn navigate_previous(&mut self) {
        self.state.current_date = match self.state.view {
            AgendaView::Day => self.state.current_date - chrono::Duration::days(1),
            AgendaView::Week => self.state.current_date - chrono::Duration::weeks(1),
        };
    }

    fn navigate_next(&mut self) {
        self.state.current_date = match self.state.view {
            AgendaView::Day => self.state.current_date + chrono::Duration::days(1),
            AgendaView::Week => self.state.current_date + chrono::Duration::weeks(1),
        };
    }

    fn jump_to_today(&mut self) {
        self.state.current_date = chrono::Local::now().date_naive();
    }

    fn handle_grid_outcome(&mut self, outcome: GridOutcome) {
        if let Some(date) = outcome.day_header_clicked {
            self.state.view = AgendaView::Day;
            self.state.current_date = date;
        }

        if let Some(slot) = outcome.slot_clicked {
            self.state.pending_slot = Some(slot);
            self.state.client_search_state.reset();
            self.state.show_client_search = true;
        }

        if let Some(appointment) = outcome.appointment_clicked {
            self.open_edit_dialog(&appointment);
        }

        // A completed move or resize is terminal for any open edit dialog
        if outcome.moved || outcome.resized {
            self.state.close_booking_dialogs();
        }
    }

    fn open_edit_dialog(&mut self, appointment: &Appointment) {
        self.state.pending_slot = Some(SlotRef::new(
            appointment.date,
            appointment.cabin_id,
            appointment.start,
        ));
        let dialog = AppointmentDialogState::for_existing(appointment);
        self.state.selected_client = Some(dialog.client.clone());
        self.state.appointment_dialog_state = Some(dialog);
        self.state.show_appointment_dialog = true;
    }

    fn render_dialogs(&mut self, ctx: &egui::Context) {
        // Client search feeds the appointment dialog
        if self.state.show_client_search {
            let pending_time = self
                .state
                .pending_slot
                .map(|slot| timegrid::slot_label(slot.time));
            let action = render_client_search(
                ctx,
                &mut self.state.show_client_search,
                &mut self.state.client_search_state,
                &self.clients,
                pending_time,
            );
            match action {
                ClientSearchAction::Selected(client) => {
                    self.state.selected_client = Some(client.clone());
                    if let Some(slot) = self.state.pending_slot {
                        self.state.appointment_dialog_state =
                            Some(AppointmentDialogState::for_new(client, slot));
                        self.state.show_appointment_dialog = true;
                    }
                }
                ClientSearchAction::NewClient => {
                    self.state.new_client_state.reset();
                    self.state.show_new_client = true;
                }
                ClientSearchAction::None => {}
            }
        }

        if self.state.show_new_client {
            let action = render_new_client(
                ctx,
                &mut self.state.show_new_client,
                &mut self.state.new_client_state,
            );
            if let NewClientAction::Create { name, phone, email } = action {
                match self.clients.add(name, phone, email) {
                    Ok(client) => {
                        let client = client.clone();
                        self.state.selected_client = Some(client.clone());
                        if let Some(slot) = self.state.pending_slot {
                            self.state.appointment_dialog_state =
                                Some(AppointmentDialogState::for_new(client, slot));
                            self.state.show_appointment_dialog = true;
                        }
                    }
                    Err(message) => log::warn!("Client not created: {}", message),
                }
            }
        }

        if self.state.show_appointment_dialog {
            if let Some(dialog_state) = self.state.appointment_dialog_state.as_mut() {
                let config = self.directory.active_config();
                let slot_times =
                    timegrid::time_slots(&config.open_time, &config.close_time);
                let action = render_appointment_dialog(
                    ctx,
                    &mut self.state.show_appointment_dialog,
                    dialog_state,
                    &slot_times,
                );
                match action {
                    AppointmentDialogAction::Save(draft) => self.save_appointment(draft),
                    AppointmentDialogAction::Delete => self.delete_pending_appointment(),
                    AppointmentDialogAction::SearchClient => {
                        self.state.client_search_state.reset();
                        self.state.show_client_search = true;
                    }
                    AppointmentDialogAction::NewClient => {
                        self.state.new_client_state.reset();
                        self.state.show_new_client = true;
                    }
                    AppointmentDialogAction::None => {}
                }
            }
        }

        if self.state.show_settings {
            if let Some(settings_state) = self.state.settings_state.as_mut() {
                let action = render_clinic_settings(
                    ctx,
                    &mut self.state.show_settings,
                    settings_state,
                    &self.templates,
                );
                if let ClinicSettingsAction::Save(patch) = action {
                    let clinic_id = self.directory.active_clinic().id;
                    self.directory.update_config(clinic_id, patch);
                    self.state.settings_state = None;
                }
            }
        }
    }

    /// Synthesize the appointment for the pending slot from the dialog draft.
    fn save_appointment(&mut self, draft: AppointmentDraft) {
        let Some(slot) = self.state.pending_slot else {
            return;
        };

        // Deactivated or deleted cabins silently refuse the booking
        let Some(cabin) = self
            .directory
            .active_config()
            .cabins
            .iter()
            .find(|c| c.id == slot.cabin_id && c.is_active)
        else {
            log::debug!("Booking ignored, cabin {} is not active", slot.cabin_id);
            return;
        };

        match Appointment::new(
            draft.client.name.clone(),
            draft.service_line(),
            slot.date,
            slot.cabin_id,
            draft.time,
            timegrid::DEFAULT_DURATION_SLOTS,
            cabin.color.clone(),
        ) {
            Ok(mut appointment) => {
                if !draft.client.phone.is_empty() {
                    appointment.client_phone = Some(draft.client.phone.clone());
                }
                self.book.add(appointment);
            }
            Err(message) => log::warn!("Appointment not created: {}", message),
        }
    }

    fn delete_pending_appointment(&mut self) {
        if let Some(slot) = self.state.pending_slot {
            let removed = self.book.remove_at(&slot);
            log::debug!("Removed {} appointment(s) at {:?}", removed, slot);
        }
        self.state.close_booking_dialogs();
    }
}
