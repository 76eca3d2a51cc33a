//! Client search dialog: the picker that seeds a new booking.

use egui::RichText;

use crate::models::client::Client;
use crate::services::client::ClientDirectory;

#[derive(Default)]
pub struct ClientSearchState {
    pub query: String,
}

impl ClientSearchState {
    pub fn reset(&mut self) {
        self.query.clear();
    }
}

pub enum ClientSearchAction {
    None,
    /// A client was picked for the pending slot.
    Selected(Client),
    /// Jump to the new-client form instead.
    NewClient,
}

/// Render the client search dialog.
pub fn render_client_search(
    ctx: &egui::Context,
    show_dialog: &mut bool,
    state: &mut ClientSearchState,
    directory: &ClientDirectory,
    pending_time: Option<String>,
) -> ClientSearchAction {
    let mut action = ClientSearchAction::None;
    let mut dialog_open = *show_dialog;

    egui::Window::new("Buscar cliente")
        .open(&mut dialog_open)
        .collapsible(false)
        .resizable(false)
        .default_width(340.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            if let Some(time) = &pending_time {
                ui.label(
                    RichText::new(format!("Cita a las {}", time))
                        .size(12.0)
                        .weak(),
                );
                ui.add_space(4.0);
            }

            ui.add(
                egui::TextEdit::singleline(&mut state.query)
                    .hint_text("Nombre o teléfono")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(6.0);

            egui::ScrollArea::vertical().max_height(240.0).show(ui, |ui| {
                for client in directory.search(&state.query) {
                    let label = format!("{}  ·  {}", client.name, client.phone);
                    if ui.button(label).clicked() {
                        action = ClientSearchAction::Selected(client.clone());
                    }
                }
            });

            ui.separator();
            if ui.button("➕ Nuevo cliente").clicked() {
                action = ClientSearchAction::NewClient;
            }
        });

    *show_dialog = dialog_open;
    if !matches!(action, ClientSearchAction::None) {
        *show_dialog = false;
        state.reset();
    }
    action
}
