//! New-client form dialog.

use egui::{Color32, RichText};

#[derive(Default)]
pub struct NewClientState {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub error_message: Option<String>,
}

impl NewClientState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

pub enum NewClientAction {
    None,
    Create {
        name: String,
        phone: String,
        email: Option<String>,
    },
}

/// Render the new-client dialog.
pub fn render_new_client(
    ctx: &egui::Context,
    show_dialog: &mut bool,
    state: &mut NewClientState,
) -> NewClientAction {
    let mut action = NewClientAction::None;
    let mut dialog_open = *show_dialog;

    egui::Window::new("Nuevo cliente")
        .open(&mut dialog_open)
        .collapsible(false)
        .resizable(false)
        .default_width(320.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            if let Some(ref error) = state.error_message {
                ui.colored_label(Color32::RED, RichText::new(error).strong());
                ui.add_space(6.0);
            }

            egui::Grid::new("new_client_grid")
                .num_columns(2)
                .spacing([8.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Nombre:");
                    ui.text_edit_singleline(&mut state.name);
                    ui.end_row();

                    ui.label("Teléfono:");
                    ui.text_edit_singleline(&mut state.phone);
                    ui.end_row();

                    ui.label("Email:");
                    ui.text_edit_singleline(&mut state.email);
                    ui.end_row();
                });

            ui.add_space(8.0);
            if ui.button("Crear").clicked() {
                if state.name.trim().is_empty() {
                    state.error_message = Some("El nombre es obligatorio".to_string());
                } else {
                    let email = {
                        let trimmed = state.email.trim();
                        (!trimmed.is_empty()).then(|| trimmed.to_string())
                    };
                    action = NewClientAction::Create {
                        name: state.name.trim().to_string(),
                        phone: state.phone.trim().to_string(),
                        email,
                    };
                }
            }
        });

    *show_dialog = dialog_open;
    if matches!(action, NewClientAction::Create { .. }) {
        *show_dialog = false;
        state.reset();
    }
    action
}
