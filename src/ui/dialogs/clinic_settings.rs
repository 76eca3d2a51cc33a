//! Clinic settings dialog: opening hours, weekend columns, the cabin table
//! and the weekly-schedule template selector.

use egui::{Color32, RichText};

use crate::models::cabin::Cabin;
use crate::models::clinic::{ClinicConfig, ClinicConfigPatch};
use crate::models::schedule::WeekSchedule;
use crate::services::cabin::{self, MoveDirection};
use crate::services::template::TemplateService;
use crate::services::timegrid;
use crate::ui::theme::AgendaTheme;

pub struct ClinicSettingsState {
    pub open_time: String,
    pub close_time: String,
    pub weekend_open_time: String,
    pub weekend_close_time: String,
    pub saturday_open: bool,
    pub sunday_open: bool,
    /// Working copy of the cabin list, committed on save.
    pub cabins: Vec<Cabin>,
    pub cabin_filter: String,
    pub new_cabin_code: String,
    pub new_cabin_name: String,
    pub new_cabin_color: String,
    pub schedule: WeekSchedule,
    pub selected_template: Option<String>,
    pub error_message: Option<String>,
}

impl ClinicSettingsState {
    pub fn from_config(config: &ClinicConfig) -> Self {
        Self {
            open_time: config.open_time.clone(),
            close_time: config.close_time.clone(),
            weekend_open_time: config.weekend_open_time.clone(),
            weekend_close_time: config.weekend_close_time.clone(),
            saturday_open: config.saturday_open,
            sunday_open: config.sunday_open,
            cabins: config.cabins.clone(),
            cabin_filter: String::new(),
            new_cabin_code: String::new(),
            new_cabin_name: String::new(),
            new_cabin_color: "#9333ea".to_string(),
            schedule: config.schedule.clone(),
            selected_template: None,
            error_message: None,
        }
    }

    fn to_patch(&self) -> Result<ClinicConfigPatch, String> {
        for label in [
            &self.open_time,
            &self.close_time,
            &self.weekend_open_time,
            &self.weekend_close_time,
        ] {
            timegrid::parse_label(label)
                .map_err(|_| format!("Hora no válida: {}", label))?;
        }

        let open = timegrid::parse_label(&self.open_time).expect("validated above");
        let close = timegrid::parse_label(&self.close_time).expect("validated above");
        if close < open {
            return Err("La hora de cierre debe ser posterior a la apertura".to_string());
        }

        for cabin in &self.cabins {
            cabin.validate()?;
        }

        Ok(ClinicConfigPatch {
            open_time: Some(self.open_time.clone()),
            close_time: Some(self.close_time.clone()),
            weekend_open_time: Some(self.weekend_open_time.clone()),
            weekend_close_time: Some(self.weekend_close_time.clone()),
            saturday_open: Some(self.saturday_open),
            sunday_open: Some(self.sunday_open),
            cabins: Some(self.cabins.clone()),
            schedule: Some(self.schedule.clone()),
        })
    }
}

pub enum ClinicSettingsAction {
    None,
    Save(ClinicConfigPatch),
}

/// Render the clinic settings dialog.
pub fn render_clinic_settings(
    ctx: &egui::Context,
    show_dialog: &mut bool,
    state: &mut ClinicSettingsState,
    templates: &TemplateService,
) -> ClinicSettingsAction {
    let mut action = ClinicSettingsAction::None;
    let mut dialog_open = *show_dialog;

    egui::Window::new("Configuración de clínica")
        .open(&mut dialog_open)
        .collapsible(false)
        .resizable(true)
        .default_width(560.0)
        .default_height(520.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                if let Some(ref error) = state.error_message {
                    ui.colored_label(Color32::RED, RichText::new(error).strong());
                    ui.add_space(8.0);
                }

                ui.heading("Horario");
                ui.add_space(4.0);
                egui::Grid::new("clinic_hours_grid")
                    .num_columns(4)
                    .spacing([8.0, 6.0])
                    .show(ui, |ui| {
                        ui.label("Apertura:");
                        ui.add(egui::TextEdit::singleline(&mut state.open_time).desired_width(60.0));
                        ui.label("Cierre:");
                        ui.add(egui::TextEdit::singleline(&mut state.close_time).desired_width(60.0));
                        ui.end_row();

                        ui.label("Apertura fin de semana:");
                        ui.add(
                            egui::TextEdit::singleline(&mut state.weekend_open_time)
                                .desired_width(60.0),
                        );
                        ui.label("Cierre fin de semana:");
                        ui.add(
                            egui::TextEdit::singleline(&mut state.weekend_close_time)
                                .desired_width(60.0),
                        );
                        ui.end_row();
                    });

                ui.horizontal(|ui| {
                    ui.checkbox(&mut state.saturday_open, "Abierto sábado");
                    ui.checkbox(&mut state.sunday_open, "Abierto domingo");
                });

                ui.add_space(10.0);
                ui.separator();
                ui.heading("Configuración de cabinas");
                ui.add_space(4.0);

                ui.add(
                    egui::TextEdit::singleline(&mut state.cabin_filter)
                        .hint_text("Buscar cabinas")
                        .desired_width(220.0),
                );
                ui.add_space(6.0);

                render_cabin_table(ui, state);

                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut state.new_cabin_code)
                            .hint_text("Código")
                            .desired_width(60.0),
                    );
                    ui.add(
                        egui::TextEdit::singleline(&mut state.new_cabin_name)
                            .hint_text("Nombre")
                            .desired_width(140.0),
                    );
                    ui.add(
                        egui::TextEdit::singleline(&mut state.new_cabin_color)
                            .hint_text("#rrggbb")
                            .desired_width(70.0),
                    );
                    if ui.button("➕ Añadir cabina").clicked() {
                        let cabin = Cabin::new(
                            0,
                            state.new_cabin_code.trim(),
                            state.new_cabin_name.trim(),
                            state.new_cabin_color.trim(),
                        );
                        match cabin.validate() {
                            Ok(()) => {
                                cabin::upsert(&mut state.cabins, cabin);
                                state.new_cabin_code.clear();
                                state.new_cabin_name.clear();
                                state.error_message = None;
                            }
                            Err(message) => state.error_message = Some(message),
                        }
                    }
                });

                ui.add_space(10.0);
                ui.separator();
                ui.heading("Plantilla de horario");
                ui.add_space(4.0);

                ui.horizontal(|ui| {
                    let selected_label = state
                        .selected_template
                        .as_deref()
                        .and_then(|id| templates.get(id))
                        .map(|t| t.description.clone())
                        .unwrap_or_else(|| "Seleccionar una plantilla".to_string());

                    egui::ComboBox::from_id_source("schedule_template_combo")
                        .selected_text(selected_label)
                        .show_ui(ui, |ui| {
                            for template in templates.list_all() {
                                ui.selectable_value(
                                    &mut state.selected_template,
                                    Some(template.id.clone()),
                                    &template.description,
                                );
                            }
                        });

                    if ui.button("Aplicar").clicked() {
                        if let Some(template) = state
                            .selected_template
                            .as_deref()
                            .and_then(|id| templates.get(id))
                        {
                            state.schedule = template.schedule.clone();
                        }
                    }
                });

                ui.add_space(12.0);
                if ui.button("Guardar").clicked() {
                    match state.to_patch() {
                        Ok(patch) => action = ClinicSettingsAction::Save(patch),
                        Err(message) => state.error_message = Some(message),
                    }
                }
            });
        });

    *show_dialog = dialog_open;
    if matches!(action, ClinicSettingsAction::Save(_)) {
        *show_dialog = false;
    }
    action
}

fn render_cabin_table(ui: &mut egui::Ui, state: &mut ClinicSettingsState) {
    let visible: Vec<u32> = cabin::filter(&state.cabins, &state.cabin_filter)
        .into_iter()
        .map(|c| c.id)
        .collect();

    let mut move_request: Option<(u32, MoveDirection)> = None;
    let mut delete_request: Option<u32> = None;

    egui::Grid::new("cabin_table")
        .num_columns(8)
        .striped(true)
        .spacing([10.0, 4.0])
        .show(ui, |ui| {
            ui.label(RichText::new("Nº").strong());
            ui.label(RichText::new("Código").strong());
            ui.label(RichText::new("Nombre").strong());
            ui.label(RichText::new("Color").strong());
            ui.label(RichText::new("Activo").strong());
            ui.label(RichText::new("Subir").strong());
            ui.label(RichText::new("Bajar").strong());
            ui.label(RichText::new("Borrar").strong());
            ui.end_row();

            let first = visible.first().copied();
            let last = visible.last().copied();

            for cabin_id in &visible {
                let Some(cabin) = state.cabins.iter_mut().find(|c| c.id == *cabin_id) else {
                    continue;
                };

                ui.label(cabin.order.to_string());
                ui.label(&cabin.code);
                ui.label(&cabin.name);

                ui.horizontal(|ui| {
                    let swatch = AgendaTheme::hex_to_color(&cabin.color)
                        .unwrap_or(Color32::GRAY);
                    let (rect, _) = ui.allocate_exact_size(
                        egui::Vec2::splat(14.0),
                        egui::Sense::hover(),
                    );
                    ui.painter()
                        .rect_filled(rect, egui::Rounding::same(7.0), swatch);
                    ui.add(
                        egui::TextEdit::singleline(&mut cabin.color).desired_width(64.0),
                    );
                });

                ui.checkbox(&mut cabin.is_active, "");

                let at_top = first == Some(cabin.id);
                if ui.add_enabled(!at_top, egui::Button::new("⬆")).clicked() {
                    move_request = Some((cabin.id, MoveDirection::Up));
                }

                let at_bottom = last == Some(cabin.id);
                if ui.add_enabled(!at_bottom, egui::Button::new("⬇")).clicked() {
                    move_request = Some((cabin.id, MoveDirection::Down));
                }

                if ui.button("🗑").clicked() {
                    delete_request = Some(cabin.id);
                }
                ui.end_row();
            }
        });

    if let Some((cabin_id, direction)) = move_request {
        cabin::move_cabin(&mut state.cabins, cabin_id, direction);
    }
    if let Some(cabin_id) = delete_request {
        cabin::remove(&mut state.cabins, cabin_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::clinic::Clinic;

    #[test]
    fn test_to_patch_round_trips_hours() {
        let config = Clinic::builtin().remove(0).config;
        let state = ClinicSettingsState::from_config(&config);
        let patch = state.to_patch().unwrap();
        assert_eq!(patch.open_time.as_deref(), Some("10:00"));
        assert_eq!(patch.cabins.map(|c| c.len()), Some(9));
    }

    #[test]
    fn test_to_patch_rejects_bad_time() {
        let config = Clinic::builtin().remove(0).config;
        let mut state = ClinicSettingsState::from_config(&config);
        state.close_time = "25:00".to_string();
        assert!(state.to_patch().is_err());
    }

    #[test]
    fn test_to_patch_rejects_inverted_hours() {
        let config = Clinic::builtin().remove(0).config;
        let mut state = ClinicSettingsState::from_config(&config);
        state.open_time = "18:00".to_string();
        state.close_time = "09:00".to_string();
        assert!(state.to_patch().is_err());
    }
}
