//! Weekly agenda: Monday-start day columns, weekend columns gated by the
//! clinic's Saturday/Sunday flags.

use chrono::NaiveDate;

use super::grid::render_agenda_grid;
use super::{week_days, GridOutcome};
use crate::models::clinic::ClinicConfig;
use crate::services::appointment::AppointmentBook;
use crate::ui::drag::DragView;
use crate::ui::theme::AgendaTheme;

pub struct WeekView;

impl WeekView {
    pub fn show(
        ui: &mut egui::Ui,
        current_date: NaiveDate,
        config: &ClinicConfig,
        book: &mut AppointmentBook,
        theme: &AgendaTheme,
        scroll_offset: Option<f32>,
    ) -> GridOutcome {
        let days = week_days(current_date, config);
        if days.is_empty() {
            ui.label("No hay días disponibles");
            return GridOutcome::default();
        }

        let mut scroll_area = egui::ScrollArea::both().auto_shrink([false, false]);
        if let Some(offset) = scroll_offset {
            scroll_area = scroll_area.vertical_scroll_offset(offset);
        }

        scroll_area
            .show(ui, |ui| {
                render_agenda_grid(ui, &days, config, book, theme, DragView::Week)
            })
            .inner
    }

    /// Range label for the header, e.g. "24/02 - 01/03".
    pub fn range_label(current_date: NaiveDate, config: &ClinicConfig) -> String {
        let days = week_days(current_date, config);
        match (days.first(), days.last()) {
            (Some(first), Some(last)) => format!(
                "{} - {}",
                first.format("%d/%m"),
                last.format("%d/%m")
            ),
            _ => "No hay días disponibles".to_string(),
        }
    }
}
