//! Daily agenda: one day column across the active cabins.

use chrono::NaiveDate;

use super::grid::render_agenda_grid;
use super::{weekday_name_es, GridOutcome};
use crate::models::clinic::ClinicConfig;
use crate::services::appointment::AppointmentBook;
use crate::ui::drag::DragView;
use crate::ui::theme::AgendaTheme;

pub struct DayView;

impl DayView {
    pub fn show(
        ui: &mut egui::Ui,
        current_date: NaiveDate,
        config: &ClinicConfig,
        book: &mut AppointmentBook,
        theme: &AgendaTheme,
        scroll_offset: Option<f32>,
    ) -> GridOutcome {
        let days = [current_date];

        let mut scroll_area = egui::ScrollArea::both().auto_shrink([false, false]);
        if let Some(offset) = scroll_offset {
            scroll_area = scroll_area.vertical_scroll_offset(offset);
        }

        scroll_area
            .show(ui, |ui| {
                render_agenda_grid(ui, &days, config, book, theme, DragView::Day)
            })
            .inner
    }

    /// Header label, e.g. "lunes 24/02/2025".
    pub fn date_label(current_date: NaiveDate) -> String {
        format!(
            "{} {}",
            weekday_name_es(current_date),
            current_date.format("%d/%m/%Y")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_label() {
        let monday = NaiveDate::from_ymd_opt(2025, 2, 24).unwrap();
        assert_eq!(DayView::date_label(monday), "lunes 24/02/2025");
    }
}
