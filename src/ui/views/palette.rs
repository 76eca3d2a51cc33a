use egui::Color32;

use crate::ui::theme::AgendaTheme;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

/// Colors for the time grid, derived from the active theme.
#[derive(Clone, Copy)]
pub(crate) struct GridPalette {
    pub regular_bg: Color32,
    pub alt_column_bg: Color32,
    pub today_bg: Color32,
    pub today_border: Color32,
    pub hour_line: Color32,
    pub slot_line: Color32,
    pub divider: Color32,
    pub hover_overlay: Color32,
    pub drop_target: Color32,
    pub time_label: Color32,
    pub header_text: Color32,
    pub header_sub_text: Color32,
    pub current_time: Color32,
}

impl GridPalette {
    pub fn from_theme(theme: &AgendaTheme) -> Self {
        Self {
            regular_bg: theme.grid_background,
            alt_column_bg: theme.alt_column_background,
            today_bg: theme.today_background,
            today_border: theme.today_border,
            hour_line: theme.hour_line,
            slot_line: theme.slot_line,
            divider: theme.slot_line,
            hover_overlay: with_alpha(theme.accent, if theme.is_dark { 24 } else { 14 }),
            drop_target: with_alpha(theme.accent, 26),
            time_label: theme.accent,
            header_text: theme.text_primary,
            header_sub_text: theme.text_secondary,
            current_time: theme.accent,
        }
    }
}
