//! Theme module for the egui agenda application
//!
//! Defines the AgendaTheme structure and hex color conversion helpers used
//! for cabin colors throughout the grid.

use egui::Color32;
use serde::{Deserialize, Serialize};

/// An agenda theme defining the colors used across the application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgendaTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application background color
    pub app_background: Color32,

    /// Grid body background color
    pub grid_background: Color32,

    /// Alternating day-column tint in the week view
    pub alt_column_background: Color32,

    /// Today's column background color
    pub today_background: Color32,

    /// Today's column border color
    pub today_border: Color32,

    /// Accent color (time labels, selected controls, current-time line)
    pub accent: Color32,

    /// Grid line color at hour boundaries
    pub hour_line: Color32,

    /// Grid line color between slots
    pub slot_line: Color32,

    /// Primary text color
    pub text_primary: Color32,

    /// Secondary text color
    pub text_secondary: Color32,
}

impl AgendaTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(250, 250, 250),
            grid_background: Color32::from_rgb(255, 255, 255),
            alt_column_background: Color32::from_rgb(250, 245, 255),
            today_background: Color32::from_rgb(239, 246, 255),
            today_border: Color32::from_rgb(147, 197, 253),
            accent: Color32::from_rgb(147, 51, 234),
            hour_line: Color32::from_rgb(209, 213, 219),
            slot_line: Color32::from_rgb(235, 235, 238),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(107, 114, 128),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(28, 28, 30),
            grid_background: Color32::from_rgb(38, 38, 42),
            alt_column_background: Color32::from_rgb(44, 40, 52),
            today_background: Color32::from_rgb(45, 55, 75),
            today_border: Color32::from_rgb(100, 150, 255),
            accent: Color32::from_rgb(192, 132, 252),
            hour_line: Color32::from_rgb(70, 70, 76),
            slot_line: Color32::from_rgb(52, 52, 58),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(170, 170, 175),
        }
    }

    /// Theme matching the system preference.
    pub fn from_system() -> Self {
        match dark_light::detect() {
            dark_light::Mode::Dark => Self::dark(),
            dark_light::Mode::Light | dark_light::Mode::Default => Self::light(),
        }
    }

    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;

        visuals.widgets.noninteractive.bg_fill = self.grid_background;
        visuals.widgets.inactive.bg_fill = self.grid_background;
        visuals.widgets.hovered.bg_fill = self.today_background;
        visuals.widgets.active.bg_fill = self.today_background;

        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }

    /// Convert Color32 to hex string for display
    pub fn color_to_hex(color: Color32) -> String {
        format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
    }

    /// Parse hex string to Color32
    pub fn hex_to_color(hex: &str) -> Result<Color32, String> {
        let hex = hex.trim_start_matches('#');

        if hex.len() != 6 {
            return Err("Hex color must be 6 characters".to_string());
        }

        let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| "Invalid hex color")?;
        let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| "Invalid hex color")?;
        let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| "Invalid hex color")?;

        Ok(Color32::from_rgb(r, g, b))
    }
}
