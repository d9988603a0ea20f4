//! Centralized theme and styling system for the GUI
//!
//! Provides the AppTheme struct with colors, spacing, and styled widget
//! factories, in dark and light variants. The selected variant is persisted
//! in the user settings as `"dark"` / `"light"`.

use crate::feed::{Severity, TxDirection};
use crate::user_settings::ThemeChoice;
use eframe::egui;

/// Centralized theme and styling system
#[derive(Clone, Copy)]
pub struct AppTheme {
    pub mode: ThemeChoice,

    // Base colors
    pub background: egui::Color32,
    pub surface: egui::Color32,
    pub surface_hover: egui::Color32,
    pub surface_active: egui::Color32,
    pub panel_fill: egui::Color32,
    pub text_primary: egui::Color32,
    pub text_secondary: egui::Color32,

    // Semantic colors
    pub primary: egui::Color32,
    pub primary_hover: egui::Color32,
    pub success: egui::Color32,
    pub warning: egui::Color32,
    pub error: egui::Color32,
    pub info: egui::Color32,

    // Spacing constants
    pub spacing_xs: f32,
    pub spacing_sm: f32,
    pub spacing_md: f32,
    pub spacing_lg: f32,

    // Button sizes
    pub button_medium: egui::Vec2,
}

impl AppTheme {
    /// Dark scheme - slate background with the dashboard's blue accent.
    pub fn dark() -> Self {
        Self {
            mode: ThemeChoice::Dark,
            background: egui::Color32::from_rgb(18, 22, 31),
            surface: egui::Color32::from_rgb(26, 32, 44),
            surface_hover: egui::Color32::from_rgb(36, 44, 60),
            surface_active: egui::Color32::from_rgb(45, 55, 72),
            panel_fill: egui::Color32::from_rgb(22, 27, 38),
            text_primary: egui::Color32::from_rgb(226, 232, 240),
            text_secondary: egui::Color32::from_rgb(160, 174, 192),

            primary: egui::Color32::from_rgb(66, 153, 225),
            primary_hover: egui::Color32::from_rgb(99, 179, 237),
            success: egui::Color32::from_rgb(72, 187, 120),
            warning: egui::Color32::from_rgb(237, 137, 54),
            error: egui::Color32::from_rgb(245, 101, 101),
            info: egui::Color32::from_rgb(66, 153, 225),

            spacing_xs: 4.0,
            spacing_sm: 8.0,
            spacing_md: 16.0,
            spacing_lg: 24.0,

            button_medium: egui::vec2(130.0, 32.0),
        }
    }

    /// Light scheme matching the original pages' light mode.
    pub fn light() -> Self {
        Self {
            mode: ThemeChoice::Light,
            background: egui::Color32::from_rgb(247, 250, 252),
            surface: egui::Color32::WHITE,
            surface_hover: egui::Color32::from_rgb(237, 242, 247),
            surface_active: egui::Color32::from_rgb(226, 232, 240),
            panel_fill: egui::Color32::WHITE,
            text_primary: egui::Color32::from_rgb(26, 32, 44),
            text_secondary: egui::Color32::from_rgb(74, 85, 104),

            primary: egui::Color32::from_rgb(49, 130, 206),
            primary_hover: egui::Color32::from_rgb(43, 108, 176),
            success: egui::Color32::from_rgb(56, 161, 105),
            warning: egui::Color32::from_rgb(221, 107, 32),
            error: egui::Color32::from_rgb(229, 62, 62),
            info: egui::Color32::from_rgb(49, 130, 206),

            spacing_xs: 4.0,
            spacing_sm: 8.0,
            spacing_md: 16.0,
            spacing_lg: 24.0,

            button_medium: egui::vec2(130.0, 32.0),
        }
    }

    pub fn from_choice(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Dark => Self::dark(),
            ThemeChoice::Light => Self::light(),
        }
    }

    /// Color for an alert severity badge.
    pub fn severity_color(&self, severity: Severity) -> egui::Color32 {
        match severity {
            Severity::High => self.error,
            Severity::Medium => self.warning,
            Severity::Low => self.info,
        }
    }

    /// Color for a transaction amount by direction.
    pub fn direction_color(&self, direction: TxDirection) -> egui::Color32 {
        match direction {
            TxDirection::Credit => self.success,
            TxDirection::Debit => self.error,
        }
    }

    /// Create a themed button for primary actions
    pub fn button_primary(&self, text: &str) -> egui::Button<'_> {
        egui::Button::new(egui::RichText::new(text).color(self.text_primary).strong())
            .fill(self.surface)
            .stroke(egui::Stroke::new(2.0, self.primary))
            .min_size(self.button_medium)
    }

    /// Create a themed secondary button (outlined style)
    pub fn button_secondary(&self, text: &str) -> egui::Button<'_> {
        egui::Button::new(egui::RichText::new(text).color(self.text_primary))
            .fill(self.surface)
            .stroke(egui::Stroke::new(1.0, self.surface_active))
            .min_size(self.button_medium)
    }

    /// Create a themed frame for surface elements
    pub fn frame_surface(&self) -> egui::Frame {
        egui::Frame::none()
            .fill(self.surface)
            .rounding(6.0)
            .inner_margin(self.spacing_md)
            .stroke(egui::Stroke::new(1.0, self.surface_active))
    }

    /// Create a themed frame for panels/cards
    pub fn frame_panel(&self) -> egui::Frame {
        egui::Frame::none()
            .fill(self.panel_fill)
            .rounding(8.0)
            .inner_margin(self.spacing_md)
            .stroke(egui::Stroke::new(1.0, self.surface_active))
    }
}

/// Configure the egui context style with the given theme
pub fn configure_style(ctx: &egui::Context, theme: &AppTheme) {
    let mut visuals = match theme.mode {
        ThemeChoice::Dark => egui::Visuals::dark(),
        ThemeChoice::Light => egui::Visuals::light(),
    };
    visuals.window_fill = theme.background;
    visuals.panel_fill = theme.panel_fill;
    visuals.override_text_color = Some(theme.text_primary);

    visuals.widgets.noninteractive.bg_fill = theme.surface;
    visuals.widgets.inactive.bg_fill = theme.surface;
    visuals.widgets.hovered.bg_fill = theme.surface_hover;
    visuals.widgets.active.bg_fill = theme.surface_active;
    visuals.widgets.open.bg_fill = theme.surface_active;

    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, theme.surface_active);
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, theme.primary_hover);
    visuals.widgets.active.bg_stroke = egui::Stroke::new(2.0, theme.primary);

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);
    style.spacing.menu_margin = egui::Margin::same(8.0);

    style.text_styles.insert(
        egui::TextStyle::Heading,
        egui::FontId::new(20.0, egui::FontFamily::Proportional),
    );
    style.text_styles.insert(
        egui::TextStyle::Body,
        egui::FontId::new(14.0, egui::FontFamily::Proportional),
    );
    style.text_styles.insert(
        egui::TextStyle::Button,
        egui::FontId::new(14.0, egui::FontFamily::Proportional),
    );
    style.text_styles.insert(
        egui::TextStyle::Monospace,
        egui::FontId::new(12.0, egui::FontFamily::Monospace),
    );

    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_choice_matches_mode() {
        assert_eq!(AppTheme::from_choice(ThemeChoice::Dark).mode, ThemeChoice::Dark);
        assert_eq!(AppTheme::from_choice(ThemeChoice::Light).mode, ThemeChoice::Light);
    }

    #[test]
    fn test_severity_colors_are_distinct() {
        let theme = AppTheme::dark();
        assert_ne!(theme.severity_color(Severity::High), theme.severity_color(Severity::Low));
        assert_ne!(
            theme.severity_color(Severity::High),
            theme.severity_color(Severity::Medium)
        );
    }

    #[test]
    fn test_direction_colors() {
        let theme = AppTheme::light();
        assert_eq!(theme.direction_color(TxDirection::Credit), theme.success);
        assert_eq!(theme.direction_color(TxDirection::Debit), theme.error);
    }
}
