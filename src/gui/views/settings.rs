//! Settings view implementation
//!
//! Contains the settings panel rendering including:
//! - Appearance (theme, sidebar default)
//! - Transaction monitor (refresh cadence, feed endpoint override)
//! - Storage paths and reset

use crate::config::POLL_INTERVAL_RANGE_SECS;
use crate::gui::app::GuiApp;
use crate::gui::notifications::NotificationEntry;
use crate::user_settings::{ThemeChoice, UserSettings};
use eframe::egui::{self, RichText};
use url::Url;

impl GuiApp {
    /// Settings view
    pub(crate) fn view_settings(&mut self, ui: &mut egui::Ui) {
        self.render_section_header(ui, "[*]", "SETTINGS");
        ui.add_space(self.theme.spacing_md);

        self.render_appearance_panel(ui);
        ui.add_space(self.theme.spacing_md);

        self.render_monitor_panel(ui);
        ui.add_space(self.theme.spacing_md);

        self.render_storage_panel(ui);
    }

    fn render_appearance_panel(&mut self, ui: &mut egui::Ui) {
        let theme = self.theme;
        let mut selected = self.user_settings.theme;
        let mut sidebar_toggled = false;

        theme.frame_panel().show(ui, |ui| {
            ui.label(
                RichText::new("Appearance")
                    .size(16.0)
                    .strong()
                    .color(theme.text_primary),
            );
            ui.add_space(theme.spacing_sm);

            ui.horizontal(|ui| {
                ui.label(RichText::new("Theme:").color(theme.text_secondary));
                ui.selectable_value(&mut selected, ThemeChoice::Dark, "Dark");
                ui.selectable_value(&mut selected, ThemeChoice::Light, "Light");
            });

            ui.add_space(theme.spacing_xs);
            let mut collapsed = self.sidebar_collapsed;
            if ui.checkbox(&mut collapsed, "Collapse navigation sidebar").changed() {
                sidebar_toggled = true;
            }
        });

        if selected != self.user_settings.theme {
            let ctx = ui.ctx().clone();
            self.set_theme(selected, &ctx);
        }
        if sidebar_toggled {
            self.toggle_sidebar();
        }
    }

    fn render_monitor_panel(&mut self, ui: &mut egui::Ui) {
        let theme = self.theme;
        let default_endpoint = self.config.feed_url.to_string();
        let mut apply_clicked = false;

        theme.frame_panel().show(ui, |ui| {
            ui.label(
                RichText::new("Transaction Monitor")
                    .size(16.0)
                    .strong()
                    .color(theme.text_primary),
            );
            ui.add_space(theme.spacing_sm);

            egui::Grid::new("monitor_settings_grid")
                .num_columns(2)
                .spacing([theme.spacing_md, theme.spacing_sm])
                .show(ui, |ui| {
                    ui.label(RichText::new("Refresh every:").color(theme.text_secondary));
                    ui.horizontal(|ui| {
                        ui.add(
                            egui::DragValue::new(&mut self.settings_pending_interval_secs)
                                .speed(1)
                                .clamp_range(POLL_INTERVAL_RANGE_SECS.0..=POLL_INTERVAL_RANGE_SECS.1)
                                .suffix(" s"),
                        );
                    });
                    ui.end_row();

                    ui.label(RichText::new("Feed endpoint:").color(theme.text_secondary));
                    ui.add(
                        egui::TextEdit::singleline(&mut self.settings_pending_feed_url)
                            .hint_text(default_endpoint.as_str())
                            .desired_width(360.0),
                    );
                    ui.end_row();
                });

            ui.label(
                RichText::new("Leave the endpoint empty to use the built-in default.")
                    .small()
                    .color(theme.text_secondary),
            );

            if let Some(err) = &self.settings_feed_url_error {
                ui.add_space(theme.spacing_xs);
                ui.colored_label(theme.error, format!("[!!] {}", err));
            }

            ui.add_space(theme.spacing_sm);
            if ui.add(theme.button_primary("Apply")).clicked() {
                apply_clicked = true;
            }
        });

        if apply_clicked {
            self.apply_monitor_settings();
        }
    }

    /// Validate and persist the pending monitor settings, restarting the
    /// poller when it is running so the new cadence takes effect.
    fn apply_monitor_settings(&mut self) {
        let raw_url = self.settings_pending_feed_url.trim().to_string();
        if !raw_url.is_empty() {
            if let Err(e) = Url::parse(&raw_url) {
                self.settings_feed_url_error = Some(format!("Invalid endpoint URL: {}", e));
                return;
            }
        }
        self.settings_feed_url_error = None;

        self.user_settings.poll_interval_secs = self.settings_pending_interval_secs;
        self.user_settings.set_feed_url(raw_url);
        if let Err(e) = self.user_settings.save() {
            tracing::warn!("Failed to save settings: {}", e);
        }

        let _ = crate::activity_log::append_log(
            "monitor_settings_applied",
            format!(
                "interval={}s endpoint={}",
                self.user_settings.poll_interval_secs(),
                self.user_settings
                    .feed_url
                    .as_deref()
                    .unwrap_or("(default)")
            ),
        );

        self.restart_feed_polling();
        self.notify(NotificationEntry::success("Monitor settings applied."));
    }

    fn render_storage_panel(&mut self, ui: &mut egui::Ui) {
        let theme = self.theme;
        let mut reset_clicked = false;

        theme.frame_panel().show(ui, |ui| {
            ui.label(
                RichText::new("Storage")
                    .size(16.0)
                    .strong()
                    .color(theme.text_primary),
            );
            ui.add_space(theme.spacing_sm);

            egui::Grid::new("storage_grid")
                .num_columns(2)
                .spacing([theme.spacing_md, theme.spacing_xs])
                .show(ui, |ui| {
                    ui.label(RichText::new("Settings file:").color(theme.text_secondary));
                    let settings_path = UserSettings::settings_path_display();
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&settings_path).small().color(theme.text_secondary));
                        if ui
                            .add(egui::Button::new("[C]").small())
                            .on_hover_text("Copy path")
                            .clicked()
                        {
                            ui.output_mut(|o| o.copied_text = settings_path.clone());
                        }
                    });
                    ui.end_row();

                    ui.label(RichText::new("Activity log:").color(theme.text_secondary));
                    let log_path = crate::activity_log::log_file_path();
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&log_path).small().color(theme.text_secondary));
                        if ui
                            .add(egui::Button::new("[C]").small())
                            .on_hover_text("Copy path")
                            .clicked()
                        {
                            ui.output_mut(|o| o.copied_text = log_path.clone());
                        }
                    });
                    ui.end_row();
                });

            ui.add_space(theme.spacing_sm);
            if ui
                .add(theme.button_secondary("Reset to defaults"))
                .on_hover_text("Restore default theme, cadence, and endpoint")
                .clicked()
            {
                reset_clicked = true;
            }
        });

        if reset_clicked {
            self.reset_settings(ui.ctx().clone());
        }
    }

    fn reset_settings(&mut self, ctx: egui::Context) {
        self.user_settings = UserSettings::default();
        if let Err(e) = self.user_settings.save() {
            tracing::warn!("Failed to save settings: {}", e);
        }

        self.sidebar_collapsed = self.user_settings.sidebar_collapsed;
        self.settings_pending_interval_secs = self.user_settings.poll_interval_secs;
        self.settings_pending_feed_url.clear();
        self.settings_feed_url_error = None;

        self.theme = crate::gui::theme::AppTheme::from_choice(self.user_settings.theme);
        crate::gui::theme::configure_style(&ctx, &self.theme);

        self.restart_feed_polling();
        self.notify(NotificationEntry::new("Settings reset to defaults."));
    }
}
