//! Dashboard view implementation
//!
//! Contains the executive overview: feed endpoint status, the monthly
//! revenue chart, quick actions, the activity log, and the about section.

use crate::gui::app::{GuiApp, GuiSection, LOG_PLACEHOLDER};
use crate::gui::async_job::AsyncJob;
use crate::gui::notifications::NotificationEntry;
use crate::utils::format_inr;
use anyhow::anyhow;
use eframe::egui::{self, RichText};
use egui_plot::{Line, Plot, PlotPoints};

/// Monthly revenue to date, as reported by the finance import.
const REVENUE_SERIES: [(&str, f64); 8] = [
    ("Jan", 650_000.0),
    ("Feb", 720_000.0),
    ("Mar", 680_000.0),
    ("Apr", 750_000.0),
    ("May", 820_000.0),
    ("Jun", 790_000.0),
    ("Jul", 850_000.0),
    ("Aug", 847_392.0),
];

impl GuiApp {
    /// Main dashboard view
    pub(crate) fn view_dashboard(&mut self, ui: &mut egui::Ui) {
        // Auto-load the activity log on first visit to the Dashboard
        if self.log_view.content == LOG_PLACEHOLDER && self.log_view.job.is_none() {
            self.refresh_logs();
        }

        self.render_section_header(ui, "[H]", "EXECUTIVE DASHBOARD");
        ui.add_space(self.theme.spacing_md);

        self.render_feed_status_panel(ui);
        ui.add_space(self.theme.spacing_md);

        self.render_revenue_panel(ui);
        ui.add_space(self.theme.spacing_md);

        self.render_quick_actions(ui);
        ui.add_space(self.theme.spacing_lg);

        self.render_dashboard_logs(ui);
        ui.add_space(self.theme.spacing_lg);

        self.render_about_panel(ui);
    }

    /// Render a consistent section header
    pub(crate) fn render_section_header(&self, ui: &mut egui::Ui, icon: &str, title: &str) {
        ui.label(
            RichText::new(format!("{} {}", icon, title))
                .size(24.0)
                .strong()
                .color(self.theme.text_primary),
        );
        ui.label(RichText::new("─".repeat(48)).size(12.0).color(self.theme.surface_active));
    }

    fn render_feed_status_panel(&mut self, ui: &mut egui::Ui) {
        // Poll the latency check job if running
        if let Some(job) = &mut self.feed_status_job {
            if let Some(result) = job.poll() {
                match result {
                    Ok(latency) => {
                        self.feed_latency_ms = Some(latency);
                    }
                    Err(_) => {
                        self.feed_latency_ms = None;
                    }
                }
                self.feed_status_job = None;
            }
        }

        let theme = self.theme;
        let endpoint = match self.effective_feed_url() {
            Ok(url) => url.to_string(),
            Err(_) => "(invalid endpoint override)".to_string(),
        };
        let account = self.config.account_name.clone();
        let cadence = format!("every {}s", self.user_settings.poll_interval_secs());
        let is_checking = self.feed_status_job.is_some();
        let latency = self.feed_latency_ms;

        let mut check_clicked = false;
        let mut copy_endpoint = false;
        let mut go_to_settings = false;

        theme.frame_panel().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("[@] Feed Status")
                        .size(16.0)
                        .strong()
                        .color(theme.text_primary),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add_enabled(
                            !is_checking,
                            egui::Button::new(if is_checking { "[..]" } else { "[R] Check" }).small(),
                        )
                        .on_hover_text("Check the transactions endpoint")
                        .clicked()
                    {
                        check_clicked = true;
                    }

                    if is_checking {
                        ui.label(RichText::new("Checking...").small().color(theme.warning));
                    } else if let Some(latency) = latency {
                        let (status_color, status_text) = if latency < 200 {
                            (theme.success, format!("● {}ms", latency))
                        } else if latency < 1000 {
                            (theme.warning, format!("● {}ms", latency))
                        } else {
                            (theme.error, format!("● {}ms", latency))
                        };
                        ui.label(RichText::new(status_text).small().color(status_color));
                    }
                });
            });
            ui.add_space(theme.spacing_sm);

            egui::Grid::new("feed_status_grid")
                .num_columns(2)
                .spacing([theme.spacing_md, theme.spacing_xs])
                .show(ui, |ui| {
                    ui.label(RichText::new("Endpoint:").color(theme.text_secondary));
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&endpoint).small().color(theme.primary));
                        if ui
                            .add(egui::Button::new("[C]").small())
                            .on_hover_text("Copy endpoint URL")
                            .clicked()
                        {
                            copy_endpoint = true;
                        }
                    });
                    ui.end_row();

                    ui.label(RichText::new("Account:").color(theme.text_secondary));
                    ui.label(RichText::new(&account).strong().color(theme.primary));
                    ui.end_row();

                    ui.label(RichText::new("Refresh cadence:").color(theme.text_secondary));
                    ui.label(RichText::new(&cadence).color(theme.primary));
                    ui.end_row();
                });

            ui.add_space(theme.spacing_sm);
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Need to change the endpoint or cadence?")
                        .small()
                        .color(theme.text_secondary),
                );
                if ui
                    .link(RichText::new("Go to Settings").small().color(theme.primary))
                    .clicked()
                {
                    go_to_settings = true;
                }
            });
        });

        if check_clicked {
            self.start_feed_status_check();
        }
        if copy_endpoint {
            ui.output_mut(|o| o.copied_text = endpoint);
        }
        if go_to_settings {
            self.previous_section = self.section;
            self.section = GuiSection::Settings;
        }
    }

    pub(crate) fn start_feed_status_check(&mut self) {
        if self.feed_status_job.is_some() {
            return;
        }
        let client = self
            .effective_feed_url()
            .and_then(|url| crate::feed::FeedClient::new(url).map_err(|e| e.to_string()));
        match client {
            Ok(client) => {
                self.feed_status_job = Some(AsyncJob::spawn(move || async move {
                    let start = std::time::Instant::now();
                    client
                        .fetch_snapshot()
                        .await
                        .map_err(|e| anyhow!("endpoint check failed: {}", e))?;
                    Ok(start.elapsed().as_millis() as u64)
                }));
            }
            Err(e) => {
                self.notify(NotificationEntry::error(format!("Feed check failed: {}", e)));
            }
        }
    }

    fn render_revenue_panel(&mut self, ui: &mut egui::Ui) {
        let theme = self.theme;
        theme.frame_panel().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("[~] Monthly Revenue")
                        .size(16.0)
                        .strong()
                        .color(theme.text_primary),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let latest = REVENUE_SERIES[REVENUE_SERIES.len() - 1];
                    ui.label(
                        RichText::new(format!("{}: {}", latest.0, format_inr(latest.1)))
                            .strong()
                            .color(theme.success),
                    );
                });
            });
            ui.add_space(theme.spacing_sm);

            // Metric tiles derived from the series.
            let ytd: f64 = REVENUE_SERIES.iter().map(|(_, v)| v).sum();
            let best = REVENUE_SERIES
                .iter()
                .fold(REVENUE_SERIES[0], |best, &entry| {
                    if entry.1 > best.1 {
                        entry
                    } else {
                        best
                    }
                });
            ui.columns(3, |columns| {
                metric_tile(&mut columns[0], &theme, "This Month", &format_inr(REVENUE_SERIES[REVENUE_SERIES.len() - 1].1));
                metric_tile(&mut columns[1], &theme, "Year to Date", &format_inr(ytd));
                metric_tile(
                    &mut columns[2],
                    &theme,
                    "Best Month",
                    &format!("{} ({})", best.0, format_inr(best.1)),
                );
            });
            ui.add_space(theme.spacing_sm);

            let points: PlotPoints = REVENUE_SERIES
                .iter()
                .enumerate()
                .map(|(i, (_, value))| [i as f64, *value])
                .collect();
            let line = Line::new(points).color(theme.primary).width(3.0).name("Revenue");

            Plot::new("revenue_chart")
                .height(220.0)
                .allow_drag(false)
                .allow_zoom(false)
                .allow_scroll(false)
                .show_x(false)
                .show(ui, |plot_ui| {
                    plot_ui.line(line);
                });

            // Month labels under the chart, in series order.
            ui.horizontal(|ui| {
                for (month, _) in REVENUE_SERIES.iter() {
                    ui.label(RichText::new(*month).small().color(theme.text_secondary));
                    ui.add_space(ui.available_width() / REVENUE_SERIES.len() as f32 * 0.4);
                }
            });
        });
    }

    fn render_quick_actions(&mut self, ui: &mut egui::Ui) {
        let theme = self.theme;
        let mut pending: Option<&'static str> = None;
        let mut open_monitor = false;

        theme.frame_panel().show(ui, |ui| {
            ui.label(
                RichText::new("Quick Actions")
                    .size(16.0)
                    .strong()
                    .color(theme.text_primary),
            );
            ui.add_space(theme.spacing_sm);
            ui.horizontal(|ui| {
                if ui.add(theme.button_primary("Open Monitor")).clicked() {
                    open_monitor = true;
                }
                if ui.add(theme.button_secondary("Generate Report")).clicked() {
                    pending = Some("Generate Report");
                }
                if ui.add(theme.button_secondary("Schedule Review")).clicked() {
                    pending = Some("Schedule Review");
                }
            });
        });

        if open_monitor {
            self.previous_section = self.section;
            self.section = GuiSection::Transactions;
        }
        if let Some(action) = pending {
            self.notify(NotificationEntry::new(format!("{} - Feature coming soon!", action)));
        }
    }

    pub(crate) fn refresh_logs(&mut self) {
        if self.log_view.job.is_none() {
            self.log_view.scroll_to_bottom = true; // Scroll to bottom after refresh
            self.log_view.job = Some(AsyncJob::spawn(|| async move {
                match crate::activity_log::read_log() {
                    Ok(content) if content.is_empty() => Ok("No activity recorded yet.".to_string()),
                    Ok(content) => Ok(content),
                    Err(e) => Err(anyhow!("Failed to read activity log: {}", e)),
                }
            }));
        }
    }

    fn render_dashboard_logs(&mut self, ui: &mut egui::Ui) {
        let theme = self.theme;
        let mut refresh_clicked = false;

        ui.horizontal(|ui| {
            ui.heading(RichText::new("[#] Activity Log").size(18.0));
            ui.add_space(theme.spacing_sm);
            let is_loading = self.log_view.job.is_some();
            if ui
                .add_enabled(
                    !is_loading,
                    egui::Button::new(if is_loading { "[..]" } else { "[R] Refresh" }).small(),
                )
                .clicked()
            {
                refresh_clicked = true;
            }
        });
        ui.add_space(theme.spacing_xs);

        if let Some(err) = &self.log_view.error {
            ui.colored_label(theme.error, err);
        }

        let scroll_to_bottom = self.log_view.scroll_to_bottom;
        theme.frame_surface().show(ui, |ui| {
            ui.set_min_height(220.0);
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .max_height(320.0)
                .show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.monospace(&self.log_view.content);

                    if scroll_to_bottom {
                        let bottom = ui.label("");
                        bottom.scroll_to_me(Some(egui::Align::BOTTOM));
                    }
                });
        });

        if self.log_view.scroll_to_bottom {
            self.log_view.scroll_to_bottom = false;
        }
        if refresh_clicked {
            self.refresh_logs();
        }
    }

    fn render_about_panel(&mut self, ui: &mut egui::Ui) {
        let theme = self.theme;
        theme.frame_panel().show(ui, |ui| {
            ui.label(
                RichText::new("About Orbisdash")
                    .size(16.0)
                    .strong()
                    .color(theme.text_primary),
            );
            ui.add_space(theme.spacing_sm);

            egui::Grid::new("about_grid")
                .num_columns(2)
                .spacing([theme.spacing_md, theme.spacing_xs])
                .show(ui, |ui| {
                    ui.label(RichText::new("Version:").color(theme.text_secondary));
                    ui.label(
                        RichText::new(env!("CARGO_PKG_VERSION"))
                            .strong()
                            .color(theme.primary),
                    );
                    ui.end_row();

                    ui.label(RichText::new("Settings file:").color(theme.text_secondary));
                    let settings_path = crate::user_settings::UserSettings::settings_path_display();
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

                    ui.label(RichText::new("Log file:").color(theme.text_secondary));
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
        });
    }
}

fn metric_tile(
    ui: &mut egui::Ui,
    theme: &crate::gui::theme::AppTheme,
    label: &str,
    value: &str,
) {
    ui.vertical(|ui| {
        ui.label(RichText::new(label).small().color(theme.text_secondary));
        ui.label(RichText::new(value).size(17.0).strong().color(theme.text_primary));
    });
}
