//! Transaction monitor view
//!
//! Renders the three polled regions: summary statistics, the transaction
//! list, and the alert list. All three are replaced together whenever the
//! poller delivers a snapshot; a failed cycle leaves the previous render
//! standing and only ages the staleness label.

use crate::gui::app::GuiApp;
use crate::gui::helpers::staleness_label;
use crate::gui::widgets::{AlertList, TransactionTable};
use crate::utils::{format_inr, format_percent};
use eframe::egui::{self, RichText};

impl GuiApp {
    /// Transaction monitoring view
    pub(crate) fn view_transactions(&mut self, ui: &mut egui::Ui) {
        // The monitor starts polling the first time it is shown, unless the
        // user paused it explicitly.
        if self.feed.poller.is_none() && !self.feed.paused {
            self.start_feed_polling();
        }

        self.render_section_header(ui, "[$]", "TRANSACTION MONITOR");
        ui.add_space(self.theme.spacing_md);

        self.render_monitor_controls(ui);
        ui.add_space(self.theme.spacing_md);

        self.render_statistics_panel(ui);
        ui.add_space(self.theme.spacing_md);

        self.render_transaction_panel(ui);
        ui.add_space(self.theme.spacing_md);

        self.render_alert_panel(ui);
    }

    fn render_monitor_controls(&mut self, ui: &mut egui::Ui) {
        let theme = self.theme;
        let paused = self.feed.paused;
        let interval_secs = self.user_settings.poll_interval_secs();
        let staleness = staleness_label(self.feed.last_refresh);

        let mut toggle_pause = false;
        let mut export_clicked = false;

        theme.frame_panel().show(ui, |ui| {
            ui.horizontal(|ui| {
                if paused {
                    ui.label(RichText::new("●").color(theme.warning));
                    ui.label(RichText::new("Paused").strong().color(theme.text_primary));
                } else {
                    ui.label(RichText::new("●").color(theme.success));
                    ui.label(
                        RichText::new(format!("Live · every {}s", interval_secs))
                            .strong()
                            .color(theme.text_primary),
                    );
                }
                ui.label(RichText::new(staleness).small().color(theme.text_secondary));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add(theme.button_secondary("[>] Export CSV"))
                        .on_hover_text("Save the current transaction list to a CSV file")
                        .clicked()
                    {
                        export_clicked = true;
                    }
                    let pause_label = if paused { "[>] Resume" } else { "[||] Pause" };
                    if ui.add(theme.button_primary(pause_label)).clicked() {
                        toggle_pause = true;
                    }
                });
            });
        });

        if toggle_pause {
            if paused {
                self.start_feed_polling();
            } else {
                self.stop_feed_polling();
            }
        }
        if export_clicked {
            self.export_transactions_csv();
        }
    }

    fn render_statistics_panel(&mut self, ui: &mut egui::Ui) {
        let theme = self.theme;
        let (balance, total, anomalies, share) = match &self.feed.snapshot {
            Some(snapshot) => (
                format_inr(snapshot.account_balance),
                snapshot.total_transactions.to_string(),
                snapshot.anomaly_count.to_string(),
                format_percent(snapshot.anomaly_percentage()),
            ),
            None => ("—".to_string(), "—".to_string(), "—".to_string(), "—".to_string()),
        };

        theme.frame_panel().show(ui, |ui| {
            ui.columns(4, |columns| {
                stat_tile(&mut columns[0], &theme, "Account Balance", &balance, theme.primary);
                stat_tile(
                    &mut columns[1],
                    &theme,
                    "Total Transactions",
                    &total,
                    theme.text_primary,
                );
                stat_tile(&mut columns[2], &theme, "Anomalies", &anomalies, theme.warning);
                stat_tile(&mut columns[3], &theme, "Anomaly Share", &share, theme.warning);
            });
        });
    }

    fn render_transaction_panel(&mut self, ui: &mut egui::Ui) {
        let theme = self.theme;
        theme.frame_panel().show(ui, |ui| {
            ui.label(
                RichText::new("Recent Transactions")
                    .size(16.0)
                    .strong()
                    .color(theme.text_primary),
            );
            ui.add_space(theme.spacing_sm);

            let transactions = self
                .feed
                .snapshot
                .as_ref()
                .map(|s| s.transactions.as_slice())
                .unwrap_or(&[]);
            TransactionTable::new(transactions, &self.config.account_name).show(ui, &theme);
        });
    }

    fn render_alert_panel(&mut self, ui: &mut egui::Ui) {
        let theme = self.theme;
        theme.frame_panel().show(ui, |ui| {
            ui.label(
                RichText::new("Anomaly Alerts")
                    .size(16.0)
                    .strong()
                    .color(theme.text_primary),
            );
            ui.add_space(theme.spacing_sm);

            let alerts = self
                .feed
                .snapshot
                .as_ref()
                .map(|s| s.alerts.as_slice())
                .unwrap_or(&[]);
            AlertList::new(alerts).show(ui, &theme);
        });
    }
}

fn stat_tile(
    ui: &mut egui::Ui,
    theme: &crate::gui::theme::AppTheme,
    label: &str,
    value: &str,
    value_color: egui::Color32,
) {
    ui.vertical(|ui| {
        ui.label(RichText::new(label).small().color(theme.text_secondary));
        ui.label(RichText::new(value).size(18.0).strong().color(value_color));
    });
}
