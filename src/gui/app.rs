//! Main GUI application module
//!
//! Contains the GuiApp struct, its state types, and the frame update loop:
//! top bar (clock, notification bell, profile menu), collapsible sidebar
//! navigation, and the per-frame draining of background work onto the
//! interaction thread.

use crate::{
    activity_log,
    config::Config,
    feed::{FeedClient, FeedSnapshot, TransactionRecord},
    poller::{FeedPoller, FeedUpdate},
    user_settings::{ThemeChoice, UserSettings},
    utils::truncate_message,
};
use anyhow::{anyhow, Result};
use chrono::Local;
use eframe::{egui, egui::RichText, App, Frame, NativeOptions};
use std::collections::VecDeque;
use std::path::Path;
use std::time::{Duration, Instant};
use url::Url;

use super::async_job::AsyncJob;
use super::helpers::format_clock;
use super::notifications::{mark_all_read, push_notification, unread_count, NotificationEntry};
use super::theme::{configure_style, AppTheme};

/// Initial content of the activity log panel before the first load.
pub(crate) const LOG_PLACEHOLDER: &str = "No activity yet. Session events will appear here.";

/// GUI section enum for navigation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuiSection {
    Dashboard,
    Transactions,
    Settings,
}

/// State of the polled transaction feed. The snapshot is the single source
/// for all three monitor regions, so replacing it replaces them atomically.
pub(crate) struct FeedState {
    pub(crate) snapshot: Option<FeedSnapshot>,
    pub(crate) poller: Option<FeedPoller>,
    /// Set when the user paused the monitor; blocks the view's auto-start.
    pub(crate) paused: bool,
    pub(crate) last_refresh: Option<chrono::DateTime<Local>>,
    pub(crate) consecutive_failures: u32,
}

impl Default for FeedState {
    fn default() -> Self {
        Self {
            snapshot: None,
            poller: None,
            paused: false,
            last_refresh: None,
            consecutive_failures: 0,
        }
    }
}

pub(crate) struct LogViewState {
    pub(crate) content: String,
    pub(crate) job: Option<AsyncJob<String>>,
    pub(crate) error: Option<String>,
    /// Flag to scroll to bottom on next render
    pub(crate) scroll_to_bottom: bool,
}

impl Default for LogViewState {
    fn default() -> Self {
        Self {
            content: LOG_PLACEHOLDER.to_string(),
            job: None,
            error: None,
            scroll_to_bottom: true,
        }
    }
}

pub struct GuiApp {
    pub(crate) config: Config,
    pub(crate) user_settings: UserSettings,
    pub(crate) theme: AppTheme,
    pub(crate) section: GuiSection,
    pub(crate) previous_section: GuiSection,
    pub(crate) sidebar_collapsed: bool,
    pub(crate) notifications: VecDeque<NotificationEntry>,
    pub(crate) show_notifications_popup: bool,
    pub(crate) notification_toast_visible: bool,
    pub(crate) notification_toast_close_time: Option<Instant>,
    pub(crate) show_profile_menu: bool,
    pub(crate) confirm_logout: bool,
    pub(crate) feed: FeedState,
    pub(crate) log_view: LogViewState,
    // Feed endpoint status indicator
    pub(crate) feed_latency_ms: Option<u64>,
    pub(crate) feed_status_job: Option<AsyncJob<u64>>,
    // Settings page editing state
    pub(crate) settings_pending_interval_secs: u64,
    pub(crate) settings_pending_feed_url: String,
    pub(crate) settings_feed_url_error: Option<String>,
}

impl GuiApp {
    fn new(config: Config, ctx: &egui::Context) -> Self {
        // Load user settings and derive chrome state from them
        let user_settings = UserSettings::load();
        let theme = AppTheme::from_choice(user_settings.theme);
        configure_style(ctx, &theme);

        let sidebar_collapsed = user_settings.sidebar_collapsed;
        let settings_pending_interval_secs = user_settings.poll_interval_secs();
        let settings_pending_feed_url = user_settings.feed_url.clone().unwrap_or_default();

        Self {
            config,
            user_settings,
            theme,
            section: GuiSection::Dashboard,
            previous_section: GuiSection::Dashboard,
            sidebar_collapsed,
            notifications: VecDeque::with_capacity(20),
            show_notifications_popup: false,
            notification_toast_visible: false,
            notification_toast_close_time: None,
            show_profile_menu: false,
            confirm_logout: false,
            feed: FeedState::default(),
            log_view: LogViewState::default(),
            feed_latency_ms: None,
            feed_status_job: None,
            settings_pending_interval_secs,
            settings_pending_feed_url,
            settings_feed_url_error: None,
        }
    }

    /// Push a notification and surface it as a toast.
    pub(crate) fn notify(&mut self, entry: NotificationEntry) {
        push_notification(&mut self.notifications, entry);
        self.notification_toast_visible = true;
        self.notification_toast_close_time = Some(Instant::now() + Duration::from_secs(5));
    }

    /// The endpoint the monitor should poll: the saved override when one is
    /// set, the built-in default otherwise.
    pub(crate) fn effective_feed_url(&self) -> Result<Url, String> {
        match &self.user_settings.feed_url {
            Some(raw) => Url::parse(raw).map_err(|e| e.to_string()),
            None => Ok(self.config.feed_url.clone()),
        }
    }

    /// Start the transaction feed refresher if it is not already running.
    pub(crate) fn start_feed_polling(&mut self) {
        if self.feed.poller.is_some() {
            return;
        }
        let url = match self.effective_feed_url() {
            Ok(url) => url,
            Err(e) => {
                self.notify(NotificationEntry::error(format!("Invalid feed endpoint: {}", e)));
                return;
            }
        };
        let client = match FeedClient::new(url) {
            Ok(client) => client,
            Err(e) => {
                self.notify(NotificationEntry::error(format!(
                    "Could not build the feed client: {}",
                    e
                )));
                return;
            }
        };

        let interval = Duration::from_secs(self.user_settings.poll_interval_secs());
        let fetch = move || {
            let client = client.clone();
            async move { client.fetch_snapshot().await }
        };
        self.feed.poller = Some(FeedPoller::start(fetch, interval));
        self.feed.paused = false;
        self.feed.consecutive_failures = 0;
        let _ = activity_log::append_log(
            "polling_started",
            format!("interval={}s", interval.as_secs()),
        );
        tracing::info!("feed polling started (every {}s)", interval.as_secs());
    }

    /// Pause the monitor. The last rendered snapshot stays on screen.
    pub(crate) fn stop_feed_polling(&mut self) {
        if let Some(poller) = &mut self.feed.poller {
            poller.stop();
        }
        self.feed.poller = None;
        self.feed.paused = true;
        let _ = activity_log::append_log("polling_paused", "");
        tracing::info!("feed polling paused");
    }

    /// Restart the poller with current settings, preserving a user pause.
    pub(crate) fn restart_feed_polling(&mut self) {
        if let Some(poller) = &mut self.feed.poller {
            poller.stop();
        }
        self.feed.poller = None;
        if !self.feed.paused {
            self.start_feed_polling();
        }
    }

    /// Apply and persist a theme change.
    pub(crate) fn set_theme(&mut self, choice: ThemeChoice, ctx: &egui::Context) {
        if self.user_settings.theme == choice {
            return;
        }
        self.user_settings.theme = choice;
        self.theme = AppTheme::from_choice(choice);
        configure_style(ctx, &self.theme);
        if let Err(e) = self.user_settings.save() {
            tracing::warn!("Failed to save settings: {}", e);
        }
        self.notify(NotificationEntry::new(format!(
            "Switched to {} theme",
            choice.label().to_lowercase()
        )));
    }

    /// Flip the sidebar and persist the new state.
    pub(crate) fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
        self.user_settings.sidebar_collapsed = self.sidebar_collapsed;
        if let Err(e) = self.user_settings.save() {
            tracing::warn!("Failed to save settings: {}", e);
        }
    }

    /// Export the currently rendered transaction list to a CSV file chosen
    /// by the user.
    pub(crate) fn export_transactions_csv(&mut self) {
        let transactions = match &self.feed.snapshot {
            Some(snapshot) if !snapshot.transactions.is_empty() => snapshot.transactions.clone(),
            _ => {
                self.notify(NotificationEntry::new("Nothing to export yet."));
                return;
            }
        };

        let Some(path) = rfd::FileDialog::new()
            .set_file_name("transactions.csv")
            .add_filter("CSV", &["csv"])
            .save_file()
        else {
            return;
        };

        match write_transactions_csv(&path, &transactions) {
            Ok(count) => {
                let _ = activity_log::append_log(
                    "export_csv",
                    format!("{} rows -> {}", count, path.display()),
                );
                self.notify(NotificationEntry::success(format!(
                    "Exported {} transactions.",
                    count
                )));
            }
            Err(e) => {
                self.notify(NotificationEntry::error(format!("Export failed: {}", e)));
            }
        }
    }

    /// Drain background work onto the interaction thread. All feed region
    /// replacement happens here, in update delivery order, so overlapping
    /// fetches resolve last-completed-wins.
    fn poll_jobs(&mut self) {
        let mut drained = Vec::new();
        if let Some(poller) = &mut self.feed.poller {
            while let Some(update) = poller.try_update() {
                drained.push(update);
            }
        }
        for update in drained {
            match update {
                FeedUpdate::Snapshot(snapshot) => {
                    self.feed.snapshot = Some(snapshot);
                    self.feed.last_refresh = Some(Local::now());
                    self.feed.consecutive_failures = 0;
                }
                FeedUpdate::CycleFailed(_) => {
                    // Already logged by the poller. The failure only ages
                    // the staleness label; the prior render stands.
                    self.feed.consecutive_failures += 1;
                }
            }
        }

        if let Some(job) = &mut self.log_view.job {
            if let Some(res) = job.poll() {
                match res {
                    Ok(content) => {
                        self.log_view.content = content;
                        self.log_view.error = None;
                        self.log_view.scroll_to_bottom = true;
                    }
                    Err(e) => {
                        self.log_view.error = Some(e.to_string());
                    }
                }
                self.log_view.job = None;
            }
        }
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        let theme = self.theme;
        let unread = unread_count(&self.notifications);
        let mut toggle_theme = false;
        let mut toggle_bell = false;
        let mut toggle_profile = false;

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading(RichText::new("ORBIS").size(22.0).strong().color(theme.primary));
                ui.label(RichText::new("Orbisdash").size(14.0).color(theme.text_secondary));
                ui.label(
                    RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                        .size(11.0)
                        .color(theme.text_secondary),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    // Profile button
                    if ui
                        .add(egui::Button::new(RichText::new("[P] Profile").size(12.0)).small())
                        .clicked()
                    {
                        toggle_profile = true;
                    }

                    // Notification bell with unread badge
                    let bell_label = if unread > 0 {
                        format!("[!] {}", unread)
                    } else {
                        "[!]".to_string()
                    };
                    let bell_color = if unread > 0 { theme.warning } else { theme.text_secondary };
                    if ui
                        .add(
                            egui::Button::new(RichText::new(bell_label).size(12.0).color(bell_color))
                                .small(),
                        )
                        .on_hover_text("Notification history")
                        .clicked()
                    {
                        toggle_bell = true;
                    }

                    // Quick theme toggle
                    let theme_label = match self.user_settings.theme {
                        ThemeChoice::Dark => "[L]",
                        ThemeChoice::Light => "[D]",
                    };
                    if ui
                        .add(egui::Button::new(RichText::new(theme_label).size(12.0)).small())
                        .on_hover_text("Toggle dark/light theme")
                        .clicked()
                    {
                        toggle_theme = true;
                    }

                    // Live clock
                    ui.label(
                        RichText::new(format!("• {}", format_clock(Local::now())))
                            .monospace()
                            .color(theme.text_secondary),
                    );
                });
            });
            ui.add_space(6.0);
        });

        if toggle_theme {
            let next = match self.user_settings.theme {
                ThemeChoice::Dark => ThemeChoice::Light,
                ThemeChoice::Light => ThemeChoice::Dark,
            };
            self.set_theme(next, ctx);
        }
        if toggle_bell {
            self.show_notifications_popup = !self.show_notifications_popup;
            if self.show_notifications_popup {
                self.show_profile_menu = false;
            }
        }
        if toggle_profile {
            self.show_profile_menu = !self.show_profile_menu;
            if self.show_profile_menu {
                self.show_notifications_popup = false;
            }
        }
    }

    fn render_profile_menu(&mut self, ctx: &egui::Context) {
        if !self.show_profile_menu {
            return;
        }
        let theme = self.theme;
        let account = self.config.account_name.clone();
        let mut go_dashboard = false;
        let mut sign_out = false;

        egui::Window::new("profile_menu")
            .title_bar(false)
            .resizable(false)
            .anchor(egui::Align2::RIGHT_TOP, [-10.0, 44.0])
            .show(ctx, |ui| {
                ui.label(RichText::new(&account).strong().color(theme.text_primary));
                ui.label(RichText::new("Operations monitor").small().color(theme.text_secondary));
                ui.separator();
                if ui.button("Activity log").clicked() {
                    go_dashboard = true;
                }
                if ui
                    .button(RichText::new("Sign out").color(theme.error))
                    .clicked()
                {
                    sign_out = true;
                }
            });

        if go_dashboard {
            self.previous_section = self.section;
            self.section = GuiSection::Dashboard;
            self.show_profile_menu = false;
        }
        if sign_out {
            self.confirm_logout = true;
            self.show_profile_menu = false;
        }
    }

    fn render_logout_confirm(&mut self, ctx: &egui::Context) {
        if !self.confirm_logout {
            return;
        }
        let theme = self.theme;
        let mut cancel = false;
        let mut confirmed = false;

        egui::Window::new("Sign out")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Are you sure you want to sign out?");
                ui.add_space(theme.spacing_sm);
                ui.horizontal(|ui| {
                    if ui.add(theme.button_secondary("Cancel")).clicked() {
                        cancel = true;
                    }
                    if ui.add(theme.button_primary("Sign out")).clicked() {
                        confirmed = true;
                    }
                });
            });

        if cancel {
            self.confirm_logout = false;
        }
        if confirmed {
            self.confirm_logout = false;
            self.perform_logout(ctx);
        }
    }

    /// Open the logout URL in the system browser and end the session.
    fn perform_logout(&mut self, ctx: &egui::Context) {
        let url = self.config.logout_url.to_string();
        let _ = activity_log::append_log("logout", format!("redirect={}", url));
        if let Err(e) = open::that(&url) {
            self.notify(NotificationEntry::error(format!(
                "Failed to open logout URL: {}",
                e
            )));
            return;
        }
        if let Some(poller) = &mut self.feed.poller {
            poller.stop();
        }
        self.feed.poller = None;
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }

    fn render_notification_overlay(&mut self, ctx: &egui::Context) {
        // Auto-close the toast after its timeout
        if let Some(close_time) = self.notification_toast_close_time {
            if Instant::now() >= close_time {
                self.notification_toast_visible = false;
                self.notification_toast_close_time = None;
            }
        }

        if self.notification_toast_visible {
            if let Some(latest) = self.notifications.back() {
                let theme = self.theme;
                let icon = latest.kind.icon();
                let message = truncate_message(&latest.message, 48).into_owned();
                egui::Area::new(egui::Id::new("notification_toast"))
                    .anchor(egui::Align2::RIGHT_TOP, [-10.0, 48.0])
                    .order(egui::Order::Foreground)
                    .show(ctx, |ui| {
                        egui::Frame::none()
                            .fill(theme.surface)
                            .rounding(6.0)
                            .stroke(egui::Stroke::new(1.0, theme.primary))
                            .inner_margin(egui::Margin::symmetric(10.0, 8.0))
                            .show(ui, |ui| {
                                ui.horizontal(|ui| {
                                    ui.label(RichText::new(icon).color(theme.primary));
                                    ui.label(
                                        RichText::new(message)
                                            .size(12.0)
                                            .color(theme.text_primary),
                                    );
                                });
                            });
                    });
            }
        }
    }

    fn render_notification_history(&mut self, ctx: &egui::Context) {
        if !self.show_notifications_popup {
            return;
        }
        let theme = self.theme;
        let mut close_clicked = false;
        let mut clear_clicked = false;
        let mut mark_read_clicked = false;

        egui::Window::new("[!] Notifications")
            .collapsible(false)
            .resizable(true)
            .default_width(420.0)
            .default_height(320.0)
            .anchor(egui::Align2::RIGHT_TOP, [-10.0, 48.0])
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format!(
                            "{} notifications, {} unread",
                            self.notifications.len(),
                            unread_count(&self.notifications)
                        ))
                        .color(theme.text_secondary),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.add(egui::Button::new("Close").small()).clicked() {
                            close_clicked = true;
                        }
                        if ui.add(egui::Button::new("Clear").small()).clicked() {
                            clear_clicked = true;
                        }
                        if ui.add(egui::Button::new("Mark all read").small()).clicked() {
                            mark_read_clicked = true;
                        }
                    });
                });
                ui.separator();

                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .max_height(260.0)
                    .show(ui, |ui| {
                        if self.notifications.is_empty() {
                            ui.label(
                                RichText::new("No notifications yet.").color(theme.text_secondary),
                            );
                        } else {
                            for entry in self.notifications.iter().rev() {
                                ui.horizontal(|ui| {
                                    ui.label(
                                        RichText::new(entry.kind.icon())
                                            .size(11.0)
                                            .color(theme.primary),
                                    );
                                    let text_color = if entry.read {
                                        theme.text_secondary
                                    } else {
                                        theme.text_primary
                                    };
                                    ui.label(
                                        RichText::new(&entry.message).size(12.0).color(text_color),
                                    );
                                    ui.with_layout(
                                        egui::Layout::right_to_left(egui::Align::Center),
                                        |ui| {
                                            ui.label(
                                                RichText::new(entry.time_ago())
                                                    .size(11.0)
                                                    .color(theme.text_secondary),
                                            );
                                        },
                                    );
                                });
                                ui.add_space(3.0);
                            }
                        }
                    });
            });

        if mark_read_clicked {
            mark_all_read(&mut self.notifications);
        }
        if clear_clicked {
            self.notifications.clear();
        }
        if close_clicked {
            self.show_notifications_popup = false;
        }
    }

    fn render_sidebar(&mut self, ctx: &egui::Context) {
        let theme = self.theme;
        let collapsed = self.sidebar_collapsed;
        let width = if collapsed { 56.0 } else { 180.0 };

        let mut selected_section = None;
        let mut toggle_collapse = false;

        egui::SidePanel::left("nav")
            .resizable(false)
            .exact_width(width)
            .frame(
                egui::Frame::none()
                    .fill(theme.surface)
                    .stroke(egui::Stroke::new(1.0, theme.surface_active)),
            )
            .show(ctx, |ui| {
                ui.add_space(theme.spacing_md);

                let nav_items = [
                    (GuiSection::Dashboard, "[H]", "Dashboard"),
                    (GuiSection::Transactions, "[$]", "Transactions"),
                    (GuiSection::Settings, "[*]", "Settings"),
                ];

                for (section, icon, label) in nav_items {
                    let selected = self.section == section;
                    ui.horizontal(|ui| {
                        if selected {
                            ui.add_space(2.0);
                            let (rect, _) =
                                ui.allocate_exact_size(egui::vec2(3.0, 20.0), egui::Sense::hover());
                            ui.painter().rect_filled(rect, 0.0, theme.primary);
                            ui.add_space(4.0);
                        } else {
                            ui.add_space(9.0);
                        }

                        let text = if collapsed {
                            icon.to_string()
                        } else {
                            format!("{} {}", icon, label)
                        };
                        let text_color = if selected { theme.text_primary } else { theme.text_secondary };
                        let response = ui.add(
                            egui::Button::new(RichText::new(text).size(13.0).color(text_color))
                                .fill(egui::Color32::TRANSPARENT)
                                .stroke(egui::Stroke::NONE),
                        );
                        if response.on_hover_text(label).clicked() {
                            selected_section = Some(section);
                        }
                    });
                    ui.add_space(theme.spacing_xs);
                }

                ui.add_space(theme.spacing_lg);
                ui.separator();
                ui.add_space(theme.spacing_xs);

                let toggle_text = if collapsed { ">>" } else { "<< Collapse" };
                ui.horizontal(|ui| {
                    ui.add_space(9.0);
                    if ui
                        .add(
                            egui::Button::new(
                                RichText::new(toggle_text).size(12.0).color(theme.text_secondary),
                            )
                            .fill(egui::Color32::TRANSPARENT)
                            .stroke(egui::Stroke::NONE),
                        )
                        .on_hover_text(if collapsed { "Expand sidebar" } else { "Collapse sidebar" })
                        .clicked()
                    {
                        toggle_collapse = true;
                    }
                });
            });

        if let Some(section) = selected_section {
            self.previous_section = self.section;
            self.section = section;
            // Auto-refresh the activity log when entering the Dashboard
            if section == GuiSection::Dashboard && self.previous_section != GuiSection::Dashboard {
                self.refresh_logs();
                self.log_view.scroll_to_bottom = true;
            }
        }
        if toggle_collapse {
            self.toggle_sidebar();
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.poll_jobs();

        self.render_top_bar(ctx);
        self.render_sidebar(ctx);
        self.render_profile_menu(ctx);
        self.render_logout_confirm(ctx);
        self.render_notification_overlay(ctx);
        self.render_notification_history(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(self.theme.spacing_md);
            egui::ScrollArea::vertical().show(ui, |ui| match self.section {
                GuiSection::Dashboard => self.view_dashboard(ui),
                GuiSection::Transactions => self.view_transactions(ui),
                GuiSection::Settings => self.view_settings(ui),
            });
        });

        // Keeps the clock, toast timeout, and feed updates moving even when
        // the user is idle.
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

fn write_transactions_csv(path: &Path, transactions: &[TransactionRecord]) -> Result<usize> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| anyhow!("could not create {}: {}", path.display(), e))?;
    writer.write_record(["sender", "receiver", "amount", "time_ago", "is_anomaly"])?;
    for tx in transactions {
        let amount = format!("{:.2}", tx.amount);
        writer.write_record([
            tx.sender.as_str(),
            tx.receiver.as_str(),
            amount.as_str(),
            tx.time_ago.as_str(),
            if tx.is_anomaly { "true" } else { "false" },
        ])?;
    }
    writer.flush()?;
    Ok(transactions.len())
}

pub fn launch(config: Config) -> Result<()> {
    let app_creator = move |cc: &eframe::CreationContext<'_>| {
        Box::new(GuiApp::new(config.clone(), &cc.egui_ctx)) as Box<dyn App>
    };

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([1100.0, 720.0])
        .with_min_inner_size([760.0, 520.0]);

    let native_options = NativeOptions {
        viewport,
        persist_window: true,
        ..Default::default()
    };

    eframe::run_native(
        "Orbisdash - ORBIS Financial Monitoring",
        native_options,
        Box::new(app_creator),
    )
    .map_err(|e| anyhow!("Failed to start GUI: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_export_writes_all_rows() {
        let dir = std::env::temp_dir().join("orbisdash_csv_test");
        let _ = std::fs::create_dir_all(&dir);
        let path = dir.join("transactions.csv");

        let transactions = vec![
            TransactionRecord {
                sender: "Redwood Analytics".to_string(),
                receiver: "TechCorp Solutions".to_string(),
                amount: 18250.75,
                time_ago: "2 minutes ago".to_string(),
                is_anomaly: false,
            },
            TransactionRecord {
                sender: "TechCorp Solutions".to_string(),
                receiver: "Nexora Digital".to_string(),
                amount: 420000.0,
                time_ago: "5 minutes ago".to_string(),
                is_anomaly: true,
            },
        ];

        let count = write_transactions_csv(&path, &transactions).unwrap();
        assert_eq!(count, 2);

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next(),
            Some("sender,receiver,amount,time_ago,is_anomaly")
        );
        assert_eq!(
            lines.next(),
            Some("Redwood Analytics,TechCorp Solutions,18250.75,2 minutes ago,false")
        );
        assert_eq!(
            lines.next(),
            Some("TechCorp Solutions,Nexora Digital,420000.00,5 minutes ago,true")
        );

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_feed_state_defaults() {
        let state = FeedState::default();
        assert!(state.snapshot.is_none());
        assert!(state.poller.is_none());
        assert!(!state.paused);
        assert_eq!(state.consecutive_failures, 0);
    }
}
