//! Orbisdash - desktop dashboard for live transaction monitoring.
//!
//! The core of the application is the transaction feed refresher
//! ([`poller::FeedPoller`]), which polls the monitoring backend on a fixed
//! cadence and delivers snapshots to the GUI thread. Everything else is
//! presentation: an executive dashboard, the transaction monitor, and a
//! settings screen, all rendered with egui/eframe.

pub mod activity_log;
pub mod config;
pub mod feed;
pub mod gui;
pub mod poller;
pub mod user_settings;
pub mod utils;
