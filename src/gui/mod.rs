//! GUI module for the Orbisdash application
//!
//! This module provides the graphical user interface built with egui/eframe.
//!
//! ## Module Structure
//!
//! - `app` - Main GuiApp struct, state types, and core application logic
//! - `async_job` - Generic async job polling for background tasks
//! - `theme` - Centralized theme and styling system (AppTheme, dark/light)
//! - `helpers` - Severity/direction glyphs, clock and staleness formatting
//! - `notifications` - Notification entries with unread tracking
//! - `views` - View rendering functions (dashboard, transactions, settings)
//! - `widgets` - Reusable UI widgets (TransactionTable, AlertList)
//!
//! ## Usage
//!
//! ```no_run
//! use orbisdash::config::Config;
//! use orbisdash::gui;
//!
//! let config = Config::default();
//! gui::launch(config).expect("Failed to launch GUI");
//! ```

mod app;
pub mod async_job;
pub mod helpers;
pub mod notifications;
pub mod theme;
pub mod views;
pub mod widgets;

// Re-export main public API
pub use app::{launch, GuiApp, GuiSection};

// Re-export commonly used types from submodules for convenience
pub use async_job::AsyncJob;
pub use notifications::{NotificationEntry, NotificationKind};
pub use theme::{configure_style, AppTheme};
pub use widgets::{AlertList, TransactionTable};
