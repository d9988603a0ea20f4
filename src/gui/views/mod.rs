//! View modules for the GUI
//!
//! This module organizes the different view implementations of the application.
//! Each submodule contains the rendering logic for a specific view/screen.
//!
//! ## Module Structure
//!
//! - `dashboard` - Executive overview: feed status, revenue chart, activity log
//! - `transactions` - Live transaction monitor fed by the poller
//! - `settings` - Appearance, monitor cadence, and storage settings
//!
//! ## Implementation Notes
//!
//! Each view module attaches its rendering methods to `GuiApp`; they are
//! called from the main `App::update` method in `app.rs`.

pub mod dashboard;
pub mod settings;
pub mod transactions;
