//! Widget components for the GUI
//!
//! This module contains reusable UI widgets that can be embedded in views.
//!
//! ## Available Widgets
//!
//! - `TransactionTable` - Renders the polled transaction list region
//! - `AlertList` - Renders the active alert region

mod feed_tables;

pub use feed_tables::{
    AlertList, TransactionTable, NO_ALERTS_PLACEHOLDER, NO_TRANSACTIONS_PLACEHOLDER,
};
