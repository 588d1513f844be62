//! Library crate root re-exporting the core and UI modules.

pub mod cli;
pub mod discovery;
pub mod launcher;
pub mod registry;
pub mod store;
pub mod support;
pub mod ui;
