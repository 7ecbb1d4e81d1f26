//! Mosaiq TUI - a terminal upload trigger for the mosaiq image service
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod config;
pub mod logging;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod upload;
