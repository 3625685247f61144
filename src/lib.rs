//! WB Launch Constructor - launch form for the DL Workbench
//!
//! This library provides the form controller behind the "how do you want
//! to launch the Workbench" wizard:
//! - A fixed set of radio fields plus one multi-select device list
//! - Typed reads, writes and device toggling with observer callbacks
//! - Form validity tracking
//! - Saved selections in TOML
//! - An interactive Ratatui wizard on top of the controller

// Initialize i18n with locale files
rust_i18n::i18n!("locales", fallback = "en");

pub mod cli;
pub mod config;
pub mod error;
pub mod form;
pub mod i18n;
pub mod tui;

pub use cli::{Cli, OutputFormat};
pub use config::{ConfigError, LaunchConfig};
pub use error::{Error, Result};
pub use form::{Device, FieldName, FormEvent, FormStatus, LaunchForm, Launcher, MachineOs, OptionValue};
pub use i18n::init_locale;
pub use tui::{TuiApp, TuiResult, display_summary, should_run_interactive};
