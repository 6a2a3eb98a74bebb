//! LabelKit Settings Crate
//!
//! Handles configuration files: the default label template, document event
//! bus options and logging preferences.

pub mod config;

pub use config::{Config, LoggingSettings, TemplateSettings};
