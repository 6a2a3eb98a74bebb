//! # LabelKit
//!
//! Document core for a label design application.
//!
//! ## Architecture
//!
//! LabelKit is organized as a workspace with multiple crates:
//!
//! 1. **labelkit-core** - Errors, object ids, units, templates, document events
//! 2. **labelkit-settings** - Configuration files and validation
//! 3. **labelkit-designer** - `LabelDocument` and the drawable object model
//! 4. **labelkit** - Re-exports, logging setup and document construction
//!
//! ## Example
//!
//! ```
//! use labelkit::{document_from_config, Config, DrawingObject, EventFilter};
//!
//! let mut doc = document_from_config(&Config::default());
//! doc.subscribe(EventFilter::All, |event| println!("{event}"));
//!
//! let a = doc.add_object(DrawingObject::new_box(0.0, 0.0, 20.0, 10.0));
//! let b = doc.add_object(DrawingObject::new_box(30.0, 5.0, 20.0, 10.0));
//! doc.select_object(a);
//! doc.select_object(b);
//! doc.align_selection_top();
//!
//! assert_eq!(doc.object(b).map(|o| o.position()), Some((30.0, 0.0)));
//! ```

use std::sync::Arc;

use labelkit_core::units::format_distance;

pub use labelkit_designer as designer;
pub use labelkit_settings as settings;

pub use labelkit_core::{
    ConfigError, DocumentError, DocumentEvent, Error, EventBus, EventBusConfig, EventCategory,
    EventFilter, ObjectId, Result, SubscriptionId, Template, TemplateProvider, Units,
};

pub use labelkit_designer::{
    Alignment, Color, ColorNode, DrawingObject, FontWeight, LabelDocument, LabelObject,
    ObjectKind, Region, TextHAlign, TextVAlign,
};

pub use labelkit_settings::{Config, LoggingSettings, TemplateSettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Console output, filtered by `RUST_LOG` with `info` as the fallback.
pub fn init_logging() -> anyhow::Result<()> {
    init_logging_with(&LoggingSettings::default())
}

/// Initialize logging from the `[logging]` section of the configuration
///
/// `RUST_LOG` takes precedence over `settings.level` when set.
pub fn init_logging_with(settings: &LoggingSettings) -> anyhow::Result<()> {
    use anyhow::Context;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&settings.level)
            .with_context(|| format!("invalid log level '{}'", settings.level))?,
    };

    if settings.json {
        let fmt_layer = fmt::layer()
            .json()
            .with_writer(std::io::stdout)
            .with_target(true)
            .with_level(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .context("logging already initialized")?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stdout)
            .with_target(true)
            .with_level(true)
            .with_thread_ids(true)
            .with_line_number(true)
            .pretty();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .context("logging already initialized")?;
    }

    Ok(())
}

/// Builds an empty document on the configured template and event settings
pub fn document_from_config(config: &Config) -> LabelDocument {
    let template = config.template.to_template();
    let units = config.template.units;
    tracing::debug!(
        "New document on '{}' ({} x {})",
        template.name(),
        format_distance(template.width(), units),
        format_distance(template.height(), units)
    );

    LabelDocument::with_event_config(config.events.clone())
        .with_template(Arc::new(template))
        .with_rotate(config.template.rotate)
}
