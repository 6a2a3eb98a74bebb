//! # LabelKit Core
//!
//! Core types, traits, and utilities for LabelKit.
//! Provides the error taxonomy, object identifiers, unit conversion,
//! the label template abstraction, and the synchronous event bus that
//! label documents publish their change notifications on.

pub mod error;
pub mod event_bus;
pub mod ids;
pub mod template;
pub mod units;

pub use error::{ConfigError, DocumentError, Error, Result};

pub use event_bus::{
    DocumentEvent, EventBus, EventBusConfig, EventCategory, EventFilter, SubscriptionId,
};

pub use ids::ObjectId;
pub use template::{Template, TemplateProvider};
pub use units::{Distance, Units, PTS_PER_INCH, PTS_PER_MM};
