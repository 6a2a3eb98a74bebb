//! # Event Bus Module
//!
//! Provides the synchronous publish/subscribe channel a label document uses
//! to notify its observers (undo recorder, canvas view, property editors).
//!
//! ## Overview
//!
//! - Each document owns its own [`EventBus`]; there is no global instance
//! - Subscribers filter and receive events of interest
//! - Handlers run on the publishing thread, after the state change applied
//!
//! ## Usage
//!
//! ```rust
//! use labelkit_core::event_bus::{DocumentEvent, EventBus, EventCategory, EventFilter};
//!
//! let bus = EventBus::new();
//!
//! // Subscribe to selection events
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Selection]),
//!     |event| {
//!         assert_eq!(event, DocumentEvent::SelectionChanged);
//!     },
//! );
//!
//! bus.publish(DocumentEvent::SelectionChanged);
//!
//! // Unsubscribe when done
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
