//! Event type definitions for the event bus.
//!
//! Every notification a label document emits is one immutable
//! [`DocumentEvent`] value. Events are cloneable and serializable so an undo
//! recorder can log or replay them.

use serde::{Deserialize, Serialize};

use crate::ids::ObjectId;

/// Root event enum for document notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentEvent {
    /// An object joined the document (at the top of the z-order).
    ObjectAdded(ObjectId),
    /// An object left the document.
    ObjectDeleted(ObjectId),
    /// An object's appearance or properties changed.
    ObjectChanged(ObjectId),
    /// An object's position or geometry changed.
    ObjectMoved(ObjectId),
    /// An object was raised to the top of the z-order.
    ObjectToTop(ObjectId),
    /// An object was lowered to the bottom of the z-order.
    ObjectToBottom(ObjectId),
    /// The set of selected objects changed.
    SelectionChanged,
    /// The label size changed (template or rotation).
    SizeChanged,
    /// The document changed; batch edits emit exactly one of these.
    Changed,
}

impl DocumentEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            DocumentEvent::ObjectAdded(_)
            | DocumentEvent::ObjectDeleted(_)
            | DocumentEvent::ObjectChanged(_)
            | DocumentEvent::ObjectMoved(_) => EventCategory::Object,
            DocumentEvent::ObjectToTop(_) | DocumentEvent::ObjectToBottom(_) => {
                EventCategory::ZOrder
            }
            DocumentEvent::SelectionChanged => EventCategory::Selection,
            DocumentEvent::SizeChanged | DocumentEvent::Changed => EventCategory::Document,
        }
    }

    /// The object this event refers to, if any
    pub fn object_id(&self) -> Option<ObjectId> {
        match self {
            DocumentEvent::ObjectAdded(id)
            | DocumentEvent::ObjectDeleted(id)
            | DocumentEvent::ObjectChanged(id)
            | DocumentEvent::ObjectMoved(id)
            | DocumentEvent::ObjectToTop(id)
            | DocumentEvent::ObjectToBottom(id) => Some(*id),
            DocumentEvent::SelectionChanged
            | DocumentEvent::SizeChanged
            | DocumentEvent::Changed => None,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            DocumentEvent::ObjectAdded(id) => format!("Object added: {}", id),
            DocumentEvent::ObjectDeleted(id) => format!("Object deleted: {}", id),
            DocumentEvent::ObjectChanged(id) => format!("Object changed: {}", id),
            DocumentEvent::ObjectMoved(id) => format!("Object moved: {}", id),
            DocumentEvent::ObjectToTop(id) => format!("Object raised to top: {}", id),
            DocumentEvent::ObjectToBottom(id) => format!("Object lowered to bottom: {}", id),
            DocumentEvent::SelectionChanged => "Selection changed".to_string(),
            DocumentEvent::SizeChanged => "Label size changed".to_string(),
            DocumentEvent::Changed => "Document changed".to_string(),
        }
    }
}

impl std::fmt::Display for DocumentEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Membership and per-object change events.
    Object,
    /// Stacking order events.
    ZOrder,
    /// Selection events.
    Selection,
    /// Document-level change events.
    Document,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Object => write!(f, "Object"),
            EventCategory::ZOrder => write!(f, "ZOrder"),
            EventCategory::Selection => write!(f, "Selection"),
            EventCategory::Document => write!(f, "Document"),
        }
    }
}
