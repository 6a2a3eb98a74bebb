//! Label document: the editable model behind one label design.
//!
//! This module is split into submodules by concern:
//! - `membership`: add, delete and per-object edits
//! - `z_order`: raise and lower the selection
//! - `selection`: selection set management and capability queries
//! - `transforms`: rotate, flip, move and center the selection
//! - `alignment`: align selected objects against each other
//! - `properties`: style setters applied to the selection
//!
//! Every mutating operation applies its change, marks the document
//! modified, and then publishes its notifications on the document's
//! [`EventBus`]. Batch operations publish exactly one trailing
//! [`DocumentEvent::Changed`].
//!
//! A document is not internally synchronized. Mutations take `&mut self`;
//! sharing one across threads requires an external lock.

mod alignment;
mod membership;
mod properties;
mod selection;
mod transforms;
mod z_order;

pub use alignment::Alignment;

use std::sync::Arc;

use labelkit_core::{
    DocumentEvent, EventBus, EventBusConfig, EventFilter, ObjectId, SubscriptionId,
    TemplateProvider,
};

use crate::model::{DrawingObject, LabelObject, ObjectNotification};

/// Ordered collection of drawable objects on a label template.
///
/// Index 0 of the object list is the bottom of the z-order; the last
/// object is on top.
#[derive(Debug)]
pub struct LabelDocument<O = DrawingObject> {
    objects: Vec<O>,
    modified: bool,
    template: Option<Arc<dyn TemplateProvider>>,
    rotate: bool,
    events: EventBus,
}

impl<O: LabelObject> LabelDocument<O> {
    /// Creates an empty document.
    ///
    /// New documents count as modified until the first save.
    pub fn new() -> Self {
        Self::with_event_config(EventBusConfig::default())
    }

    /// Creates an empty document whose event bus uses `config`.
    pub fn with_event_config(config: EventBusConfig) -> Self {
        Self {
            objects: Vec::new(),
            modified: true,
            template: None,
            rotate: false,
            events: EventBus::with_config(config),
        }
    }

    /// Lays the document out on `template`.
    pub fn with_template(mut self, template: Arc<dyn TemplateProvider>) -> Self {
        self.template = Some(template);
        self
    }

    /// Starts the document with the template rotated by 90 degrees.
    pub fn with_rotate(mut self, rotate: bool) -> Self {
        self.rotate = rotate;
        self
    }

    /// The document's event bus.
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Registers an observer. See [`EventBus::subscribe`].
    pub fn subscribe<F>(&self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: Fn(DocumentEvent) + Send + Sync + 'static,
    {
        self.events.subscribe(filter, handler)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Clears the modified flag after the caller has persisted the document.
    pub fn mark_saved(&mut self) {
        self.modified = false;
        tracing::debug!("Document marked saved");
    }

    /// Objects in z-order, bottom first.
    pub fn objects(&self) -> &[O] {
        &self.objects
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn object(&self, id: ObjectId) -> Option<&O> {
        self.objects.iter().find(|o| o.id() == id)
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.index_of(id).is_some()
    }

    /// Position of `id` in the z-order (0 = bottom).
    pub fn z_index(&self, id: ObjectId) -> Option<usize> {
        self.index_of(id)
    }

    /// Topmost object whose extent contains the point.
    pub fn object_at(&self, x: f64, y: f64) -> Option<&O> {
        self.objects
            .iter()
            .rev()
            .find(|o| o.extent().contains_point(x, y))
    }

    pub fn template(&self) -> Option<&Arc<dyn TemplateProvider>> {
        self.template.as_ref()
    }

    pub fn set_template(&mut self, template: Arc<dyn TemplateProvider>) {
        tracing::debug!("Template set to {}", template.name());
        self.template = Some(template);
        self.modified = true;
        self.emit(DocumentEvent::SizeChanged);
        self.emit(DocumentEvent::Changed);
    }

    pub fn rotate(&self) -> bool {
        self.rotate
    }

    /// Lays the label out rotated by 90 degrees, swapping width and height.
    pub fn set_rotate(&mut self, rotate: bool) {
        if self.rotate != rotate {
            self.rotate = rotate;
            self.modified = true;
            self.emit(DocumentEvent::SizeChanged);
            self.emit(DocumentEvent::Changed);
        }
    }

    /// Label width in points, or `None` without a template.
    pub fn width(&self) -> Option<f64> {
        self.template
            .as_ref()
            .map(|t| if self.rotate { t.height() } else { t.width() })
    }

    /// Label height in points, or `None` without a template.
    pub fn height(&self) -> Option<f64> {
        self.template
            .as_ref()
            .map(|t| if self.rotate { t.width() } else { t.height() })
    }

    pub(crate) fn index_of(&self, id: ObjectId) -> Option<usize> {
        self.objects.iter().position(|o| o.id() == id)
    }

    pub(crate) fn emit(&self, event: DocumentEvent) {
        self.events.publish(event);
    }

    /// Marks the document modified and publishes the trailing `Changed`.
    pub(crate) fn commit(&mut self) {
        self.modified = true;
        self.emit(DocumentEvent::Changed);
    }

    /// Republishes the notifications queued on the object at `index` as
    /// document events, without a `Changed` per notification.
    pub(crate) fn forward_object_notifications(&mut self, index: usize) -> usize {
        let object = &mut self.objects[index];
        let id = object.id();
        let notifications = object.take_notifications();
        for notification in &notifications {
            self.emit(match notification {
                ObjectNotification::Changed => DocumentEvent::ObjectChanged(id),
                ObjectNotification::Moved => DocumentEvent::ObjectMoved(id),
            });
        }
        notifications.len()
    }

    /// Applies `f` to every selected object in z-order, forwarding the
    /// notifications each one raises.
    pub(crate) fn for_each_selected(&mut self, mut f: impl FnMut(&mut O)) {
        for index in 0..self.objects.len() {
            if self.objects[index].is_selected() {
                f(&mut self.objects[index]);
                self.forward_object_notifications(index);
            }
        }
    }
}

impl<O: LabelObject> Default for LabelDocument<O> {
    fn default() -> Self {
        Self::new()
    }
}
