//! Adding, removing and editing individual objects.

use labelkit_core::{DocumentError, DocumentEvent, ObjectId, Result};

use super::LabelDocument;
use crate::model::{LabelObject, ObjectNotification};

impl<O: LabelObject> LabelDocument<O> {
    /// Takes ownership of `object` and places it on top of the z-order.
    ///
    /// Publishes `ObjectAdded` then `Changed`. Adding an object whose id is
    /// already present does nothing.
    pub fn add_object(&mut self, mut object: O) -> ObjectId {
        let id = object.id();
        if self.contains(id) {
            tracing::trace!("Object {} already in document, ignoring add", id);
            return id;
        }

        // Only changes made while owned by this document are forwarded.
        object.take_notifications();
        self.objects.push(object);
        tracing::debug!("Added object {} ({} total)", id, self.objects.len());

        self.modified = true;
        self.emit(DocumentEvent::ObjectAdded(id));
        self.emit(DocumentEvent::Changed);
        id
    }

    /// Removes the object and hands it back to the caller.
    ///
    /// The object is unselected first and its pending notifications are
    /// discarded. Publishes `ObjectDeleted` then `Changed`. Returns `None`
    /// without publishing anything if the object is not in the document.
    pub fn delete_object(&mut self, id: ObjectId) -> Option<O> {
        let Some(index) = self.index_of(id) else {
            tracing::trace!("Object {} not in document, ignoring delete", id);
            return None;
        };

        let object = self.remove_at(index);
        self.commit();
        Some(object)
    }

    /// Removes every selected object.
    ///
    /// Publishes `ObjectDeleted` for each removed object in z-order, then a
    /// single `Changed` and `SelectionChanged`. Returns the removed objects.
    ///
    /// Unlike [`delete_object`](Self::delete_object), no `Changed` follows
    /// each `ObjectDeleted`; the batch ends with exactly one.
    pub fn delete_selection(&mut self) -> Vec<O> {
        let mut removed = Vec::new();
        for id in self.selection_ids() {
            if let Some(index) = self.index_of(id) {
                removed.push(self.remove_at(index));
            }
        }
        tracing::debug!("Deleted {} selected objects", removed.len());

        self.commit();
        self.emit(DocumentEvent::SelectionChanged);
        removed
    }

    /// Runs an edit against a single object and publishes what it changed.
    ///
    /// Each notification the object raised becomes an `ObjectChanged` or
    /// `ObjectMoved` event followed by `Changed`. Selection must still be
    /// changed through the document's selection operations.
    pub fn modify_object<R>(&mut self, id: ObjectId, f: impl FnOnce(&mut O) -> R) -> Result<R> {
        let index = self
            .index_of(id)
            .ok_or(DocumentError::ObjectNotFound { id })?;

        let result = f(&mut self.objects[index]);

        let notifications = self.objects[index].take_notifications();
        if !notifications.is_empty() {
            self.modified = true;
        }
        for notification in notifications {
            self.emit(match notification {
                ObjectNotification::Changed => DocumentEvent::ObjectChanged(id),
                ObjectNotification::Moved => DocumentEvent::ObjectMoved(id),
            });
            self.emit(DocumentEvent::Changed);
        }

        Ok(result)
    }

    /// Unselects, detaches and removes the object at `index`, publishing
    /// `ObjectDeleted`.
    fn remove_at(&mut self, index: usize) -> O {
        let mut object = self.objects.remove(index);
        object.unselect();
        object.take_notifications();

        let id = object.id();
        self.emit(DocumentEvent::ObjectDeleted(id));
        object
    }
}
