//! Selection set management.
//!
//! The selection is the set of objects whose selected flag is set; it is
//! always read back from the objects in z-order, never stored separately.

use labelkit_core::{DocumentError, DocumentEvent, ObjectId};

use super::LabelDocument;
use crate::model::{LabelObject, Region};

impl<O: LabelObject> LabelDocument<O> {
    pub fn select_object(&mut self, id: ObjectId) {
        let Some(index) = self.index_of(id) else {
            tracing::trace!("Object {} not in document, ignoring select", id);
            return;
        };
        self.objects[index].select();
        self.emit(DocumentEvent::SelectionChanged);
    }

    pub fn unselect_object(&mut self, id: ObjectId) {
        let Some(index) = self.index_of(id) else {
            tracing::trace!("Object {} not in document, ignoring unselect", id);
            return;
        };
        self.objects[index].unselect();
        self.emit(DocumentEvent::SelectionChanged);
    }

    pub fn select_all(&mut self) {
        for object in &mut self.objects {
            object.select();
        }
        self.emit(DocumentEvent::SelectionChanged);
    }

    pub fn unselect_all(&mut self) {
        for object in &mut self.objects {
            object.unselect();
        }
        self.emit(DocumentEvent::SelectionChanged);
    }

    /// Adds every object lying entirely inside `region` to the selection.
    ///
    /// Objects already selected stay selected.
    pub fn select_region(&mut self, region: &Region) {
        let region = region.normalized();
        let mut count = 0;
        for object in &mut self.objects {
            if region.contains_region(&object.extent()) {
                object.select();
                count += 1;
            }
        }
        tracing::trace!("Region selected {} objects", count);
        self.emit(DocumentEvent::SelectionChanged);
    }

    pub fn is_selection_empty(&self) -> bool {
        !self.objects.iter().any(|o| o.is_selected())
    }

    /// True when exactly one object is selected.
    pub fn is_selection_atomic(&self) -> bool {
        self.objects.iter().filter(|o| o.is_selected()).count() == 1
    }

    /// Selected objects in z-order, bottom first.
    pub fn selection(&self) -> Vec<&O> {
        self.objects.iter().filter(|o| o.is_selected()).collect()
    }

    pub fn selection_ids(&self) -> Vec<ObjectId> {
        self.objects
            .iter()
            .filter(|o| o.is_selected())
            .map(|o| o.id())
            .collect()
    }

    /// The lowest selected object in the z-order.
    pub fn first_selected_object(&self) -> Result<&O, DocumentError> {
        self.objects
            .iter()
            .find(|o| o.is_selected())
            .ok_or(DocumentError::SelectionNotFound)
    }

    /// Bounding box of the whole selection.
    pub fn selection_extent(&self) -> Option<Region> {
        self.objects
            .iter()
            .filter(|o| o.is_selected())
            .map(|o| o.extent())
            .reduce(|acc, r| acc.union(&r))
    }

    pub fn can_selection_text(&self) -> bool {
        self.selection_any(|o| o.can_text())
    }

    pub fn can_selection_fill(&self) -> bool {
        self.selection_any(|o| o.can_fill())
    }

    pub fn can_selection_line_color(&self) -> bool {
        self.selection_any(|o| o.can_line_color())
    }

    pub fn can_selection_line_width(&self) -> bool {
        self.selection_any(|o| o.can_line_width())
    }

    fn selection_any(&self, f: impl Fn(&O) -> bool) -> bool {
        self.objects.iter().filter(|o| o.is_selected()).any(f)
    }
}
