//! Z-order changes for the selection.

use labelkit_core::DocumentEvent;

use super::LabelDocument;
use crate::model::LabelObject;

impl<O: LabelObject> LabelDocument<O> {
    /// Moves the selected objects above everything else, keeping their
    /// order relative to each other.
    pub fn raise_selection_to_top(&mut self) {
        let (selected, rest) = self.partition_selection();
        let ids: Vec<_> = selected.iter().map(|o| o.id()).collect();

        self.objects = rest;
        self.objects.extend(selected);
        tracing::debug!("Raised {} objects to top", ids.len());

        for id in ids {
            self.emit(DocumentEvent::ObjectToTop(id));
        }
        self.commit();
    }

    /// Moves the selected objects below everything else, keeping their
    /// order relative to each other.
    pub fn lower_selection_to_bottom(&mut self) {
        let (mut selected, rest) = self.partition_selection();
        let ids: Vec<_> = selected.iter().map(|o| o.id()).collect();

        selected.extend(rest);
        self.objects = selected;
        tracing::debug!("Lowered {} objects to bottom", ids.len());

        for id in ids {
            self.emit(DocumentEvent::ObjectToBottom(id));
        }
        self.commit();
    }

    /// Splits the object list into (selected, unselected), both in z-order.
    fn partition_selection(&mut self) -> (Vec<O>, Vec<O>) {
        std::mem::take(&mut self.objects)
            .into_iter()
            .partition(|o| o.is_selected())
    }
}
