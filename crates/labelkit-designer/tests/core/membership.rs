use labelkit_designer::{DocumentEvent, DrawingObject, LabelDocument, LabelObject};

use crate::support::{record, take};

#[test]
fn test_new_document_is_modified_and_empty() {
    let doc: LabelDocument = LabelDocument::new();
    assert!(doc.is_modified());
    assert_eq!(doc.object_count(), 0);
    assert!(doc.is_selection_empty());
}

#[test]
fn test_add_object_goes_on_top() {
    let mut doc: LabelDocument = LabelDocument::new();
    let a = doc.add_object(DrawingObject::new_box(0.0, 0.0, 10.0, 10.0));
    let b = doc.add_object(DrawingObject::new_ellipse(0.0, 0.0, 10.0, 10.0));

    assert_eq!(doc.object_count(), 2);
    assert_eq!(doc.z_index(a), Some(0));
    assert_eq!(doc.z_index(b), Some(1));
    assert!(doc.contains(a));
}

#[test]
fn test_add_object_events() {
    let mut doc: LabelDocument = LabelDocument::new();
    doc.mark_saved();
    let log = record(&doc);

    let id = doc.add_object(DrawingObject::new_box(0.0, 0.0, 10.0, 10.0));

    assert!(doc.is_modified());
    assert_eq!(
        take(&log),
        vec![DocumentEvent::ObjectAdded(id), DocumentEvent::Changed]
    );
}

#[test]
fn test_add_duplicate_is_ignored() {
    let mut doc: LabelDocument = LabelDocument::new();
    let obj = DrawingObject::new_box(0.0, 0.0, 10.0, 10.0);
    let copy = obj.clone();
    doc.add_object(obj);
    let log = record(&doc);

    doc.add_object(copy);

    assert_eq!(doc.object_count(), 1);
    assert!(take(&log).is_empty());
}

#[test]
fn test_notifications_before_add_are_dropped() {
    let mut doc: LabelDocument = LabelDocument::new();
    let log = record(&doc);

    let mut obj = DrawingObject::new_box(0.0, 0.0, 10.0, 10.0);
    obj.set_position(5.0, 5.0);
    let id = doc.add_object(obj);

    assert_eq!(
        take(&log),
        vec![DocumentEvent::ObjectAdded(id), DocumentEvent::Changed]
    );
}

#[test]
fn test_delete_object_returns_it_unselected() {
    let mut doc: LabelDocument = LabelDocument::new();
    let id = doc.add_object(DrawingObject::new_box(0.0, 0.0, 10.0, 10.0));
    doc.select_object(id);
    let log = record(&doc);

    let removed = doc.delete_object(id).expect("object present");

    assert_eq!(removed.id(), id);
    assert!(!removed.is_selected());
    assert!(!doc.contains(id));
    assert!(doc.is_selection_empty());
    assert_eq!(
        take(&log),
        vec![DocumentEvent::ObjectDeleted(id), DocumentEvent::Changed]
    );
}

#[test]
fn test_delete_absent_object_is_silent() {
    let mut doc: LabelDocument = LabelDocument::new();
    let stray = DrawingObject::new_box(0.0, 0.0, 1.0, 1.0);
    doc.mark_saved();
    let log = record(&doc);

    assert!(doc.delete_object(stray.id()).is_none());
    assert!(!doc.is_modified());
    assert!(take(&log).is_empty());
}

#[test]
fn test_delete_selection() {
    let mut doc: LabelDocument = LabelDocument::new();
    let a = doc.add_object(DrawingObject::new_box(0.0, 0.0, 10.0, 10.0));
    let b = doc.add_object(DrawingObject::new_box(20.0, 0.0, 10.0, 10.0));
    let c = doc.add_object(DrawingObject::new_box(40.0, 0.0, 10.0, 10.0));
    doc.select_object(a);
    doc.select_object(c);
    let log = record(&doc);

    let removed = doc.delete_selection();

    assert_eq!(removed.len(), 2);
    assert_eq!(doc.object_count(), 1);
    assert!(doc.contains(b));
    assert!(doc.is_selection_empty());
    assert_eq!(
        take(&log),
        vec![
            DocumentEvent::ObjectDeleted(a),
            DocumentEvent::ObjectDeleted(c),
            DocumentEvent::Changed,
            DocumentEvent::SelectionChanged,
        ]
    );
}

#[test]
fn test_delete_empty_selection_still_notifies() {
    let mut doc: LabelDocument = LabelDocument::new();
    doc.add_object(DrawingObject::new_box(0.0, 0.0, 10.0, 10.0));
    let log = record(&doc);

    assert!(doc.delete_selection().is_empty());
    assert_eq!(doc.object_count(), 1);
    assert_eq!(
        take(&log),
        vec![DocumentEvent::Changed, DocumentEvent::SelectionChanged]
    );
}

#[test]
fn test_object_at_prefers_topmost() {
    let mut doc: LabelDocument = LabelDocument::new();
    let bottom = doc.add_object(DrawingObject::new_box(0.0, 0.0, 50.0, 50.0));
    let top = doc.add_object(DrawingObject::new_box(10.0, 10.0, 10.0, 10.0));

    assert_eq!(doc.object_at(15.0, 15.0).map(|o| o.id()), Some(top));
    assert_eq!(doc.object_at(40.0, 40.0).map(|o| o.id()), Some(bottom));
    assert!(doc.object_at(100.0, 100.0).is_none());
}
