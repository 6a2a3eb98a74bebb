use labelkit_designer::{
    DocumentError, DocumentEvent, DrawingObject, LabelDocument, LabelObject, Region,
};

use crate::support::{record, take};

fn three_boxes() -> (LabelDocument, Vec<labelkit_designer::ObjectId>) {
    let mut doc = LabelDocument::new();
    let ids = vec![
        doc.add_object(DrawingObject::new_box(0.0, 0.0, 10.0, 10.0)),
        doc.add_object(DrawingObject::new_box(20.0, 20.0, 10.0, 10.0)),
        doc.add_object(DrawingObject::new_box(90.0, 90.0, 20.0, 20.0)),
    ];
    (doc, ids)
}

#[test]
fn test_selection_follows_flags_in_z_order() {
    let (mut doc, ids) = three_boxes();
    doc.select_object(ids[2]);
    doc.select_object(ids[0]);

    let selected: Vec<_> = doc.selection().iter().map(|o| o.id()).collect();
    assert_eq!(selected, vec![ids[0], ids[2]]);
    assert_eq!(doc.selection_ids(), vec![ids[0], ids[2]]);
    assert!(!doc.is_selection_atomic());
}

#[test]
fn test_select_and_unselect_emit_once() {
    let (mut doc, ids) = three_boxes();
    doc.mark_saved();
    let log = record(&doc);

    doc.select_object(ids[1]);
    assert!(doc.is_selection_atomic());
    doc.unselect_object(ids[1]);
    assert!(doc.is_selection_empty());

    assert_eq!(
        take(&log),
        vec![DocumentEvent::SelectionChanged, DocumentEvent::SelectionChanged]
    );
    // Selection alone does not dirty the document.
    assert!(!doc.is_modified());
}

#[test]
fn test_select_absent_object_is_silent() {
    let (mut doc, _) = three_boxes();
    let stray = DrawingObject::new_box(0.0, 0.0, 1.0, 1.0);
    let log = record(&doc);

    doc.select_object(stray.id());
    doc.unselect_object(stray.id());

    assert!(doc.is_selection_empty());
    assert!(take(&log).is_empty());
}

#[test]
fn test_select_all_and_unselect_all() {
    let (mut doc, _) = three_boxes();
    let log = record(&doc);

    doc.select_all();
    assert_eq!(doc.selection().len(), 3);
    doc.unselect_all();
    assert!(doc.is_selection_empty());

    assert_eq!(take(&log).len(), 2);
}

#[test]
fn test_select_region_requires_full_containment() {
    let (mut doc, ids) = three_boxes();
    let log = record(&doc);

    doc.select_region(&Region::new(0.0, 0.0, 100.0, 100.0));

    assert_eq!(doc.selection_ids(), vec![ids[0], ids[1]]);
    assert_eq!(take(&log), vec![DocumentEvent::SelectionChanged]);
}

#[test]
fn test_select_region_normalizes_corners() {
    let (mut doc, ids) = three_boxes();
    doc.select_region(&Region::new(35.0, 35.0, -5.0, -5.0));
    assert_eq!(doc.selection_ids(), vec![ids[0], ids[1]]);
}

#[test]
fn test_select_region_keeps_existing_selection() {
    let (mut doc, ids) = three_boxes();
    doc.select_object(ids[2]);
    doc.select_region(&Region::new(0.0, 0.0, 15.0, 15.0));
    assert_eq!(doc.selection_ids(), vec![ids[0], ids[2]]);
}

#[test]
fn test_first_selected_object() {
    let (mut doc, ids) = three_boxes();
    assert_eq!(
        doc.first_selected_object().unwrap_err(),
        DocumentError::SelectionNotFound
    );

    doc.select_object(ids[2]);
    doc.select_object(ids[1]);
    assert_eq!(doc.first_selected_object().unwrap().id(), ids[1]);
}

#[test]
fn test_selection_extent() {
    let (mut doc, ids) = three_boxes();
    assert!(doc.selection_extent().is_none());

    doc.select_object(ids[0]);
    doc.select_object(ids[2]);
    assert_eq!(
        doc.selection_extent(),
        Some(Region::new(0.0, 0.0, 110.0, 110.0))
    );
}

#[test]
fn test_capabilities_are_or_over_selection() {
    let mut doc: LabelDocument = LabelDocument::new();
    let text = doc.add_object(DrawingObject::new_text(0.0, 0.0, 10.0, 10.0, "A"));
    let rect = doc.add_object(DrawingObject::new_box(0.0, 0.0, 10.0, 10.0));
    let image = doc.add_object(DrawingObject::new_image(0.0, 0.0, 10.0, 10.0, "a.png"));

    assert!(!doc.can_selection_text());
    assert!(!doc.can_selection_fill());

    doc.select_object(image);
    assert!(!doc.can_selection_fill());
    assert!(!doc.can_selection_line_color());

    doc.select_object(text);
    doc.select_object(rect);
    assert!(doc.can_selection_text());
    assert!(doc.can_selection_fill());
    assert!(doc.can_selection_line_color());
    assert!(doc.can_selection_line_width());
}
