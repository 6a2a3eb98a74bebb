use labelkit_designer::{
    Alignment, DocumentEvent, DrawingObject, LabelDocument, LabelObject, ObjectId, Region,
};

use crate::support::{assert_close, record, take, Marker};

fn extent(doc: &LabelDocument, id: ObjectId) -> Region {
    doc.object(id).unwrap().extent()
}

/// Boxes of different sizes scattered over the label, all selected.
fn scattered() -> (LabelDocument, Vec<ObjectId>) {
    let mut doc = LabelDocument::new();
    let ids = vec![
        doc.add_object(DrawingObject::new_box(10.0, 40.0, 20.0, 10.0)),
        doc.add_object(DrawingObject::new_box(50.0, 5.0, 30.0, 30.0)),
        doc.add_object(DrawingObject::new_ellipse(25.0, 60.0, 10.0, 20.0)),
    ];
    doc.select_all();
    (doc, ids)
}

#[test]
fn test_align_left() {
    let (mut doc, ids) = scattered();
    doc.align_selection_left();
    for id in &ids {
        assert_close(extent(&doc, *id).x1, 10.0);
    }
    // Vertical positions untouched.
    assert_close(extent(&doc, ids[1]).y1, 5.0);
}

#[test]
fn test_align_right_uses_right_edges() {
    let (mut doc, ids) = scattered();
    doc.align_selection_right();
    for id in &ids {
        assert_close(extent(&doc, *id).x2, 80.0);
    }
}

#[test]
fn test_align_top_and_bottom() {
    let (mut doc, ids) = scattered();
    doc.align_selection_top();
    for id in &ids {
        assert_close(extent(&doc, *id).y1, 5.0);
    }

    doc.align_selection_bottom();
    for id in &ids {
        assert_close(extent(&doc, *id).y2, 35.0);
    }
}

#[test]
fn test_align_hcenter_picks_object_nearest_mean() {
    let mut doc: LabelDocument = LabelDocument::new();
    // Centers at 0, 10 and 20.
    let ids = [
        doc.add_object(DrawingObject::new_box(-5.0, 0.0, 10.0, 10.0)),
        doc.add_object(DrawingObject::new_box(5.0, 30.0, 10.0, 10.0)),
        doc.add_object(DrawingObject::new_box(15.0, 60.0, 10.0, 10.0)),
    ];
    doc.select_all();

    doc.align_selection_hcenter();

    for id in ids {
        assert_close(extent(&doc, id).center_x(), 10.0);
    }
}

#[test]
fn test_align_hcenter_targets_an_existing_center() {
    let mut doc: LabelDocument = LabelDocument::new();
    // Mean center is 40, nearest object center is 30.
    let ids = [
        doc.add_object(DrawingObject::new_box(0.0, 0.0, 20.0, 10.0)),
        doc.add_object(DrawingObject::new_box(20.0, 0.0, 20.0, 10.0)),
        doc.add_object(DrawingObject::new_box(70.0, 0.0, 20.0, 10.0)),
    ];
    doc.select_all();

    doc.align_selection_hcenter();

    for id in ids {
        assert_close(extent(&doc, id).center_x(), 30.0);
    }
}

#[test]
fn test_align_vcenter_first_of_equals_wins() {
    let mut doc: LabelDocument = LabelDocument::new();
    // Centers at 10 and 30 are equally close to the mean of 20.
    let a = doc.add_object(DrawingObject::new_box(0.0, 0.0, 10.0, 20.0));
    let b = doc.add_object(DrawingObject::new_box(20.0, 20.0, 10.0, 20.0));
    doc.select_all();

    doc.align_selection_vcenter();

    assert_close(extent(&doc, a).center_y(), 10.0);
    assert_close(extent(&doc, b).center_y(), 10.0);
}

#[test]
fn test_alignment_is_idempotent() {
    for alignment in [
        Alignment::Left,
        Alignment::HCenter,
        Alignment::Right,
        Alignment::Top,
        Alignment::VCenter,
        Alignment::Bottom,
    ] {
        let (mut doc, ids) = scattered();
        doc.align_selection(alignment);
        let first: Vec<_> = ids.iter().map(|id| extent(&doc, *id)).collect();

        doc.align_selection(alignment);
        for (id, before) in ids.iter().zip(first) {
            let after = extent(&doc, *id);
            assert_close(after.x1, before.x1);
            assert_close(after.y1, before.y1);
        }
    }
}

#[test]
fn test_alignment_needs_two_objects() {
    let mut doc: LabelDocument = LabelDocument::new();
    let id = doc.add_object(DrawingObject::new_box(10.0, 10.0, 5.0, 5.0));
    doc.add_object(DrawingObject::new_box(0.0, 0.0, 5.0, 5.0));
    doc.select_object(id);
    doc.mark_saved();
    let log = record(&doc);

    doc.align_selection_left();
    doc.align_selection_hcenter();

    assert_eq!(doc.object(id).unwrap().position(), (10.0, 10.0));
    assert!(!doc.is_modified());
    assert!(take(&log).is_empty());
    assert!(doc.calculate_alignment_deltas(Alignment::Left).is_empty());
}

#[test]
fn test_alignment_events() {
    let mut doc: LabelDocument = LabelDocument::new();
    let a = doc.add_object(DrawingObject::new_box(0.0, 0.0, 10.0, 10.0));
    let b = doc.add_object(DrawingObject::new_box(10.0, 20.0, 10.0, 10.0));
    doc.select_all();
    let log = record(&doc);

    doc.align_selection_left();

    // `a` is already on the target edge and does not move.
    assert_eq!(doc.object(a).unwrap().position(), (0.0, 0.0));
    assert_eq!(
        take(&log),
        vec![DocumentEvent::ObjectMoved(b), DocumentEvent::Changed]
    );
}

#[test]
fn test_calculate_alignment_deltas() {
    let (doc, _) = scattered();
    let deltas = doc.calculate_alignment_deltas(Alignment::Left);
    assert_eq!(deltas, vec![(0, 0.0, 0.0), (1, -40.0, 0.0), (2, -15.0, 0.0)]);
}

#[test]
fn test_alignment_on_custom_objects() {
    let mut doc: LabelDocument<Box<dyn LabelObject>> = LabelDocument::new();
    let a = doc.add_object(Box::new(Marker::new(0.0, 0.0, 10.0, 10.0)));
    let b = doc.add_object(Box::new(DrawingObject::new_box(30.0, 30.0, 10.0, 10.0)));
    doc.select_all();

    doc.align_selection_bottom();

    assert_close(doc.object(a).unwrap().extent().y2, 40.0);
    assert_close(doc.object(b).unwrap().extent().y2, 40.0);
}

#[test]
fn test_alignment_on_oversized_layouts() {
    let mut doc: LabelDocument = LabelDocument::new();
    let a = doc.add_object(DrawingObject::new_box(7300.0, 0.0, 20.0, 10.0));
    let b = doc.add_object(DrawingObject::new_box(7500.0, -9000.0, 40.0, 10.0));
    doc.select_all();

    doc.align_selection_left();
    assert_close(extent(&doc, a).x1, 7300.0);
    assert_close(extent(&doc, b).x1, 7300.0);

    doc.align_selection_top();
    assert_close(extent(&doc, a).y1, -9000.0);
    assert_close(extent(&doc, b).y1, -9000.0);

    doc.align_selection_right();
    assert_close(extent(&doc, a).x2, 7340.0);
    assert_close(extent(&doc, b).x2, 7340.0);
}

#[test]
fn test_align_hcenter_beyond_hundred_inches() {
    let mut doc: LabelDocument = LabelDocument::new();
    // Centers at 7000 and 7400; the mean is equally near both.
    let a = doc.add_object(DrawingObject::new_box(6990.0, 0.0, 20.0, 10.0));
    let b = doc.add_object(DrawingObject::new_box(7390.0, 30.0, 20.0, 10.0));
    doc.select_all();

    doc.align_selection_hcenter();

    assert_close(extent(&doc, a).center_x(), 7000.0);
    assert_close(extent(&doc, b).center_x(), 7000.0);
}
