#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use labelkit_designer::{
    DocumentEvent, EventFilter, LabelDocument, LabelObject, ObjectId, ObjectNotification, Region,
};

pub type EventLog = Arc<Mutex<Vec<DocumentEvent>>>;

/// Subscribes to every event the document publishes.
pub fn record<O: LabelObject>(doc: &LabelDocument<O>) -> EventLog {
    let log: EventLog = Arc::default();
    let sink = Arc::clone(&log);
    doc.subscribe(EventFilter::All, move |event| sink.lock().unwrap().push(event));
    log
}

/// Drains the events recorded so far.
pub fn take(log: &EventLog) -> Vec<DocumentEvent> {
    std::mem::take(&mut *log.lock().unwrap())
}

pub fn count_changed(events: &[DocumentEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, DocumentEvent::Changed))
        .count()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// Fixed-extent object with no style support.
#[derive(Debug)]
pub struct Marker {
    id: ObjectId,
    region: Region,
    selected: bool,
    pending: Vec<ObjectNotification>,
}

impl Marker {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            id: ObjectId::new(),
            region: Region::new(x1, y1, x2, y2),
            selected: false,
            pending: Vec::new(),
        }
    }
}

impl LabelObject for Marker {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn extent(&self) -> Region {
        self.region
    }

    fn is_selected(&self) -> bool {
        self.selected
    }

    fn select(&mut self) {
        self.selected = true;
    }

    fn unselect(&mut self) {
        self.selected = false;
    }

    fn set_position_relative(&mut self, dx: f64, dy: f64) {
        self.region = self.region.translated(dx, dy);
        self.pending.push(ObjectNotification::Moved);
    }

    fn rotate(&mut self, _theta_degs: f64) {}

    fn flip_horiz(&mut self) {}

    fn flip_vert(&mut self) {}

    fn take_notifications(&mut self) -> Vec<ObjectNotification> {
        std::mem::take(&mut self.pending)
    }
}
