//! # LabelKit Designer
//!
//! The editable model behind a label design.
//!
//! ## Core Components
//!
//! ### Document
//! - **LabelDocument**: ordered objects on a label template, z-order
//!   (index 0 is the bottom)
//! - **Selection**: select by id, all, or by rubber-band region
//! - **Alignment**: align edges or centers of the selected objects
//! - **Transforms**: rotate, flip, move and center the selection
//! - **Properties**: push text, line and fill styles to the selection
//!
//! ### Objects
//! - **LabelObject**: what a document needs from an object
//! - **DrawingObject**: box, ellipse, line, text, image and barcode
//! - **Region**: axis-aligned extents used for hit testing and alignment
//!
//! Every change is published on the document's event bus as a
//! [`DocumentEvent`], so undo recorders and views can follow along.

pub mod document;
pub mod model;

pub use document::{Alignment, LabelDocument};
pub use model::{
    Capabilities, Color, ColorNode, DrawingObject, FontWeight, LabelObject, LineStyle,
    ObjectKind, ObjectNotification, ObjectTransform, Region, TextHAlign, TextStyle, TextVAlign,
};

pub use labelkit_core::{DocumentError, DocumentEvent, EventFilter, ObjectId};
