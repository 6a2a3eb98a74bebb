//! Drawable object model.
//!
//! [`LabelObject`] is the capability surface a [`LabelDocument`] relies on.
//! [`DrawingObject`] is the built-in implementation covering every object
//! kind the editor places (box, ellipse, line, text, image, barcode).
//!
//! [`LabelDocument`]: crate::document::LabelDocument

use labelkit_core::ObjectId;
use serde::{Deserialize, Serialize};

mod object;
mod region;
mod style;
mod transform;

pub use object::{Capabilities, DrawingObject, ObjectKind};
pub use region::Region;
pub use style::{
    Color, ColorNode, FontWeight, LineStyle, TextHAlign, TextStyle, TextVAlign,
};
pub use transform::ObjectTransform;

/// Notification an object raises about itself.
///
/// Objects queue these as they are mutated; the owning document drains
/// them with [`LabelObject::take_notifications`] and republishes them as
/// document events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectNotification {
    /// Appearance or properties changed.
    Changed,
    /// Position changed.
    Moved,
}

/// A drawable object placed on a label.
///
/// Style setters default to no-ops: an object that does not support a
/// property ignores the call. Callers check the matching `can_*` query
/// first when they need to know whether a setter will take effect.
pub trait LabelObject: std::fmt::Debug + Send {
    fn id(&self) -> ObjectId;

    /// Bounding box in absolute label coordinates.
    fn extent(&self) -> Region;

    fn is_selected(&self) -> bool;
    fn select(&mut self);
    fn unselect(&mut self);

    fn set_position_relative(&mut self, dx: f64, dy: f64);
    /// Rotates about the object's own center.
    fn rotate(&mut self, theta_degs: f64);
    fn flip_horiz(&mut self);
    fn flip_vert(&mut self);

    fn can_text(&self) -> bool {
        false
    }

    fn can_fill(&self) -> bool {
        false
    }

    fn can_line_color(&self) -> bool {
        false
    }

    fn can_line_width(&self) -> bool {
        false
    }

    fn set_font_family(&mut self, _font_family: &str) {}
    fn set_font_size(&mut self, _font_size: f64) {}
    fn set_font_weight(&mut self, _font_weight: FontWeight) {}
    fn set_font_italic_flag(&mut self, _font_italic: bool) {}
    fn set_text_halign(&mut self, _halign: TextHAlign) {}
    fn set_text_valign(&mut self, _valign: TextVAlign) {}
    fn set_text_line_spacing(&mut self, _line_spacing: f64) {}
    fn set_text_color_node(&mut self, _color: &ColorNode) {}
    fn set_line_width(&mut self, _line_width: f64) {}
    fn set_line_color_node(&mut self, _color: &ColorNode) {}
    fn set_fill_color_node(&mut self, _color: &ColorNode) {}

    /// Drains the notifications queued since the last call, oldest first.
    fn take_notifications(&mut self) -> Vec<ObjectNotification>;
}

impl<T: LabelObject + ?Sized> LabelObject for Box<T> {
    fn id(&self) -> ObjectId {
        (**self).id()
    }

    fn extent(&self) -> Region {
        (**self).extent()
    }

    fn is_selected(&self) -> bool {
        (**self).is_selected()
    }

    fn select(&mut self) {
        (**self).select()
    }

    fn unselect(&mut self) {
        (**self).unselect()
    }

    fn set_position_relative(&mut self, dx: f64, dy: f64) {
        (**self).set_position_relative(dx, dy)
    }

    fn rotate(&mut self, theta_degs: f64) {
        (**self).rotate(theta_degs)
    }

    fn flip_horiz(&mut self) {
        (**self).flip_horiz()
    }

    fn flip_vert(&mut self) {
        (**self).flip_vert()
    }

    fn can_text(&self) -> bool {
        (**self).can_text()
    }

    fn can_fill(&self) -> bool {
        (**self).can_fill()
    }

    fn can_line_color(&self) -> bool {
        (**self).can_line_color()
    }

    fn can_line_width(&self) -> bool {
        (**self).can_line_width()
    }

    fn set_font_family(&mut self, font_family: &str) {
        (**self).set_font_family(font_family)
    }

    fn set_font_size(&mut self, font_size: f64) {
        (**self).set_font_size(font_size)
    }

    fn set_font_weight(&mut self, font_weight: FontWeight) {
        (**self).set_font_weight(font_weight)
    }

    fn set_font_italic_flag(&mut self, font_italic: bool) {
        (**self).set_font_italic_flag(font_italic)
    }

    fn set_text_halign(&mut self, halign: TextHAlign) {
        (**self).set_text_halign(halign)
    }

    fn set_text_valign(&mut self, valign: TextVAlign) {
        (**self).set_text_valign(valign)
    }

    fn set_text_line_spacing(&mut self, line_spacing: f64) {
        (**self).set_text_line_spacing(line_spacing)
    }

    fn set_text_color_node(&mut self, color: &ColorNode) {
        (**self).set_text_color_node(color)
    }

    fn set_line_width(&mut self, line_width: f64) {
        (**self).set_line_width(line_width)
    }

    fn set_line_color_node(&mut self, color: &ColorNode) {
        (**self).set_line_color_node(color)
    }

    fn set_fill_color_node(&mut self, color: &ColorNode) {
        (**self).set_fill_color_node(color)
    }

    fn take_notifications(&mut self) -> Vec<ObjectNotification> {
        (**self).take_notifications()
    }
}
