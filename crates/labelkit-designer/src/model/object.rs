use labelkit_core::ObjectId;
use serde::{Deserialize, Serialize};

use super::region::Region;
use super::style::{ColorNode, FontWeight, LineStyle, TextHAlign, TextStyle, TextVAlign};
use super::transform::ObjectTransform;
use super::{LabelObject, ObjectNotification};

/// The kinds of object that can be placed on a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    Box,
    Ellipse,
    Line,
    Text,
    Image,
    Barcode,
}

/// Which style properties an object accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub text: bool,
    pub fill: bool,
    pub line_color: bool,
    pub line_width: bool,
}

impl ObjectKind {
    pub fn capabilities(self) -> Capabilities {
        match self {
            ObjectKind::Box | ObjectKind::Ellipse => Capabilities {
                text: false,
                fill: true,
                line_color: true,
                line_width: true,
            },
            ObjectKind::Line => Capabilities {
                text: false,
                fill: false,
                line_color: true,
                line_width: true,
            },
            ObjectKind::Text => Capabilities {
                text: true,
                ..Capabilities::default()
            },
            // Bar color is edited through the line color property.
            ObjectKind::Barcode => Capabilities {
                line_color: true,
                ..Capabilities::default()
            },
            ObjectKind::Image => Capabilities::default(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ObjectKind::Box => "Box",
            ObjectKind::Ellipse => "Ellipse",
            ObjectKind::Line => "Line",
            ObjectKind::Text => "Text",
            ObjectKind::Image => "Image",
            ObjectKind::Barcode => "Barcode",
        }
    }
}

/// Drawing object on a label that can be selected and manipulated.
///
/// Geometry is an unrotated `w` x `h` box at `(x0, y0)` plus a linear
/// transform applied about the box center. Lines use `w`/`h` as their
/// `dx`/`dy`, which may be negative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawingObject {
    id: ObjectId,
    kind: ObjectKind,
    x0: f64,
    y0: f64,
    w: f64,
    h: f64,
    transform: ObjectTransform,
    #[serde(skip)]
    selected: bool,
    /// Text for text objects, encoded data for barcodes, file name for images.
    content: String,
    text_style: Option<TextStyle>,
    line_style: Option<LineStyle>,
    fill: Option<ColorNode>,
    #[serde(skip)]
    pending: Vec<ObjectNotification>,
}

impl DrawingObject {
    /// Creates a new drawing object with the default styles for its kind.
    pub fn new(kind: ObjectKind, x0: f64, y0: f64, w: f64, h: f64) -> Self {
        let caps = kind.capabilities();
        Self {
            id: ObjectId::new(),
            kind,
            x0,
            y0,
            w,
            h,
            transform: ObjectTransform::identity(),
            selected: false,
            content: String::new(),
            text_style: caps.text.then(TextStyle::default),
            line_style: (caps.line_color || caps.line_width).then(LineStyle::default),
            fill: caps.fill.then(ColorNode::default),
            pending: Vec::new(),
        }
    }

    pub fn new_box(x0: f64, y0: f64, w: f64, h: f64) -> Self {
        Self::new(ObjectKind::Box, x0, y0, w, h)
    }

    pub fn new_ellipse(x0: f64, y0: f64, w: f64, h: f64) -> Self {
        Self::new(ObjectKind::Ellipse, x0, y0, w, h)
    }

    pub fn new_line(x0: f64, y0: f64, dx: f64, dy: f64) -> Self {
        Self::new(ObjectKind::Line, x0, y0, dx, dy)
    }

    pub fn new_text(x0: f64, y0: f64, w: f64, h: f64, text: impl Into<String>) -> Self {
        let mut obj = Self::new(ObjectKind::Text, x0, y0, w, h);
        obj.content = text.into();
        obj
    }

    pub fn new_image(x0: f64, y0: f64, w: f64, h: f64, filename: impl Into<String>) -> Self {
        let mut obj = Self::new(ObjectKind::Image, x0, y0, w, h);
        obj.content = filename.into();
        obj
    }

    pub fn new_barcode(x0: f64, y0: f64, w: f64, h: f64, data: impl Into<String>) -> Self {
        let mut obj = Self::new(ObjectKind::Barcode, x0, y0, w, h);
        obj.content = data.into();
        obj
    }

    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x0, self.y0)
    }

    pub fn size(&self) -> (f64, f64) {
        (self.w, self.h)
    }

    pub fn transform(&self) -> &ObjectTransform {
        &self.transform
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn text_style(&self) -> Option<&TextStyle> {
        self.text_style.as_ref()
    }

    pub fn line_style(&self) -> Option<&LineStyle> {
        self.line_style.as_ref()
    }

    pub fn fill_color_node(&self) -> Option<&ColorNode> {
        self.fill.as_ref()
    }

    /// Moves the object so its unrotated origin is at `(x0, y0)`.
    pub fn set_position(&mut self, x0: f64, y0: f64) {
        if self.x0 != x0 || self.y0 != y0 {
            self.x0 = x0;
            self.y0 = y0;
            self.pending.push(ObjectNotification::Moved);
        }
    }

    pub fn set_size(&mut self, w: f64, h: f64) {
        if self.w != w || self.h != h {
            self.w = w;
            self.h = h;
            self.pending.push(ObjectNotification::Changed);
        }
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        let content = content.into();
        if self.content != content {
            self.content = content;
            self.pending.push(ObjectNotification::Changed);
        }
    }

    /// Applies `f` to the text style if this object has one, queueing a
    /// change notification when the style actually changed.
    fn update_text_style(&mut self, f: impl FnOnce(&mut TextStyle)) {
        if let Some(style) = self.text_style.as_mut() {
            let before = style.clone();
            f(style);
            if *style != before {
                self.pending.push(ObjectNotification::Changed);
            }
        }
    }

    fn update_line_style(&mut self, f: impl FnOnce(&mut LineStyle)) {
        if let Some(style) = self.line_style.as_mut() {
            let before = style.clone();
            f(style);
            if *style != before {
                self.pending.push(ObjectNotification::Changed);
            }
        }
    }
}

impl LabelObject for DrawingObject {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn extent(&self) -> Region {
        if self.transform.is_identity() {
            return Region::new(self.x0, self.y0, self.x0 + self.w, self.y0 + self.h).normalized();
        }

        let half_w = self.w / 2.0;
        let half_h = self.h / 2.0;
        let cx = self.x0 + half_w;
        let cy = self.y0 + half_h;

        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;

        for (x, y) in [
            (-half_w, -half_h),
            (half_w, -half_h),
            (half_w, half_h),
            (-half_w, half_h),
        ] {
            let (tx, ty) = self.transform.apply(x, y);
            min_x = min_x.min(cx + tx);
            min_y = min_y.min(cy + ty);
            max_x = max_x.max(cx + tx);
            max_y = max_y.max(cy + ty);
        }

        Region::new(min_x, min_y, max_x, max_y)
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
        if dx != 0.0 || dy != 0.0 {
            self.x0 += dx;
            self.y0 += dy;
            self.pending.push(ObjectNotification::Moved);
        }
    }

    fn rotate(&mut self, theta_degs: f64) {
        if theta_degs != 0.0 {
            self.transform.rotate(theta_degs);
            self.pending.push(ObjectNotification::Changed);
        }
    }

    fn flip_horiz(&mut self) {
        self.transform.flip_horiz();
        self.pending.push(ObjectNotification::Changed);
    }

    fn flip_vert(&mut self) {
        self.transform.flip_vert();
        self.pending.push(ObjectNotification::Changed);
    }

    fn can_text(&self) -> bool {
        self.kind.capabilities().text
    }

    fn can_fill(&self) -> bool {
        self.kind.capabilities().fill
    }

    fn can_line_color(&self) -> bool {
        self.kind.capabilities().line_color
    }

    fn can_line_width(&self) -> bool {
        self.kind.capabilities().line_width
    }

    fn set_font_family(&mut self, font_family: &str) {
        self.update_text_style(|s| s.font_family = font_family.to_string());
    }

    fn set_font_size(&mut self, font_size: f64) {
        self.update_text_style(|s| s.font_size = font_size);
    }

    fn set_font_weight(&mut self, font_weight: FontWeight) {
        self.update_text_style(|s| s.font_weight = font_weight);
    }

    fn set_font_italic_flag(&mut self, font_italic: bool) {
        self.update_text_style(|s| s.font_italic = font_italic);
    }

    fn set_text_halign(&mut self, halign: TextHAlign) {
        self.update_text_style(|s| s.halign = halign);
    }

    fn set_text_valign(&mut self, valign: TextVAlign) {
        self.update_text_style(|s| s.valign = valign);
    }

    fn set_text_line_spacing(&mut self, line_spacing: f64) {
        self.update_text_style(|s| s.line_spacing = line_spacing);
    }

    fn set_text_color_node(&mut self, color: &ColorNode) {
        self.update_text_style(|s| s.color = color.clone());
    }

    fn set_line_width(&mut self, line_width: f64) {
        if self.can_line_width() {
            self.update_line_style(|s| s.width = line_width);
        }
    }

    fn set_line_color_node(&mut self, color: &ColorNode) {
        if self.can_line_color() {
            self.update_line_style(|s| s.color = color.clone());
        }
    }

    fn set_fill_color_node(&mut self, color: &ColorNode) {
        if let Some(fill) = self.fill.as_mut() {
            if fill != color {
                *fill = color.clone();
                self.pending.push(ObjectNotification::Changed);
            }
        }
    }

    fn take_notifications(&mut self) -> Vec<ObjectNotification> {
        std::mem::take(&mut self.pending)
    }
}
