//! Style properties pushed to every selected object.
//!
//! Setters are applied regardless of capability; objects that do not carry
//! a property ignore it.

use super::LabelDocument;
use crate::model::{ColorNode, FontWeight, LabelObject, TextHAlign, TextVAlign};

impl<O: LabelObject> LabelDocument<O> {
    pub fn set_selection_font_family(&mut self, font_family: &str) {
        self.for_each_selected(|o| o.set_font_family(font_family));
        self.commit();
    }

    /// Font size in points.
    pub fn set_selection_font_size(&mut self, font_size: f64) {
        self.for_each_selected(|o| o.set_font_size(font_size));
        self.commit();
    }

    pub fn set_selection_font_weight(&mut self, font_weight: FontWeight) {
        self.for_each_selected(|o| o.set_font_weight(font_weight));
        self.commit();
    }

    pub fn set_selection_font_italic_flag(&mut self, font_italic: bool) {
        self.for_each_selected(|o| o.set_font_italic_flag(font_italic));
        self.commit();
    }

    pub fn set_selection_text_halign(&mut self, halign: TextHAlign) {
        self.for_each_selected(|o| o.set_text_halign(halign));
        self.commit();
    }

    pub fn set_selection_text_valign(&mut self, valign: TextVAlign) {
        self.for_each_selected(|o| o.set_text_valign(valign));
        self.commit();
    }

    pub fn set_selection_text_line_spacing(&mut self, line_spacing: f64) {
        self.for_each_selected(|o| o.set_text_line_spacing(line_spacing));
        self.commit();
    }

    pub fn set_selection_text_color_node(&mut self, color: &ColorNode) {
        self.for_each_selected(|o| o.set_text_color_node(color));
        self.commit();
    }

    /// Line width in points.
    pub fn set_selection_line_width(&mut self, line_width: f64) {
        self.for_each_selected(|o| o.set_line_width(line_width));
        self.commit();
    }

    pub fn set_selection_line_color_node(&mut self, color: &ColorNode) {
        self.for_each_selected(|o| o.set_line_color_node(color));
        self.commit();
    }

    pub fn set_selection_fill_color_node(&mut self, color: &ColorNode) {
        self.for_each_selected(|o| o.set_fill_color_node(color));
        self.commit();
    }
}
