//! Style values carried by drawable objects.

use serde::{Deserialize, Serialize};

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// A color that is either fixed or taken from a merge field at print time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColorNode {
    /// When set, `key` names the merge field that supplies the color.
    pub field_flag: bool,
    pub color: Color,
    pub key: String,
}

impl ColorNode {
    pub fn from_color(color: Color) -> Self {
        Self {
            field_flag: false,
            color,
            key: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontWeight {
    Light,
    #[default]
    Normal,
    DemiBold,
    Bold,
    Black,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextHAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextVAlign {
    #[default]
    Top,
    Center,
    Bottom,
}

/// Text properties of text-capable objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_family: String,
    /// Font size in points.
    pub font_size: f64,
    pub font_weight: FontWeight,
    pub font_italic: bool,
    pub halign: TextHAlign,
    pub valign: TextVAlign,
    /// Line spacing as a multiple of the font's line height.
    pub line_spacing: f64,
    pub color: ColorNode,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: "Sans".to_string(),
            font_size: 10.0,
            font_weight: FontWeight::Normal,
            font_italic: false,
            halign: TextHAlign::Left,
            valign: TextVAlign::Top,
            line_spacing: 1.0,
            color: ColorNode::from_color(Color::BLACK),
        }
    }
}

/// Outline properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    /// Stroke width in points.
    pub width: f64,
    pub color: ColorNode,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            width: 1.0,
            color: ColorNode::from_color(Color::BLACK),
        }
    }
}

