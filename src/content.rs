//! # Leaf Content
//!
//! Content nodes render actual material (text, images) inside the rect of
//! their owning layout node. A node either has children or content, never
//! both. The engine never decodes or measures content itself: inherent
//! extents and line splitting come from the [`crate::render::Measure`]
//! capability supplied by a rendering backend.

use serde::{Deserialize, Serialize};

use crate::geometry::{Color, Size};

/// The closed set of content kinds a leaf node can carry. New kinds extend
/// this enum rather than going through open-ended dynamic dispatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Content {
    Text(TextContent),
    Image(ImageContent),
}

/// Horizontal alignment of text within its rect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// What to do when text does not fit the rect it is rendered into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Overflow {
    /// Wrap into as many lines as fit, truncating the last line.
    #[default]
    Wrap,
    /// Cut the text off at the rect boundary without wrapping.
    Truncate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontStyle {
    #[default]
    Regular,
    Italic,
    Bold,
    Underline,
    StrikeOut,
}

/// A paragraph of text, possibly carrying a link.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextContent {
    pub text: String,
    #[serde(default)]
    pub font_family: String,
    #[serde(default)]
    pub font_style: FontStyle,
    /// Font size in points (1pt == 0.3528mm).
    pub font_size: Size,
    #[serde(default = "default_text_color")]
    pub color: Color,
    /// Multiplier applied to the font size to get the line height.
    pub line_height: Size,
    #[serde(default)]
    pub alignment: TextAlign,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default)]
    pub overflow: Overflow,
}

fn default_text_color() -> Color {
    Color::BLACK
}

impl TextContent {
    /// Line height in millimetres for this text.
    pub fn line_height_mm(&self) -> Size {
        const PT_TO_MM: Size = 0.3528;
        self.font_size * PT_TO_MM * self.line_height
    }
}

/// How an image is scaled into its parent's draw rect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageFit {
    /// Fill the parent's draw rect without preserving aspect ratio.
    #[default]
    Stretch,
    /// Preserve the aspect ratio of the original image.
    Preserve,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageAlign {
    #[default]
    Center,
    Start,
    End,
}

/// An image referenced by path. Decoding is the rendering backend's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageContent {
    /// Path or URI understood by the rendering backend.
    pub src: String,
    #[serde(default)]
    pub fit: ImageFit,
    #[serde(default)]
    pub alignment: ImageAlign,
}
