//! # Geometry Primitives
//!
//! The measurement vocabulary shared by the whole engine: scalar sizes, axes,
//! dimension-only rectangles, and per-side quads for margin, padding, and
//! borders. Everything here is a plain value type; no layout logic lives in
//! this module.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The fundamental unit of measurement for widths, heights, margins, and
/// every other measured area. Interpreted as millimetres by the built-in
/// paper sizes, but the engine itself is unit-agnostic.
pub type Size = f64;

/// One of the two layout axes. Width is an extent along [`Axis::Horizontal`],
/// height along [`Axis::Vertical`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => write!(f, "horizontal"),
            Axis::Vertical => write!(f, "vertical"),
        }
    }
}

/// A rectangle in unknown space: only dimensions, no position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub width: Size,
    pub height: Size,
}

impl Rect {
    pub fn new(width: Size, height: Size) -> Self {
        Self { width, height }
    }

    /// The rectangle's extent along the given axis.
    pub fn extent(&self, axis: Axis) -> Size {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

/// Per-side values for the four edges of a rectangle (margin, padding).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Edges {
    pub top: Size,
    pub right: Size,
    pub bottom: Size,
    pub left: Size,
}

impl Edges {
    pub fn new(top: Size, right: Size, bottom: Size, left: Size) -> Self {
        Self { top, right, bottom, left }
    }

    /// The same value on every side.
    pub fn uniform(v: Size) -> Self {
        Self { top: v, right: v, bottom: v, left: v }
    }

    /// Combined extent of both edges along an axis: left + right for
    /// horizontal, top + bottom for vertical.
    pub fn axis_sum(&self, axis: Axis) -> Size {
        match axis {
            Axis::Horizontal => self.left + self.right,
            Axis::Vertical => self.top + self.bottom,
        }
    }

    /// The leading edge along an axis: left for horizontal, top for vertical.
    pub fn leading(&self, axis: Axis) -> Size {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }
}

/// On/off state for each side of a rectangle, used for borders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeFlags {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl EdgeFlags {
    /// The same flag on every side.
    pub fn uniform(v: bool) -> Self {
        Self { top: v, right: v, bottom: v, left: v }
    }

    pub fn any(&self) -> bool {
        self.top || self.right || self.bottom || self.left
    }
}

/// An RGB color. Defaults used by [`crate::tree::NodeProps`] are the explicit
/// constants below rather than any process-wide state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}
