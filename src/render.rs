//! # Rendering Capabilities
//!
//! The engine computes geometry; it never paints. Backends implement
//! [`Renderer`] to walk the finished tree and produce output, and supply the
//! [`Measure`] half during layout so intrinsic sizing can ask what a piece
//! of content would occupy unconstrained.
//!
//! The capability context is passed explicitly into every resolution call
//! rather than stored on each node, so a backend borrows into the layout
//! pass only for as long as the pass runs.

use std::io::Write;

use crate::content::{Content, TextContent};
use crate::error::LayoutError;
use crate::geometry::Rect;
use crate::tree::Document;

/// Measurement capability consumed by the sizing pass.
pub trait Measure {
    /// The intrinsic width and height of an unconstrained content leaf, e.g.
    /// a piece of text laid out on a single line. `None` when the content
    /// has no inherent extent the backend can report.
    fn inherent_rect(&self, content: &Content) -> Option<Rect>;

    /// Split text into the lines required to render it into `rect`.
    ///
    /// Not used by core sizing or positioning; backends call this on their
    /// own render walk, and pre-wrapped results can feed back into leaf
    /// sizing through [`Measure::inherent_rect`].
    fn split_text(&self, rect: Rect, text: &TextContent) -> Vec<String>;
}

/// A complete rendering backend: measurement plus the ability to turn a
/// finished document tree into output.
pub trait Renderer: Measure {
    /// Whatever the backend produces: raw bytes, a handle into a drawing
    /// library, an image buffer.
    type Output;

    /// Walk the document read-only and produce the backend's output.
    fn render(&self, document: &Document) -> Result<Self::Output, LayoutError>;

    /// Persist a render result to a sink.
    fn save(&self, output: Self::Output, sink: &mut dyn Write) -> Result<(), LayoutError>;
}

/// A backend that renders nothing. Useful for layout-only runs: the demo
/// binary and any caller that only wants the geometry snapshot. It measures
/// nothing, so trees routed through it must not rely on intrinsic content
/// sizing.
pub struct NoopRenderer;

impl Measure for NoopRenderer {
    fn inherent_rect(&self, _content: &Content) -> Option<Rect> {
        None
    }

    fn split_text(&self, _rect: Rect, _text: &TextContent) -> Vec<String> {
        Vec::new()
    }
}

impl Renderer for NoopRenderer {
    type Output = ();

    fn render(&self, _document: &Document) -> Result<(), LayoutError> {
        Ok(())
    }

    fn save(&self, _output: (), _sink: &mut dyn Write) -> Result<(), LayoutError> {
        Ok(())
    }
}
