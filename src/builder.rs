//! # Document Builder
//!
//! The orchestrator that ties the pieces together: it owns the document and
//! a rendering backend, runs the sizing + positioning + pagination pass over
//! a list of top-level nodes, and hands the finished tree to the backend.
//!
//! The computation is deterministic and pure, so a failed build is final:
//! retrying without changing the input tree is meaningless.

use std::io::Write;

use crate::error::LayoutError;
use crate::geometry::Size;
use crate::paginate::flow_into_pages;
use crate::render::Renderer;
use crate::snapshot::LayoutInfo;
use crate::tree::{Document, NodeId, PaperSize};

/// Builds and renders one document with one backend.
pub struct DocumentBuilder<R: Renderer> {
    renderer: R,
    document: Document,
    built: bool,
}

impl<R: Renderer> DocumentBuilder<R> {
    pub fn new(renderer: R, size: PaperSize, margin: Size) -> Self {
        Self {
            renderer,
            document: Document::with_size(size, margin),
            built: false,
        }
    }

    /// The document, for reading pages and node geometry.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The document, for constructing the node tree before the build.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Resolve sizes, positions, and page breaks for the whole forest of
    /// top-level nodes, in order. Call exactly once per builder; topology is
    /// frozen from the first resolution onward, so a second pass over a
    /// grown tree would see half-settled state.
    pub fn create_document_tree(&mut self, roots: &[NodeId]) -> Result<(), LayoutError> {
        if self.built {
            return Err(LayoutError::Invariant(
                "create_document_tree called twice on one builder".into(),
            ));
        }
        for &root in roots {
            if let Some(parent) = self.document.node(root).parent() {
                return Err(LayoutError::Invariant(format!(
                    "top-level node {root:?} has parent {parent:?}; only \
                     parentless nodes can be paginated"
                )));
            }
        }
        flow_into_pages(&mut self.document, roots, &self.renderer)?;
        self.built = true;
        Ok(())
    }

    /// Render the built document and save it to a writer.
    pub fn render_to_writer(&self, sink: &mut dyn Write) -> Result<(), LayoutError> {
        let output = self.renderer.render(&self.document)?;
        self.renderer.save(output, sink)
    }

    /// Indented textual dump of the finished layout.
    pub fn outline(&self) -> String {
        self.document.outline()
    }

    /// Serializable geometry snapshot of the finished layout.
    pub fn layout_info(&self) -> LayoutInfo {
        LayoutInfo::capture(&self.document)
    }
}
