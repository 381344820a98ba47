//! Structured error types for the layout engine.
//!
//! Every rule, resolver step, and paginator step returns the first failure
//! straight up through its caller: the build is deterministic and pure, so
//! there is no partial layout and nothing to retry.

use thiserror::Error;

use crate::geometry::{Axis, Size};
use crate::tree::NodeId;

/// The unified error type returned by the layout engine.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// A size rule needed a parent or page context that is absent, or whose
    /// draw extent on the requested axis is zero.
    #[error("orphan node {node:?}: no parent or page with a usable draw extent")]
    OrphanNode { node: NodeId },

    /// Intrinsic sizing reached a leaf with no inherent extent to measure.
    #[error("leaf {node:?} has no inherent {axis} extent")]
    UnresolvableLeaf { node: NodeId, axis: Axis },

    /// A top-level subtree is taller than any page's usable height, so no
    /// page break can ever make it fit.
    #[error(
        "top-level node {node:?} has bounding height {height} but pages only fit {usable}"
    )]
    NodeTooTallForPage {
        node: NodeId,
        height: Size,
        usable: Size,
    },

    /// Two size rules depend on each other, e.g. a parent sized from its
    /// children while a child fills the parent along the same axis.
    #[error("circular size dependency at node {node:?} on the {axis} axis")]
    CircularDependency { node: NodeId, axis: Axis },

    /// A flow direction outside the closed set reached the resolver.
    #[error("unhandled child flow direction in resolver")]
    UnhandledFlowDirection,

    /// Internal misconstruction, e.g. a `LazySize` that was never bound to
    /// its owning node. Signals a bug in tree-building code, not bad input.
    #[error("invariant violation: {0}")]
    Invariant(String),

    /// A rendering backend failed.
    #[error("render backend: {0}")]
    Render(String),

    /// Writing rendered output to a sink failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
