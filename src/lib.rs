//! # Folio
//!
//! A page-native box layout engine.
//!
//! Folio computes a rectangular layout for a tree of boxes — widths and
//! heights first, absolute coordinates second — and flows the result into
//! fixed-size pages, breaking between top-level boxes as needed. Drawing is
//! someone else's job: a rendering backend implements the [`render`]
//! capability traits and walks the finished tree read-only.
//!
//! Sizes are declarative. A box can be a literal number of units, a
//! percentage of its parent's draw rect, the space its siblings leave over,
//! or the extent of its own subtree. These rules pull in different
//! directions (percent and fill look up, from-children looks down), so
//! values are modeled as [`size::LazySize`] slots resolved on demand against
//! the finished tree, with a cycle guard instead of a blown stack when an
//! author wires the directions into a loop.
//!
//! ## Architecture
//!
//! ```text
//! Construction (builder API)
//!        ↓
//!   [tree]      — arena document: nodes, pages, rect arithmetic
//!        ↓
//!   [size]      — lazy rule resolution: percent, fill, from-children
//!        ↓
//!   [position]  — cursor walk: flow direction + two-axis alignment
//!        ↓
//!   [paginate]  — top-level flow, page breaks
//!        ↓
//!   [render]    — backend capability traits (measure, render, save)
//! ```
//!
//! ## Example
//!
//! ```
//! use folio::builder::DocumentBuilder;
//! use folio::render::NoopRenderer;
//! use folio::size::LazySize;
//! use folio::tree::{NodeProps, PaperSize};
//!
//! let mut builder = DocumentBuilder::new(NoopRenderer, PaperSize::Letter, 5.0);
//! let doc = builder.document_mut();
//! let root = doc
//!     .container(
//!         None,
//!         NodeProps {
//!             width: LazySize::fill(),
//!             height: LazySize::fixed(200.0),
//!             ..NodeProps::default()
//!         },
//!     )
//!     .unwrap();
//! let _half = doc
//!     .container(
//!         Some(root),
//!         NodeProps {
//!             width: LazySize::percent(50.0),
//!             height: LazySize::fixed(50.0),
//!             ..NodeProps::default()
//!         },
//!     )
//!     .unwrap();
//! builder.create_document_tree(&[root]).unwrap();
//! assert_eq!(builder.document().pages().len(), 1);
//! ```

pub mod builder;
pub mod content;
pub mod error;
pub mod geometry;
mod paginate;
mod position;
pub mod render;
pub mod size;
pub mod snapshot;
pub mod tree;

pub use builder::DocumentBuilder;
pub use content::{Content, ImageContent, TextContent};
pub use error::LayoutError;
pub use geometry::{Axis, Color, EdgeFlags, Edges, Rect, Size};
pub use render::{Measure, NoopRenderer, Renderer};
pub use size::{LazySize, SizeRule};
pub use snapshot::LayoutInfo;
pub use tree::{
    Align, ChildAlignment, Document, FlowDirection, Node, NodeId, NodeProps, Page, PageId,
    PageTemplate, PaperSize,
};
