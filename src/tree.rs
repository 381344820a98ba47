//! # Layout Tree
//!
//! The node/page/document data model. A [`Document`] is an arena: it owns
//! every [`Node`] in a flat vector indexed by stable [`NodeId`] handles, and
//! every [`Page`] the same way. Parent and page back-references are
//! non-owning handles used only during rule evaluation, never for teardown,
//! so the parent/child reference cycle of the classic pointer design simply
//! does not exist here.
//!
//! Layout happens in two phases over this tree: first widths and heights are
//! resolved (see [`crate::size`]), then absolute x/y coordinates are assigned
//! by the position resolver and the paginator. Topology is expected to be
//! immutable once those phases begin.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::content::Content;
use crate::error::LayoutError;
use crate::geometry::{Axis, Color, EdgeFlags, Edges, Rect, Size};
use crate::size::LazySize;

/// Stable handle to a node inside a [`Document`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub(crate) usize);

/// Stable handle to a page inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageId(pub(crate) usize);

/// Direction in which a node lays out its children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowDirection {
    /// Children flow top to bottom.
    #[default]
    Vertical,
    /// Children flow left to right.
    Horizontal,
}

impl FlowDirection {
    /// The axis parallel to the flow.
    pub fn main_axis(self) -> Axis {
        match self {
            FlowDirection::Vertical => Axis::Vertical,
            FlowDirection::Horizontal => Axis::Horizontal,
        }
    }

    /// The axis perpendicular to the flow.
    pub fn cross_axis(self) -> Axis {
        match self {
            FlowDirection::Vertical => Axis::Horizontal,
            FlowDirection::Horizontal => Axis::Vertical,
        }
    }
}

/// Where children sit along one axis of their parent's draw rect.
///
/// "Justify-between" is intentionally left out: this engine is for statically
/// known layouts, where setting width percentages directly is clearer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Align {
    #[default]
    Start,
    End,
    Center,
}

/// Two-axis alignment for a node's children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildAlignment {
    pub horizontal: Align,
    pub vertical: Align,
}

/// The configurable subset of [`Node`] accepted by the construction API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NodeProps {
    pub border: EdgeFlags,
    pub border_color: Color,
    pub show_fill: bool,
    pub fill_color: Color,
    pub padding: Edges,
    pub margin: Edges,
    pub width: LazySize,
    pub height: LazySize,
    pub align: ChildAlignment,
    pub flow: FlowDirection,
}

impl Default for NodeProps {
    fn default() -> Self {
        Self {
            border: EdgeFlags::default(),
            border_color: Color::BLACK,
            show_fill: false,
            fill_color: Color::WHITE,
            padding: Edges::default(),
            margin: Edges::default(),
            width: LazySize::fill(),
            height: LazySize::fill(),
            align: ChildAlignment::default(),
            flow: FlowDirection::default(),
        }
    }
}

/// A rectangular container into which content can be rendered. Layout nodes
/// control all layout: size, padding, margin, flow, and alignment. Content
/// leaves (text, images) carry a [`Content`] payload and no children.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) parent: Option<NodeId>,
    pub(crate) page: Option<PageId>,
    pub(crate) children: Vec<NodeId>,
    pub content: Option<Content>,
    pub width: LazySize,
    pub height: LazySize,
    pub border: EdgeFlags,
    pub border_color: Color,
    pub show_fill: bool,
    pub fill_color: Color,
    pub padding: Edges,
    pub margin: Edges,
    pub align: ChildAlignment,
    pub flow: FlowDirection,
    /// Absolute position, written by the position resolver. Zero until then.
    pub x: Size,
    pub y: Size,
}

impl Node {
    fn from_props(parent: Option<NodeId>, props: NodeProps) -> Self {
        Self {
            parent,
            page: None,
            children: Vec::new(),
            content: None,
            width: props.width,
            height: props.height,
            border: props.border,
            border_color: props.border_color,
            show_fill: props.show_fill,
            fill_color: props.fill_color,
            padding: props.padding,
            margin: props.margin,
            align: props.align,
            flow: props.flow,
            x: 0.0,
            y: 0.0,
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn page(&self) -> Option<PageId> {
        self.page
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// A node is a leaf when it carries content; it can never have both
    /// content and children.
    pub fn is_leaf(&self) -> bool {
        self.content.is_some()
    }
}

/// A page: statically sized at the dimensions fixed by the document's
/// template, owning the top-level nodes placed onto it.
#[derive(Debug, Clone)]
pub struct Page {
    pub width: Size,
    pub height: Size,
    pub margin: Edges,
    pub(crate) nodes: Vec<NodeId>,
}

impl Page {
    /// The area inside the page into which top-level nodes can render.
    pub fn draw_rect(&self) -> Rect {
        Rect {
            width: self.width - self.margin.left - self.margin.right,
            height: self.height - self.margin.top - self.margin.bottom,
        }
    }

    /// Top-level nodes placed onto this page, in placement order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }
}

/// Fixed page dimensions used for every page in a document. Page breaks
/// clone this template; per-page settings are deliberately not a thing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageTemplate {
    pub width: Size,
    pub height: Size,
    pub margin: Edges,
}

/// Standard paper sizes, dimensions in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaperSize {
    Letter,
    A4,
}

impl PaperSize {
    /// Returns (width, height) in millimetres.
    pub fn dimensions(self) -> (Size, Size) {
        match self {
            PaperSize::Letter => (216.0, 279.0),
            PaperSize::A4 => (210.0, 297.0),
        }
    }
}

impl PageTemplate {
    pub fn new(size: PaperSize, margin: Size) -> Self {
        let (width, height) = size.dimensions();
        Self {
            width,
            height,
            margin: Edges::uniform(margin),
        }
    }
}

/// The document: an ordered sequence of pages plus the arena that owns every
/// layout node. Pages grow only through page breaks decided by the paginator.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    pages: Vec<Page>,
    template: PageTemplate,
}

impl Document {
    /// Create a document with a single empty page cut from the template.
    pub fn new(template: PageTemplate) -> Self {
        let first = Page {
            width: template.width,
            height: template.height,
            margin: template.margin,
            nodes: Vec::new(),
        };
        Self {
            nodes: Vec::new(),
            pages: vec![first],
            template,
        }
    }

    pub fn with_size(size: PaperSize, margin: Size) -> Self {
        Self::new(PageTemplate::new(size, margin))
    }

    // ── Node construction ───────────────────────────────────────────

    /// Insert a plain container node. `parent: None` makes it a top-level
    /// node eligible for pagination.
    pub fn container(
        &mut self,
        parent: Option<NodeId>,
        props: NodeProps,
    ) -> Result<NodeId, LayoutError> {
        self.push(parent, props, None)
    }

    /// Insert a content leaf directly. The leaf cannot take children.
    pub fn leaf(
        &mut self,
        parent: Option<NodeId>,
        props: NodeProps,
        content: Content,
    ) -> Result<NodeId, LayoutError> {
        self.push(parent, props, Some(content))
    }

    /// Insert a text component. A text component is really two nodes: a
    /// container carrying the caller's props (so the text can have margin and
    /// padding), and inside it a leaf that fills the container and holds the
    /// actual content.
    pub fn text(
        &mut self,
        parent: Option<NodeId>,
        props: NodeProps,
        text: crate::content::TextContent,
    ) -> Result<NodeId, LayoutError> {
        self.wrapped_leaf(parent, props, Content::Text(text))
    }

    /// Insert an image component, wrapped the same way as [`Document::text`].
    pub fn image(
        &mut self,
        parent: Option<NodeId>,
        props: NodeProps,
        image: crate::content::ImageContent,
    ) -> Result<NodeId, LayoutError> {
        self.wrapped_leaf(parent, props, Content::Image(image))
    }

    fn wrapped_leaf(
        &mut self,
        parent: Option<NodeId>,
        props: NodeProps,
        content: Content,
    ) -> Result<NodeId, LayoutError> {
        // The inner leaf mirrors the wrapper's rule kind: an
        // intrinsically-sized wrapper needs an intrinsically-sized leaf
        // underneath it (a filling leaf there would be a dependency cycle);
        // every other wrapper just has the leaf fill its draw rect.
        let mirror = |slot: &LazySize| match slot.rule() {
            Some(crate::size::SizeRule::FromChildren) => LazySize::from_children(),
            _ => LazySize::fill(),
        };
        let inner = NodeProps {
            width: mirror(&props.width),
            height: mirror(&props.height),
            ..NodeProps::default()
        };
        let outer = self.push(parent, props, None)?;
        let _ = self.push(Some(outer), inner, Some(content))?;
        Ok(outer)
    }

    fn push(
        &mut self,
        parent: Option<NodeId>,
        props: NodeProps,
        content: Option<Content>,
    ) -> Result<NodeId, LayoutError> {
        if let Some(p) = parent {
            if self.node(p).content.is_some() {
                return Err(LayoutError::Invariant(format!(
                    "cannot add a child to content leaf {p:?}; a node is \
                     either a container or a content leaf, never both"
                )));
            }
        }

        let id = NodeId(self.nodes.len());
        let mut node = Node::from_props(parent, props);
        node.content = content;
        // Every LazySize must be bound to its owning node before first use.
        node.width.bind(id);
        node.height.bind(id);
        self.nodes.push(node);

        if let Some(p) = parent {
            self.nodes[p.0].children.push(id);
        }
        Ok(id)
    }

    // ── Accessors ───────────────────────────────────────────────────

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn page(&self, id: PageId) -> &Page {
        &self.pages[id.0]
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_ids(&self) -> impl Iterator<Item = PageId> {
        (0..self.pages.len()).map(PageId)
    }

    pub fn first_page(&self) -> PageId {
        PageId(0)
    }

    pub fn template(&self) -> &PageTemplate {
        &self.template
    }

    // ── Page management (paginator only) ────────────────────────────

    /// Allocate a new page cloned from the template and return its handle.
    pub(crate) fn add_page(&mut self) -> PageId {
        let id = PageId(self.pages.len());
        self.pages.push(Page {
            width: self.template.width,
            height: self.template.height,
            margin: self.template.margin,
            nodes: Vec::new(),
        });
        id
    }

    /// Attach a top-level node to a page so size rules can reach the page's
    /// draw rect and sibling list.
    pub(crate) fn attach_to_page(&mut self, page: PageId, node: NodeId) {
        self.pages[page.0].nodes.push(node);
        self.nodes[node.0].page = Some(page);
    }

    // ── Introspection ───────────────────────────────────────────────

    /// Indented textual dump of pages and node rects. Sizes appear only for
    /// slots the build pass actually resolved, so call this after
    /// [`crate::builder::DocumentBuilder::create_document_tree`].
    pub fn outline(&self) -> String {
        let mut out = String::new();
        for page in &self.pages {
            let _ = writeln!(out, "Page (w: {:.2}, h: {:.2}) {{", page.width, page.height);
            for &node in &page.nodes {
                self.outline_node(&mut out, node, 1);
            }
            let _ = writeln!(out, "}}");
        }
        out
    }

    fn outline_node(&self, out: &mut String, id: NodeId, depth: usize) {
        let node = self.node(id);
        let pad = "\t".repeat(depth);
        let fmt_size = |s: Option<Size>| match s {
            Some(v) => format!("{v:.2}"),
            None => "?".to_string(),
        };
        let _ = writeln!(
            out,
            "{pad}Node (x: {:.2}, y: {:.2}, w: {}, h: {}) {{",
            node.x,
            node.y,
            fmt_size(node.width.peek()),
            fmt_size(node.height.peek()),
        );
        for &child in &node.children {
            self.outline_node(out, child, depth + 1);
        }
        if let Some(content) = &node.content {
            let kind = match content {
                Content::Text(t) => format!("Text({:?})", t.text),
                Content::Image(i) => format!("Image({:?})", i.src),
            };
            let _ = writeln!(out, "{pad}\t{kind}");
        }
        let _ = writeln!(out, "{pad}}}");
    }
}
