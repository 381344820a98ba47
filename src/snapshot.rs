//! # Layout Snapshots
//!
//! Serializable geometry metadata for a finished layout: every page, every
//! node rect, ready to feed a debug overlay or an inspector panel as JSON.
//! Sizes appear only for slots the build pass actually resolved.

use serde::Serialize;

use crate::content::Content;
use crate::geometry::Size;
use crate::tree::{Document, NodeId};

/// Complete layout metadata for all pages.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutInfo {
    pub pages: Vec<PageInfo>,
}

/// Layout metadata for a single page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub width: Size,
    pub height: Size,
    pub content_x: Size,
    pub content_y: Size,
    pub content_width: Size,
    pub content_height: Size,
    pub nodes: Vec<NodeInfo>,
}

/// One node's resolved rect, with its subtree.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeInfo {
    pub x: Size,
    pub y: Size,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Size>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Size>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeInfo>,
}

impl LayoutInfo {
    /// Capture the current geometry of a document.
    pub fn capture(doc: &Document) -> Self {
        let pages = doc
            .pages()
            .iter()
            .map(|page| {
                let draw = page.draw_rect();
                PageInfo {
                    width: page.width,
                    height: page.height,
                    content_x: page.margin.left,
                    content_y: page.margin.top,
                    content_width: draw.width,
                    content_height: draw.height,
                    nodes: page
                        .nodes()
                        .iter()
                        .map(|&id| NodeInfo::capture(doc, id))
                        .collect(),
                }
            })
            .collect();
        Self { pages }
    }

    /// The snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl NodeInfo {
    fn capture(doc: &Document, id: NodeId) -> Self {
        let node = doc.node(id);
        Self {
            x: node.x,
            y: node.y,
            width: node.width.peek(),
            height: node.height.peek(),
            content: node.content.as_ref().map(|c| match c {
                Content::Text(_) => "text",
                Content::Image(_) => "image",
            }),
            children: node
                .children()
                .iter()
                .map(|&child| NodeInfo::capture(doc, child))
                .collect(),
        }
    }
}
