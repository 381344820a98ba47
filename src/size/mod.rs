//! # Lazy Size Resolution
//!
//! A node's width or height is often defined by values that do not exist at
//! construction time: the height of its children, the draw rect of its
//! parent, the space its siblings leave over. [`LazySize`] models such a
//! value as a deferred pure rule, resolved on demand against the finished
//! tree. Despite the family resemblance to async futures, nothing here has
//! anything to do with concurrency.
//!
//! Resolution is memoized per build pass: a `Pending` slot moves to
//! `Resolving` while its rule runs and to `Resolved` on success. Rules are
//! pure functions of already-settled tree state, so the cached value can
//! never go stale within a pass — and re-entering a slot that is still
//! `Resolving` is exactly a dependency cycle, reported as
//! [`LayoutError::CircularDependency`] instead of blowing the call stack.

pub mod rules;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::geometry::{Axis, Rect, Size};
use crate::render::Measure;
use crate::tree::{Document, FlowDirection, NodeId};

/// The rule library: each variant is a pure function of (document, node,
/// axis), evaluated by [`rules`]. The axis is supplied at resolution time by
/// which slot (width or height) is being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "camelCase")]
pub enum SizeRule {
    /// A percentage of the parent's (or enclosing page's) draw extent.
    Percent { pct: Size },
    /// Whatever space the siblings leave over in the parent's draw rect.
    Fill,
    /// The extent of the subtree below this node: sum along the flow axis,
    /// max across it. For content leaves, the content's inherent extent.
    FromChildren,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
enum SizeState {
    Resolved { value: Size },
    /// Rule evaluation is underway; seeing this again means a cycle.
    Resolving,
    Pending { rule: SizeRule },
}

/// A deferred scalar size bound to exactly one owning node.
///
/// Binding happens when the node is pushed into the [`Document`] arena; a
/// `LazySize` that was never bound fails with an invariant error, which can
/// only mean tree-construction code is wrong, never bad user input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LazySize {
    #[serde(flatten)]
    state: SizeState,
    #[serde(skip)]
    owner: Option<NodeId>,
}

impl LazySize {
    /// An already-resolved size, for dimensions known up front.
    pub fn fixed(value: Size) -> Self {
        Self {
            state: SizeState::Resolved { value },
            owner: None,
        }
    }

    /// Resolves to `pct` percent of the parent draw rect's extent.
    pub fn percent(pct: Size) -> Self {
        Self::pending(SizeRule::Percent { pct })
    }

    /// Resolves to the space left in the parent draw rect after all sibling
    /// subtrees have been accounted for.
    pub fn fill() -> Self {
        Self::pending(SizeRule::Fill)
    }

    /// Resolves to the extent of the tree below this node.
    pub fn from_children() -> Self {
        Self::pending(SizeRule::FromChildren)
    }

    fn pending(rule: SizeRule) -> Self {
        Self {
            state: SizeState::Pending { rule },
            owner: None,
        }
    }

    pub(crate) fn bind(&mut self, owner: NodeId) {
        self.owner = Some(owner);
    }

    /// The unevaluated rule, if this slot is still pending.
    pub fn rule(&self) -> Option<SizeRule> {
        match self.state {
            SizeState::Pending { rule } => Some(rule),
            _ => None,
        }
    }

    /// The resolved value, if this slot has settled. Never evaluates.
    pub fn peek(&self) -> Option<Size> {
        match self.state {
            SizeState::Resolved { value } => Some(value),
            _ => None,
        }
    }

    /// Whether the value is already known without further evaluation.
    pub fn is_known(&self) -> bool {
        matches!(self.state, SizeState::Resolved { .. })
    }
}

impl Default for LazySize {
    /// The constructors default to `fill`, matching the most common want:
    /// occupy whatever the parent has left.
    fn default() -> Self {
        Self::fill()
    }
}

/// Context a rule sees when it climbs to its parent: the parent's draw
/// extent on the requested axis, the flow direction governing the node, and
/// the sibling list (including the node itself).
pub(crate) struct ParentContext {
    pub extent: Size,
    pub flow: FlowDirection,
    pub siblings: Vec<NodeId>,
}

impl Document {
    /// Resolve the node's extent along an axis, evaluating its rule against
    /// current tree state if it has not settled yet.
    pub fn resolve_extent(
        &mut self,
        id: NodeId,
        axis: Axis,
        measure: &dyn Measure,
    ) -> Result<Size, LayoutError> {
        let slot = self.slot(id, axis);
        if slot.owner.is_none() {
            return Err(LayoutError::Invariant(format!(
                "size slot of {id:?} on the {axis} axis was never bound to \
                 its owning node; node constructors must bind every LazySize"
            )));
        }

        let rule = match slot.state {
            SizeState::Resolved { value } => return Ok(value),
            SizeState::Resolving => {
                return Err(LayoutError::CircularDependency { node: id, axis })
            }
            SizeState::Pending { rule } => rule,
        };

        self.slot_mut(id, axis).state = SizeState::Resolving;
        let result = match rule {
            SizeRule::Percent { pct } => rules::percent(self, id, axis, pct, measure),
            SizeRule::Fill => rules::fill(self, id, axis, measure),
            SizeRule::FromChildren => rules::from_children(self, id, axis, measure),
        };
        self.slot_mut(id, axis).state = match result {
            Ok(value) => SizeState::Resolved { value },
            // Leave the rule in place; the first error aborts the build
            // anyway, but a half-poisoned slot would make that harder to see.
            Err(_) => SizeState::Pending { rule },
        };
        result
    }

    /// The rect into which the node renders: its resolved width and height.
    pub fn render_rect(
        &mut self,
        id: NodeId,
        measure: &dyn Measure,
    ) -> Result<Rect, LayoutError> {
        Ok(Rect {
            width: self.resolve_extent(id, Axis::Horizontal, measure)?,
            height: self.resolve_extent(id, Axis::Vertical, measure)?,
        })
    }

    /// The rect inside of which nothing but this node may render: the render
    /// rect expanded by the node's margins.
    pub fn bounding_rect(
        &mut self,
        id: NodeId,
        measure: &dyn Measure,
    ) -> Result<Rect, LayoutError> {
        let mut rect = self.render_rect(id, measure)?;
        let margin = self.node(id).margin;
        rect.width += margin.left + margin.right;
        rect.height += margin.top + margin.bottom;
        Ok(rect)
    }

    /// The rect into which children of the node must render: the render rect
    /// shrunk by the node's padding. Negative extents are not rejected; an
    /// author whose percentages and fills do not add up gets them back as
    /// plain numbers.
    pub fn draw_rect(
        &mut self,
        id: NodeId,
        measure: &dyn Measure,
    ) -> Result<Rect, LayoutError> {
        let mut rect = self.render_rect(id, measure)?;
        let padding = self.node(id).padding;
        rect.width -= padding.left + padding.right;
        rect.height -= padding.top + padding.bottom;
        Ok(rect)
    }

    /// Climb to the node's parent (or, for a top-level node, its page) and
    /// report the draw extent, flow direction, and sibling list a rule needs.
    /// Fails with [`LayoutError::OrphanNode`] when neither exists.
    pub(crate) fn parent_context(
        &mut self,
        id: NodeId,
        axis: Axis,
        measure: &dyn Measure,
    ) -> Result<ParentContext, LayoutError> {
        if let Some(parent) = self.node(id).parent {
            let draw = self.draw_rect(parent, measure)?;
            let parent_node = self.node(parent);
            return Ok(ParentContext {
                extent: draw.extent(axis),
                flow: parent_node.flow,
                siblings: parent_node.children.clone(),
            });
        }
        if let Some(page) = self.node(id).page {
            let page = self.page(page);
            // Pages always flow their nodes vertically.
            return Ok(ParentContext {
                extent: page.draw_rect().extent(axis),
                flow: FlowDirection::Vertical,
                siblings: page.nodes.clone(),
            });
        }
        Err(LayoutError::OrphanNode { node: id })
    }

    fn slot(&self, id: NodeId, axis: Axis) -> &LazySize {
        match axis {
            Axis::Horizontal => &self.node(id).width,
            Axis::Vertical => &self.node(id).height,
        }
    }

    fn slot_mut(&mut self, id: NodeId, axis: Axis) -> &mut LazySize {
        match axis {
            Axis::Horizontal => &mut self.node_mut(id).width,
            Axis::Vertical => &mut self.node_mut(id).height,
        }
    }
}
