//! # The Rule Library
//!
//! Pure functions behind each [`super::SizeRule`] variant. Every rule takes
//! the document, the owning node, and the axis being resolved, and reads —
//! never writes — the surrounding tree state.
//!
//! Dependency direction matters: `percent` and `fill` look *up* at the
//! parent (or the enclosing page), `from_children` looks *down* at the
//! subtree. A tree may legally mix both directions; a mix that forms a cycle
//! is caught by the resolution engine's in-progress guard.

use log::trace;

use crate::error::LayoutError;
use crate::geometry::{Axis, Size};
use crate::render::Measure;
use crate::tree::{Document, NodeId};

/// `Percent`: the parent draw rect's extent on this axis, scaled.
pub(super) fn percent(
    doc: &mut Document,
    id: NodeId,
    axis: Axis,
    pct: Size,
    measure: &dyn Measure,
) -> Result<Size, LayoutError> {
    let ctx = doc.parent_context(id, axis, measure)?;
    if ctx.extent == 0.0 {
        return Err(LayoutError::OrphanNode { node: id });
    }
    Ok(ctx.extent * (pct / 100.0))
}

/// `Fill`: the parent draw extent minus every *other* sibling's bounding
/// extent and this node's own margin on the axis.
///
/// When the parent flows its children perpendicular to the axis the siblings
/// are not competing for space on it, so fill degenerates to 100%.
pub(super) fn fill(
    doc: &mut Document,
    id: NodeId,
    axis: Axis,
    measure: &dyn Measure,
) -> Result<Size, LayoutError> {
    let ctx = doc.parent_context(id, axis, measure)?;
    if ctx.extent == 0.0 {
        return Err(LayoutError::OrphanNode { node: id });
    }

    if ctx.flow.main_axis() != axis {
        return percent(doc, id, axis, 100.0, measure);
    }

    let mut sibling_extents = 0.0;
    for sibling in ctx.siblings {
        if sibling == id {
            continue;
        }
        sibling_extents += doc.bounding_rect(sibling, measure)?.extent(axis);
    }

    let own_margin = doc.node(id).margin.axis_sum(axis);
    let result = ctx.extent - sibling_extents - own_margin;
    trace!(
        "fill {id:?} {axis}: parent {} - siblings {sibling_extents} - margin {own_margin} = {result}",
        ctx.extent
    );
    Ok(result)
}

/// `FromChildren`: the extent of the subtree below the node.
///
/// Containers size along their flow axis as the *sum* of child bounding
/// extents and across it as the *max*, plus their own padding either way.
/// Content leaves delegate to the measuring capability.
pub(super) fn from_children(
    doc: &mut Document,
    id: NodeId,
    axis: Axis,
    measure: &dyn Measure,
) -> Result<Size, LayoutError> {
    if let Some(content) = doc.node(id).content.clone() {
        let inherent = measure
            .inherent_rect(&content)
            .ok_or(LayoutError::UnresolvableLeaf { node: id, axis })?;
        return Ok(inherent.extent(axis));
    }

    let children = doc.node(id).children.clone();
    if children.is_empty() {
        // Neither content nor children: there is nothing to derive a size from.
        return Err(LayoutError::UnresolvableLeaf { node: id, axis });
    }

    let main = doc.node(id).flow.main_axis() == axis;
    let mut result: Size = 0.0;
    for child in children {
        let extent = doc.bounding_rect(child, measure)?.extent(axis);
        if main {
            result += extent;
        } else {
            result = result.max(extent);
        }
    }
    Ok(result + doc.node(id).padding.axis_sum(axis))
}

#[cfg(test)]
mod tests {
    use crate::error::LayoutError;
    use crate::geometry::{Axis, Edges, Rect};
    use crate::render::{Measure, NoopRenderer};
    use crate::size::LazySize;
    use crate::tree::{Document, FlowDirection, NodeProps, PaperSize};

    fn fixed(w: f64, h: f64) -> NodeProps {
        NodeProps {
            width: LazySize::fixed(w),
            height: LazySize::fixed(h),
            ..NodeProps::default()
        }
    }

    /// A 100x100 fixed container with the given flow direction.
    fn hundred_square(doc: &mut Document, flow: FlowDirection) -> crate::tree::NodeId {
        doc.container(
            None,
            NodeProps {
                flow,
                ..fixed(100.0, 100.0)
            },
        )
        .unwrap()
    }

    #[test]
    fn percent_scales_parent_draw_extent() {
        let mut doc = Document::with_size(PaperSize::Letter, 5.0);
        let parent = hundred_square(&mut doc, FlowDirection::Vertical);
        for pct in [0.0, 25.0, 50.0, 100.0] {
            let child = doc
                .container(
                    Some(parent),
                    NodeProps {
                        width: LazySize::percent(pct),
                        height: LazySize::fixed(10.0),
                        ..NodeProps::default()
                    },
                )
                .unwrap();
            let w = doc.resolve_extent(child, Axis::Horizontal, &NoopRenderer).unwrap();
            assert_eq!(w, pct, "percent {pct} of a 100-wide draw rect");
        }
    }

    #[test]
    fn percent_accounts_for_parent_padding() {
        let mut doc = Document::with_size(PaperSize::Letter, 5.0);
        let parent = doc
            .container(
                None,
                NodeProps {
                    padding: Edges::uniform(10.0),
                    ..fixed(100.0, 100.0)
                },
            )
            .unwrap();
        let child = doc
            .container(
                Some(parent),
                NodeProps {
                    width: LazySize::percent(50.0),
                    height: LazySize::fixed(10.0),
                    ..NodeProps::default()
                },
            )
            .unwrap();
        // Draw rect is 100 - 2*10 = 80 wide.
        let w = doc.resolve_extent(child, Axis::Horizontal, &NoopRenderer).unwrap();
        assert_eq!(w, 40.0);
    }

    #[test]
    fn fill_conserves_remaining_space() {
        let mut doc = Document::with_size(PaperSize::Letter, 5.0);
        let parent = hundred_square(&mut doc, FlowDirection::Horizontal);
        let _literal = doc.container(Some(parent), fixed(30.0, 10.0)).unwrap();
        let filler = doc
            .container(
                Some(parent),
                NodeProps {
                    width: LazySize::fill(),
                    height: LazySize::fixed(10.0),
                    ..NodeProps::default()
                },
            )
            .unwrap();
        let w = doc.resolve_extent(filler, Axis::Horizontal, &NoopRenderer).unwrap();
        assert_eq!(w, 70.0);
    }

    #[test]
    fn fill_subtracts_own_margin() {
        let mut doc = Document::with_size(PaperSize::Letter, 5.0);
        let parent = hundred_square(&mut doc, FlowDirection::Horizontal);
        let _literal = doc.container(Some(parent), fixed(30.0, 10.0)).unwrap();
        let filler = doc
            .container(
                Some(parent),
                NodeProps {
                    width: LazySize::fill(),
                    height: LazySize::fixed(10.0),
                    margin: Edges::new(0.0, 4.0, 0.0, 6.0),
                    ..NodeProps::default()
                },
            )
            .unwrap();
        let w = doc.resolve_extent(filler, Axis::Horizontal, &NoopRenderer).unwrap();
        assert_eq!(w, 60.0);
    }

    #[test]
    fn fill_perpendicular_to_flow_is_percent_100() {
        let mut doc = Document::with_size(PaperSize::Letter, 5.0);
        // Vertical flow: width is the cross axis, so a sibling's width must
        // not affect a fill width.
        let parent = hundred_square(&mut doc, FlowDirection::Vertical);
        let _sibling = doc.container(Some(parent), fixed(30.0, 10.0)).unwrap();
        let filler = doc
            .container(
                Some(parent),
                NodeProps {
                    width: LazySize::fill(),
                    height: LazySize::fixed(10.0),
                    ..NodeProps::default()
                },
            )
            .unwrap();
        let fill_w = doc.resolve_extent(filler, Axis::Horizontal, &NoopRenderer).unwrap();
        let hundred = doc
            .container(
                Some(parent),
                NodeProps {
                    width: LazySize::percent(100.0),
                    height: LazySize::fixed(10.0),
                    ..NodeProps::default()
                },
            )
            .unwrap();
        let pct_w = doc.resolve_extent(hundred, Axis::Horizontal, &NoopRenderer).unwrap();
        assert_eq!(fill_w, pct_w);
        assert_eq!(fill_w, 100.0);
    }

    #[test]
    fn orphan_node_is_detected() {
        let mut doc = Document::with_size(PaperSize::Letter, 5.0);
        // No parent and never attached to a page.
        let orphan = doc
            .container(
                None,
                NodeProps {
                    width: LazySize::percent(50.0),
                    height: LazySize::fill(),
                    ..NodeProps::default()
                },
            )
            .unwrap();
        let err = doc
            .resolve_extent(orphan, Axis::Horizontal, &NoopRenderer)
            .unwrap_err();
        assert!(matches!(err, LayoutError::OrphanNode { .. }));
        let err = doc
            .resolve_extent(orphan, Axis::Vertical, &NoopRenderer)
            .unwrap_err();
        assert!(matches!(err, LayoutError::OrphanNode { .. }));
    }

    #[test]
    fn zero_extent_parent_is_an_orphan_too() {
        let mut doc = Document::with_size(PaperSize::Letter, 5.0);
        let parent = doc.container(None, fixed(0.0, 100.0)).unwrap();
        let child = doc
            .container(
                Some(parent),
                NodeProps {
                    width: LazySize::percent(50.0),
                    height: LazySize::fixed(10.0),
                    ..NodeProps::default()
                },
            )
            .unwrap();
        let err = doc
            .resolve_extent(child, Axis::Horizontal, &NoopRenderer)
            .unwrap_err();
        assert!(matches!(err, LayoutError::OrphanNode { .. }));
    }

    #[test]
    fn from_children_sums_along_the_flow_axis() {
        let mut doc = Document::with_size(PaperSize::Letter, 5.0);
        let parent = doc
            .container(
                None,
                NodeProps {
                    width: LazySize::fixed(100.0),
                    height: LazySize::from_children(),
                    flow: FlowDirection::Vertical,
                    ..NodeProps::default()
                },
            )
            .unwrap();
        for h in [10.0, 20.0, 15.0] {
            let _ = doc.container(Some(parent), fixed(10.0, h)).unwrap();
        }
        let h = doc.resolve_extent(parent, Axis::Vertical, &NoopRenderer).unwrap();
        assert_eq!(h, 45.0);
    }

    #[test]
    fn from_children_takes_the_max_across_the_flow_axis() {
        let mut doc = Document::with_size(PaperSize::Letter, 5.0);
        let parent = doc
            .container(
                None,
                NodeProps {
                    width: LazySize::fixed(100.0),
                    height: LazySize::from_children(),
                    flow: FlowDirection::Horizontal,
                    ..NodeProps::default()
                },
            )
            .unwrap();
        for h in [10.0, 20.0, 15.0] {
            let _ = doc.container(Some(parent), fixed(10.0, h)).unwrap();
        }
        let h = doc.resolve_extent(parent, Axis::Vertical, &NoopRenderer).unwrap();
        assert_eq!(h, 20.0);
    }

    #[test]
    fn from_children_adds_own_padding() {
        let mut doc = Document::with_size(PaperSize::Letter, 5.0);
        let parent = doc
            .container(
                None,
                NodeProps {
                    width: LazySize::fixed(100.0),
                    height: LazySize::from_children(),
                    padding: Edges::uniform(3.0),
                    flow: FlowDirection::Vertical,
                    ..NodeProps::default()
                },
            )
            .unwrap();
        let _ = doc.container(Some(parent), fixed(10.0, 10.0)).unwrap();
        let h = doc.resolve_extent(parent, Axis::Vertical, &NoopRenderer).unwrap();
        assert_eq!(h, 16.0);
    }

    #[test]
    fn from_children_counts_child_margins() {
        let mut doc = Document::with_size(PaperSize::Letter, 5.0);
        let parent = doc
            .container(
                None,
                NodeProps {
                    width: LazySize::fixed(100.0),
                    height: LazySize::from_children(),
                    flow: FlowDirection::Vertical,
                    ..NodeProps::default()
                },
            )
            .unwrap();
        let _ = doc
            .container(
                Some(parent),
                NodeProps {
                    margin: Edges::new(2.0, 0.0, 3.0, 0.0),
                    ..fixed(10.0, 10.0)
                },
            )
            .unwrap();
        let h = doc.resolve_extent(parent, Axis::Vertical, &NoopRenderer).unwrap();
        assert_eq!(h, 15.0);
    }

    #[test]
    fn from_children_on_a_bare_node_is_unresolvable() {
        let mut doc = Document::with_size(PaperSize::Letter, 5.0);
        let bare = doc
            .container(
                None,
                NodeProps {
                    width: LazySize::from_children(),
                    height: LazySize::from_children(),
                    ..NodeProps::default()
                },
            )
            .unwrap();
        let err = doc
            .resolve_extent(bare, Axis::Horizontal, &NoopRenderer)
            .unwrap_err();
        assert!(matches!(err, LayoutError::UnresolvableLeaf { .. }));
    }

    #[test]
    fn from_children_measures_content_leaves() {
        struct FixedMeasure;
        impl Measure for FixedMeasure {
            fn inherent_rect(&self, _content: &crate::content::Content) -> Option<Rect> {
                Some(Rect::new(42.0, 7.0))
            }
            fn split_text(
                &self,
                _rect: Rect,
                _text: &crate::content::TextContent,
            ) -> Vec<String> {
                vec![]
            }
        }

        let mut doc = Document::with_size(PaperSize::Letter, 5.0);
        let leaf = doc
            .leaf(
                None,
                NodeProps {
                    width: LazySize::from_children(),
                    height: LazySize::from_children(),
                    ..NodeProps::default()
                },
                crate::content::Content::Text(crate::content::TextContent {
                    text: "inherent".into(),
                    font_family: String::new(),
                    font_style: Default::default(),
                    font_size: 12.0,
                    color: crate::geometry::Color::BLACK,
                    line_height: 1.3,
                    alignment: Default::default(),
                    link: None,
                    overflow: Default::default(),
                }),
            )
            .unwrap();
        let w = doc.resolve_extent(leaf, Axis::Horizontal, &FixedMeasure).unwrap();
        let h = doc.resolve_extent(leaf, Axis::Vertical, &FixedMeasure).unwrap();
        assert_eq!(w, 42.0);
        assert_eq!(h, 7.0);
    }

    #[test]
    fn unmeasurable_content_is_unresolvable() {
        let mut doc = Document::with_size(PaperSize::Letter, 5.0);
        let leaf = doc
            .leaf(
                None,
                NodeProps {
                    width: LazySize::from_children(),
                    height: LazySize::fixed(10.0),
                    ..NodeProps::default()
                },
                crate::content::Content::Image(crate::content::ImageContent {
                    src: "missing.png".into(),
                    fit: Default::default(),
                    alignment: Default::default(),
                }),
            )
            .unwrap();
        // NoopRenderer measures nothing.
        let err = doc
            .resolve_extent(leaf, Axis::Horizontal, &NoopRenderer)
            .unwrap_err();
        assert!(matches!(err, LayoutError::UnresolvableLeaf { .. }));
    }
}
