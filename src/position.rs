//! # Position Resolver
//!
//! Turns resolved sizes into absolute coordinates. The walk is pre-order and
//! depth-first: a node's own position is already fixed by its caller (parent
//! or paginator); this module positions its *children* and recurses.
//!
//! The cursor travels by value. Passing a copy into each recursive call
//! means mutations are naturally scoped to a node's own children — a child
//! subtree can never leak cursor state sideways into its parent's loop, and
//! there is no snapshot/restore bookkeeping to get wrong.

use log::trace;

use crate::error::LayoutError;
use crate::geometry::Size;
use crate::render::Measure;
use crate::tree::{Align, Document, FlowDirection, NodeId};

/// The write head of the position resolver: the absolute point where the
/// next child will be placed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Cursor {
    pub x: Size,
    pub y: Size,
}

/// Assign absolute positions to every node below `id`.
///
/// Assumes `origin` sits at the top-left corner of the node's *render* rect;
/// the node's own padding is applied here to reach its draw rect. Leaf nodes
/// are no-ops.
pub(crate) fn place_children(
    doc: &mut Document,
    id: NodeId,
    origin: Cursor,
    measure: &dyn Measure,
) -> Result<(), LayoutError> {
    let children = doc.node(id).children.clone();
    if children.is_empty() {
        return Ok(());
    }

    let draw = doc.draw_rect(id, measure)?;
    let first = children[0];
    let first_bound = doc.bounding_rect(first, measure)?;

    // Aggregate extents of the whole run of children, used by End/Center
    // alignment along the main axis.
    let mut run_width: Size = 0.0;
    let mut run_height: Size = 0.0;
    for &child in &children {
        let bound = doc.bounding_rect(child, measure)?;
        run_width += bound.width;
        run_height += bound.height;
    }

    let (padding, flow, align) = {
        let node = doc.node(id);
        (node.padding, node.flow, node.align)
    };

    // Move to "0,0" of the draw rect; every offset below is relative to it.
    let mut cursor = Cursor {
        x: origin.x + padding.left,
        y: origin.y + padding.top,
    };

    // Find the starting position of the first child. Start alignment only
    // honors the child's leading margin (the other cases use bounding rects,
    // which already include margins); End and Center push the run as far as
    // the draw rect allows, anchored on the first child for the cross axis.
    match flow {
        FlowDirection::Vertical => {
            match align.horizontal {
                Align::Start => cursor.x += doc.node(first).margin.left,
                Align::End => cursor.x += draw.width - first_bound.width,
                Align::Center => cursor.x += (draw.width - first_bound.width) / 2.0,
            }
            match align.vertical {
                Align::Start => cursor.y += doc.node(first).margin.top,
                Align::End => cursor.y += draw.height - run_height,
                Align::Center => cursor.y += (draw.height - run_height) / 2.0,
            }
        }
        FlowDirection::Horizontal => {
            match align.horizontal {
                Align::Start => cursor.x += doc.node(first).margin.left,
                Align::End => cursor.x += draw.width - run_width,
                Align::Center => cursor.x += (draw.width - run_width) / 2.0,
            }
            match align.vertical {
                Align::Start => cursor.y += doc.node(first).margin.top,
                Align::End => cursor.y += draw.height - first_bound.height,
                Align::Center => cursor.y += (draw.height - first_bound.height) / 2.0,
            }
        }
    }

    for (idx, &child) in children.iter().enumerate() {
        {
            let node = doc.node_mut(child);
            node.x = cursor.x;
            node.y = cursor.y;
        }
        trace!("placed {child:?} at ({:.2}, {:.2})", cursor.x, cursor.y);

        place_children(doc, child, cursor, measure)?;

        if let Some(&next) = children.get(idx + 1) {
            let bound = doc.bounding_rect(child, measure)?;
            let next_bound = doc.bounding_rect(next, measure)?;
            // Advance along the main axis; on the cross axis, siblings of
            // different sizes must each stay individually aligned, so End
            // shifts by the full extent difference and Center by half.
            match flow {
                FlowDirection::Horizontal => {
                    cursor.x += bound.width + doc.node(next).margin.left;
                    match align.vertical {
                        Align::Start => {}
                        Align::End => cursor.y += bound.height - next_bound.height,
                        Align::Center => {
                            cursor.y += (bound.height - next_bound.height) / 2.0
                        }
                    }
                }
                FlowDirection::Vertical => {
                    cursor.y += bound.height + doc.node(next).margin.top;
                    match align.horizontal {
                        Align::Start => {}
                        Align::End => cursor.x += bound.width - next_bound.width,
                        Align::Center => {
                            cursor.x += (bound.width - next_bound.width) / 2.0
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
