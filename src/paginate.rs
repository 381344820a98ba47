//! # Page Flow
//!
//! Sequences top-level nodes onto pages. In this little world the recursive
//! resolver can just walk a subtree and move a cursor, because page breaks
//! are only ever allowed between *top-level* nodes: a nested node that would
//! overflow its ancestor is never split or moved. This module owns that
//! top-level special treatment.
//!
//! For each top-level node in order: attach it to the current page, place it
//! at the cursor offset by its own margin, position its subtree, then check
//! that its bounding height fits a page at all. Before the next node is
//! placed, its height is resolved eagerly; if it would run past the page's
//! usable bottom boundary, a fresh page is cloned from the template and the
//! cursor resets to its top-left margin origin.

use log::debug;

use crate::error::LayoutError;
use crate::geometry::Axis;
use crate::position::{place_children, Cursor};
use crate::render::Measure;
use crate::tree::{Document, NodeId};

/// Lay out `roots` in order, breaking onto new pages as needed.
pub(crate) fn flow_into_pages(
    doc: &mut Document,
    roots: &[NodeId],
    measure: &dyn Measure,
) -> Result<(), LayoutError> {
    let mut page = doc.first_page();
    let mut cursor = Cursor {
        x: doc.page(page).margin.left,
        y: doc.page(page).margin.top,
    };

    for (idx, &id) in roots.iter().enumerate() {
        doc.attach_to_page(page, id);

        // The node's origin is the cursor pushed in by its own margin: the
        // top-left corner of its render rect, which is also what the
        // recursive resolver expects as its starting point.
        let margin = doc.node(id).margin;
        let origin = Cursor {
            x: cursor.x + margin.left,
            y: cursor.y + margin.top,
        };
        {
            let node = doc.node_mut(id);
            node.x = origin.x;
            node.y = origin.y;
        }
        place_children(doc, id, origin, measure)?;

        let bound = doc.bounding_rect(id, measure)?;
        let usable = doc.page(page).draw_rect().height;
        if bound.height > usable {
            // No cursor position can ever make this node fit.
            return Err(LayoutError::NodeTooTallForPage {
                node: id,
                height: bound.height,
                usable,
            });
        }

        // Only the vertical cursor advances at the top level: every
        // top-level node starts a new row.
        cursor.y += bound.height;

        if let Some(&next) = roots.get(idx + 1) {
            let next_height = doc.resolve_extent(next, Axis::Vertical, measure)?;
            let bottom = doc.page(page).height - doc.page(page).margin.bottom;
            if cursor.y + next_height > bottom {
                debug!(
                    "page break before {next:?}: cursor {:.2} + height {next_height:.2} \
                     exceeds boundary {bottom:.2}",
                    cursor.y
                );
                page = doc.add_page();
                cursor = Cursor {
                    x: doc.page(page).margin.left,
                    y: doc.page(page).margin.top,
                };
            }
        }
    }

    Ok(())
}
