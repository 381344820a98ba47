//! # Folio CLI
//!
//! Builds a small demo document, runs the layout pass with the no-op
//! backend, and prints the resulting geometry.
//!
//! Usage:
//!   folio            — print the indented layout outline
//!   folio --json     — print the layout snapshot as JSON
//!
//! Set RUST_LOG=debug to watch page-break decisions as they happen.

use std::env;
use std::process;

use folio::builder::DocumentBuilder;
use folio::geometry::{Color, EdgeFlags, Edges};
use folio::render::NoopRenderer;
use folio::size::LazySize;
use folio::tree::{Align, ChildAlignment, FlowDirection, NodeProps, PaperSize};
use folio::LayoutError;

fn main() {
    env_logger::init();

    let as_json = env::args().any(|a| a == "--json");

    match run(as_json) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            eprintln!("layout failed: {e}");
            process::exit(1);
        }
    }
}

fn run(as_json: bool) -> Result<String, LayoutError> {
    let mut builder = DocumentBuilder::new(NoopRenderer, PaperSize::Letter, 5.0);
    let doc = builder.document_mut();

    let bordered = |w: LazySize, h: LazySize| NodeProps {
        border: EdgeFlags::uniform(true),
        padding: Edges::uniform(5.0),
        width: w,
        height: h,
        ..NodeProps::default()
    };

    // A header card with two panels side by side, centered.
    let header = doc.container(None, bordered(LazySize::fill(), LazySize::fixed(80.0)))?;
    let row = doc.container(
        Some(header),
        NodeProps {
            flow: FlowDirection::Horizontal,
            align: ChildAlignment {
                horizontal: Align::Center,
                vertical: Align::Center,
            },
            margin: Edges::new(5.0, 0.0, 5.0, 0.0),
            ..bordered(LazySize::fill(), LazySize::fixed(50.0))
        },
    )?;
    let _left = doc.container(
        Some(row),
        NodeProps {
            margin: Edges::new(0.0, 10.0, 0.0, 0.0),
            ..bordered(LazySize::percent(40.0), LazySize::fill())
        },
    )?;
    let _right = doc.container(Some(row), bordered(LazySize::percent(40.0), LazySize::fill()))?;

    // A tall filled block that forces a page break before the footer.
    let body = doc.container(
        None,
        NodeProps {
            show_fill: true,
            fill_color: Color::new(230, 230, 240),
            ..bordered(LazySize::percent(60.0), LazySize::fixed(170.0))
        },
    )?;

    // Footer with a badge pushed to the right edge.
    let footer = doc.container(
        None,
        NodeProps {
            align: ChildAlignment {
                horizontal: Align::End,
                vertical: Align::Start,
            },
            ..bordered(LazySize::fill(), LazySize::fixed(40.0))
        },
    )?;
    let _badge = doc.container(Some(footer), bordered(LazySize::percent(25.0), LazySize::fill()))?;

    builder.create_document_tree(&[header, body, footer])?;

    if as_json {
        let json = builder
            .layout_info()
            .to_json()
            .map_err(|e| LayoutError::Render(e.to_string()))?;
        Ok(format!("{json}\n"))
    } else {
        Ok(builder.outline())
    }
}
