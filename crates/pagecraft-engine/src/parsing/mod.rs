//! # Markup Recovery
//!
//! Turns stored markup back into blocks, one line at a time.
//!
//! This is not an HTML parser. Each non-blank physical line is
//! classified on its own (`classify`) and becomes exactly one block; lines no
//! construct recognizes are kept verbatim as text blocks. Blank lines produce
//! nothing. Block order follows line order.
//!
//! Constructs that span several lines (a `<ul>` written one item per line,
//! say) come back as one text block per line.
//!
//! ## Modules
//!
//! - **`rope`**: line iteration with byte spans
//! - **`classify`**: `MarkupLineClassifier` produces a `LineClass` per line
//! - **`report`**: `ParseReport` exposing which lines degraded to text

pub mod classify;
pub mod report;
pub mod rope;

#[cfg(test)]
mod tests;

use xi_rope::Rope;

use crate::blocks::{Block, BlockContent, DividerContent, IdGenerator, TextContent, TocContent};

pub use classify::{LineClass, LineKind, MarkupLineClassifier};
pub use report::{FallbackText, ParseReport, ParsedLine};

/// Parses markup into per-line results. Never fails.
pub fn parse_markup_report(markup: &str, ids: &mut impl IdGenerator) -> ParseReport {
    parse_rope(&Rope::from(markup), ids)
}

/// Parses markup held in a rope into per-line results.
pub fn parse_rope(rope: &Rope, ids: &mut impl IdGenerator) -> ParseReport {
    let classifier = MarkupLineClassifier;
    let mut lines = Vec::new();

    for lr in rope::lines_with_spans(rope) {
        let class = classifier.classify(&lr);
        if class.is_blank {
            continue;
        }
        lines.push(build_line(class, ids));
    }

    ParseReport { lines }
}

/// Parses markup into blocks, degrading anything unrecognized to text.
pub fn parse_markup(markup: &str, ids: &mut impl IdGenerator) -> Vec<Block> {
    parse_markup_report(markup, ids).into_blocks()
}

fn build_line(class: LineClass, ids: &mut impl IdGenerator) -> ParsedLine {
    let id = ids.next_id();
    let recognized = match class.kind {
        LineKind::Heading(c) => Some(BlockContent::Heading(c)),
        LineKind::Image(c) => Some(BlockContent::Image(c)),
        LineKind::Quote(c) => Some(BlockContent::Quote(c)),
        LineKind::Divider => Some(BlockContent::Divider(DividerContent::default())),
        LineKind::Toc => Some(BlockContent::Toc(TocContent {})),
        LineKind::Text => None,
    };

    let outcome = match recognized {
        Some(content) => Ok(Block::new(id, content)),
        None => {
            log::debug!("line {} kept as text: {:?}", class.number, class.text);
            Err(FallbackText {
                block: Block::new(id, BlockContent::Text(TextContent { html: class.text })),
            })
        }
    };

    ParsedLine {
        number: class.number,
        span: class.line,
        outcome,
    }
}
