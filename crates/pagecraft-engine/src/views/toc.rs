use serde::Serialize;

use crate::blocks::{Block, BlockContent, HeadingLevel};
use crate::syntax::anchor_id;

/// One entry of a page's table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    pub anchor_id: String,
    pub text: String,
    pub level: HeadingLevel,
}

/// Collects h2 and h3 headings, in document order.
pub fn extract_table_of_contents(blocks: &[Block]) -> Vec<TocEntry> {
    blocks
        .iter()
        .filter_map(|block| match block.content() {
            BlockContent::Heading(h) if matches!(h.level, HeadingLevel::H2 | HeadingLevel::H3) => {
                Some(TocEntry {
                    anchor_id: anchor_id(&h.text),
                    text: h.text.clone(),
                    level: h.level,
                })
            }
            _ => None,
        })
        .collect()
}
