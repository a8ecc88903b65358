//! Public page rendering: serialized markup with the TOC placeholder filled in.
//!
//! Serialization leaves a placeholder where the table of contents goes so the
//! stored markup does not depend on heading order at save time. The TOC is
//! built here from the final heading set.

use crate::blocks::{Block, HeadingLevel};
use crate::serialize::serialize_blocks;
use crate::syntax::{TocPlaceholder, inline::encode_attribute};
use crate::views::{TocEntry, extract_table_of_contents};

/// Builds the navigation list for a set of TOC entries.
pub fn render_toc(entries: &[TocEntry]) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let mut html = String::from("<nav class=\"table-of-contents\"><ul>");
    for entry in entries {
        let class = match entry.level {
            HeadingLevel::H3 => "toc-h3",
            _ => "toc-h2",
        };
        html.push_str(&format!(
            "<li class=\"{class}\"><a href=\"#{}\">{}</a></li>",
            encode_attribute(&entry.anchor_id),
            entry.text
        ));
    }
    html.push_str("</ul></nav>");
    html
}

/// Replaces every TOC placeholder in `markup` with the rendered entries.
///
/// With no entries the placeholder is removed.
pub fn resolve_toc(markup: &str, entries: &[TocEntry]) -> String {
    if !markup.contains(TocPlaceholder::TOKEN) {
        return markup.to_string();
    }
    markup.replace(TocPlaceholder::TOKEN, &render_toc(entries))
}

/// Serializes blocks and resolves the TOC against their own headings.
pub fn render_page(blocks: &[Block]) -> String {
    let toc = extract_table_of_contents(blocks);
    resolve_toc(&serialize_blocks(blocks), &toc)
}
