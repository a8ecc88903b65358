use std::fmt;

use crate::blocks::{Block, BlockContent, HeadingLevel};

/// A lint-style finding about heading structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HierarchyWarning {
    /// An h1 in the body; h1 belongs to the page title.
    ReservedH1 { text: String },
    /// A heading more than one level deeper than the one before it.
    SkippedLevel { text: String, from: u8, to: u8 },
}

impl HierarchyWarning {
    /// The level the heading should have used instead.
    pub fn suggested_level(&self) -> HeadingLevel {
        match self {
            HierarchyWarning::ReservedH1 { .. } => HeadingLevel::H2,
            HierarchyWarning::SkippedLevel { from, .. } => {
                HeadingLevel::from_number(from + 1).unwrap_or_default()
            }
        }
    }
}

impl fmt::Display for HierarchyWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HierarchyWarning::ReservedH1 { text } => write!(
                f,
                "H1 heading \"{text}\" found. H1 is reserved for the page title; use H2 instead."
            ),
            HierarchyWarning::SkippedLevel { text, from, to } => write!(
                f,
                "Heading \"{text}\" skips from H{from} to H{to}. Consider using H{} instead.",
                from + 1
            ),
        }
    }
}

/// Walks headings in order, flagging h1 use and forward level skips.
///
/// The current level starts at 1 for the page title and always moves to the
/// heading just seen, so one skip is reported once.
pub fn validate_heading_hierarchy(blocks: &[Block]) -> Vec<HierarchyWarning> {
    let mut warnings = Vec::new();
    let mut current = 1u8;

    for block in blocks {
        let BlockContent::Heading(h) = block.content() else {
            continue;
        };
        let level = h.level.number();

        if h.level == HeadingLevel::H1 {
            warnings.push(HierarchyWarning::ReservedH1 {
                text: h.text.clone(),
            });
        }
        if level > current + 1 {
            warnings.push(HierarchyWarning::SkippedLevel {
                text: h.text.clone(),
                from: current,
                to: level,
            });
        }
        current = level;
    }

    warnings
}
