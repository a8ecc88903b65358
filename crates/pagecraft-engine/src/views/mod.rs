//! # Derived Views
//!
//! Pure functions over a block sequence, recomputed on demand for live
//! feedback while editing. Nothing here is persisted and nothing here fails:
//! absent or empty fields simply count as empty text.

pub mod hierarchy;
pub mod reading_time;
pub mod toc;

pub use hierarchy::{HierarchyWarning, validate_heading_hierarchy};
pub use reading_time::{
    DEFAULT_WORDS_PER_MINUTE, estimate_reading_time, estimate_reading_time_at, word_count,
};
pub use toc::{TocEntry, extract_table_of_contents};

use crate::blocks::Block;

/// All derived views of one document, as shown next to the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentInsights {
    pub toc: Vec<TocEntry>,
    pub warnings: Vec<HierarchyWarning>,
    pub reading_minutes: u32,
}

impl DocumentInsights {
    pub fn compute(blocks: &[Block]) -> Self {
        Self::compute_at(blocks, DEFAULT_WORDS_PER_MINUTE)
    }

    pub fn compute_at(blocks: &[Block], words_per_minute: u32) -> Self {
        Self {
            toc: extract_table_of_contents(blocks),
            warnings: validate_heading_hierarchy(blocks),
            reading_minutes: estimate_reading_time_at(blocks, words_per_minute),
        }
    }
}
