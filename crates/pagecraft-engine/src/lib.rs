pub mod blocks;
pub mod editing;
pub mod import;
pub mod parsing;
pub mod render;
pub mod serialize;
pub mod store;
pub mod syntax;
pub mod views;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use blocks::{Block, BlockContent, BlockId, BlockKind, HeadingLevel, IdGenerator};
pub use editing::{Cmd, Direction, Document, EditError, Patch};
pub use import::import_markdown;
pub use parsing::{ParseReport, parse_markup, parse_markup_report};
pub use render::{render_page, render_toc, resolve_toc};
pub use serialize::{serialize_block, serialize_blocks};
pub use store::{FileStore, MarkupStore, MemoryStore, StoreError};
pub use views::{
    DocumentInsights, HierarchyWarning, TocEntry, estimate_reading_time,
    extract_table_of_contents, validate_heading_hierarchy,
};
