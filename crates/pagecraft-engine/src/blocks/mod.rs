//! # Block Schema
//!
//! The content model: a document body is an ordered `Vec<Block>`, and each
//! [`Block`] pairs an opaque [`BlockId`] with typed [`BlockContent`].
//!
//! ## Modules
//!
//! - **`types`**: `Block`, `BlockKind`, `BlockId`, `HeadingLevel`
//! - **`content`**: one content record per kind, plus the open field-mapping view
//! - **`defaults`**: placeholder content for freshly inserted blocks
//! - **`ids`**: injectable id generators

pub mod content;
pub mod defaults;
pub mod ids;
pub mod types;

pub use content::{
    BlockContent, ButtonContent, DividerContent, HeadingContent, HtmlContent, ImageContent,
    QuoteContent, SpacerContent, TextContent, TocContent, VideoContent,
};
pub use defaults::default_content_for;
pub use ids::{IdGenerator, MonotonicIdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use types::{Block, BlockId, BlockKind, HeadingLevel, KindMismatch, UnknownBlockKind};
