//! # Editing
//!
//! The in-memory side of the block lifecycle. A [`Document`] holds the block
//! sequence between load and save; every mutation goes through a [`Cmd`] and
//! yields a [`Patch`] naming the affected blocks.
//!
//! ```rust
//! use pagecraft_engine::blocks::{BlockKind, SequentialIdGenerator};
//! use pagecraft_engine::editing::{Cmd, Document};
//!
//! let mut doc = Document::load("<h2>Intro</h2>", SequentialIdGenerator::new("b"));
//! doc.apply(Cmd::Add { kind: BlockKind::Divider, after: None }).unwrap();
//! assert_eq!(doc.to_markup(), "<h2 id=\"intro\">Intro</h2>\n<hr />");
//! ```

pub mod commands;
pub mod document;
pub mod patch;

pub use commands::{Cmd, Direction, EditError};
pub use document::Document;
pub use patch::Patch;
