//! # Markup Syntax
//!
//! Each construct owns its own markup knowledge: the serializer asks it to
//! render, the recovering parser asks it to recognize. Nothing outside this
//! module spells out tag names.
//!
//! Every construct renders to a single physical line, which is what lets the
//! line-oriented parser recover headings, figures, quotes, rules and the TOC
//! placeholder. Text and raw HTML are emitted as stored and may span lines.

pub mod anchor;
pub mod button;
pub mod figure;
pub mod heading;
pub mod inline;
pub mod quote;
pub mod rule;
pub mod spacer;
pub mod toc;
pub mod video;

pub use anchor::anchor_id;
pub use button::CallToAction;
pub use figure::Figure;
pub use heading::HeadingTag;
pub use quote::BlockQuote;
pub use rule::Rule;
pub use spacer::Spacer;
pub use toc::TocPlaceholder;
pub use video::{VideoEmbed, youtube_id};
