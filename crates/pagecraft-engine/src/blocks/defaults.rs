use serde_json::{Map, Value};

use super::content::{
    BlockContent, ButtonContent, DividerContent, HeadingContent, HtmlContent, ImageContent,
    QuoteContent, SpacerContent, TextContent, TocContent, VideoContent,
};
use super::ids::IdGenerator;
use super::types::{Block, BlockKind, HeadingLevel};

impl BlockKind {
    /// Placeholder content for a freshly inserted block of this kind.
    pub fn default_content(self) -> BlockContent {
        match self {
            BlockKind::Heading => BlockContent::Heading(HeadingContent {
                text: "New Heading".to_string(),
                level: HeadingLevel::H2,
            }),
            BlockKind::Text => BlockContent::Text(TextContent {
                html: "<p>Start typing...</p>".to_string(),
            }),
            BlockKind::Image => BlockContent::Image(ImageContent::default()),
            BlockKind::Video => BlockContent::Video(VideoContent {
                url: String::new(),
                provider: "youtube".to_string(),
            }),
            BlockKind::Html => BlockContent::Html(HtmlContent {
                code: "<div>Custom HTML</div>".to_string(),
            }),
            BlockKind::Button => BlockContent::Button(ButtonContent {
                text: "Click Here".to_string(),
                href: "#".to_string(),
                variant: "primary".to_string(),
            }),
            BlockKind::Divider => BlockContent::Divider(DividerContent {
                style: "solid".to_string(),
            }),
            BlockKind::Spacer => BlockContent::Spacer(SpacerContent { height: 40 }),
            BlockKind::Toc => BlockContent::Toc(TocContent {}),
            BlockKind::Quote => BlockContent::Quote(QuoteContent {
                text: "Quote text here...".to_string(),
                citation: String::new(),
            }),
        }
    }
}

/// Default content for a block type given by name, as an open field mapping.
///
/// Unknown names yield an empty mapping.
pub fn default_content_for(name: &str) -> Map<String, Value> {
    name.parse::<BlockKind>()
        .map(|kind| kind.default_content().to_fields())
        .unwrap_or_default()
}

impl Block {
    /// Creates a block of `kind` with a fresh id and placeholder content.
    pub fn with_defaults(kind: BlockKind, ids: &mut impl IdGenerator) -> Self {
        Block::new(ids.next_id(), kind.default_content())
    }
}
