use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::content::BlockContent;

/// The closed set of block variants a document body can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Heading,
    Text,
    Image,
    Video,
    Html,
    Button,
    Divider,
    Spacer,
    Toc,
    Quote,
}

impl BlockKind {
    /// Every variant, in palette order.
    pub const ALL: [BlockKind; 10] = [
        BlockKind::Heading,
        BlockKind::Text,
        BlockKind::Image,
        BlockKind::Video,
        BlockKind::Html,
        BlockKind::Button,
        BlockKind::Divider,
        BlockKind::Spacer,
        BlockKind::Toc,
        BlockKind::Quote,
    ];

    /// The lowercase name used in stored JSON and in the editor palette.
    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Heading => "heading",
            BlockKind::Text => "text",
            BlockKind::Image => "image",
            BlockKind::Video => "video",
            BlockKind::Html => "html",
            BlockKind::Button => "button",
            BlockKind::Divider => "divider",
            BlockKind::Spacer => "spacer",
            BlockKind::Toc => "toc",
            BlockKind::Quote => "quote",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown block type: {0}")]
pub struct UnknownBlockKind(pub String);

impl FromStr for BlockKind {
    type Err = UnknownBlockKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownBlockKind(s.to_string()))
    }
}

/// Heading level. Serialized as `"h1"`..`"h6"`.
///
/// Unrecognized level strings fall back to [`HeadingLevel::H2`] rather than
/// failing, so a heading with a missing or garbled level still loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(into = "String")]
pub enum HeadingLevel {
    H1,
    #[default]
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    pub fn number(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
            HeadingLevel::H4 => 4,
            HeadingLevel::H5 => 5,
            HeadingLevel::H6 => 6,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(HeadingLevel::H1),
            2 => Some(HeadingLevel::H2),
            3 => Some(HeadingLevel::H3),
            4 => Some(HeadingLevel::H4),
            5 => Some(HeadingLevel::H5),
            6 => Some(HeadingLevel::H6),
            _ => None,
        }
    }

    /// The element name, e.g. `h3`.
    pub fn tag(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
            HeadingLevel::H5 => "h5",
            HeadingLevel::H6 => "h6",
        }
    }

    /// Parses `h1`..`h6` (case-insensitive), falling back to the default level.
    pub fn parse_lenient(s: &str) -> Self {
        let s = s.trim();
        s.strip_prefix(['h', 'H'])
            .and_then(|n| n.parse::<u8>().ok())
            .and_then(Self::from_number)
            .unwrap_or_default()
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for HeadingLevel {
    /// Strings parse leniently; `null`, numbers and anything else read as h2.
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(s) => Self::parse_lenient(&s),
            _ => Self::default(),
        })
    }
}

impl From<HeadingLevel> for String {
    fn from(level: HeadingLevel) -> Self {
        level.tag().to_string()
    }
}

/// Opaque block identifier, unique within one block sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for BlockId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Returned when replacing a block's content with content of another kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("block {id} is a {expected} block, cannot hold {found} content")]
pub struct KindMismatch {
    pub id: BlockId,
    pub expected: BlockKind,
    pub found: BlockKind,
}

/// The atomic content unit of a document body.
///
/// A block's kind is fixed at creation: content can be replaced wholesale,
/// but only by content of the same kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawBlock", into = "RawBlock")]
pub struct Block {
    id: BlockId,
    content: BlockContent,
}

impl Block {
    pub fn new(id: BlockId, content: BlockContent) -> Self {
        Self { id, content }
    }

    pub fn id(&self) -> &BlockId {
        &self.id
    }

    pub fn kind(&self) -> BlockKind {
        self.content.kind()
    }

    pub fn content(&self) -> &BlockContent {
        &self.content
    }

    pub fn into_content(self) -> BlockContent {
        self.content
    }

    pub fn replace_content(&mut self, content: BlockContent) -> Result<(), KindMismatch> {
        if content.kind() != self.kind() {
            return Err(KindMismatch {
                id: self.id.clone(),
                expected: self.kind(),
                found: content.kind(),
            });
        }
        self.content = content;
        Ok(())
    }
}

/// Wire shape of a block in the JSON content store: `{id, type, content}`.
#[derive(Serialize, Deserialize)]
struct RawBlock {
    id: BlockId,
    #[serde(rename = "type")]
    kind: BlockKind,
    #[serde(default)]
    content: serde_json::Value,
}

impl From<RawBlock> for Block {
    fn from(raw: RawBlock) -> Self {
        Block::new(raw.id, BlockContent::from_fields(raw.kind, raw.content))
    }
}

impl From<Block> for RawBlock {
    fn from(block: Block) -> Self {
        RawBlock {
            id: block.id,
            kind: block.content.kind(),
            content: serde_json::Value::Object(block.content.to_fields()),
        }
    }
}
