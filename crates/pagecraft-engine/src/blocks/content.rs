//! Typed content records, one per block kind.
//!
//! Every field carries `#[serde(default)]` semantics: content loaded from the
//! store with a field missing gets that field's default instead of failing.
//! Field defaults are the "empty" values; the richer placeholder content
//! shown when a block is first inserted lives in [`super::defaults`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::types::{BlockKind, HeadingLevel};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadingContent {
    pub text: String,
    pub level: HeadingLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextContent {
    /// Inline markup, trusted at this layer.
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageContent {
    pub src: String,
    pub alt: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoContent {
    pub url: String,
    pub provider: String,
}

impl Default for VideoContent {
    fn default() -> Self {
        Self {
            url: String::new(),
            provider: "youtube".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlContent {
    /// Emitted verbatim.
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonContent {
    pub text: String,
    pub href: String,
    pub variant: String,
}

impl Default for ButtonContent {
    fn default() -> Self {
        Self {
            text: String::new(),
            href: "#".to_string(),
            variant: "primary".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DividerContent {
    /// Accepted and stored, not yet reflected in markup.
    pub style: String,
}

impl Default for DividerContent {
    fn default() -> Self {
        Self {
            style: "solid".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpacerContent {
    /// Height in pixels.
    pub height: u32,
}

impl Default for SpacerContent {
    fn default() -> Self {
        Self { height: 40 }
    }
}

/// The table of contents has no stored fields; it is derived at render time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TocContent {}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteContent {
    pub text: String,
    pub citation: String,
}

/// Block content as a sum type: the variant is the block's kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockContent {
    Heading(HeadingContent),
    Text(TextContent),
    Image(ImageContent),
    Video(VideoContent),
    Html(HtmlContent),
    Button(ButtonContent),
    Divider(DividerContent),
    Spacer(SpacerContent),
    Toc(TocContent),
    Quote(QuoteContent),
}

impl BlockContent {
    pub fn kind(&self) -> BlockKind {
        match self {
            BlockContent::Heading(_) => BlockKind::Heading,
            BlockContent::Text(_) => BlockKind::Text,
            BlockContent::Image(_) => BlockKind::Image,
            BlockContent::Video(_) => BlockKind::Video,
            BlockContent::Html(_) => BlockKind::Html,
            BlockContent::Button(_) => BlockKind::Button,
            BlockContent::Divider(_) => BlockKind::Divider,
            BlockContent::Spacer(_) => BlockKind::Spacer,
            BlockContent::Toc(_) => BlockKind::Toc,
            BlockContent::Quote(_) => BlockKind::Quote,
        }
    }

    /// Builds typed content for `kind` from an open field mapping.
    ///
    /// Never fails. Anything that is not a mapping reads as an empty one,
    /// absent fields take their defaults, and a field holding a value of the
    /// wrong type (`"level": null`, `"height": "40"`) takes its default too.
    pub fn from_fields(kind: BlockKind, fields: Value) -> Self {
        let mut merged = BlockContent::empty(kind).to_fields();
        if let Value::Object(given) = fields {
            for (name, value) in given {
                if let Some(slot) = merged.get_mut(&name)
                    && same_shape(slot, &value)
                {
                    *slot = value;
                }
            }
        }

        let fields = Value::Object(merged);
        match kind {
            BlockKind::Heading => BlockContent::Heading(typed(fields)),
            BlockKind::Text => BlockContent::Text(typed(fields)),
            BlockKind::Image => BlockContent::Image(typed(fields)),
            BlockKind::Video => BlockContent::Video(typed(fields)),
            BlockKind::Html => BlockContent::Html(typed(fields)),
            BlockKind::Button => BlockContent::Button(typed(fields)),
            BlockKind::Divider => BlockContent::Divider(typed(fields)),
            BlockKind::Spacer => BlockContent::Spacer(typed(fields)),
            BlockKind::Toc => BlockContent::Toc(TocContent {}),
            BlockKind::Quote => BlockContent::Quote(typed(fields)),
        }
    }

    /// Content of `kind` with every field at its empty default.
    pub fn empty(kind: BlockKind) -> Self {
        match kind {
            BlockKind::Heading => BlockContent::Heading(HeadingContent::default()),
            BlockKind::Text => BlockContent::Text(TextContent::default()),
            BlockKind::Image => BlockContent::Image(ImageContent::default()),
            BlockKind::Video => BlockContent::Video(VideoContent::default()),
            BlockKind::Html => BlockContent::Html(HtmlContent::default()),
            BlockKind::Button => BlockContent::Button(ButtonContent::default()),
            BlockKind::Divider => BlockContent::Divider(DividerContent::default()),
            BlockKind::Spacer => BlockContent::Spacer(SpacerContent::default()),
            BlockKind::Toc => BlockContent::Toc(TocContent {}),
            BlockKind::Quote => BlockContent::Quote(QuoteContent::default()),
        }
    }

    /// The open field-mapping view of this content.
    pub fn to_fields(&self) -> Map<String, Value> {
        let value = match self {
            BlockContent::Heading(c) => serde_json::to_value(c),
            BlockContent::Text(c) => serde_json::to_value(c),
            BlockContent::Image(c) => serde_json::to_value(c),
            BlockContent::Video(c) => serde_json::to_value(c),
            BlockContent::Html(c) => serde_json::to_value(c),
            BlockContent::Button(c) => serde_json::to_value(c),
            BlockContent::Divider(c) => serde_json::to_value(c),
            BlockContent::Spacer(c) => serde_json::to_value(c),
            BlockContent::Toc(c) => serde_json::to_value(c),
            BlockContent::Quote(c) => serde_json::to_value(c),
        };
        match value {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}

/// Whether `value` can stand in for the default held in `slot`.
///
/// Numeric fields are pixel sizes, so only integers that fit a `u32` qualify.
fn same_shape(slot: &Value, value: &Value) -> bool {
    match (slot, value) {
        (Value::String(_), Value::String(_)) | (Value::Bool(_), Value::Bool(_)) => true,
        (Value::Number(_), Value::Number(n)) => {
            n.as_u64().is_some_and(|n| u32::try_from(n).is_ok())
        }
        _ => false,
    }
}

fn typed<T: DeserializeOwned + Default>(fields: Value) -> T {
    serde_json::from_value(fields).unwrap_or_default()
}
