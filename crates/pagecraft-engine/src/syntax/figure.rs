use std::sync::OnceLock;

use regex::Regex;

use crate::blocks::ImageContent;

use super::inline::{attribute, encode_attribute};

/// Image wrapped in a `<figure>`, with an optional `<figcaption>`.
pub struct Figure;

fn img_regex() -> &'static Regex {
    static IMG_REGEX: OnceLock<Regex> = OnceLock::new();
    IMG_REGEX.get_or_init(|| Regex::new(r"(?i)<img\b[^>]*>").expect("Invalid img regex"))
}

fn caption_regex() -> &'static Regex {
    static CAPTION_REGEX: OnceLock<Regex> = OnceLock::new();
    CAPTION_REGEX.get_or_init(|| {
        Regex::new(r"(?is)<figcaption\b[^>]*>(.*?)</figcaption\s*>")
            .expect("Invalid figcaption regex")
    })
}

impl Figure {
    /// Empty when the image has no source.
    pub fn render(content: &ImageContent) -> String {
        if content.src.trim().is_empty() {
            return String::new();
        }

        let mut html = format!(
            "<figure><img src=\"{}\" alt=\"{}\" />",
            encode_attribute(&content.src),
            encode_attribute(&content.alt)
        );
        if !content.caption.trim().is_empty() {
            html.push_str("<figcaption>");
            html.push_str(&content.caption);
            html.push_str("</figcaption>");
        }
        html.push_str("</figure>");
        html
    }

    /// Recognizes a line holding an `<img>` that carries both `src` and `alt`.
    ///
    /// A `<figcaption>` on the same line fills the caption.
    pub fn recognize(line: &str) -> Option<ImageContent> {
        let tag = img_regex().find(line)?.as_str();
        let src = attribute(tag, "src")?;
        let alt = attribute(tag, "alt")?;
        let caption = caption_regex()
            .captures(line)
            .map(|caps| caps[1].trim().to_string())
            .unwrap_or_default();

        Some(ImageContent { src, alt, caption })
    }
}
