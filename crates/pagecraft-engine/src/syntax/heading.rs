use std::sync::OnceLock;

use regex::Regex;

use crate::blocks::{HeadingContent, HeadingLevel};

use super::{anchor::anchor_id, inline::strip_tags};

/// Heading element `<hN id="anchor">text</hN>`.
pub struct HeadingTag;

fn heading_regex() -> &'static Regex {
    static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
    HEADING_REGEX.get_or_init(|| {
        Regex::new(r"(?is)^<h([1-6])(?:\s[^>]*)?>(.*)</h([1-6])\s*>$")
            .expect("Invalid heading regex")
    })
}

fn nested_heading_regex() -> &'static Regex {
    static NESTED_HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
    NESTED_HEADING_REGEX
        .get_or_init(|| Regex::new(r"(?i)</?h[1-6]\b").expect("Invalid nested heading regex"))
}

impl HeadingTag {
    pub fn render(content: &HeadingContent) -> String {
        let tag = content.level.tag();
        format!(
            "<{tag} id=\"{}\">{}</{tag}>",
            anchor_id(&content.text),
            content.text
        )
    }

    /// Recognizes a line that is exactly one heading element.
    ///
    /// Inner markup is stripped to plain text. Opening and closing levels
    /// must agree, and a line holding several headings is not one heading.
    pub fn recognize(line: &str) -> Option<HeadingContent> {
        let caps = heading_regex().captures(line.trim())?;
        if caps[1] != caps[3] || nested_heading_regex().is_match(&caps[2]) {
            return None;
        }
        let level = HeadingLevel::from_number(caps[1].parse().ok()?)?;
        Some(HeadingContent {
            text: strip_tags(&caps[2]).trim().to_string(),
            level,
        })
    }
}
