use std::sync::OnceLock;

use regex::Regex;

use crate::blocks::QuoteContent;

use super::inline::strip_tags;

/// `<blockquote>` holding a paragraph and an optional `<cite>`.
pub struct BlockQuote;

fn quote_regex() -> &'static Regex {
    static QUOTE_REGEX: OnceLock<Regex> = OnceLock::new();
    QUOTE_REGEX.get_or_init(|| {
        Regex::new(r"(?is)<blockquote\b[^>]*>(.*?)</blockquote\s*>")
            .expect("Invalid blockquote regex")
    })
}

fn paragraph_regex() -> &'static Regex {
    static PARAGRAPH_REGEX: OnceLock<Regex> = OnceLock::new();
    PARAGRAPH_REGEX.get_or_init(|| {
        Regex::new(r"(?is)<p\b[^>]*>(.*?)</p\s*>").expect("Invalid paragraph regex")
    })
}

fn cite_regex() -> &'static Regex {
    static CITE_REGEX: OnceLock<Regex> = OnceLock::new();
    CITE_REGEX.get_or_init(|| {
        Regex::new(r"(?is)<cite\b[^>]*>(.*?)</cite\s*>").expect("Invalid cite regex")
    })
}

impl BlockQuote {
    pub fn render(content: &QuoteContent) -> String {
        let mut html = format!("<blockquote><p>{}</p>", content.text);
        if !content.citation.trim().is_empty() {
            html.push_str("<cite>");
            html.push_str(&content.citation);
            html.push_str("</cite>");
        }
        html.push_str("</blockquote>");
        html
    }

    /// Recognizes a blockquote opened and closed on the same line.
    ///
    /// The first inner paragraph becomes the text; without one, the inner
    /// content minus any citation is used as plain text.
    pub fn recognize(line: &str) -> Option<QuoteContent> {
        let inner = quote_regex().captures(line)?.get(1)?.as_str();

        let citation = cite_regex()
            .captures(inner)
            .map(|caps| strip_tags(&caps[1]).trim().to_string())
            .unwrap_or_default();

        let text = match paragraph_regex().captures(inner) {
            Some(caps) => caps[1].trim().to_string(),
            None => strip_tags(&cite_regex().replace_all(inner, ""))
                .trim()
                .to_string(),
        };

        Some(QuoteContent { text, citation })
    }
}
