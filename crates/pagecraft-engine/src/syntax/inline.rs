use std::sync::OnceLock;

use regex::Regex;

fn tag_regex() -> &'static Regex {
    static TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    TAG_REGEX.get_or_init(|| Regex::new(r"<[^>]*>").expect("Invalid tag regex"))
}

fn block_tag_regex() -> &'static Regex {
    static BLOCK_TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    BLOCK_TAG_REGEX.get_or_init(|| {
        Regex::new(concat!(
            r"(?i)</?(?:p|div|br|hr|h[1-6]|ul|ol|li|dl|dt|dd|blockquote|cite|figure|figcaption",
            r"|pre|table|thead|tbody|tr|td|th|section|article|header|footer|nav|aside)\b[^>]*>",
        ))
        .expect("Invalid block tag regex")
    })
}

fn attr_regex() -> &'static Regex {
    static ATTR_REGEX: OnceLock<Regex> = OnceLock::new();
    ATTR_REGEX.get_or_init(|| {
        Regex::new(r#"(?i)([a-z][a-z0-9_:-]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
            .expect("Invalid attribute regex")
    })
}

/// Removes every tag from `html`, leaving the text between them.
pub fn strip_tags(html: &str) -> String {
    tag_regex().replace_all(html, "").into_owned()
}

/// Counts whitespace-delimited words with inline markup stripped.
///
/// Block-level tags separate words, so `<p>one</p><p>two</p>` counts as two;
/// inline tags do not, so `Un<em>believ</em>able` counts as one.
pub fn count_words(html: &str) -> usize {
    let separated = block_tag_regex().replace_all(html, " ");
    strip_tags(&separated).split_whitespace().count()
}

/// Looks up an attribute value inside a single start tag, entity-decoded.
pub fn attribute(tag: &str, name: &str) -> Option<String> {
    attr_regex()
        .captures_iter(tag)
        .find(|caps| caps[1].eq_ignore_ascii_case(name))
        .and_then(|caps| caps.get(2).or_else(|| caps.get(3)))
        .map(|m| html_escape::decode_html_entities(m.as_str()).into_owned())
}

/// Encodes a value for use inside a double-quoted attribute.
pub fn encode_attribute(value: &str) -> String {
    html_escape::encode_double_quoted_attribute(value).into_owned()
}
