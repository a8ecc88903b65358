use std::sync::OnceLock;

use regex::Regex;

/// Horizontal rule used for divider blocks.
pub struct Rule;

fn rule_regex() -> &'static Regex {
    static RULE_REGEX: OnceLock<Regex> = OnceLock::new();
    RULE_REGEX.get_or_init(|| Regex::new(r"(?i)^<hr\s*/?>$").expect("Invalid hr regex"))
}

impl Rule {
    pub const TAG: &'static str = "<hr />";

    /// True when the whole line, ignoring surrounding whitespace, is an `<hr>`.
    pub fn recognize(line: &str) -> bool {
        rule_regex().is_match(line.trim())
    }
}
