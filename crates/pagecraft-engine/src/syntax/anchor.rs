/// Derives the URL-fragment id for a heading from its text.
///
/// Lowercases, drops everything that is not a letter, digit, whitespace or
/// hyphen, turns whitespace runs into a hyphen, collapses hyphen runs and trims
/// hyphens from both ends. Pure: identical text always yields the identical id,
/// so two headings with the same text share an anchor.
pub fn anchor_id(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.to_lowercase().chars() {
        if c.is_whitespace() || c == '-' {
            pending_hyphen = true;
        } else if c.is_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(c);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Hello World", "hello-world")]
    #[case("  Leading and trailing  ", "leading-and-trailing")]
    #[case("Q&A: Buying a Home?", "qa-buying-a-home")]
    #[case("Pre--approved --- loans", "pre-approved-loans")]
    #[case("Rock & Roll", "rock-roll")]
    #[case("- dash edges -", "dash-edges")]
    #[case("Zip 78704 Homes", "zip-78704-homes")]
    #[case("snake_case_title", "snakecasetitle")]
    #[case("Tabs\tand\nnewlines", "tabs-and-newlines")]
    #[case("", "")]
    #[case("!!!", "")]
    fn derives_anchor_ids(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(anchor_id(text), expected);
    }

    #[test]
    fn anchor_ids_are_stable_and_fragment_safe() {
        let samples = [
            "Austin Neighborhoods",
            " -- Why Now? -- ",
            "2024 Market Report: Q3",
            "Mixed   CASE and    spaces",
            "émigré Café",
        ];
        for text in samples {
            let id = anchor_id(text);
            assert_eq!(id, anchor_id(text));
            assert!(!id.starts_with('-') && !id.ends_with('-'), "{id}");
            assert!(!id.contains("--"), "{id}");
            assert!(
                id.chars()
                    .all(|c| c == '-' || c.is_numeric() || c.is_lowercase()),
                "{id}"
            );
        }
    }

    #[test]
    fn identical_headings_collide() {
        assert_eq!(anchor_id("Overview"), anchor_id("overview"));
    }
}
