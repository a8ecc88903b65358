/// Stand-in for the table of contents, resolved when the page is rendered.
pub struct TocPlaceholder;

impl TocPlaceholder {
    pub const TOKEN: &'static str = "<!-- TOC -->";

    pub fn recognize(line: &str) -> bool {
        line.contains(Self::TOKEN)
    }
}
