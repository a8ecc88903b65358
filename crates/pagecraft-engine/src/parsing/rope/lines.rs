use xi_rope::Rope;

use super::span::Span;

/// One physical line of the markup.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Byte span of this line in the rope, including its terminator.
    pub span: Span,
    /// 1-based line number.
    pub number: usize,
    /// The line text with its `\n` / `\r\n` terminator removed.
    pub text: String,
}

/// Iterates the rope line by line, tracking byte spans.
///
/// Uses `lines_raw` so spans account for the newline characters.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).enumerate().map(move |(idx, line)| {
        let start = offset;
        offset += line.len();
        LineRef {
            span: Span { start, end: offset },
            number: idx + 1,
            text: line.trim_end_matches(['\r', '\n']).to_string(),
        }
    })
}
