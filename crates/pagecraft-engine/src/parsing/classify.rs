use crate::blocks::{HeadingContent, ImageContent, QuoteContent};
use crate::syntax::{BlockQuote, Figure, HeadingTag, Rule, TocPlaceholder};

use super::rope::{LineRef, Span};

/// What a single line was recognized as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Heading(HeadingContent),
    Image(ImageContent),
    Quote(QuoteContent),
    Divider,
    Toc,
    /// Nothing matched; the line is kept verbatim as text.
    Text,
}

/// Classification of one line, made without looking at its neighbours.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Full byte span of this line in the rope.
    pub line: Span,
    /// 1-based line number.
    pub number: usize,
    /// Whether the line is whitespace only.
    pub is_blank: bool,
    /// Line text without its terminator.
    pub text: String,
    pub kind: LineKind,
}

/// Classifies markup lines by trying each construct in priority order.
pub struct MarkupLineClassifier;

impl MarkupLineClassifier {
    /// Priority: heading, image, blockquote, rule, TOC placeholder, then text.
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        let is_blank = lr.text.trim().is_empty();
        let kind = if is_blank {
            LineKind::Text
        } else {
            Self::recognize(&lr.text)
        };

        LineClass {
            line: lr.span,
            number: lr.number,
            is_blank,
            text: lr.text.clone(),
            kind,
        }
    }

    fn recognize(text: &str) -> LineKind {
        if let Some(heading) = HeadingTag::recognize(text) {
            return LineKind::Heading(heading);
        }
        if let Some(image) = Figure::recognize(text) {
            return LineKind::Image(image);
        }
        if let Some(quote) = BlockQuote::recognize(text) {
            return LineKind::Quote(quote);
        }
        if Rule::recognize(text) {
            return LineKind::Divider;
        }
        if TocPlaceholder::recognize(text) {
            return LineKind::Toc;
        }
        LineKind::Text
    }
}
