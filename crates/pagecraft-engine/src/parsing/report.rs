use crate::blocks::Block;

use super::rope::Span;

/// A line nothing recognized, kept verbatim as a text block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackText {
    pub block: Block,
}

/// The block recovered from one non-blank line of markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// 1-based line number in the source.
    pub number: usize,
    /// Byte span of the line, terminator included.
    pub span: Span,
    /// `Ok` for a recognized construct, `Err` when the line degraded to text.
    pub outcome: Result<Block, FallbackText>,
}

impl ParsedLine {
    pub fn block(&self) -> &Block {
        match &self.outcome {
            Ok(block) => block,
            Err(fallback) => &fallback.block,
        }
    }

    pub fn into_block(self) -> Block {
        match self.outcome {
            Ok(block) => block,
            Err(fallback) => fallback.block,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.outcome.is_err()
    }
}

/// Per-line parse results, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub lines: Vec<ParsedLine>,
}

impl ParseReport {
    /// Lines that were not recognized as any construct.
    pub fn fallbacks(&self) -> impl Iterator<Item = &ParsedLine> {
        self.lines.iter().filter(|line| line.is_fallback())
    }

    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.lines.iter().map(ParsedLine::block)
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.lines.into_iter().map(ParsedLine::into_block).collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
