use crate::blocks::{Block, BlockContent};
use crate::syntax::inline::count_words;

pub const DEFAULT_WORDS_PER_MINUTE: u32 = 250;

/// Minutes to read the page at 250 words per minute, never less than one.
pub fn estimate_reading_time(blocks: &[Block]) -> u32 {
    estimate_reading_time_at(blocks, DEFAULT_WORDS_PER_MINUTE)
}

/// Like [`estimate_reading_time`] with a custom reading speed.
///
/// A speed of zero is treated as the default.
pub fn estimate_reading_time_at(blocks: &[Block], words_per_minute: u32) -> u32 {
    let wpm = match words_per_minute {
        0 => DEFAULT_WORDS_PER_MINUTE,
        n => n,
    };
    let words = word_count(blocks);
    let minutes = words.div_ceil(wpm as usize);
    u32::try_from(minutes).unwrap_or(u32::MAX).max(1)
}

/// Words in heading text, quote text and text blocks.
pub fn word_count(blocks: &[Block]) -> usize {
    blocks
        .iter()
        .map(|block| match block.content() {
            BlockContent::Heading(h) => count_words(&h.text),
            BlockContent::Quote(q) => count_words(&q.text),
            BlockContent::Text(t) => count_words(&t.html),
            _ => 0,
        })
        .sum()
}
