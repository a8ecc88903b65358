use crate::blocks::{BlockContent, BlockId, BlockKind, KindMismatch};

/// Direction for single-step moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Edit operations on a document's block sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Insert a block with placeholder content after `after`, or at the end.
    Add {
        kind: BlockKind,
        after: Option<BlockId>,
    },
    /// Replace a block's content wholesale. The kind must not change.
    Update { id: BlockId, content: BlockContent },
    /// Swap a block with its neighbour. No-op at either end.
    Move { id: BlockId, direction: Direction },
    /// Move a block to `index`, clamped to the sequence length.
    MoveTo { id: BlockId, index: usize },
    Delete { id: BlockId },
    /// Insert a copy with a fresh id right after the original.
    Duplicate { id: BlockId },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("no block with id {0}")]
    UnknownBlock(BlockId),
    #[error(transparent)]
    KindMismatch(#[from] KindMismatch),
}
