use crate::blocks::BlockId;

/// Result of applying a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    /// Blocks created, changed or moved. Deleted ids are listed too.
    pub changed: Vec<BlockId>,
    /// Document version after the command.
    pub version: u64,
}

impl Patch {
    /// True when the command left the document as it was.
    pub fn is_noop(&self) -> bool {
        self.changed.is_empty()
    }
}
