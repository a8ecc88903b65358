use crate::blocks::{Block, BlockId, IdGenerator, MonotonicIdGenerator};
use crate::editing::{Cmd, Direction, EditError, Patch};
use crate::parsing::parse_markup;
use crate::serialize::serialize_blocks;
use crate::views::DocumentInsights;

/// A block sequence being edited.
///
/// Holds the blocks in rendering order, a version counter bumped on every
/// effective edit, and the id generator used for new blocks.
pub struct Document<G: IdGenerator = MonotonicIdGenerator> {
    blocks: Vec<Block>,
    version: u64,
    ids: G,
}

impl<G: IdGenerator> Document<G> {
    pub fn new(ids: G) -> Self {
        Self::from_blocks(Vec::new(), ids)
    }

    pub fn from_blocks(blocks: Vec<Block>, ids: G) -> Self {
        Self {
            blocks,
            version: 0,
            ids,
        }
    }

    /// Recovers a document from stored markup.
    pub fn load(markup: &str, mut ids: G) -> Self {
        let blocks = parse_markup(markup, &mut ids);
        Self::from_blocks(blocks, ids)
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id() == id)
    }

    pub fn position(&self, id: &BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| b.id() == id)
    }

    /// Markup for the storage collaborator.
    pub fn to_markup(&self) -> String {
        serialize_blocks(&self.blocks)
    }

    pub fn insights(&self) -> DocumentInsights {
        DocumentInsights::compute(&self.blocks)
    }

    /// Applies one edit.
    ///
    /// Unknown ids and kind-changing updates are rejected without touching
    /// the document. Moves that would leave a block in place return an empty
    /// patch and do not bump the version.
    pub fn apply(&mut self, cmd: Cmd) -> Result<Patch, EditError> {
        log::debug!("applying {cmd:?} at version {}", self.version);

        let changed = match cmd {
            Cmd::Add { kind, after } => {
                let index = match after {
                    Some(after) => self.require(&after)? + 1,
                    None => self.blocks.len(),
                };
                let block = Block::with_defaults(kind, &mut self.ids);
                let id = block.id().clone();
                self.blocks.insert(index, block);
                vec![id]
            }
            Cmd::Update { id, content } => {
                let index = self.require(&id)?;
                self.blocks[index].replace_content(content)?;
                vec![id]
            }
            Cmd::Move { id, direction } => {
                let index = self.require(&id)?;
                let target = match direction {
                    Direction::Up => index.checked_sub(1),
                    Direction::Down => Some(index + 1).filter(|&t| t < self.blocks.len()),
                };
                match target {
                    Some(target) => {
                        self.blocks.swap(index, target);
                        vec![id, self.blocks[index].id().clone()]
                    }
                    None => vec![],
                }
            }
            Cmd::MoveTo { id, index } => {
                let from = self.require(&id)?;
                let to = index.min(self.blocks.len() - 1);
                if from == to {
                    vec![]
                } else {
                    let block = self.blocks.remove(from);
                    self.blocks.insert(to, block);
                    vec![id]
                }
            }
            Cmd::Delete { id } => {
                let index = self.require(&id)?;
                self.blocks.remove(index);
                vec![id]
            }
            Cmd::Duplicate { id } => {
                let index = self.require(&id)?;
                let copy = Block::new(self.ids.next_id(), self.blocks[index].content().clone());
                let copy_id = copy.id().clone();
                self.blocks.insert(index + 1, copy);
                vec![copy_id]
            }
        };

        if !changed.is_empty() {
            self.version += 1;
        }
        Ok(Patch {
            changed,
            version: self.version,
        })
    }

    fn require(&self, id: &BlockId) -> Result<usize, EditError> {
        self.position(id)
            .ok_or_else(|| EditError::UnknownBlock(id.clone()))
    }
}

impl Default for Document<MonotonicIdGenerator> {
    fn default() -> Self {
        Self::new(MonotonicIdGenerator::new())
    }
}
