//! Block id generation.
//!
//! Ids are only meaningful within one editing session: the markup format does
//! not carry them, so every load assigns fresh ones. Generators are passed in
//! wherever blocks are created so callers (and tests) control the scheme.

use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

use super::types::BlockId;

/// Source of fresh block ids.
pub trait IdGenerator {
    fn next_id(&mut self) -> BlockId;
}

impl<G: IdGenerator + ?Sized> IdGenerator for &mut G {
    fn next_id(&mut self) -> BlockId {
        (**self).next_id()
    }
}

/// Wall-clock millis combined with a monotonically increasing counter.
///
/// Unique for the lifetime of the generator; not guaranteed unique across
/// restarts when the clock is coarse.
#[derive(Debug, Default)]
pub struct MonotonicIdGenerator {
    counter: u64,
}

impl MonotonicIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for MonotonicIdGenerator {
    fn next_id(&mut self) -> BlockId {
        self.counter += 1;
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        BlockId::new(format!("block-{millis}-{}", self.counter))
    }
}

/// Predictable `prefix-1`, `prefix-2`, ... ids.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> BlockId {
        let id = BlockId::new(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}

/// Random v4 UUIDs.
#[derive(Debug, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> BlockId {
        BlockId::new(Uuid::new_v4().to_string())
    }
}
