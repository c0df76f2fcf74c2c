use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::sync::{PoisonError, RwLock};

/// Errors raised by a [`ScoreStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A score is already recorded under this identifier.
    DuplicateId(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::DuplicateId(id) => write!(f, "Duplicate receipt id: {}", id),
        }
    }
}

impl std::error::Error for StoreError {}

/// Key-value storage of computed scores, keyed by receipt identifier.
///
/// Records are insert-only: once an identifier has a score it is never
/// overwritten or removed.
pub trait ScoreStore: Send + Sync {
    fn put(&self, id: String, points: u64) -> Result<(), StoreError>;

    fn get(&self, id: &str) -> Option<u64>;
}

/// Process-lifetime score storage guarded by a read-write lock.
#[derive(Debug, Default)]
pub struct InMemoryScoreStore {
    scores: RwLock<HashMap<String, u64>>,
}

impl InMemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.scores
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// A poisoned lock still guards a consistent map: every write is a single insert.
impl ScoreStore for InMemoryScoreStore {
    fn put(&self, id: String, points: u64) -> Result<(), StoreError> {
        let mut scores = self.scores.write().unwrap_or_else(PoisonError::into_inner);
        match scores.entry(id) {
            Entry::Occupied(entry) => Err(StoreError::DuplicateId(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(points);
                Ok(())
            }
        }
    }

    fn get(&self, id: &str) -> Option<u64> {
        self.scores
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .copied()
    }
}
