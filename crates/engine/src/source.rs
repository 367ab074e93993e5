//! Event-item source.

use thiserror::Error;

use cartval_core::{CommerceEvent, Item};

/// Event-item source failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("event data unavailable: {0}")]
    Unavailable(String),
}

/// Supplies the ordered item list of the current commerce event.
///
/// Called exactly once per engine invocation. An event without items
/// yields an empty list, not an error.
pub trait EventItemSource: Send + Sync {
    fn items(&self) -> Result<Vec<Item>, SourceError>;
}

impl EventItemSource for CommerceEvent {
    fn items(&self) -> Result<Vec<Item>, SourceError> {
        Ok(self.items.clone())
    }
}

/// Fixed in-memory item source. For tests/embedding.
#[derive(Debug, Clone, Default)]
pub struct FixedItemSource {
    items: Vec<Item>,
}

impl FixedItemSource {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }
}

impl EventItemSource for FixedItemSource {
    fn items(&self) -> Result<Vec<Item>, SourceError> {
        Ok(self.items.clone())
    }
}
