//! Document store client contract.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::document::Document;

/// Fully-qualified lookup key: `"{collection}/{id}"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentKey(String);

impl DocumentKey {
    pub fn new(collection: &str, id: &str) -> Self {
        Self(format!("{collection}/{id}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-read scoping context (project/namespace).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadContext {
    /// Project the read is issued against; `None` uses the client's
    /// ambient project.
    pub project_id: Option<String>,
}

impl ReadContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_project(project_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
        }
    }
}

/// Document store operation error.
///
/// A lookup miss and a backend outage are distinct variants, but callers
/// inside the engine treat both the same way (fall back, log, continue).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("document not found: {0}")]
    NotFound(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Keyed, read-only document store.
///
/// One read per key; no batching and no retries. Any timeout is the
/// client implementation's responsibility.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn read(&self, key: &DocumentKey, context: &ReadContext) -> Result<Document, StoreError>;
}

#[async_trait]
impl<S> DocumentStore for Arc<S>
where
    S: DocumentStore + ?Sized,
{
    async fn read(&self, key: &DocumentKey, context: &ReadContext) -> Result<Document, StoreError> {
        (**self).read(key, context).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_joins_collection_and_id_with_a_slash() {
        let key = DocumentKey::new("test-products", "sku1");
        assert_eq!(key.as_str(), "test-products/sku1");
        assert_eq!(key.to_string(), "test-products/sku1");
    }
}
