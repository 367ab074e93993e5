//! In-memory document store.
//!
//! Intended for tests/dev. Not optimized for performance.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::client::{DocumentKey, DocumentStore, ReadContext, StoreError};
use crate::document::Document;

/// In-memory keyed document store.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    documents: RwLock<HashMap<String, Document>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) a document under a fully-qualified key, e.g.
    /// `"products/sku1"`.
    pub fn insert(&self, key: impl Into<String>, document: Document) {
        if let Ok(mut documents) = self.documents.write() {
            documents.insert(key.into(), document);
        }
    }

    pub fn len(&self) -> usize {
        self.documents.read().map(|d| d.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn read(
        &self,
        key: &DocumentKey,
        _context: &ReadContext,
    ) -> Result<Document, StoreError> {
        let documents = self
            .documents
            .read()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;

        documents
            .get(key.as_str())
            .cloned()
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn read_returns_inserted_document() {
        let store = InMemoryDocumentStore::new();
        store.insert(
            "products/sku1",
            Document::new().with_field("value", json!(100)),
        );

        let doc = store
            .read(&DocumentKey::new("products", "sku1"), &ReadContext::new())
            .await
            .unwrap();
        assert_eq!(doc.field("value"), Some(&json!(100)));
    }

    #[tokio::test]
    async fn read_of_unknown_key_is_not_found() {
        let store = InMemoryDocumentStore::new();
        let err = store
            .read(&DocumentKey::new("products", "ghost"), &ReadContext::new())
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::NotFound("products/ghost".to_string()));
    }
}
