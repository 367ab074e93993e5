//! Item resolver.
//!
//! Produces exactly one numeric value per item. Failures are contained
//! here: a missing id or a failed store read resolves to the fallback
//! value with a diagnostic, never an error to the caller.

use std::sync::Arc;

use cartval_core::{EngineConfig, Item};
use cartval_store::{DocumentKey, DocumentStore, ReadContext};

use crate::diag::DiagnosticSink;
use crate::fallback::fallback_value;
use crate::value::document_value;

/// Resolves one item against the document store.
///
/// Cheap to clone; one clone is moved into each fan-out task.
#[derive(Clone)]
pub struct ItemResolver {
    config: Arc<EngineConfig>,
    store: Arc<dyn DocumentStore>,
    sink: Arc<dyn DiagnosticSink>,
    context: ReadContext,
}

impl ItemResolver {
    pub fn new(
        config: Arc<EngineConfig>,
        store: Arc<dyn DocumentStore>,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Self {
        let context = match &config.project_id {
            Some(project_id) => ReadContext::for_project(project_id.clone()),
            None => ReadContext::new(),
        };
        Self {
            config,
            store,
            sink,
            context,
        }
    }

    /// Resolve an item to a number. Infallible by contract: every path
    /// ends in a value, and the operation completes exactly once.
    pub async fn resolve(&self, item: &Item) -> f64 {
        // Computed eagerly: this is the value for every failure path.
        let fallback = fallback_value(&self.config, item);

        let Some(id) = item.lookup_id() else {
            self.sink
                .warn("item has no id; resolving with the fallback value");
            return fallback;
        };

        let key = DocumentKey::new(&self.config.collection_id, id);
        match self.store.read(&key, &self.context).await {
            Ok(document) => document_value(&self.config, item, &document),
            Err(err) => {
                self.sink
                    .error(&format!("document read failed for key {key}: {err}"));
                fallback
            }
        }
    }
}
