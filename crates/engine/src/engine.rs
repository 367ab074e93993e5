//! Orchestrator.
//!
//! Reads the item list once, fans out one resolution task per item, joins
//! all of them, and aggregates the resolved values into the final string.

use std::sync::Arc;

use cartval_core::{EngineConfig, ValuationError, ValuationResult};
use cartval_store::DocumentStore;

use crate::aggregate::{Aggregator, render_total};
use crate::diag::DiagnosticSink;
use crate::resolver::ItemResolver;
use crate::source::EventItemSource;

/// The valuation engine.
///
/// Holds the validated configuration and the injected collaborators.
/// Cheap to share; `evaluate` can run concurrently for independent events.
pub struct Engine {
    config: Arc<EngineConfig>,
    store: Arc<dyn DocumentStore>,
    sink: Arc<dyn DiagnosticSink>,
}

impl Engine {
    /// Build an engine from a configuration and collaborators.
    ///
    /// Fails fast on structurally broken configuration; nothing else is
    /// checked here.
    pub fn new(
        config: EngineConfig,
        store: Arc<dyn DocumentStore>,
        sink: Arc<dyn DiagnosticSink>,
    ) -> ValuationResult<Self> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
            store,
            sink,
        })
    }

    /// Resolve and aggregate the items of one commerce event.
    ///
    /// Returns the decimal string representation of the non-negative
    /// total. Per-item failures are absorbed by the resolver; the only
    /// error paths are a broken item source and a resolution task that
    /// failed to join.
    pub async fn evaluate(&self, source: &dyn EventItemSource) -> ValuationResult<String> {
        let items = source.items().map_err(|err| {
            self.sink.error(&format!("event item source failed: {err}"));
            ValuationError::source(err.to_string())
        })?;

        let raw = serde_json::to_string(&items).unwrap_or_else(|_| format!("{items:?}"));
        self.sink.info(&format!("resolving event items: {raw}"));

        let resolver = ItemResolver::new(
            self.config.clone(),
            self.store.clone(),
            self.sink.clone(),
        );

        // Unbounded fan-out: one task per item, no concurrency cap.
        let mut tasks = Vec::with_capacity(items.len());
        for item in items {
            let resolver = resolver.clone();
            tasks.push(tokio::spawn(async move { resolver.resolve(&item).await }));
        }

        // Join preserves input order. Every handle is drained even after a
        // join failure, so no task escapes the join.
        let mut resolved = Vec::with_capacity(tasks.len());
        let mut join_failure = None;
        for task in tasks {
            match task.await {
                Ok(value) => resolved.push(value),
                Err(err) => {
                    self.sink
                        .error(&format!("resolution task failed to join: {err}"));
                    join_failure = Some(err.to_string());
                }
            }
        }
        if let Some(reason) = join_failure {
            return Err(ValuationError::resolution(reason));
        }

        let total = Aggregator::new(&self.config, self.sink.as_ref()).total(&resolved);
        Ok(render_total(total))
    }
}
