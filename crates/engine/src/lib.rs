//! `cartval-engine` — item-value resolution and aggregation.
//!
//! The engine takes the line items of a commerce event, resolves each
//! item's monetary value against a keyed document store (falling back to a
//! local estimate when the store has no record), and aggregates the
//! resolved values into a single clamped, cost-adjusted total rendered as
//! a string.
//!
//! All external collaborators are injected: the item source
//! ([`EventItemSource`]), the store ([`cartval_store::DocumentStore`]) and
//! the diagnostic sink ([`DiagnosticSink`]). Per-item failures never
//! escape the resolver; the only caller-visible failures are a broken
//! item source and a resolution task that fails to join.

pub mod aggregate;
pub mod diag;
pub mod engine;
pub mod fallback;
pub mod resolver;
pub mod source;
pub mod value;

pub use aggregate::{Aggregator, render_total};
pub use diag::{DiagnosticSink, MemorySink, Severity, TracingSink};
pub use engine::Engine;
pub use fallback::fallback_value;
pub use resolver::ItemResolver;
pub use source::{EventItemSource, FixedItemSource, SourceError};
pub use value::document_value;
