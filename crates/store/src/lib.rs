//! `cartval-store` — the keyed document store boundary.
//!
//! The engine treats the store as an external collaborator behind the
//! [`DocumentStore`] trait: one read per key, no batching, no retries.
//! Production deployments plug in a real client; tests and dev use
//! [`InMemoryDocumentStore`].

pub mod client;
pub mod document;
pub mod in_memory;

pub use client::{DocumentKey, DocumentStore, ReadContext, StoreError};
pub use document::Document;
pub use in_memory::InMemoryDocumentStore;
