//! Store documents.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// An opaque record returned by the document store.
///
/// The engine reads at most two fields by name (the configured value field
/// and, for the return-rate strategy, the return-rate field); everything
/// else is carried untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    fields: Map<String, JsonValue>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a field by name; `None` when the document has no such field.
    pub fn field(&self, name: &str) -> Option<&JsonValue> {
        self.fields.get(name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: JsonValue) {
        self.fields.insert(name.into(), value);
    }

    pub fn with_field(mut self, name: impl Into<String>, value: JsonValue) -> Self {
        self.set(name, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Map<String, JsonValue>> for Document {
    fn from(fields: Map<String, JsonValue>) -> Self {
        Self { fields }
    }
}
