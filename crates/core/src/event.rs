//! Commerce event envelope.

use chrono::{DateTime, Utc};
use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValuationError;
use crate::item::Item;

/// Identifier of a commerce event.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(Uuid);

impl EventId {
    /// Create a new identifier.
    ///
    /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
    /// for determinism.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for EventId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for EventId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl FromStr for EventId {
    type Err = ValuationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::from_str(s)
            .map_err(|e| ValuationError::source(format!("EventId: {e}")))?;
        Ok(Self(uuid))
    }
}

/// A commerce event carrying the item list to be valued.
///
/// The engine only reads `items`; the rest of the envelope exists for
/// correlation and observability in the hosting pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommerceEvent {
    pub event_id: EventId,
    /// Event name as reported by the source (e.g. `purchase`).
    pub name: String,
    pub occurred_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl CommerceEvent {
    pub fn new(name: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            event_id: EventId::new(),
            name: name.into(),
            occurred_at: Utc::now(),
            currency: None,
            items,
        }
    }
}
