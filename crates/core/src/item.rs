//! Commerce event line items.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::num;

/// One line entry of a commerce event.
///
/// Fields keep their raw wire shape; coercion happens in the accessors so
/// that a stringly-typed price or quantity still resolves. The item is
/// immutable for the duration of resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Item identifier used for the store lookup. May be absent or empty,
    /// in which case no store read is attempted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Unit price of the item.
    #[serde(default)]
    pub price: JsonValue,

    /// Quantity. Field *presence*, not truthiness, governs the default:
    /// an absent field counts as 1, an explicit `0` stays 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<JsonValue>,

    /// Per-unit discount, used only by the value-with-discount strategy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<JsonValue>,
}

impl Item {
    /// The id usable as a lookup key: present and non-empty.
    pub fn lookup_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// Coerced unit price; NaN when absent or unparseable.
    pub fn unit_price(&self) -> f64 {
        num::coerce(&self.price)
    }

    /// Coerced quantity; defaults to 1 when the field is absent.
    pub fn quantity(&self) -> f64 {
        self.quantity.as_ref().map(num::coerce).unwrap_or(1.0)
    }

    /// Coerced discount; defaults to 0 when the field is absent.
    pub fn discount(&self) -> f64 {
        self.discount.as_ref().map(num::coerce).unwrap_or(0.0)
    }
}
