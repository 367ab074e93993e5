//! Fallback calculator.
//!
//! Computes a locally-derivable estimate for an item when the store has no
//! matching record (or when no lookup key could be built).

use cartval_core::{EngineConfig, FallbackPolicy, Item, num::round2};

/// Estimate an item's value without a store document.
///
/// An invalid price or quantity (NaN) propagates into the result; callers
/// do not re-check it here.
pub fn fallback_value(config: &EngineConfig, item: &Item) -> f64 {
    match config.fallback_value_if_not_found {
        FallbackPolicy::Zero => 0.0,
        FallbackPolicy::Revenue => item.unit_price() * item.quantity(),
        FallbackPolicy::Percent => {
            round2(item.unit_price() * config.fall_back_percent * item.quantity())
        }
    }
}
