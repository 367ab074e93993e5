//! Aggregator.
//!
//! Sums the resolved item values, applies cost adjustments, clamps at
//! zero, and renders the result as the string the external contract
//! requires.

use cartval_core::EngineConfig;

use crate::diag::DiagnosticSink;

/// Aggregates resolved item values into the final total.
pub struct Aggregator<'a> {
    config: &'a EngineConfig,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> Aggregator<'a> {
    pub fn new(config: &'a EngineConfig, sink: &'a dyn DiagnosticSink) -> Self {
        Self { config, sink }
    }

    /// Total of all resolved values, cost-adjusted and clamped at zero.
    ///
    /// The resolver contract says every entry is a number, but the sum
    /// does not trust it: non-finite entries are skipped with a warning.
    pub fn total(&self, values: &[f64]) -> f64 {
        let mut total = 0.0;
        for (index, value) in values.iter().enumerate() {
            if value.is_finite() {
                total += value;
            } else {
                self.sink.warn(&format!(
                    "skipping non-numeric resolved value at index {index}"
                ));
            }
        }

        // Costs only count when they coerced to a positive number; an
        // invalid (NaN) cost fails the comparison and is ignored.
        if self.config.shipping_cost > 0.0 {
            total += self.config.shipping_cost;
        }
        if self.config.fulfillment_cost > 0.0 {
            total -= self.config.fulfillment_cost;
        }

        if total < 0.0 { 0.0 } else { total }
    }
}

/// Render a total as its decimal string representation (`"107.5"`, `"0"`).
pub fn render_total(total: f64) -> String {
    total.to_string()
}
