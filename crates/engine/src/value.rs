//! Value calculator.
//!
//! Turns a found store document into a monetary value per the configured
//! strategy.

use cartval_core::{EngineConfig, Item, ValueCalculation, num};
use cartval_store::Document;

/// Value of an item given its store document.
///
/// The return rate is not clamped to [0,1]; a rate above 1 yields a
/// negative per-item value, and clamping happens only on the aggregate.
pub fn document_value(config: &EngineConfig, item: &Item, document: &Document) -> f64 {
    let value = num::coerce_field(document.field(&config.value_field));

    match config.value_calculation {
        ValueCalculation::ValueQuantity => value * item.quantity(),
        ValueCalculation::ReturnRate => {
            let rate_field = config.return_rate_field.as_deref().unwrap_or_default();
            let return_rate = num::coerce_field(document.field(rate_field));
            num::round2((1.0 - return_rate) * value * item.quantity())
        }
        ValueCalculation::ValueWithDiscount => (value - item.discount()) * item.quantity(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cartval_core::FallbackPolicy;
    use serde_json::json;

    fn test_config(calculation: ValueCalculation) -> EngineConfig {
        EngineConfig::new("products", "value", calculation, FallbackPolicy::Zero)
            .with_return_rate_field("returnRate")
    }

    fn test_item(value: serde_json::Value) -> Item {
        serde_json::from_value(value).unwrap()
    }

    fn test_document(value: serde_json::Value) -> Document {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn value_quantity_multiplies_document_value() {
        let config = test_config(ValueCalculation::ValueQuantity);
        let item = test_item(json!({"id": "sku1", "price": 80, "quantity": 2}));
        let doc = test_document(json!({"value": 100}));
        assert_eq!(document_value(&config, &item, &doc), 200.0);
    }

    #[test]
    fn value_quantity_defaults_quantity_to_one() {
        let config = test_config(ValueCalculation::ValueQuantity);
        let item = test_item(json!({"id": "sku2", "price": 80}));
        let doc = test_document(json!({"value": 10}));
        assert_eq!(document_value(&config, &item, &doc), 10.0);
    }

    #[test]
    fn return_rate_discounts_and_rounds() {
        let config = test_config(ValueCalculation::ReturnRate);

        let item = test_item(json!({"id": "sku1", "quantity": 2}));
        let doc = test_document(json!({"value": 100, "returnRate": 0.5}));
        assert_eq!(document_value(&config, &item, &doc), 100.0);

        let item = test_item(json!({"id": "sku2", "quantity": 1}));
        let doc = test_document(json!({"value": 10, "returnRate": 0.25}));
        assert_eq!(document_value(&config, &item, &doc), 7.5);
    }

    #[test]
    fn return_rate_above_one_goes_negative() {
        let config = test_config(ValueCalculation::ReturnRate);
        let item = test_item(json!({"id": "sku1", "quantity": 1}));
        let doc = test_document(json!({"value": 100, "returnRate": 1.5}));
        assert_eq!(document_value(&config, &item, &doc), -50.0);
    }

    #[test]
    fn value_with_discount_subtracts_before_multiplying() {
        let config = test_config(ValueCalculation::ValueWithDiscount);

        let item = test_item(json!({"id": "sku1", "quantity": 2, "discount": 20}));
        let doc = test_document(json!({"value": 100}));
        assert_eq!(document_value(&config, &item, &doc), 160.0);

        let item = test_item(json!({"id": "sku2", "quantity": 1}));
        let doc = test_document(json!({"value": 10}));
        assert_eq!(document_value(&config, &item, &doc), 10.0);
    }

    #[test]
    fn missing_value_field_is_nan() {
        let config = test_config(ValueCalculation::ValueQuantity);
        let item = test_item(json!({"id": "sku1", "quantity": 2}));
        let doc = test_document(json!({"other": 100}));
        assert!(document_value(&config, &item, &doc).is_nan());
    }

    #[test]
    fn missing_return_rate_field_is_nan() {
        let config = test_config(ValueCalculation::ReturnRate);
        let item = test_item(json!({"id": "sku1", "quantity": 1}));
        let doc = test_document(json!({"value": 100}));
        assert!(document_value(&config, &item, &doc).is_nan());
    }
}
