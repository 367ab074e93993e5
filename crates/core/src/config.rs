//! Engine configuration.
//!
//! Loaded once per invocation by the hosting environment and read-only for
//! the engine afterwards. Wire names are camelCase to match the surface
//! the hosting pipeline exposes.

use serde::{Deserialize, Serialize};

use crate::error::{ValuationError, ValuationResult};
use crate::num;

/// Strategy for turning a store document into a monetary value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueCalculation {
    /// `documentValue × quantity`
    ValueQuantity,
    /// `round2((1 − returnRate) × documentValue × quantity)`
    ReturnRate,
    /// `(documentValue − discount) × quantity`
    ValueWithDiscount,
}

/// Strategy for estimating a value when the store has no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackPolicy {
    Zero,
    Revenue,
    Percent,
}

fn default_fall_back_percent() -> f64 {
    0.1
}

/// Engine configuration.
///
/// Out-of-vocabulary strategy selectors are rejected at deserialization
/// (the enums are closed); structural gaps are rejected by [`validate`].
///
/// [`validate`]: EngineConfig::validate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    /// Store namespace/prefix the lookup keys live under.
    pub collection_id: String,

    /// Name of the required numeric field on each store document.
    pub value_field: String,

    pub value_calculation: ValueCalculation,

    /// Name of the return-rate field; read only by the `returnRate`
    /// strategy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_rate_field: Option<String>,

    pub fallback_value_if_not_found: FallbackPolicy,

    #[serde(
        default = "default_fall_back_percent",
        deserialize_with = "num::lenient_f64"
    )]
    pub fall_back_percent: f64,

    #[serde(default, deserialize_with = "num::lenient_f64")]
    pub shipping_cost: f64,

    #[serde(default, deserialize_with = "num::lenient_f64")]
    pub fulfillment_cost: f64,

    /// Project the store reads are scoped to; `None` uses the store
    /// client's ambient project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

impl EngineConfig {
    pub fn new(
        collection_id: impl Into<String>,
        value_field: impl Into<String>,
        value_calculation: ValueCalculation,
        fallback_value_if_not_found: FallbackPolicy,
    ) -> Self {
        Self {
            collection_id: collection_id.into(),
            value_field: value_field.into(),
            value_calculation,
            return_rate_field: None,
            fallback_value_if_not_found,
            fall_back_percent: default_fall_back_percent(),
            shipping_cost: 0.0,
            fulfillment_cost: 0.0,
            project_id: None,
        }
    }

    pub fn with_return_rate_field(mut self, field: impl Into<String>) -> Self {
        self.return_rate_field = Some(field.into());
        self
    }

    pub fn with_fall_back_percent(mut self, percent: f64) -> Self {
        self.fall_back_percent = percent;
        self
    }

    pub fn with_shipping_cost(mut self, cost: f64) -> Self {
        self.shipping_cost = cost;
        self
    }

    pub fn with_fulfillment_cost(mut self, cost: f64) -> Self {
        self.fulfillment_cost = cost;
        self
    }

    pub fn with_project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    /// Fail-fast structural validation, run at engine construction.
    pub fn validate(&self) -> ValuationResult<()> {
        if self.collection_id.trim().is_empty() {
            return Err(ValuationError::config("collectionId must not be empty"));
        }

        if self.value_field.trim().is_empty() {
            return Err(ValuationError::config("valueField must not be empty"));
        }

        if self.value_calculation == ValueCalculation::ReturnRate
            && self
                .return_rate_field
                .as_deref()
                .is_none_or(|field| field.trim().is_empty())
        {
            return Err(ValuationError::config(
                "returnRateField is required for the returnRate calculation",
            ));
        }

        if !self.fall_back_percent.is_finite() {
            return Err(ValuationError::config(
                "fallBackPercent must be a finite number",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base_config() -> EngineConfig {
        EngineConfig::new(
            "products",
            "value",
            ValueCalculation::ValueQuantity,
            FallbackPolicy::Zero,
        )
    }

    #[test]
    fn defaults_apply_on_deserialization() {
        let config: EngineConfig = serde_json::from_value(json!({
            "collectionId": "products",
            "valueField": "value",
            "valueCalculation": "valueQuantity",
            "fallbackValueIfNotFound": "percent",
        }))
        .unwrap();

        assert_eq!(config.fall_back_percent, 0.1);
        assert_eq!(config.shipping_cost, 0.0);
        assert_eq!(config.fulfillment_cost, 0.0);
        assert_eq!(config.return_rate_field, None);
        assert_eq!(config.project_id, None);
    }

    #[test]
    fn costs_accept_numeric_strings() {
        let config: EngineConfig = serde_json::from_value(json!({
            "collectionId": "products",
            "valueField": "value",
            "valueCalculation": "valueQuantity",
            "fallbackValueIfNotFound": "zero",
            "shippingCost": "4.90",
            "fulfillmentCost": 2,
        }))
        .unwrap();

        assert_eq!(config.shipping_cost, 4.9);
        assert_eq!(config.fulfillment_cost, 2.0);
    }

    #[test]
    fn unknown_strategy_selector_is_rejected() {
        let result: Result<EngineConfig, _> = serde_json::from_value(json!({
            "collectionId": "products",
            "valueField": "value",
            "valueCalculation": "marketValue",
            "fallbackValueIfNotFound": "zero",
        }));
        assert!(result.is_err());

        let result: Result<EngineConfig, _> = serde_json::from_value(json!({
            "collectionId": "products",
            "valueField": "value",
            "valueCalculation": "valueQuantity",
            "fallbackValueIfNotFound": "guess",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn validate_rejects_empty_collection_or_field() {
        let mut config = base_config();
        config.collection_id = "  ".to_string();
        assert!(matches!(
            config.validate(),
            Err(ValuationError::Config(msg)) if msg.contains("collectionId")
        ));

        let mut config = base_config();
        config.value_field = String::new();
        assert!(matches!(
            config.validate(),
            Err(ValuationError::Config(msg)) if msg.contains("valueField")
        ));
    }

    #[test]
    fn validate_requires_return_rate_field_for_return_rate() {
        let mut config = base_config();
        config.value_calculation = ValueCalculation::ReturnRate;
        assert!(config.validate().is_err());

        let config = config.with_return_rate_field("returns");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_non_finite_percent() {
        let config = base_config().with_fall_back_percent(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn wire_names_are_camel_case() {
        let config = base_config().with_return_rate_field("returns");
        let value = serde_json::to_value(&config).unwrap();
        assert!(value.get("collectionId").is_some());
        assert!(value.get("fallbackValueIfNotFound").is_some());
        assert!(value.get("fallBackPercent").is_some());
        assert!(value.get("returnRateField").is_some());
    }
}
