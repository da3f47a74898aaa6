//! Structured calculation input and calculator result shapes.
//!
//! Every section of [`AppraisalInput`] is optional; each calculator checks
//! for the parts it needs. Unknown sections are ignored.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppraisalInput {
    pub product: Option<ProductDefinition>,
    pub tiers: Vec<TierDefinition>,
    pub components: Vec<ComponentData>,
    pub financials: Option<FinancialData>,
    pub market: Option<MarketContext>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProductDefinition {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub currency: Option<String>,
    pub components: Vec<Component>,
    pub category: Option<String>,
}

/// One element of a bundle.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Component {
    pub name: String,
    pub standalone_price: f64,
    pub marginal_cost: Option<f64>,
    pub perceived_value: Option<f64>,
    pub usage_forecast: Option<f64>,
    pub category: Option<String>,
}

/// One tier of a good-better-best line. `level` orders tiers ascending.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TierDefinition {
    pub name: String,
    pub level: i64,
    pub price: f64,
    pub perceived_value: Option<f64>,
    pub customer_share: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ComponentData {
    pub name: String,
    pub perceived_value: Option<f64>,
    pub marginal_cost: Option<f64>,
    pub standalone_price: Option<f64>,
    pub usage_forecast: Option<f64>,
    pub monthly_active_rate: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FinancialData {
    pub direct_cost_per_customer: Option<f64>,
    pub partner_licensing_cost: Option<f64>,
    pub shared_cost_per_customer: Option<f64>,
    pub customer_service_cost: Option<f64>,
    pub total_acquisition_spend: Option<f64>,
    pub new_customers_acquired: Option<f64>,
    /// Decimal fraction, 0.10 = 10%
    pub target_min_margin: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MarketContext {
    pub market_average_price: Option<f64>,
    pub market_growth_rate: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BvrResult {
    pub bvr: f64,
    pub standalone_sum: f64,
    pub bundle_price: f64,
    pub interpretation: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub component_values: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierGapResult {
    pub gaps: Vec<TierGap>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierGap {
    pub from_tier: String,
    pub to_tier: String,
    pub price_gap_abs: f64,
    pub price_gap_pct: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_gap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_to_price_ratio: Option<f64>,
    pub diagnosis: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostFloorResult {
    pub cost_floor: f64,
    pub current_price: f64,
    pub margin: f64,
    pub clears_floor: bool,
}

/// Generic result for single ratio calculations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SingleValueResult {
    pub value: f64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub interpretation: String,
}
