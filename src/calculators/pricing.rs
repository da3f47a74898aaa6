//! Pricing analysis.
//!
//! - `bvr` - bundle value ratio, standalone sum over bundle price
//! - `tier_gap` - price and value steps between adjacent tiers
//! - `cost_floor` - minimum viable price from the cost structure
//! - `price_value_ratio` - perceived value over price
//! - `premium_price_index` - price over market average
//! - `bundle_discount` - effective discount against the standalone sum

use std::collections::BTreeMap;

use serde_json::Value;

use super::{CalcError, CalculatorModule, to_json};
use crate::domain::{
    AppraisalInput, BvrResult, CostFloorResult, ProductDefinition, SingleValueResult,
    TierGap, TierGapResult,
};

pub const FUNCTIONS: &[&str] = &[
    "bvr",
    "tier_gap",
    "cost_floor",
    "price_value_ratio",
    "premium_price_index",
    "bundle_discount",
];

pub fn module() -> CalculatorModule {
    CalculatorModule {
        name: "pricing",
        functions: FUNCTIONS,
        run,
    }
}

fn run(function: &str, input: &AppraisalInput) -> Option<Result<Value, CalcError>> {
    let result = match function {
        "bvr" => to_json(bvr(input)),
        "tier_gap" => to_json(tier_gap(input)),
        "cost_floor" => to_json(cost_floor(input)),
        "price_value_ratio" => to_json(price_value_ratio(input)),
        "premium_price_index" => to_json(premium_price_index(input)),
        "bundle_discount" => to_json(bundle_discount(input)),
        _ => return None,
    };
    Some(result)
}

fn product(input: &AppraisalInput) -> Result<&ProductDefinition, CalcError> {
    input
        .product
        .as_ref()
        .ok_or_else(|| CalcError::new("product definition required"))
}

/// Bundle value ratio.
///
/// Below 1.0 the bundle is worth less than its parts; above 2.0 it is a very
/// strong proposition.
pub fn bvr(input: &AppraisalInput) -> Result<BvrResult, CalcError> {
    let product = product(input)?;
    if product.components.is_empty() {
        return Err(CalcError::new(
            "product must have components for BVR calculation",
        ));
    }
    if product.price <= 0.0 {
        return Err(CalcError::new("product price must be positive"));
    }

    let mut standalone_sum = 0.0;
    let mut component_values = BTreeMap::new();
    for component in &product.components {
        standalone_sum += component.standalone_price;
        component_values.insert(component.name.clone(), component.standalone_price);
    }

    let bvr = standalone_sum / product.price;
    let interpretation = match bvr {
        r if r < 1.0 => "negative_value_proposition",
        r if r < 1.3 => "marginal",
        r if r < 1.5 => "adequate",
        r if r < 2.0 => "strong",
        _ => "very_strong",
    };

    Ok(BvrResult {
        bvr,
        standalone_sum,
        bundle_price: product.price,
        interpretation: interpretation.to_string(),
        component_values,
    })
}

/// Price and value gaps between each pair of adjacent tiers.
pub fn tier_gap(input: &AppraisalInput) -> Result<TierGapResult, CalcError> {
    let tiers = &input.tiers;
    if tiers.len() < 2 {
        return Err(CalcError::new("at least 2 tiers required for gap analysis"));
    }
    if tiers.windows(2).any(|pair| pair[1].level <= pair[0].level) {
        return Err(CalcError::new("tiers must be ordered by level (ascending)"));
    }

    let mut gaps = Vec::with_capacity(tiers.len() - 1);
    for pair in tiers.windows(2) {
        let (lower, upper) = (&pair[0], &pair[1]);
        if lower.price <= 0.0 {
            return Err(CalcError::new(format!(
                "tier {:?} has non-positive price",
                lower.name
            )));
        }

        let price_gap_abs = upper.price - lower.price;
        let price_gap_pct = price_gap_abs / lower.price * 100.0;

        let value_gap = match (lower.perceived_value, upper.perceived_value) {
            (Some(low), Some(high)) => Some(high - low),
            _ => None,
        };
        let value_to_price_ratio = value_gap
            .filter(|_| price_gap_abs > 0.0)
            .map(|gap| gap / price_gap_abs);

        let diagnosis = match value_to_price_ratio {
            Some(ratio) if ratio > 1.0 => "effective_upsell",
            Some(ratio) if ratio < 1.0 => "broken_step",
            Some(_) => "neutral",
            None if price_gap_pct < 10.0 => "gap_too_small",
            None if price_gap_pct > 80.0 => "gap_too_large",
            None => "insufficient_data",
        };

        gaps.push(TierGap {
            from_tier: lower.name.clone(),
            to_tier: upper.name.clone(),
            price_gap_abs,
            price_gap_pct,
            value_gap,
            value_to_price_ratio,
            diagnosis: diagnosis.to_string(),
        });
    }

    Ok(TierGapResult { gaps })
}

/// Direct, partner, shared, amortized acquisition and service cost per
/// customer, grossed up by the target margin.
pub fn cost_floor(input: &AppraisalInput) -> Result<CostFloorResult, CalcError> {
    let financials = input
        .financials
        .as_ref()
        .ok_or_else(|| CalcError::new("financial data required"))?;
    let product = input
        .product
        .as_ref()
        .ok_or_else(|| CalcError::new("product definition required for price comparison"))?;

    let mut floor: f64 = [
        financials.direct_cost_per_customer,
        financials.partner_licensing_cost,
        financials.shared_cost_per_customer,
        financials.customer_service_cost,
    ]
    .iter()
    .flatten()
    .sum();

    if let (Some(spend), Some(acquired)) = (
        financials.total_acquisition_spend,
        financials.new_customers_acquired,
    ) {
        if acquired > 0.0 {
            floor += spend / acquired;
        }
    }
    if let Some(margin) = financials.target_min_margin {
        if margin < 1.0 {
            floor /= 1.0 - margin;
        }
    }

    Ok(CostFloorResult {
        cost_floor: floor,
        current_price: product.price,
        margin: product.price - floor,
        clears_floor: product.price >= floor,
    })
}

/// Perceived value over price. Uses the first tier with a perceived value,
/// falling back to the mean over components that carry one.
pub fn price_value_ratio(input: &AppraisalInput) -> Result<SingleValueResult, CalcError> {
    let product = product(input)?;

    let perceived = input
        .tiers
        .iter()
        .find_map(|tier| tier.perceived_value)
        .or_else(|| {
            let values: Vec<f64> = input
                .components
                .iter()
                .filter_map(|c| c.perceived_value)
                .collect();
            (!values.is_empty()).then(|| values.iter().sum::<f64>() / values.len() as f64)
        })
        .ok_or_else(|| {
            CalcError::new("perceived value data required (tier or component level)")
        })?;

    if product.price <= 0.0 {
        return Err(CalcError::new("product price must be positive"));
    }

    let ratio = perceived / product.price;
    let interpretation = if ratio > 1.0 {
        "positive_value_perception"
    } else if ratio == 1.0 {
        "neutral"
    } else {
        "negative_value_perception"
    };

    Ok(SingleValueResult {
        value: ratio,
        interpretation: interpretation.to_string(),
    })
}

pub fn premium_price_index(input: &AppraisalInput) -> Result<SingleValueResult, CalcError> {
    let product = product(input)?;
    let average = input
        .market
        .as_ref()
        .and_then(|m| m.market_average_price)
        .ok_or_else(|| CalcError::new("market average price required"))?;
    if average <= 0.0 {
        return Err(CalcError::new("market average price must be positive"));
    }

    let index = product.price / average;
    Ok(SingleValueResult {
        value: index,
        interpretation: format!("premium_price_is_{:.1}x_market_average", index),
    })
}

/// `1 - bundle price / standalone sum`. 15-30% is the effective range.
pub fn bundle_discount(input: &AppraisalInput) -> Result<SingleValueResult, CalcError> {
    let product = product(input)?;
    if product.components.is_empty() {
        return Err(CalcError::new("product must have components"));
    }

    let standalone_sum: f64 = product.components.iter().map(|c| c.standalone_price).sum();
    if standalone_sum <= 0.0 {
        return Err(CalcError::new("standalone sum must be positive"));
    }

    let discount = 1.0 - product.price / standalone_sum;
    let pct = (discount * 100.0).abs();
    let interpretation = match discount {
        d if d < 0.0 => "negative_discount_bundle_costs_more",
        _ if pct < 10.0 => "weak_discount",
        _ if pct < 15.0 => "noticeable_discount",
        _ if pct <= 30.0 => "effective_range",
        _ if pct <= 50.0 => "aggressive_discount",
        _ => "extreme_discount_risks_devaluation",
    };

    Ok(SingleValueResult {
        value: discount,
        interpretation: interpretation.to_string(),
    })
}
