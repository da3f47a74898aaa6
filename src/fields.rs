//! Field selection for statement projections.
//!
//! The whitelist only decides which names may be *requested*. What a handler
//! returns is never checked against it; see [`crate::projection`].

use std::collections::BTreeSet;

use crate::error::QueryError;

pub const DEFAULT_PRESET: &str = "default";
pub const FULL_PRESET: &str = "full";

/// Named field bundles. Requesting [`FULL_PRESET`] also keeps every key.
pub const PRESETS: &[(&str, &[&str])] = &[
    ("minimal", &["value", "interpretation"]),
    (DEFAULT_PRESET, &["module", "function", "value", "interpretation"]),
    (
        FULL_PRESET,
        &["module", "function", "value", "details", "interpretation", "error"],
    ),
];

/// Every field name a statement may request.
pub const VALID_FIELDS: &[&str] = &[
    // envelope
    "module",
    "function",
    "value",
    "details",
    "error",
    "interpretation",
    // bundle value ratio
    "bvr",
    "standalone_sum",
    "bundle_price",
    "component_values",
    // tier gaps
    "gaps",
    "from_tier",
    "to_tier",
    "price_gap_abs",
    "price_gap_pct",
    "value_gap",
    "value_to_price",
    "value_to_price_ratio",
    "diagnosis",
    // cost floor
    "cost_floor",
    "current_price",
    "margin",
    "clears_floor",
    // leaders/fillers/killers
    "classifications",
    "leaders_count",
    "fillers_count",
    "killers_count",
    "classification",
    "rationale",
    // dead weight
    "dead_weight_ratio",
    "threshold",
    "passes",
    "dead_weight",
    "component_usage",
    // financial
    "revenue_per_customer",
    "cost_per_customer",
    "margin_per_customer",
    "margin_pct",
    "viable",
    "clv",
    "break_even_units",
    "fixed_costs",
    "contribution_margin",
    // stress test
    "base_margin",
    "stressed_margin",
    "survives_stress",
    // cannibalization
    "net_revenue_delta",
    "net_positive",
    // scoring
    "weighted_score",
    "decision",
    "dimensions",
    "weights_used",
    "risks",
    "avg_score",
    "max_score",
    "high_risks",
    // introspection
    "modules",
    "functions",
    "schema",
    "total_functions",
    "per_module",
];

pub fn preset(name: &str) -> Option<&'static [&'static str]> {
    PRESETS
        .iter()
        .find(|(preset, _)| *preset == name)
        .map(|(_, fields)| *fields)
}

pub fn is_preset(name: &str) -> bool {
    preset(name).is_some()
}

pub fn is_valid_field(name: &str) -> bool {
    VALID_FIELDS.contains(&name)
}

/// Resolved set of retained keys plus the wildcard flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSelector {
    fields: BTreeSet<String>,
    wildcard: bool,
}

impl FieldSelector {
    /// Resolves requested tokens. An empty request yields the default preset.
    ///
    /// Fails on the first token that is neither a preset nor a known field.
    pub fn new<S: AsRef<str>>(requested: &[S]) -> Result<Self, QueryError> {
        if requested.is_empty() {
            return Ok(Self::default());
        }

        let mut selector = FieldSelector {
            fields: BTreeSet::new(),
            wildcard: false,
        };

        for token in requested {
            let token = token.as_ref();
            if let Some(expanded) = preset(token) {
                if token == FULL_PRESET {
                    selector.wildcard = true;
                }
                selector
                    .fields
                    .extend(expanded.iter().map(|f| f.to_string()));
                continue;
            }
            if !is_valid_field(token) {
                return Err(QueryError::UnknownField(token.to_string()));
            }
            selector.fields.insert(token.to_string());
        }

        Ok(selector)
    }

    pub fn include(&self, name: &str) -> bool {
        self.wildcard || self.fields.contains(name)
    }

    pub fn is_wildcard(&self) -> bool {
        self.wildcard
    }

    /// Resolved field names in sorted order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }
}

impl Default for FieldSelector {
    fn default() -> Self {
        let fields = preset(DEFAULT_PRESET)
            .unwrap_or_default()
            .iter()
            .map(|f| f.to_string())
            .collect();
        FieldSelector {
            fields,
            wildcard: false,
        }
    }
}

#[test]
fn test_preset_names_are_not_fields() {
    for (name, members) in PRESETS {
        assert!(!is_valid_field(name), "{} shadows a field", name);
        for member in *members {
            assert!(is_valid_field(member), "{} is not whitelisted", member);
        }
    }
}
