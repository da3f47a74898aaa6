//! Help text for the `operations` command

use std::fmt::Write;

use crate::{fields::PRESETS, registry::OperationRegistry};

/// Lists registered operations with their parameters and examples, followed
/// by the field presets.
pub fn operations_overview(registry: &OperationRegistry) -> String {
    let mut out = String::from(
        "APPRAISE QUERY OPERATIONS\n\nSyntax: operation(args) { fields }\nBatching: semicolons separate statements.\n",
    );

    for operation in registry.operations() {
        let meta = &operation.metadata;
        let _ = writeln!(out, "\n  {:<10}{}", operation.name, meta.description);
        for param in &meta.parameters {
            let optional = if param.optional { ", optional" } else { "" };
            let _ = writeln!(
                out,
                "      {} ({}{}): {}",
                param.name, param.kind, optional, param.description
            );
        }
        for example in &meta.examples {
            let _ = writeln!(out, "      e.g. {}", example);
        }
    }

    out.push_str("\nFIELD PRESETS\n\n");
    for (name, fields) in PRESETS {
        let _ = writeln!(out, "  {:<14}{}", format!("{{ {} }}", name), fields.join(" "));
    }
    out.push_str("  { full } also passes through every key of the result.\n");
    out
}
