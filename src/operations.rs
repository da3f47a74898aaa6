//! Built-in operations: `calc`, `list`, `schema`, `summary`.

use serde_json::{Map, Value, json};
use tracing::debug;

use crate::{
    ast::Statement,
    error::QueryError,
    registry::{Context, OperationMetadata, ParameterDef, RegistryBuilder},
};

pub fn register_builtins(builder: RegistryBuilder) -> RegistryBuilder {
    builder
        .register(
            "calc",
            calc,
            OperationMetadata {
                description: "Run a calculation by module.function",
                parameters: vec![
                    ParameterDef {
                        name: "module.function",
                        kind: "string",
                        optional: false,
                        description: "Calculator to run (e.g. pricing.bvr)",
                    },
                    ParameterDef {
                        name: "input",
                        kind: "string",
                        optional: true,
                        description: "Path to input JSON file (stdin when omitted)",
                    },
                ],
                examples: vec![
                    r#"calc(pricing.bvr, input="data.json")"#,
                    r#"calc(pricing.bvr, input="data.json") { minimal }"#,
                    r#"calc(pricing.bundle_discount, input="data.json") { value }"#,
                ],
            },
        )
        .register(
            "list",
            list,
            OperationMetadata {
                description: "List available modules or functions",
                parameters: vec![
                    ParameterDef {
                        name: "what",
                        kind: "string",
                        optional: false,
                        description: "'modules' or 'functions' (positional)",
                    },
                    ParameterDef {
                        name: "module",
                        kind: "string",
                        optional: true,
                        description: "Filter functions by module name",
                    },
                ],
                examples: vec![
                    "list(modules)",
                    "list(functions, module=pricing)",
                    "list(functions)",
                ],
            },
        )
        .register(
            "schema",
            schema,
            OperationMetadata {
                description: "Full module to function map",
                parameters: Vec::new(),
                examples: vec!["schema()"],
            },
        )
        .register(
            "summary",
            summary,
            OperationMetadata {
                description: "Module/function counts overview",
                parameters: Vec::new(),
                examples: vec!["summary()"],
            },
        )
}

/// Splits `pricing.bvr` at the first dot.
pub fn parse_module_function(selector: &str) -> Result<(&str, &str), QueryError> {
    match selector.split_once('.') {
        Some((module, function)) if !module.is_empty() && !function.is_empty() => {
            Ok((module, function))
        }
        Some(_) => Err(QueryError::InvalidArgument(format!(
            "invalid module.function: {:?}",
            selector
        ))),
        None => Err(QueryError::InvalidArgument(format!(
            "module.function format required (e.g. pricing.bvr), got {:?}",
            selector
        ))),
    }
}

/// `calc(module.function, input="path.json")`
fn calc(statement: &Statement, context: &Context<'_>) -> Result<Value, QueryError> {
    let selector = statement.first_positional().ok_or_else(|| {
        QueryError::MissingArgument(
            "calc requires at least one argument: module.function".to_string(),
        )
    })?;
    let (module, function) = parse_module_function(selector)?;
    let input_path = statement.named("input").unwrap_or_default();

    let input = context
        .loader
        .load(input_path)
        .map_err(|e| QueryError::Internal(format!("loading input: {}", e)))?;

    debug!(module, function, input = input_path, "executing calculation");
    Ok(context.computation.execute(module, function, &input)?)
}

fn all_functions(context: &Context<'_>) -> Result<Map<String, Value>, QueryError> {
    let mut all = Map::new();
    for module in context.computation.modules() {
        let functions = context.computation.functions(&module)?;
        all.insert(module, json!(functions));
    }
    Ok(all)
}

/// `list(modules)`, `list(functions)` or `list(functions, module=name)`
fn list(statement: &Statement, context: &Context<'_>) -> Result<Value, QueryError> {
    let what = statement.first_positional().ok_or_else(|| {
        QueryError::MissingArgument("list requires argument: 'modules' or 'functions'".to_string())
    })?;

    match what {
        "modules" => Ok(json!({ "modules": context.computation.modules() })),
        "functions" => match statement.named("module") {
            None | Some("") => Ok(Value::Object(all_functions(context)?)),
            Some(module) => {
                let functions = context.computation.functions(module)?;
                Ok(json!({ "module": module, "functions": functions }))
            }
        },
        other => Err(QueryError::InvalidArgument(format!(
            "list argument must be 'modules' or 'functions', got {:?}",
            other
        ))),
    }
}

/// `schema()`
fn schema(_statement: &Statement, context: &Context<'_>) -> Result<Value, QueryError> {
    Ok(json!({ "schema": all_functions(context)? }))
}

/// `summary()`
fn summary(_statement: &Statement, context: &Context<'_>) -> Result<Value, QueryError> {
    let modules = context.computation.modules();
    let mut per_module = Map::new();
    let mut total_functions = 0;
    for module in &modules {
        let count = context.computation.functions(module)?.len();
        total_functions += count;
        per_module.insert(module.clone(), json!(count));
    }

    Ok(json!({
        "modules": modules.len(),
        "total_functions": total_functions,
        "per_module": per_module,
    }))
}
