//! Execute appraise queries and direct calculations

use crate::{
    ast::{Argument, Query, Statement},
    executor::Executor,
    output::{OutputMode, render},
    registry::{Context, OperationRegistry},
};

use super::CliError;

/// Options for the `q` command
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    /// Raw query text, legacy dotted arguments allowed
    pub query: String,
    pub format: OutputMode,
}

/// Options for the `calc` command
#[derive(Debug, Clone, Default)]
pub struct CalcOptions {
    pub module: String,
    pub function: String,
    /// Input file; stdin when absent
    pub input: Option<String>,
    pub format: OutputMode,
}

impl CalcOptions {
    /// The equivalent `calc(module.function, input=...)` statement.
    pub fn to_statement(&self) -> Statement {
        let mut statement = Statement::new("calc").with_arg(Argument::positional(format!(
            "{}.{}",
            self.module, self.function
        )));
        if let Some(path) = &self.input {
            statement = statement.with_arg(Argument::keyed("input", path.clone()));
        }
        statement
    }
}

/// Runs a query and returns the rendered output.
pub fn execute_query(
    options: &QueryOptions,
    registry: &OperationRegistry,
    context: Context<'_>,
) -> Result<String, CliError> {
    let executor = Executor::new(registry, context);
    let outcome = executor.run(&options.query)?;
    Ok(render(&outcome.into_value(), options.format))
}

/// Runs one calculation without going through the query parser.
pub fn execute_calc(
    options: &CalcOptions,
    registry: &OperationRegistry,
    context: Context<'_>,
) -> Result<String, CliError> {
    let executor = Executor::new(registry, context);
    let query = Query {
        statements: vec![options.to_statement()],
    };
    let outcome = executor.execute(&query)?;
    Ok(render(&outcome.into_value(), options.format))
}
