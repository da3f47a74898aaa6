use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::{
    ast::{Query, Statement},
    error::QueryError,
    fields::FieldSelector,
    parser::{ParseError, parse_lenient},
    projection::project_value,
    registry::{Context, OperationRegistry},
};

/// Output of a whole query.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchOutcome {
    /// A single-statement query succeeded; never array-wrapped
    Single(Value),
    /// One slot per statement, in source order; failed slots hold an error object
    Batch(Vec<Value>),
}

impl BatchOutcome {
    pub fn into_value(self) -> Value {
        match self {
            BatchOutcome::Single(value) => value,
            BatchOutcome::Batch(values) => Value::Array(values),
        }
    }
}

/// The inline shape of a failed statement: `{"error": {"message": ...}}`.
pub fn error_object(err: &QueryError) -> Value {
    json!({ "error": { "message": err.to_string() } })
}

/// Runs parsed queries against a registry.
pub struct Executor<'a> {
    registry: &'a OperationRegistry,
    context: Context<'a>,
}

impl<'a> Executor<'a> {
    pub fn new(registry: &'a OperationRegistry, context: Context<'a>) -> Self {
        Executor { registry, context }
    }

    /// Dispatches one statement, then projects it when it carries fields.
    ///
    /// Field names are resolved after the handler ran, so an unknown field is
    /// reported even though the computation already happened.
    pub fn execute_statement(&self, statement: &Statement) -> Result<Value, QueryError> {
        let result = self.registry.dispatch(statement, &self.context)?;

        let requested = statement.requested_fields();
        if requested.is_empty() {
            return Ok(result);
        }
        let selector = FieldSelector::new(&requested)?;
        Ok(Value::Object(project_value(&selector, result)))
    }

    /// Single statements propagate their error. Batches never fail: each
    /// failing statement becomes an error object at its position.
    pub fn execute(&self, query: &Query) -> Result<BatchOutcome, QueryError> {
        match query.statements.as_slice() {
            [] => Err(ParseError::EmptyQuery.into()),
            [statement] => self.execute_statement(statement).map(BatchOutcome::Single),
            statements => {
                let results = statements
                    .iter()
                    .enumerate()
                    .map(|(index, statement)| match self.execute_statement(statement) {
                        Ok(value) => value,
                        Err(err) => {
                            warn!(index, operation = %statement.operation, error = %err, "statement failed");
                            error_object(&err)
                        }
                    })
                    .collect();
                Ok(BatchOutcome::Batch(results))
            }
        }
    }

    /// Normalizes, parses and executes raw query text.
    ///
    /// A parse error anywhere aborts the batch before anything runs.
    pub fn run(&self, raw: &str) -> Result<BatchOutcome, QueryError> {
        let query = parse_lenient(raw)?;
        debug!(statements = query.len(), batch = query.is_batch(), "executing query");
        self.execute(&query)
    }
}
