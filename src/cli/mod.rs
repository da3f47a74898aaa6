//! CLI support for appraise
//!
//! Programmatic access to the `q`, `calc` and `operations` commands, so the
//! binary stays a thin argument parser.

mod docs;
mod query;

pub use docs::operations_overview;
pub use query::{CalcOptions, QueryOptions, execute_calc, execute_query};

use thiserror::Error;

use crate::error::QueryError;

/// Errors that end the process with a non-zero exit code.
#[derive(Debug, Error)]
pub enum CliError {
    /// Parse failure or single-statement execution failure
    #[error(transparent)]
    Query(#[from] QueryError),
}
