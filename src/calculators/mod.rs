//! Built-in calculator modules.
//!
//! Each module is a pure function table over [`AppraisalInput`]. The query
//! engine only reaches them through [`crate::catalog::Computation`].

pub mod pricing;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::domain::AppraisalInput;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct CalcError(pub String);

impl CalcError {
    pub fn new(message: impl Into<String>) -> Self {
        CalcError(message.into())
    }
}

/// Dispatches a function name within one module. `None` means unknown name.
pub type ModuleRunner = fn(&str, &AppraisalInput) -> Option<Result<Value, CalcError>>;

pub struct CalculatorModule {
    pub name: &'static str,
    pub functions: &'static [&'static str],
    pub run: ModuleRunner,
}

pub fn builtin_modules() -> Vec<CalculatorModule> {
    vec![pricing::module()]
}

pub(crate) fn to_json<T: Serialize>(result: Result<T, CalcError>) -> Result<Value, CalcError> {
    let result = result?;
    serde_json::to_value(result).map_err(|e| CalcError::new(format!("encoding result: {}", e)))
}
