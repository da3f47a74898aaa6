//! Collaborator interfaces consumed by the query engine, and the built-in
//! calculator catalog.

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::{
    calculators::{self, CalculatorModule},
    domain::AppraisalInput,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown module {0:?}")]
    UnknownModule(String),

    #[error("unknown function {function:?} in module {module:?}")]
    UnknownFunction { module: String, function: String },

    #[error("{0}")]
    Failed(String),
}

/// Runs calculations and enumerates what is available.
pub trait Computation {
    fn execute(&self, module: &str, function: &str, input: &Value) -> Result<Value, CatalogError>;

    /// Module names in a fixed order.
    fn modules(&self) -> Vec<String>;

    fn functions(&self, module: &str) -> Result<Vec<String>, CatalogError>;
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("no input file specified and stdin is a terminal; use --input or pipe JSON")]
    Terminal,

    #[error("reading stdin: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("reading {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing input JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Loads the structured calculation input.
///
/// An empty path (or `-`) means standard input.
pub trait InputLoader {
    fn load(&self, path: &str) -> Result<Value, InputError>;
}

/// The calculator modules compiled into this binary.
pub struct Catalog {
    modules: Vec<CalculatorModule>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog {
            modules: calculators::builtin_modules(),
        }
    }

    pub fn with_modules(modules: Vec<CalculatorModule>) -> Self {
        Catalog { modules }
    }

    fn module(&self, name: &str) -> Result<&CalculatorModule, CatalogError> {
        self.modules
            .iter()
            .find(|m| m.name == name)
            .ok_or_else(|| CatalogError::UnknownModule(name.to_string()))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Computation for Catalog {
    fn execute(&self, module: &str, function: &str, input: &Value) -> Result<Value, CatalogError> {
        let calculators = self.module(module)?;
        if !calculators.functions.contains(&function) {
            return Err(CatalogError::UnknownFunction {
                module: module.to_string(),
                function: function.to_string(),
            });
        }

        let input: AppraisalInput = serde_json::from_value(input.clone())
            .map_err(|e| CatalogError::Failed(format!("parsing input JSON: {}", e)))?;

        debug!(module, function, "running calculator");
        match (calculators.run)(function, &input) {
            Some(result) => result.map_err(|e| CatalogError::Failed(e.to_string())),
            None => Err(CatalogError::UnknownFunction {
                module: module.to_string(),
                function: function.to_string(),
            }),
        }
    }

    fn modules(&self) -> Vec<String> {
        self.modules.iter().map(|m| m.name.to_string()).collect()
    }

    fn functions(&self, module: &str) -> Result<Vec<String>, CatalogError> {
        let calculators = self.module(module)?;
        Ok(calculators.functions.iter().map(|f| f.to_string()).collect())
    }
}
