//! Name-to-handler dispatch.
//!
//! A registry is assembled once through [`RegistryBuilder`] and cannot be
//! changed afterwards; every statement in a batch shares the same instance.

use serde_json::Value;
use tracing::debug;

use crate::{
    ast::Statement,
    catalog::{Computation, InputLoader},
    error::QueryError,
    operations,
};

/// Read-only collaborators handed to every handler.
#[derive(Clone, Copy)]
pub struct Context<'a> {
    pub computation: &'a dyn Computation,
    pub loader: &'a dyn InputLoader,
}

impl<'a> Context<'a> {
    pub fn new(computation: &'a dyn Computation, loader: &'a dyn InputLoader) -> Self {
        Context {
            computation,
            loader,
        }
    }
}

pub type OperationHandler = fn(&Statement, &Context<'_>) -> Result<Value, QueryError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDef {
    pub name: &'static str,
    pub kind: &'static str,
    pub optional: bool,
    pub description: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationMetadata {
    pub description: &'static str,
    pub parameters: Vec<ParameterDef>,
    pub examples: Vec<&'static str>,
}

#[derive(Clone)]
pub struct Operation {
    pub name: &'static str,
    pub handler: OperationHandler,
    pub metadata: OperationMetadata,
}

#[derive(Default)]
pub struct RegistryBuilder {
    operations: Vec<Operation>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an operation. Registering a name twice replaces the earlier entry.
    pub fn register(
        mut self,
        name: &'static str,
        handler: OperationHandler,
        metadata: OperationMetadata,
    ) -> Self {
        let operation = Operation {
            name,
            handler,
            metadata,
        };
        match self.operations.iter_mut().find(|op| op.name == name) {
            Some(existing) => *existing = operation,
            None => self.operations.push(operation),
        }
        self
    }

    pub fn build(self) -> OperationRegistry {
        OperationRegistry {
            operations: self.operations,
        }
    }
}

pub struct OperationRegistry {
    operations: Vec<Operation>,
}

impl OperationRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Registry with `calc`, `list`, `schema` and `summary`.
    pub fn with_builtins() -> Self {
        operations::register_builtins(RegistryBuilder::new()).build()
    }

    pub fn get(&self, name: &str) -> Option<&Operation> {
        self.operations.iter().find(|op| op.name == name)
    }

    /// Operations in registration order.
    pub fn operations(&self) -> impl Iterator<Item = &Operation> {
        self.operations.iter()
    }

    pub fn dispatch(&self, statement: &Statement, context: &Context<'_>) -> Result<Value, QueryError> {
        let operation = self
            .get(&statement.operation)
            .ok_or_else(|| QueryError::UnknownOperation(statement.operation.clone()))?;
        debug!(operation = operation.name, args = statement.args.len(), "dispatching");
        (operation.handler)(statement, context)
    }
}
