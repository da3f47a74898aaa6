use crate::ast::Statement;

/// A parsed batch: one statement per `;`-separated unit, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub statements: Vec<Statement>,
}

impl Query {
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// A query with more than one statement produces an array of outputs.
    pub fn is_batch(&self) -> bool {
        self.statements.len() > 1
    }
}
