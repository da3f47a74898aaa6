use thiserror::Error;

use crate::{catalog::CatalogError, parser::ParseError};

/// Coarse error class, used to decide how a failure is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed syntax, unknown operation or field, bad arguments
    Validation,
    /// Unknown module or function name
    NotFound,
    /// A forwarded collaborator or serialization failure
    Internal,
}

/// Errors produced while parsing or executing a query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    #[error("{0}")]
    MissingArgument(String),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

impl QueryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            QueryError::Parse(_)
            | QueryError::UnknownOperation(_)
            | QueryError::MissingArgument(_)
            | QueryError::InvalidArgument(_)
            | QueryError::UnknownField(_) => ErrorKind::Validation,
            QueryError::NotFound(_) => ErrorKind::NotFound,
            QueryError::Internal(_) => ErrorKind::Internal,
        }
    }
}

impl From<CatalogError> for QueryError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::UnknownModule(_) | CatalogError::UnknownFunction { .. } => {
                QueryError::NotFound(e.to_string())
            }
            CatalogError::Failed(message) => QueryError::Internal(message),
        }
    }
}
