pub mod ast;
pub mod calculators;
pub mod catalog;
pub mod domain;
pub mod error;
pub mod executor;
pub mod fields;
pub mod lexer;
pub mod normalize;
pub mod operations;
pub mod output;
pub mod parser;
pub mod projection;
pub mod registry;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod input;

pub use ast::{Argument, Query, Statement, Token};
pub use catalog::{Catalog, CatalogError, Computation, InputError, InputLoader};
pub use error::{ErrorKind, QueryError};
pub use executor::{BatchOutcome, Executor};
pub use fields::FieldSelector;
pub use lexer::{LexError, Lexer, Position};
pub use normalize::normalize;
pub use output::{OutputMode, render, render_error};
pub use parser::{ParseError, Parser, parse, parse_lenient};
pub use projection::{project, project_value};
pub use registry::{Context, OperationRegistry};
