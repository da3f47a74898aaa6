//! # Appraise Query Language - Syntax Tree
//!
//! The query language is deliberately small: a query is a batch of
//! statements separated by semicolons, and every statement names one
//! operation, its arguments, and an optional field projection.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[statements]** - A single `operation(args) { fields }` unit and its arguments
//! - **[query]** - The ordered batch of statements
//!
//! ## Quick Start
//!
//! ```text
//! calc("pricing.bvr", input="data.json") { value interpretation }
//! ```
//!
//! Runs the `pricing.bvr` calculation over `data.json` and keeps only the
//! `value` and `interpretation` keys of the result.
//!
//! ## Batching
//!
//! ```text
//! list(modules); list(functions, module=pricing); summary()
//! ```
//!
//! Each statement runs independently and the batch yields one output per
//! statement, in source order.
//!
//! ## Argument Order
//!
//! Arguments keep their source order. The first positional value is
//! operation-specific (a `module.function` selector for `calc`, a
//! `modules`/`functions` discriminator for `list`), so handlers read it by
//! position rather than by key.
pub mod query;
pub mod statements;
pub mod tokens;

pub use query::Query;
pub use statements::{Argument, Statement};
pub use tokens::Token;
