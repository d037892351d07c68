//! # quarry-sql
//!
//! A fluent SQL query builder with pluggable dialect grammars.
//!
//! This crate provides:
//! - [`QueryBuilder`] for chainable query construction
//! - [`Grammar`] compiling builder state into SQL text plus a positional
//!   argument list
//! - [`Dialect`] strategies for identifier escaping and placeholder syntax
//! - The [`Engine`] contract executing compiled statements against a
//!   concrete driver
//!
//! ## Building queries
//!
//! Chain calls accumulate state; nothing executes until a terminal call:
//!
//! ```
//! use quarry_sql::{Grammar, QueryBuilder};
//!
//! let query = QueryBuilder::table("users")
//!     .select(&["id", "name"])
//!     .where_eq("active", true)
//!     .order_by_desc("id")
//!     .limit(10)
//!     .unwrap();
//!
//! let (sql, params) = Grammar::generic().compile_select(&query).unwrap();
//! assert_eq!(
//!     sql,
//!     "SELECT id, name FROM users WHERE active = ? ORDER BY id DESC LIMIT 10"
//! );
//! assert_eq!(params.len(), 1);
//! ```
//!
//! ## Dialects
//!
//! The compiler always emits `?` placeholders; a dialect supplies the two
//! identifier-escaping hooks and, where needed, a placeholder renumbering
//! transform the engine applies at execution time:
//!
//! ```
//! use quarry_sql::dialect::{Dialect, PostgresDialect};
//!
//! let prepared = PostgresDialect.prepare_sql("SELECT * FROM t WHERE a = ? AND b = ?");
//! assert_eq!(prepared, "SELECT * FROM t WHERE a = $1 AND b = $2");
//! ```
//!
//! ## Executing
//!
//! Terminal methods compile through the bound engine's grammar and await
//! the engine:
//!
//! ```ignore
//! let rows = QueryBuilder::table("users")
//!     .engine(engine.clone())
//!     .where_eq("active", true)
//!     .get()
//!     .await?;
//! ```

mod builder;
mod clause;
pub mod dialect;
mod engine;
mod error;
mod grammar;
mod join;
mod relation;
mod row;
mod schema;
mod value;

pub use builder::QueryBuilder;
pub use clause::{
    AggregateFunction, Connector, JoinKind, OrderClause, OrderDirection, WhereClause,
};
pub use dialect::Dialect;
pub use engine::Engine;
pub use error::{Error, Result};
pub use grammar::{Compiled, Grammar};
pub use join::JoinBuilder;
pub use relation::Relation;
pub use row::Row;
pub use schema::{FieldDef, FieldKind, TableSchema, TableSchemaBuilder};
pub use value::{SqlValue, ToSqlValue};
