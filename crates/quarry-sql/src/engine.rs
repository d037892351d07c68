//! Engine contract.
//!
//! An engine executes compiled SQL against a concrete driver. The compiled
//! `(sql, args)` pairs are the sole payload crossing this boundary; `args`
//! is an ordered list of scalar values matching placeholder order. Engines
//! apply their dialect's placeholder transform
//! ([`crate::dialect::Dialect::prepare_sql`]) before handing the text to
//! the driver, and surface driver failures opaquely as
//! [`crate::Error::Engine`].

use async_trait::async_trait;

use crate::error::Result;
use crate::grammar::Grammar;
use crate::row::Row;
use crate::value::SqlValue;

/// A pluggable database engine consumed by the query builder.
#[async_trait]
pub trait Engine: Send + Sync {
    /// Returns the grammar compiler for this engine's dialect.
    fn grammar(&self) -> Grammar;

    /// Executes a statement and returns the affected-row count.
    async fn query(&self, sql: &str, args: &[SqlValue]) -> Result<u64>;

    /// Executes a query and returns the matching rows.
    async fn get(&self, sql: &str, args: &[SqlValue]) -> Result<Vec<Row>>;

    /// Executes a single-row insert and recovers the new row's identifier.
    ///
    /// The strategy is driver-specific: a RETURNING clause, a
    /// last-insert-id query, or a driver-reported insert id. Engines
    /// without single-statement id recovery must execute the insert and the
    /// id read in strict, uninterrupted sequence on the same connection.
    async fn insert_and_get_id(&self, table: &str, sql: &str, args: &[SqlValue]) -> Result<i64>;
}
