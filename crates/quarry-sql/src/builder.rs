//! Fluent query builder.
//!
//! A [`QueryBuilder`] owns one logical query's mutable state. Chain methods
//! consume and return the builder; terminal methods compile the state
//! through the bound engine's grammar and hand the SQL and arguments to the
//! engine for execution.
//!
//! # Example
//!
//! ```
//! use quarry_sql::{Grammar, QueryBuilder};
//!
//! let query = QueryBuilder::table("users")
//!     .where_eq("active", true)
//!     .or_where_group(|q| q.where_eq("role", "admin").where_not_null("confirmed_at"));
//!
//! let (sql, params) = Grammar::generic().compile_select(&query).unwrap();
//! assert_eq!(
//!     sql,
//!     "SELECT * FROM users WHERE active = ? OR (role = ? AND confirmed_at IS NOT NULL)"
//! );
//! assert_eq!(params.len(), 2);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::clause::{
    AggregateFunction, Connector, JoinKind, OrderClause, OrderDirection, WhereClause,
};
use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::join::JoinBuilder;
use crate::row::Row;
use crate::schema::TableSchema;
use crate::value::{SqlValue, ToSqlValue};

/// A chainable builder for one logical query.
///
/// The builder is conceived as owned by exactly one in-flight operation
/// chain; chain calls are synchronous, suspension happens only at terminal
/// calls awaiting the engine.
#[derive(Clone)]
pub struct QueryBuilder {
    pub(crate) engine: Option<Arc<dyn Engine>>,
    pub(crate) table: Option<String>,
    pub(crate) columns: Vec<String>,
    pub(crate) distinct: bool,
    pub(crate) aggregate: Option<AggregateFunction>,
    pub(crate) joins: Vec<JoinBuilder>,
    pub(crate) wheres: Vec<WhereClause>,
    pub(crate) groups: Vec<String>,
    pub(crate) orders: Vec<OrderClause>,
    pub(crate) limit: Option<u64>,
    pub(crate) schema: Option<Arc<TableSchema>>,
}

impl fmt::Debug for QueryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryBuilder")
            .field("table", &self.table)
            .field("columns", &self.columns)
            .field("distinct", &self.distinct)
            .field("aggregate", &self.aggregate)
            .field("joins", &self.joins)
            .field("wheres", &self.wheres)
            .field("groups", &self.groups)
            .field("orders", &self.orders)
            .field("limit", &self.limit)
            .field("engine", &self.engine.is_some())
            .finish()
    }
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryBuilder {
    /// Creates an empty builder. A table must be set before compiling.
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: None,
            table: None,
            columns: vec![String::from("*")],
            distinct: false,
            aggregate: None,
            joins: Vec::new(),
            wheres: Vec::new(),
            groups: Vec::new(),
            orders: Vec::new(),
            limit: None,
            schema: None,
        }
    }

    /// Creates a builder targeting the given table.
    #[must_use]
    pub fn table(name: &str) -> Self {
        Self::new().from(name)
    }

    /// Sets the target table.
    #[must_use]
    pub fn from(mut self, table: &str) -> Self {
        self.table = Some(String::from(table));
        self
    }

    /// Sets the target table from a schema descriptor, recording the
    /// association for result materialization.
    ///
    /// The association is a marker consumed by callers such as [`find`];
    /// it is never compiled into SQL.
    ///
    /// [`find`]: Self::find
    #[must_use]
    pub fn from_schema(mut self, schema: Arc<TableSchema>) -> Self {
        self.table = Some(String::from(schema.table()));
        self.schema = Some(schema);
        self
    }

    /// Binds the engine that will execute terminal operations.
    #[must_use]
    pub fn engine(mut self, engine: Arc<dyn Engine>) -> Self {
        self.engine = Some(engine);
        self
    }

    /// Replaces the selected columns and leaves raw-column mode on: the
    /// schema association marker is cleared.
    #[must_use]
    pub fn select(mut self, columns: &[&str]) -> Self {
        self.columns = columns.iter().map(|c| String::from(*c)).collect();
        self.schema = None;
        self
    }

    /// Makes the query return distinct rows.
    #[must_use]
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Derives a fresh builder for nested or join use.
    ///
    /// Only the target table and the bound engine carry over.
    pub(crate) fn fork(&self) -> Self {
        Self {
            engine: self.engine.clone(),
            table: self.table.clone(),
            ..Self::new()
        }
    }

    fn push_where(mut self, clause: WhereClause) -> Self {
        self.wheres.push(clause);
        self
    }

    pub(crate) fn push_basic(
        self,
        column: &str,
        operator: &str,
        value: impl ToSqlValue,
        connector: Connector,
    ) -> Self {
        self.push_where(WhereClause::Basic {
            column: String::from(column),
            operator: String::from(operator),
            value: value.to_sql_value(),
            connector,
        })
    }

    pub(crate) fn push_column_pair(
        self,
        first: &str,
        operator: &str,
        second: &str,
        connector: Connector,
    ) -> Self {
        self.push_where(WhereClause::ColumnPair {
            first: String::from(first),
            operator: String::from(operator),
            second: String::from(second),
            connector,
        })
    }

    pub(crate) fn push_raw(
        self,
        sql: &str,
        values: Vec<SqlValue>,
        connector: Connector,
    ) -> Self {
        self.push_where(WhereClause::Raw {
            sql: String::from(sql),
            values,
            connector,
        })
    }

    pub(crate) fn push_null(self, column: &str, negated: bool, connector: Connector) -> Self {
        self.push_where(WhereClause::Null {
            column: String::from(column),
            negated,
            connector,
        })
    }

    fn push_group(
        mut self,
        build: impl FnOnce(QueryBuilder) -> QueryBuilder,
        connector: Connector,
    ) -> Self {
        let nested = build(self.fork());
        // An empty group would render as `()`; skip it.
        if !nested.wheres.is_empty() {
            self.wheres.push(WhereClause::Nested {
                query: Box::new(nested),
                connector,
            });
        }
        self
    }

    /// Adds an AND equality condition.
    #[must_use]
    pub fn where_eq(self, column: &str, value: impl ToSqlValue) -> Self {
        self.push_basic(column, "=", value, Connector::And)
    }

    /// Adds an OR equality condition.
    #[must_use]
    pub fn or_where_eq(self, column: &str, value: impl ToSqlValue) -> Self {
        self.push_basic(column, "=", value, Connector::Or)
    }

    /// Adds an AND condition with an explicit operator.
    #[must_use]
    pub fn where_operator(self, column: &str, operator: &str, value: impl ToSqlValue) -> Self {
        self.push_basic(column, operator, value, Connector::And)
    }

    /// Adds an OR condition with an explicit operator.
    #[must_use]
    pub fn or_where_operator(self, column: &str, operator: &str, value: impl ToSqlValue) -> Self {
        self.push_basic(column, operator, value, Connector::Or)
    }

    /// Adds an AND column-to-column condition.
    #[must_use]
    pub fn where_column(self, first: &str, operator: &str, second: &str) -> Self {
        self.push_column_pair(first, operator, second, Connector::And)
    }

    /// Adds an OR column-to-column condition.
    #[must_use]
    pub fn or_where_column(self, first: &str, operator: &str, second: &str) -> Self {
        self.push_column_pair(first, operator, second, Connector::Or)
    }

    /// Adds an AND raw SQL fragment with its own placeholders.
    ///
    /// The fragment is passed through verbatim; it is never escaped.
    #[must_use]
    pub fn where_raw(self, sql: &str, values: Vec<SqlValue>) -> Self {
        self.push_raw(sql, values, Connector::And)
    }

    /// Adds an OR raw SQL fragment with its own placeholders.
    #[must_use]
    pub fn or_where_raw(self, sql: &str, values: Vec<SqlValue>) -> Self {
        self.push_raw(sql, values, Connector::Or)
    }

    /// Adds an AND IS NULL condition.
    #[must_use]
    pub fn where_null(self, column: &str) -> Self {
        self.push_null(column, false, Connector::And)
    }

    /// Adds an AND IS NOT NULL condition.
    #[must_use]
    pub fn where_not_null(self, column: &str) -> Self {
        self.push_null(column, true, Connector::And)
    }

    /// Adds an OR IS NULL condition.
    #[must_use]
    pub fn or_where_null(self, column: &str) -> Self {
        self.push_null(column, false, Connector::Or)
    }

    /// Adds an OR IS NOT NULL condition.
    #[must_use]
    pub fn or_where_not_null(self, column: &str) -> Self {
        self.push_null(column, true, Connector::Or)
    }

    /// Adds an AND parenthesized group built by the callback.
    ///
    /// The callback receives a fresh builder scoped to the same table; its
    /// accumulated conditions render as a single parenthesized group whose
    /// internal connectors are independent of the outer list.
    #[must_use]
    pub fn where_group(self, build: impl FnOnce(QueryBuilder) -> QueryBuilder) -> Self {
        self.push_group(build, Connector::And)
    }

    /// Adds an OR parenthesized group built by the callback.
    #[must_use]
    pub fn or_where_group(self, build: impl FnOnce(QueryBuilder) -> QueryBuilder) -> Self {
        self.push_group(build, Connector::Or)
    }

    fn push_join(
        mut self,
        table: &str,
        kind: JoinKind,
        build: impl FnOnce(JoinBuilder) -> JoinBuilder,
    ) -> Self {
        let join = build(JoinBuilder::new(&self, table, kind));
        self.joins.push(join);
        self
    }

    /// Adds an INNER JOIN with an explicit ON triple.
    #[must_use]
    pub fn join(self, table: &str, first: &str, operator: &str, second: &str) -> Self {
        self.push_join(table, JoinKind::Inner, |on| on.on(first, operator, second))
    }

    /// Adds a LEFT JOIN with an explicit ON triple.
    #[must_use]
    pub fn left_join(self, table: &str, first: &str, operator: &str, second: &str) -> Self {
        self.push_join(table, JoinKind::Left, |on| on.on(first, operator, second))
    }

    /// Adds a RIGHT JOIN with an explicit ON triple.
    #[must_use]
    pub fn right_join(self, table: &str, first: &str, operator: &str, second: &str) -> Self {
        self.push_join(table, JoinKind::Right, |on| on.on(first, operator, second))
    }

    /// Adds an INNER JOIN whose ON conditions are built by the callback.
    #[must_use]
    pub fn join_on(self, table: &str, build: impl FnOnce(JoinBuilder) -> JoinBuilder) -> Self {
        self.push_join(table, JoinKind::Inner, build)
    }

    /// Adds a LEFT JOIN whose ON conditions are built by the callback.
    #[must_use]
    pub fn left_join_on(
        self,
        table: &str,
        build: impl FnOnce(JoinBuilder) -> JoinBuilder,
    ) -> Self {
        self.push_join(table, JoinKind::Left, build)
    }

    /// Adds a RIGHT JOIN whose ON conditions are built by the callback.
    #[must_use]
    pub fn right_join_on(
        self,
        table: &str,
        build: impl FnOnce(JoinBuilder) -> JoinBuilder,
    ) -> Self {
        self.push_join(table, JoinKind::Right, build)
    }

    /// Appends GROUP BY columns, skipping duplicates.
    #[must_use]
    pub fn group_by(mut self, columns: &[&str]) -> Self {
        for column in columns {
            if !self.groups.iter().any(|g| g == column) {
                self.groups.push(String::from(*column));
            }
        }
        self
    }

    /// Appends an ORDER BY clause.
    #[must_use]
    pub fn order_by(mut self, column: &str, direction: OrderDirection) -> Self {
        self.orders.push(OrderClause {
            column: String::from(column),
            direction,
        });
        self
    }

    /// Appends an ascending ORDER BY clause.
    #[must_use]
    pub fn order_by_asc(self, column: &str) -> Self {
        self.order_by(column, OrderDirection::Asc)
    }

    /// Appends a descending ORDER BY clause.
    #[must_use]
    pub fn order_by_desc(self, column: &str) -> Self {
        self.order_by(column, OrderDirection::Desc)
    }

    /// Limits the number of results.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidArgument`] if `count` is zero. The check
    /// happens at call time, before any compilation.
    pub fn limit(mut self, count: u64) -> Result<Self> {
        if count == 0 {
            return Err(Error::InvalidArgument(String::from(
                "limit must be at least 1",
            )));
        }
        self.limit = Some(count);
        Ok(self)
    }

    /// Returns the target table, if set.
    #[must_use]
    pub fn table_name(&self) -> Option<&str> {
        self.table.as_deref()
    }

    /// Returns the accumulated WHERE clauses in render order.
    #[must_use]
    pub fn wheres(&self) -> &[WhereClause] {
        &self.wheres
    }

    fn require_engine(&self) -> Result<Arc<dyn Engine>> {
        self.engine.clone().ok_or(Error::EngineNotConfigured)
    }
}

/// Terminal operations. Each compiles the builder state through the bound
/// engine's grammar and awaits the engine; the builder is consumed.
impl QueryBuilder {
    /// Executes the query and returns all matching rows.
    pub async fn get(self) -> Result<Vec<Row>> {
        let engine = self.require_engine()?;
        let (sql, args) = engine.grammar().compile_select(&self)?;
        tracing::debug!(sql = %sql, params = args.len(), "select");
        engine.get(&sql, &args).await
    }

    /// Alias for [`get`].
    ///
    /// [`get`]: Self::get
    pub async fn all(self) -> Result<Vec<Row>> {
        self.get().await
    }

    /// Returns the first matching row, if any.
    pub async fn first(self) -> Result<Option<Row>> {
        let rows = self.limit(1)?.get().await?;
        Ok(rows.into_iter().next())
    }

    /// Looks up a single row by identifier.
    ///
    /// The key column comes from the schema association when present,
    /// falling back to `id`.
    pub async fn find(self, id: impl ToSqlValue) -> Result<Option<Row>> {
        let key = self
            .schema
            .as_ref()
            .map_or_else(|| String::from("id"), |s| String::from(s.key()));
        self.where_eq(&key, id).first().await
    }

    /// Returns a single scalar from the first row.
    pub async fn value(self, column: &str) -> Result<Option<SqlValue>> {
        Ok(self
            .first()
            .await?
            .and_then(|row| row.get(column).cloned()))
    }

    /// Returns one column's values across all matching rows.
    pub async fn pluck(self, column: &str) -> Result<Vec<SqlValue>> {
        let rows = self.get().await?;
        Ok(rows
            .iter()
            .filter_map(|row| row.get(column).cloned())
            .collect())
    }

    /// Returns whether any rows match.
    pub async fn exists(self) -> Result<bool> {
        Ok(self.count().await? > 0)
    }

    /// Returns the count of matching rows.
    pub async fn count(self) -> Result<i64> {
        match self.aggregate_value(AggregateFunction::Count, &[]).await? {
            None => Ok(0),
            Some(value) => value
                .as_int()
                .ok_or(Error::Internal("count returned a non-numeric aggregate")),
        }
    }

    /// Returns the sum of a column across matching rows.
    pub async fn sum(self, column: &str) -> Result<Option<f64>> {
        Ok(self
            .aggregate_value(AggregateFunction::Sum, &[column])
            .await?
            .and_then(|value| value.as_float()))
    }

    /// Returns the average of a column across matching rows.
    pub async fn avg(self, column: &str) -> Result<Option<f64>> {
        Ok(self
            .aggregate_value(AggregateFunction::Avg, &[column])
            .await?
            .and_then(|value| value.as_float()))
    }

    /// Returns the minimum value of a column across matching rows.
    pub async fn min(self, column: &str) -> Result<Option<SqlValue>> {
        self.aggregate_value(AggregateFunction::Min, &[column]).await
    }

    /// Returns the maximum value of a column across matching rows.
    pub async fn max(self, column: &str) -> Result<Option<SqlValue>> {
        self.aggregate_value(AggregateFunction::Max, &[column]).await
    }

    /// Sets the aggregate marker, compiles, executes, and reads the
    /// `aggregate` column of the first result row.
    async fn aggregate_value(
        mut self,
        function: AggregateFunction,
        columns: &[&str],
    ) -> Result<Option<SqlValue>> {
        let engine = self.require_engine()?;
        if !columns.is_empty() {
            self.columns = columns.iter().map(|c| String::from(*c)).collect();
        }
        self.aggregate = Some(function);
        let (sql, args) = engine.grammar().compile_select(&self)?;
        tracing::debug!(sql = %sql, params = args.len(), "aggregate");
        let rows = engine.get(&sql, &args).await?;
        match rows.into_iter().next() {
            None => Ok(None),
            Some(row) => {
                let value = row
                    .get("aggregate")
                    .cloned()
                    .ok_or(Error::Internal("aggregate column missing from result"))?;
                Ok(if value.is_null() { None } else { Some(value) })
            }
        }
    }

    /// Inserts one or more rows. All rows must share an identical key set.
    ///
    /// Returns the affected-row count; an empty input is a no-op.
    pub async fn insert(self, rows: Vec<Row>) -> Result<u64> {
        let engine = self.require_engine()?;
        if rows.is_empty() {
            return Ok(0);
        }
        let (sql, args) = engine.grammar().compile_insert(&self, &rows)?;
        tracing::debug!(sql = %sql, params = args.len(), "insert");
        engine.query(&sql, &args).await
    }

    /// Inserts a single row and returns the new row's identifier using the
    /// engine's driver-specific strategy.
    pub async fn insert_and_get_id(self, row: Row) -> Result<i64> {
        let engine = self.require_engine()?;
        let table = self.table.clone().ok_or(Error::MissingTable)?;
        let (sql, args) = engine
            .grammar()
            .compile_insert(&self, std::slice::from_ref(&row))?;
        tracing::debug!(sql = %sql, params = args.len(), "insert returning id");
        engine.insert_and_get_id(&table, &sql, &args).await
    }

    /// Updates matching rows from a partial record, scoped by the current
    /// WHERE and JOIN clauses. Returns the affected-row count.
    pub async fn update(self, changes: Row) -> Result<u64> {
        let engine = self.require_engine()?;
        let (sql, args) = engine.grammar().compile_update(&self, &changes)?;
        tracing::debug!(sql = %sql, params = args.len(), "update");
        engine.query(&sql, &args).await
    }

    /// Deletes matching rows, scoped by the current WHERE clauses.
    /// Returns the affected-row count.
    pub async fn delete(self) -> Result<u64> {
        let engine = self.require_engine()?;
        let (sql, args) = engine.grammar().compile_delete(&self)?;
        tracing::debug!(sql = %sql, params = args.len(), "delete");
        engine.query(&sql, &args).await
    }
}
