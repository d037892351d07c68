//! Join sub-builder.
//!
//! A [`JoinBuilder`] specializes the query builder solely to reuse its
//! where-clause accumulation as ON-condition accumulation. It carries the
//! join kind and the joined table name for the outer compiler's
//! join-rendering step; it never renders itself, and its own groups,
//! orders, and limit are never consulted.

use crate::builder::QueryBuilder;
use crate::clause::{Connector, JoinKind, WhereClause};
use crate::value::{SqlValue, ToSqlValue};

/// Builder for one join descriptor's ON conditions.
#[derive(Debug, Clone)]
pub struct JoinBuilder {
    query: QueryBuilder,
    kind: JoinKind,
    table: String,
}

impl JoinBuilder {
    pub(crate) fn new(parent: &QueryBuilder, table: &str, kind: JoinKind) -> Self {
        Self {
            query: parent.fork(),
            kind,
            table: String::from(table),
        }
    }

    /// Adds an AND column-to-column ON condition.
    #[must_use]
    pub fn on(mut self, first: &str, operator: &str, second: &str) -> Self {
        self.query = self.query.push_column_pair(first, operator, second, Connector::And);
        self
    }

    /// Adds an OR column-to-column ON condition.
    #[must_use]
    pub fn or_on(mut self, first: &str, operator: &str, second: &str) -> Self {
        self.query = self.query.push_column_pair(first, operator, second, Connector::Or);
        self
    }

    /// Adds an AND equality condition against a bound value.
    #[must_use]
    pub fn where_eq(mut self, column: &str, value: impl ToSqlValue) -> Self {
        self.query = self.query.push_basic(column, "=", value, Connector::And);
        self
    }

    /// Adds an OR equality condition against a bound value.
    #[must_use]
    pub fn or_where_eq(mut self, column: &str, value: impl ToSqlValue) -> Self {
        self.query = self.query.push_basic(column, "=", value, Connector::Or);
        self
    }

    /// Adds an AND condition with an explicit operator and bound value.
    #[must_use]
    pub fn where_operator(
        mut self,
        column: &str,
        operator: &str,
        value: impl ToSqlValue,
    ) -> Self {
        self.query = self.query.push_basic(column, operator, value, Connector::And);
        self
    }

    /// Adds an OR condition with an explicit operator and bound value.
    #[must_use]
    pub fn or_where_operator(
        mut self,
        column: &str,
        operator: &str,
        value: impl ToSqlValue,
    ) -> Self {
        self.query = self.query.push_basic(column, operator, value, Connector::Or);
        self
    }

    /// Adds an AND IS NULL condition.
    #[must_use]
    pub fn where_null(mut self, column: &str) -> Self {
        self.query = self.query.push_null(column, false, Connector::And);
        self
    }

    /// Adds an AND IS NOT NULL condition.
    #[must_use]
    pub fn where_not_null(mut self, column: &str) -> Self {
        self.query = self.query.push_null(column, true, Connector::And);
        self
    }

    /// Adds an AND raw SQL fragment with its own placeholders.
    #[must_use]
    pub fn where_raw(mut self, sql: &str, values: Vec<SqlValue>) -> Self {
        self.query = self.query.push_raw(sql, values, Connector::And);
        self
    }

    /// Returns the join kind.
    #[must_use]
    pub fn kind(&self) -> JoinKind {
        self.kind
    }

    /// Returns the joined table name.
    #[must_use]
    pub fn joined_table(&self) -> &str {
        &self.table
    }

    /// Returns the accumulated ON conditions in render order.
    #[must_use]
    pub fn on_clauses(&self) -> &[WhereClause] {
        self.query.wheres()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_accumulates_column_pairs() {
        let parent = QueryBuilder::table("test");
        let join = JoinBuilder::new(&parent, "foo", JoinKind::Inner)
            .on("test.foo", "=", "foo.bar")
            .or_on("test.baz", "=", "foo.baz");
        assert_eq!(join.on_clauses().len(), 2);
        assert_eq!(join.on_clauses()[1].connector(), Connector::Or);
    }

    #[test]
    fn test_join_carries_kind_and_table() {
        let parent = QueryBuilder::table("test");
        let join = JoinBuilder::new(&parent, "orders", JoinKind::Left);
        assert_eq!(join.kind(), JoinKind::Left);
        assert_eq!(join.joined_table(), "orders");
    }

    #[test]
    fn test_on_mixes_with_value_conditions() {
        let parent = QueryBuilder::table("test");
        let join = JoinBuilder::new(&parent, "foo", JoinKind::Inner)
            .on("test.foo", "=", "foo.bar")
            .where_eq("foo.active", true);
        assert_eq!(join.on_clauses().len(), 2);
    }
}
