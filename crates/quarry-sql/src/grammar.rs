//! Grammar compiler.
//!
//! Pure transformation from builder state into SQL text plus a positional
//! argument list. A single compiler implementation serves every dialect;
//! divergence is injected through a [`Dialect`] strategy (identifier
//! escaping), while placeholder renumbering stays with the engine via
//! [`Dialect::prepare_sql`]. The compiler always emits `?`.
//!
//! Each sub-compiler returns its fragment and arguments independently, so
//! clause rendering can be tested in isolation.

use crate::builder::QueryBuilder;
use crate::clause::WhereClause;
use crate::dialect::{Dialect, GenericDialect};
use crate::error::{Error, Result};
use crate::row::Row;
use crate::value::SqlValue;

/// A compiled statement: SQL text and its bound arguments, in placeholder
/// order.
pub type Compiled = (String, Vec<SqlValue>);

/// Compiles builder state into dialect-correct SQL.
#[derive(Clone, Copy)]
pub struct Grammar {
    dialect: &'static dyn Dialect,
}

impl std::fmt::Debug for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grammar")
            .field("dialect", &self.dialect.name())
            .finish()
    }
}

impl Grammar {
    /// Creates a grammar with the given dialect strategy.
    #[must_use]
    pub fn new(dialect: &'static dyn Dialect) -> Self {
        Self { dialect }
    }

    /// Creates a grammar with identity escaping and `?` placeholders.
    #[must_use]
    pub fn generic() -> Self {
        Self::new(&GenericDialect)
    }

    /// Returns the injected dialect strategy.
    #[must_use]
    pub fn dialect(&self) -> &'static dyn Dialect {
        self.dialect
    }

    fn escaped_table(&self, query: &QueryBuilder) -> Result<String> {
        query
            .table
            .as_deref()
            .map(|table| self.dialect.escape_table(table))
            .ok_or(Error::MissingTable)
    }

    fn escape_column(&self, column: &str) -> String {
        if column == "*" {
            String::from(column)
        } else {
            self.dialect.escape_column(column)
        }
    }

    /// Compiles a SELECT statement.
    ///
    /// Components render in fixed order (columns, FROM, joins, wheres,
    /// groups, orders, limit), with empty components skipped and present
    /// ones joined by a single space. Arguments concatenate in the same
    /// order.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::MissingTable`] if no table is set.
    pub fn compile_select(&self, query: &QueryBuilder) -> Result<Compiled> {
        let table = self.escaped_table(query)?;
        let mut args = Vec::new();
        let mut parts = Vec::new();

        let (columns_sql, columns_args) = self.compile_columns(query);
        parts.push(columns_sql);
        args.extend(columns_args);

        parts.push(format!("FROM {table}"));

        for (fragment, fragment_args) in [
            self.compile_joins(query),
            self.compile_wheres(query),
            self.compile_groups(query),
            self.compile_orders(query),
            self.compile_limit(query),
        ] {
            if !fragment.is_empty() {
                parts.push(fragment);
                args.extend(fragment_args);
            }
        }

        Ok((parts.join(" "), args))
    }

    /// Compiles the SELECT column clause, including the aggregate form.
    ///
    /// Aggregate presence suppresses column rendering: the result is
    /// `FN(DISTINCT? columns) AS aggregate`, with DISTINCT applied only
    /// when the column list is not the all-columns sentinel.
    #[must_use]
    pub fn compile_columns(&self, query: &QueryBuilder) -> Compiled {
        let star = query.columns.len() == 1 && query.columns[0] == "*";
        let columns = query
            .columns
            .iter()
            .map(|column| self.escape_column(column))
            .collect::<Vec<_>>()
            .join(", ");

        let sql = if let Some(function) = query.aggregate {
            let distinct = if query.distinct && !star {
                "DISTINCT "
            } else {
                ""
            };
            format!(
                "SELECT {}({distinct}{columns}) AS aggregate",
                function.as_sql()
            )
        } else if query.distinct {
            format!("SELECT DISTINCT {columns}")
        } else {
            format!("SELECT {columns}")
        };

        (sql, Vec::new())
    }

    /// Compiles the JOIN clauses: `KIND JOIN table ON body` per join,
    /// space-joined.
    #[must_use]
    pub fn compile_joins(&self, query: &QueryBuilder) -> Compiled {
        let mut parts = Vec::new();
        let mut args = Vec::new();
        for join in &query.joins {
            let table = self.dialect.escape_table(join.joined_table());
            let (on_sql, on_args) = self.compile_conditions(join.on_clauses());
            if on_sql.is_empty() {
                parts.push(format!("{} JOIN {table}", join.kind().as_sql()));
            } else {
                parts.push(format!("{} JOIN {table} ON {on_sql}", join.kind().as_sql()));
            }
            args.extend(on_args);
        }
        (parts.join(" "), args)
    }

    /// Compiles the WHERE clause, or an empty fragment when no conditions
    /// have been accumulated.
    #[must_use]
    pub fn compile_wheres(&self, query: &QueryBuilder) -> Compiled {
        let (body, args) = self.compile_conditions(&query.wheres);
        if body.is_empty() {
            (String::new(), args)
        } else {
            (format!("WHERE {body}"), args)
        }
    }

    /// Renders a condition list, shared by the main WHERE, join ON bodies,
    /// and nested groups.
    ///
    /// Each clause renders its own fragment, prefixed by its connector
    /// except for the first clause in the list.
    #[must_use]
    pub fn compile_conditions(&self, clauses: &[WhereClause]) -> Compiled {
        let mut parts = Vec::new();
        let mut args = Vec::new();
        for (index, clause) in clauses.iter().enumerate() {
            let (fragment, clause_args) = self.compile_condition(clause);
            if index == 0 {
                parts.push(fragment);
            } else {
                parts.push(format!("{} {fragment}", clause.connector().as_sql()));
            }
            args.extend(clause_args);
        }
        (parts.join(" "), args)
    }

    fn compile_condition(&self, clause: &WhereClause) -> Compiled {
        match clause {
            WhereClause::Basic {
                column,
                operator,
                value,
                ..
            } => (
                format!("{} {operator} ?", self.escape_column(column)),
                vec![value.clone()],
            ),
            WhereClause::ColumnPair {
                first,
                operator,
                second,
                ..
            } => (
                format!(
                    "{} {operator} {}",
                    self.escape_column(first),
                    self.escape_column(second)
                ),
                Vec::new(),
            ),
            WhereClause::Raw { sql, values, .. } => (sql.clone(), values.clone()),
            WhereClause::Null {
                column, negated, ..
            } => {
                let check = if *negated { "IS NOT NULL" } else { "IS NULL" };
                (format!("{} {check}", self.escape_column(column)), Vec::new())
            }
            WhereClause::Nested { query, .. } => {
                let (inner, inner_args) = self.compile_conditions(&query.wheres);
                (format!("({inner})"), inner_args)
            }
        }
    }

    /// Compiles the GROUP BY clause.
    #[must_use]
    pub fn compile_groups(&self, query: &QueryBuilder) -> Compiled {
        if query.groups.is_empty() {
            return (String::new(), Vec::new());
        }
        let columns = query
            .groups
            .iter()
            .map(|column| self.escape_column(column))
            .collect::<Vec<_>>()
            .join(", ");
        (format!("GROUP BY {columns}"), Vec::new())
    }

    /// Compiles the ORDER BY clause.
    #[must_use]
    pub fn compile_orders(&self, query: &QueryBuilder) -> Compiled {
        if query.orders.is_empty() {
            return (String::new(), Vec::new());
        }
        let orders = query
            .orders
            .iter()
            .map(|order| {
                format!(
                    "{} {}",
                    self.escape_column(&order.column),
                    order.direction.as_sql()
                )
            })
            .collect::<Vec<_>>()
            .join(", ");
        (format!("ORDER BY {orders}"), Vec::new())
    }

    /// Compiles the LIMIT clause.
    #[must_use]
    pub fn compile_limit(&self, query: &QueryBuilder) -> Compiled {
        (
            query
                .limit
                .map(|count| format!("LIMIT {count}"))
                .unwrap_or_default(),
            Vec::new(),
        )
    }

    /// Compiles an INSERT statement for one or more rows.
    ///
    /// The column list comes from the first row; arguments flatten in
    /// row-major, column order.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::MissingTable`] without a table, and with
    /// [`Error::InvalidArgument`] when no rows are given or the rows do not
    /// share an identical key set.
    pub fn compile_insert(&self, query: &QueryBuilder, rows: &[Row]) -> Result<Compiled> {
        let table = self.escaped_table(query)?;
        let Some(first) = rows.first() else {
            return Err(Error::InvalidArgument(String::from(
                "insert requires at least one row",
            )));
        };

        let columns = first.columns();
        let mut expected: Vec<&str> = columns.clone();
        expected.sort_unstable();
        for row in &rows[1..] {
            let mut keys = row.columns();
            keys.sort_unstable();
            if keys != expected {
                return Err(Error::InvalidArgument(String::from(
                    "insert rows must share an identical column set",
                )));
            }
        }

        let column_list = columns
            .iter()
            .map(|column| self.escape_column(column))
            .collect::<Vec<_>>()
            .join(",");
        let tuple = format!("({})", vec!["?"; columns.len()].join(","));
        let tuples = vec![tuple; rows.len()].join(", ");

        let mut args = Vec::with_capacity(rows.len() * columns.len());
        for row in rows {
            for column in &columns {
                let value = row
                    .get(column)
                    .cloned()
                    .ok_or(Error::Internal("insert row lost a validated column"))?;
                args.push(value);
            }
        }

        Ok((
            format!("INSERT INTO {table} ({column_list}) VALUES {tuples}"),
            args,
        ))
    }

    /// Compiles an UPDATE statement.
    ///
    /// Argument order is join ON arguments, then SET values, then WHERE
    /// arguments, matching placeholder occurrence order in the emitted
    /// text exactly.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::MissingTable`] without a table, and with
    /// [`Error::InvalidArgument`] when `changes` is empty.
    pub fn compile_update(&self, query: &QueryBuilder, changes: &Row) -> Result<Compiled> {
        let table = self.escaped_table(query)?;
        if changes.is_empty() {
            return Err(Error::InvalidArgument(String::from(
                "update requires at least one assignment",
            )));
        }

        let mut sql = format!("UPDATE {table}");
        let mut args = Vec::new();

        let (joins_sql, join_args) = self.compile_joins(query);
        if !joins_sql.is_empty() {
            sql.push(' ');
            sql.push_str(&joins_sql);
            args.extend(join_args);
        }

        let assignments = changes
            .columns()
            .iter()
            .map(|column| format!("{} = ?", self.escape_column(column)))
            .collect::<Vec<_>>()
            .join(", ");
        sql.push_str(" SET ");
        sql.push_str(&assignments);
        args.extend(changes.values().cloned());

        let (where_sql, where_args) = self.compile_wheres(query);
        if !where_sql.is_empty() {
            sql.push(' ');
            sql.push_str(&where_sql);
            args.extend(where_args);
        }

        Ok((sql, args))
    }

    /// Compiles a DELETE statement scoped by the accumulated WHERE clauses.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::MissingTable`] without a table.
    pub fn compile_delete(&self, query: &QueryBuilder) -> Result<Compiled> {
        let table = self.escaped_table(query)?;
        let mut sql = format!("DELETE FROM {table}");
        let mut args = Vec::new();

        let (where_sql, where_args) = self.compile_wheres(query);
        if !where_sql.is_empty() {
            sql.push(' ');
            sql.push_str(&where_sql);
            args.extend(where_args);
        }

        Ok((sql, args))
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::generic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clause::{AggregateFunction, OrderDirection};
    use crate::dialect::{MysqlDialect, PostgresDialect, SqliteDialect};
    use crate::QueryBuilder;

    fn compile(query: &QueryBuilder) -> Compiled {
        Grammar::generic().compile_select(query).unwrap()
    }

    #[test]
    fn test_select_all() {
        let (sql, args) = compile(&QueryBuilder::table("test"));
        assert_eq!(sql, "SELECT * FROM test");
        assert!(args.is_empty());
    }

    #[test]
    fn test_select_without_table_fails() {
        let err = Grammar::generic()
            .compile_select(&QueryBuilder::new())
            .unwrap_err();
        assert!(matches!(err, Error::MissingTable));
    }

    #[test]
    fn test_select_columns_and_distinct() {
        let (sql, _) = compile(&QueryBuilder::table("test").select(&["a", "b"]).distinct());
        assert_eq!(sql, "SELECT DISTINCT a, b FROM test");
    }

    #[test]
    fn test_aggregate_sum_all() {
        let mut query = QueryBuilder::table("test");
        query.aggregate = Some(AggregateFunction::Sum);
        let (sql, _) = compile(&query);
        assert_eq!(sql, "SELECT SUM(*) AS aggregate FROM test");
    }

    #[test]
    fn test_aggregate_max_distinct_column() {
        let mut query = QueryBuilder::table("test").select(&["bar"]).distinct();
        query.aggregate = Some(AggregateFunction::Max);
        let (sql, _) = compile(&query);
        assert_eq!(sql, "SELECT MAX(DISTINCT bar) AS aggregate FROM test");
    }

    #[test]
    fn test_aggregate_distinct_not_applied_to_star() {
        let mut query = QueryBuilder::table("test").distinct();
        query.aggregate = Some(AggregateFunction::Count);
        let (sql, _) = compile(&query);
        assert_eq!(sql, "SELECT COUNT(*) AS aggregate FROM test");
    }

    #[test]
    fn test_empty_wheres_compile_to_empty_fragment() {
        let (sql, args) = Grammar::generic().compile_wheres(&QueryBuilder::table("test"));
        assert!(sql.is_empty());
        assert!(args.is_empty());
    }

    #[test]
    fn test_single_where_omits_connector() {
        let (sql, args) = compile(&QueryBuilder::table("test").where_eq("foo", "10"));
        assert_eq!(sql, "SELECT * FROM test WHERE foo = ?");
        assert_eq!(args, vec![SqlValue::Text(String::from("10"))]);
    }

    #[test]
    fn test_where_or_where() {
        let (sql, args) = compile(
            &QueryBuilder::table("test")
                .where_eq("foo", "10")
                .or_where_eq("bar", 200_i64),
        );
        assert_eq!(sql, "SELECT * FROM test WHERE foo = ? OR bar = ?");
        assert_eq!(
            args,
            vec![SqlValue::Text(String::from("10")), SqlValue::Int(200)]
        );
    }

    #[test]
    fn test_where_operator() {
        let (sql, args) = compile(&QueryBuilder::table("test").where_operator("age", ">", 18_i64));
        assert_eq!(sql, "SELECT * FROM test WHERE age > ?");
        assert_eq!(args, vec![SqlValue::Int(18)]);
    }

    #[test]
    fn test_nested_group_renders_parenthesized() {
        let (sql, args) = compile(
            &QueryBuilder::table("test")
                .where_eq("a", "A")
                .or_where_group(|q| q.where_eq("a", "B").where_eq("b", 10_i64)),
        );
        assert_eq!(sql, "SELECT * FROM test WHERE a = ? OR (a = ? AND b = ?)");
        assert_eq!(
            args,
            vec![
                SqlValue::Text(String::from("A")),
                SqlValue::Text(String::from("B")),
                SqlValue::Int(10),
            ]
        );
    }

    #[test]
    fn test_nested_connectors_independent_of_outer() {
        let (sql, _) = compile(
            &QueryBuilder::table("test")
                .where_eq("a", 1_i64)
                .where_group(|q| q.where_eq("b", 2_i64).or_where_eq("c", 3_i64)),
        );
        assert_eq!(
            sql,
            "SELECT * FROM test WHERE a = ? AND (b = ? OR c = ?)"
        );
    }

    #[test]
    fn test_nested_extras_are_not_consulted() {
        let (sql, _) = compile(
            &QueryBuilder::table("test").where_group(|q| {
                q.where_eq("a", 1_i64)
                    .group_by(&["a"])
                    .order_by_asc("a")
                    .limit(3)
                    .unwrap()
            }),
        );
        assert_eq!(sql, "SELECT * FROM test WHERE (a = ?)");
    }

    #[test]
    fn test_where_column_binds_nothing() {
        let (sql, args) = compile(&QueryBuilder::table("test").where_column("a", "!=", "b"));
        assert_eq!(sql, "SELECT * FROM test WHERE a != b");
        assert!(args.is_empty());
    }

    #[test]
    fn test_where_raw_passes_through_verbatim() {
        let (sql, args) = compile(
            &QueryBuilder::table("test")
                .where_raw("price > ? / qty", vec![SqlValue::Int(100)])
                .or_where_eq("qty", 0_i64),
        );
        assert_eq!(sql, "SELECT * FROM test WHERE price > ? / qty OR qty = ?");
        assert_eq!(args, vec![SqlValue::Int(100), SqlValue::Int(0)]);
    }

    #[test]
    fn test_where_null_variants() {
        let (sql, args) = compile(
            &QueryBuilder::table("test")
                .where_null("deleted_at")
                .or_where_not_null("archived_at"),
        );
        assert_eq!(
            sql,
            "SELECT * FROM test WHERE deleted_at IS NULL OR archived_at IS NOT NULL"
        );
        assert!(args.is_empty());
    }

    #[test]
    fn test_inner_join_with_on_triple() {
        let (sql, _) = compile(&QueryBuilder::table("test").join("foo", "test.foo", "=", "foo.bar"));
        assert_eq!(
            sql,
            "SELECT * FROM test INNER JOIN foo ON test.foo = foo.bar"
        );
    }

    #[test]
    fn test_left_and_right_joins() {
        let (sql, _) = compile(
            &QueryBuilder::table("test")
                .left_join("foo", "test.foo", "=", "foo.bar")
                .right_join("baz", "test.baz", "=", "baz.id"),
        );
        assert_eq!(
            sql,
            "SELECT * FROM test LEFT JOIN foo ON test.foo = foo.bar RIGHT JOIN baz ON test.baz = baz.id"
        );
    }

    #[test]
    fn test_join_callback_with_or_on_and_value() {
        let (sql, args) = compile(&QueryBuilder::table("test").join_on("foo", |on| {
            on.on("test.foo", "=", "foo.bar").where_eq("foo.active", true)
        }));
        assert_eq!(
            sql,
            "SELECT * FROM test INNER JOIN foo ON test.foo = foo.bar AND foo.active = ?"
        );
        assert_eq!(args, vec![SqlValue::Bool(true)]);
    }

    #[test]
    fn test_join_args_precede_where_args() {
        let (sql, args) = compile(
            &QueryBuilder::table("test")
                .join_on("foo", |on| {
                    on.on("test.foo", "=", "foo.bar").where_eq("foo.kind", "k")
                })
                .where_eq("test.a", 1_i64),
        );
        assert_eq!(
            sql,
            "SELECT * FROM test INNER JOIN foo ON test.foo = foo.bar AND foo.kind = ? WHERE test.a = ?"
        );
        assert_eq!(
            args,
            vec![SqlValue::Text(String::from("k")), SqlValue::Int(1)]
        );
    }

    #[test]
    fn test_group_order_limit_render_in_order() {
        let (sql, _) = compile(
            &QueryBuilder::table("test")
                .where_eq("a", 1_i64)
                .group_by(&["b"])
                .order_by("c", OrderDirection::Desc)
                .limit(10)
                .unwrap(),
        );
        assert_eq!(
            sql,
            "SELECT * FROM test WHERE a = ? GROUP BY b ORDER BY c DESC LIMIT 10"
        );
    }

    #[test]
    fn test_insert_two_rows() {
        let rows = vec![
            Row::new().set("a", "Foo").set("b", 10_i64),
            Row::new().set("a", "Bar").set("b", 12_i64),
        ];
        let (sql, args) = Grammar::generic()
            .compile_insert(&QueryBuilder::table("test"), &rows)
            .unwrap();
        assert_eq!(sql, "INSERT INTO test (a,b) VALUES (?,?), (?,?)");
        assert_eq!(
            args,
            vec![
                SqlValue::Text(String::from("Foo")),
                SqlValue::Int(10),
                SqlValue::Text(String::from("Bar")),
                SqlValue::Int(12),
            ]
        );
    }

    #[test]
    fn test_insert_flattens_in_first_row_column_order() {
        let rows = vec![
            Row::new().set("a", 1_i64).set("b", 2_i64),
            Row::new().set("b", 4_i64).set("a", 3_i64),
        ];
        let (_, args) = Grammar::generic()
            .compile_insert(&QueryBuilder::table("test"), &rows)
            .unwrap();
        assert_eq!(
            args,
            vec![
                SqlValue::Int(1),
                SqlValue::Int(2),
                SqlValue::Int(3),
                SqlValue::Int(4),
            ]
        );
    }

    #[test]
    fn test_insert_rejects_mismatched_rows() {
        let rows = vec![
            Row::new().set("a", 1_i64),
            Row::new().set("b", 2_i64),
        ];
        let err = Grammar::generic()
            .compile_insert(&QueryBuilder::table("test"), &rows)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_insert_rejects_empty_rows() {
        let err = Grammar::generic()
            .compile_insert(&QueryBuilder::table("test"), &[])
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_update_with_where() {
        let query = QueryBuilder::table("test").where_eq("id", 7_i64);
        let changes = Row::new().set("a", "x").set("b", 2_i64);
        let (sql, args) = Grammar::generic().compile_update(&query, &changes).unwrap();
        assert_eq!(sql, "UPDATE test SET a = ?, b = ? WHERE id = ?");
        assert_eq!(
            args,
            vec![
                SqlValue::Text(String::from("x")),
                SqlValue::Int(2),
                SqlValue::Int(7),
            ]
        );
    }

    #[test]
    fn test_update_join_args_then_set_then_where() {
        let query = QueryBuilder::table("test")
            .join_on("foo", |on| {
                on.on("test.foo", "=", "foo.bar").where_eq("foo.kind", "k")
            })
            .where_eq("test.id", 7_i64);
        let changes = Row::new().set("a", "x");
        let (sql, args) = Grammar::generic().compile_update(&query, &changes).unwrap();
        assert_eq!(
            sql,
            "UPDATE test INNER JOIN foo ON test.foo = foo.bar AND foo.kind = ? SET a = ? WHERE test.id = ?"
        );
        assert_eq!(
            args,
            vec![
                SqlValue::Text(String::from("k")),
                SqlValue::Text(String::from("x")),
                SqlValue::Int(7),
            ]
        );
    }

    #[test]
    fn test_update_rejects_empty_changes() {
        let err = Grammar::generic()
            .compile_update(&QueryBuilder::table("test"), &Row::new())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_delete_with_and_without_where() {
        let grammar = Grammar::generic();
        let (sql, args) = grammar
            .compile_delete(&QueryBuilder::table("test").where_eq("a", 1_i64))
            .unwrap();
        assert_eq!(sql, "DELETE FROM test WHERE a = ?");
        assert_eq!(args, vec![SqlValue::Int(1)]);

        let (sql, args) = grammar.compile_delete(&QueryBuilder::table("test")).unwrap();
        assert_eq!(sql, "DELETE FROM test");
        assert!(args.is_empty());
    }

    #[test]
    fn test_args_match_placeholder_occurrence_order() {
        let query = QueryBuilder::table("test")
            .join_on("j", |on| on.where_eq("j.k", 1_i64))
            .where_eq("a", 2_i64)
            .or_where_group(|q| q.where_eq("b", 3_i64).where_raw("c > ?", vec![SqlValue::Int(4)]));
        let (sql, args) = Grammar::generic().compile_select(&query).unwrap();
        let placeholders = sql.matches('?').count();
        assert_eq!(placeholders, args.len());
        assert_eq!(
            args,
            vec![
                SqlValue::Int(1),
                SqlValue::Int(2),
                SqlValue::Int(3),
                SqlValue::Int(4),
            ]
        );
    }

    #[test]
    fn test_sqlite_grammar_quotes_identifiers() {
        let (sql, _) = Grammar::new(&SqliteDialect)
            .compile_select(&QueryBuilder::table("users").select(&["users.name"]))
            .unwrap();
        assert_eq!(sql, "SELECT \"users\".\"name\" FROM \"users\"");
    }

    #[test]
    fn test_mysql_grammar_quotes_identifiers() {
        let (sql, _) = Grammar::new(&MysqlDialect)
            .compile_select(&QueryBuilder::table("users").where_eq("name", "Bob"))
            .unwrap();
        assert_eq!(sql, "SELECT * FROM `users` WHERE `name` = ?");
    }

    #[test]
    fn test_postgres_transform_preserves_argument_order() {
        let query = QueryBuilder::table("test")
            .where_eq("a", 1_i64)
            .where_eq("b", 2_i64);
        let grammar = Grammar::new(&PostgresDialect);
        let (sql, args) = grammar.compile_select(&query).unwrap();
        let prepared = grammar.dialect().prepare_sql(&sql);
        assert_eq!(
            prepared,
            "SELECT * FROM \"test\" WHERE \"a\" = $1 AND \"b\" = $2"
        );
        assert_eq!(args, vec![SqlValue::Int(1), SqlValue::Int(2)]);
    }
}
