//! SQL dialect support.
//!
//! Different databases diverge on identifier quoting, placeholder syntax,
//! and insert-id recovery. A [`Dialect`] is a strategy object injected into
//! the grammar compiler: two escaping hooks plus a placeholder transform.
//! The compiler itself always emits `?` placeholders; rewriting them into a
//! dialect's positional syntax happens through [`Dialect::prepare_sql`],
//! applied by the engine at execution time.

mod generic;
mod mysql;
mod postgres;
mod sqlite;

pub use generic::GenericDialect;
pub use mysql::MysqlDialect;
pub use postgres::PostgresDialect;
pub use sqlite::SqliteDialect;

/// Trait for SQL dialect-specific behavior.
pub trait Dialect: Send + Sync {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Escapes a column reference. Identity by default, for engines that
    /// don't require quoting.
    fn escape_column(&self, name: &str) -> String {
        name.to_string()
    }

    /// Escapes a table reference. Identity by default.
    fn escape_table(&self, name: &str) -> String {
        name.to_string()
    }

    /// Rewrites compiled SQL into the dialect's placeholder syntax.
    ///
    /// Identity for `?`-placeholder dialects. Argument order is never
    /// changed by this transform.
    fn prepare_sql(&self, sql: &str) -> String {
        sql.to_string()
    }

    /// Returns whether the dialect supports a RETURNING clause.
    fn supports_returning(&self) -> bool {
        false
    }
}

/// Quotes an identifier with the given quote character.
///
/// Dotted qualified names are quoted per segment, `AS`-aliased expressions
/// per side, and a bare `*` is left untouched.
#[must_use]
pub fn quote_identifier(name: &str, quote: char) -> String {
    let lower = name.to_ascii_lowercase();
    if let Some(pos) = lower.rfind(" as ") {
        let expr = &name[..pos];
        let alias = &name[pos + 4..];
        return format!(
            "{} AS {}",
            quote_identifier(expr, quote),
            quote_identifier(alias, quote)
        );
    }
    name.split('.')
        .map(|segment| {
            if segment == "*" {
                String::from(segment)
            } else {
                format!("{quote}{segment}{quote}")
            }
        })
        .collect::<Vec<_>>()
        .join(".")
}
