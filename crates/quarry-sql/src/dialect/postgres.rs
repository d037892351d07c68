//! PostgreSQL dialect implementation.

use super::{quote_identifier, Dialect};

/// PostgreSQL dialect.
///
/// Uses double-quote escaping and numbered `$n` placeholders. The grammar
/// compiler still emits `?`; [`Dialect::prepare_sql`] renumbers them
/// sequentially from 1, leaving argument order untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct PostgresDialect;

impl PostgresDialect {
    /// Creates a new PostgreSQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for PostgresDialect {
    fn name(&self) -> &'static str {
        "postgres"
    }

    fn escape_column(&self, name: &str) -> String {
        quote_identifier(name, '"')
    }

    fn escape_table(&self, name: &str) -> String {
        quote_identifier(name, '"')
    }

    fn prepare_sql(&self, sql: &str) -> String {
        let mut out = String::with_capacity(sql.len() + 8);
        let mut index = 0_usize;
        let mut in_string = false;
        for ch in sql.chars() {
            match ch {
                '\'' => {
                    in_string = !in_string;
                    out.push(ch);
                }
                '?' if !in_string => {
                    index += 1;
                    out.push('$');
                    out.push_str(&index.to_string());
                }
                _ => out.push(ch),
            }
        }
        out
    }

    fn supports_returning(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postgres_dialect() {
        let dialect = PostgresDialect::new();
        assert_eq!(dialect.name(), "postgres");
        assert_eq!(dialect.escape_column("users.name"), "\"users\".\"name\"");
        assert!(dialect.supports_returning());
    }

    #[test]
    fn test_placeholder_numbering() {
        let dialect = PostgresDialect::new();
        assert_eq!(
            dialect.prepare_sql("SELECT * FROM test WHERE a = ? AND b = ?"),
            "SELECT * FROM test WHERE a = $1 AND b = $2"
        );
    }

    #[test]
    fn test_placeholder_numbering_skips_string_literals() {
        let dialect = PostgresDialect::new();
        assert_eq!(
            dialect.prepare_sql("WHERE note = '?' AND a = ?"),
            "WHERE note = '?' AND a = $1"
        );
    }

    #[test]
    fn test_placeholder_numbering_without_placeholders() {
        let dialect = PostgresDialect::new();
        assert_eq!(dialect.prepare_sql("SELECT 1"), "SELECT 1");
    }
}
