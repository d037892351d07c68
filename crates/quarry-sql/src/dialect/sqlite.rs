//! SQLite dialect implementation.

use super::{quote_identifier, Dialect};

/// SQLite dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqliteDialect;

impl SqliteDialect {
    /// Creates a new SQLite dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for SqliteDialect {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn escape_column(&self, name: &str) -> String {
        quote_identifier(name, '"')
    }

    fn escape_table(&self, name: &str) -> String {
        quote_identifier(name, '"')
    }

    fn supports_returning(&self) -> bool {
        true // SQLite 3.35.0+
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_dialect() {
        let dialect = SqliteDialect::new();
        assert_eq!(dialect.name(), "sqlite");
        assert_eq!(dialect.escape_column("users.name"), "\"users\".\"name\"");
        assert_eq!(dialect.prepare_sql("a = ?"), "a = ?");
        assert!(dialect.supports_returning());
    }
}
