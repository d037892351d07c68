//! MySQL dialect implementation.

use super::{quote_identifier, Dialect};

/// MySQL dialect.
///
/// Uses backtick quoting and `?` placeholders. Insert identifiers are
/// recovered through the driver's last-insert-id mechanism, so RETURNING is
/// not advertised.
#[derive(Debug, Default, Clone, Copy)]
pub struct MysqlDialect;

impl MysqlDialect {
    /// Creates a new MySQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for MysqlDialect {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn escape_column(&self, name: &str) -> String {
        quote_identifier(name, '`')
    }

    fn escape_table(&self, name: &str) -> String {
        quote_identifier(name, '`')
    }
}
