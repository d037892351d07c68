//! Generic SQL dialect.

use super::Dialect;

/// A generic dialect with identity escaping and `?` placeholders.
///
/// This is the base behavior the grammar compiler is tested against.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericDialect;

impl GenericDialect {
    /// Creates a new generic dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for GenericDialect {
    fn name(&self) -> &'static str {
        "generic"
    }
}
