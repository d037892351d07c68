//! Dynamic row records.
//!
//! A [`Row`] is an ordered mapping from column name to [`SqlValue`]. It is
//! the payload on both sides of the engine boundary: engines decode result
//! rows into it, and insert/update terminals take their column values from
//! it. Insertion order is preserved because it determines placeholder order
//! in compiled statements.

use crate::value::{SqlValue, ToSqlValue};

/// An ordered column-name to value record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    entries: Vec<(String, SqlValue)>,
}

impl Row {
    /// Creates an empty row.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Sets a column value, replacing any existing entry for the column.
    ///
    /// New columns keep their insertion position.
    #[must_use]
    pub fn set(mut self, column: impl Into<String>, value: impl ToSqlValue) -> Self {
        let column = column.into();
        let value = value.to_sql_value();
        match self.entries.iter_mut().find(|(name, _)| *name == column) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((column, value)),
        }
        self
    }

    /// Returns the value for a column, if present.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&SqlValue> {
        self.entries
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Returns the column names in insertion order.
    #[must_use]
    pub fn columns(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Returns the values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &SqlValue> {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Iterates over (column, value) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SqlValue)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the row has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for Row {
    type Item = (String, SqlValue);
    type IntoIter = std::vec::IntoIter<(String, SqlValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<(String, SqlValue)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, SqlValue)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |row, (column, value)| row.set(column, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_preserves_insertion_order() {
        let row = Row::new().set("b", 1_i64).set("a", 2_i64).set("c", 3_i64);
        assert_eq!(row.columns(), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_set_replaces_in_place() {
        let row = Row::new().set("a", 1_i64).set("b", 2_i64).set("a", 9_i64);
        assert_eq!(row.columns(), vec!["a", "b"]);
        assert_eq!(row.get("a"), Some(&SqlValue::Int(9)));
    }

    #[test]
    fn test_get_missing_column() {
        let row = Row::new().set("a", 1_i64);
        assert_eq!(row.get("nope"), None);
    }

    #[test]
    fn test_values_follow_column_order() {
        let row = Row::new().set("a", "x").set("b", 2_i64);
        let values: Vec<_> = row.values().cloned().collect();
        assert_eq!(
            values,
            vec![SqlValue::Text(String::from("x")), SqlValue::Int(2)]
        );
    }
}
