//! Table schema descriptors.
//!
//! A [`TableSchema`] is an explicit mapping from field names to column
//! names and primitive kinds, built once per model type and validated at
//! construction. It replaces reflection-style field metadata: the builder
//! records it as an association marker for result materialization and uses
//! its key column for identifier lookups. It is never compiled into SQL.

use crate::error::{Error, Result};

/// Primitive kind of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Integer column.
    Integer,
    /// Float column.
    Float,
    /// Text column.
    Text,
    /// Boolean column.
    Boolean,
    /// Binary column.
    Blob,
}

/// One field of a schema: field name, backing column, primitive kind.
#[derive(Debug, Clone)]
pub struct FieldDef {
    name: String,
    column: String,
    kind: FieldKind,
}

impl FieldDef {
    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the backing column name.
    #[must_use]
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Returns the primitive kind.
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        self.kind
    }
}

/// A validated table descriptor.
#[derive(Debug, Clone)]
pub struct TableSchema {
    table: String,
    key: String,
    fields: Vec<FieldDef>,
}

impl TableSchema {
    /// Starts building a schema for the given table.
    #[must_use]
    pub fn builder(table: &str) -> TableSchemaBuilder {
        TableSchemaBuilder {
            table: String::from(table),
            key: None,
            fields: Vec::new(),
        }
    }

    /// Returns the table name.
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Returns the key column used for identifier lookups.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the fields in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Returns the column backing a field, if the field exists.
    #[must_use]
    pub fn column_for(&self, field: &str) -> Option<&str> {
        self.field(field).map(FieldDef::column)
    }
}

/// Validating builder for [`TableSchema`].
#[derive(Debug)]
pub struct TableSchemaBuilder {
    table: String,
    key: Option<String>,
    fields: Vec<FieldDef>,
}

impl TableSchemaBuilder {
    /// Declares a field with its backing column and kind.
    #[must_use]
    pub fn field(mut self, name: &str, column: &str, kind: FieldKind) -> Self {
        self.fields.push(FieldDef {
            name: String::from(name),
            column: String::from(column),
            kind,
        });
        self
    }

    /// Names the key field used for identifier lookups. Defaults to `id`.
    #[must_use]
    pub fn key(mut self, name: &str) -> Self {
        self.key = Some(String::from(name));
        self
    }

    /// Validates and builds the schema.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidArgument`] if the table name is empty,
    /// no fields are declared, a field or column name repeats, or an
    /// explicit key names no declared field.
    pub fn build(self) -> Result<TableSchema> {
        if self.table.is_empty() {
            return Err(Error::InvalidArgument(String::from(
                "schema table name must not be empty",
            )));
        }
        if self.fields.is_empty() {
            return Err(Error::InvalidArgument(String::from(
                "schema must declare at least one field",
            )));
        }
        for (index, field) in self.fields.iter().enumerate() {
            let rest = &self.fields[index + 1..];
            if rest.iter().any(|other| other.name == field.name) {
                return Err(Error::InvalidArgument(format!(
                    "duplicate schema field: {}",
                    field.name
                )));
            }
            if rest.iter().any(|other| other.column == field.column) {
                return Err(Error::InvalidArgument(format!(
                    "duplicate schema column: {}",
                    field.column
                )));
            }
        }

        let key = match self.key {
            Some(key) => {
                let field = self.fields.iter().find(|field| field.name == key).ok_or_else(
                    || Error::InvalidArgument(format!("schema key names no field: {key}")),
                )?;
                String::from(field.column())
            }
            None => String::from("id"),
        };

        Ok(TableSchema {
            table: self.table,
            key,
            fields: self.fields,
        })
    }
}
