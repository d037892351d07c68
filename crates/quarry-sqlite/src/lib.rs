//! # quarry-sqlite
//!
//! SQLite engine for `quarry-sql`, backed by `sqlx`.
//!
//! # How SQLite differs from other engines
//!
//! - **Identifier quoting**: double quotes (`"`) are the standard quoting
//!   style, handled by `SqliteDialect` in `quarry-sql`.
//! - **Placeholders**: plain `?`, so no placeholder transform is applied
//!   before execution.
//! - **Insert identifiers**: recovered from the driver-reported
//!   `last_insert_rowid` of the executed statement. Because the id comes
//!   from the same statement result, no separate id-read query runs and
//!   there is no window for interleaved statements on other connections.
//! - **Type affinity**: columns store values of any type; result decoding
//!   follows the value's reported type, not the declared column type.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use quarry_sql::{Engine, QueryBuilder, Row};
//! use quarry_sqlite::SqliteEngine;
//!
//! let engine: Arc<dyn Engine> = Arc::new(SqliteEngine::in_memory().await?);
//! let id = QueryBuilder::table("users")
//!     .engine(Arc::clone(&engine))
//!     .insert_and_get_id(Row::new().set("name", "Alice"))
//!     .await?;
//! ```

mod engine;

pub use engine::SqliteEngine;
