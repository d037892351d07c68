//! SQLite engine implementation over an `sqlx` connection pool.

use async_trait::async_trait;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::{Column as _, Row as _, TypeInfo as _, ValueRef as _};

use quarry_sql::dialect::SqliteDialect;
use quarry_sql::{Engine, Error, Grammar, Result, Row, SqlValue};

/// A SQLite-style engine executing compiled statements through `sqlx`.
pub struct SqliteEngine {
    pool: SqlitePool,
}

impl SqliteEngine {
    /// Connects to the given SQLite URL (e.g. `sqlite://data.db`).
    ///
    /// # Errors
    ///
    /// Surfaces driver connection failures as [`Error::Engine`].
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .connect(url)
            .await
            .map_err(Error::engine)?;
        Ok(Self { pool })
    }

    /// Opens an in-memory database on a single-connection pool.
    ///
    /// An in-memory database exists per connection, so the pool is capped
    /// at one connection to keep every statement on the same database.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .map_err(Error::engine)?;
        Ok(Self { pool })
    }

    /// Wraps an existing pool.
    #[must_use]
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Returns the underlying pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

type SqliteQuery<'q> = sqlx::query::Query<'q, sqlx::Sqlite, sqlx::sqlite::SqliteArguments<'q>>;

fn bind<'q>(query: SqliteQuery<'q>, value: &SqlValue) -> SqliteQuery<'q> {
    match value {
        SqlValue::Null => query.bind(Option::<i64>::None),
        SqlValue::Bool(b) => query.bind(*b),
        SqlValue::Int(i) => query.bind(*i),
        SqlValue::Float(f) => query.bind(*f),
        SqlValue::Text(s) => query.bind(s.clone()),
        SqlValue::Blob(b) => query.bind(b.clone()),
    }
}

fn bind_all<'q>(sql: &'q str, args: &[SqlValue]) -> SqliteQuery<'q> {
    let mut query = sqlx::query(sql);
    for value in args {
        query = bind(query, value);
    }
    query
}

/// Decodes a driver row into the dynamic record type, following the
/// value's reported type.
fn decode_row(row: &SqliteRow) -> Result<Row> {
    let mut out = Row::new();
    for (index, column) in row.columns().iter().enumerate() {
        let raw = row.try_get_raw(index).map_err(Error::engine)?;
        let value = if raw.is_null() {
            SqlValue::Null
        } else {
            match raw.type_info().name() {
                "INTEGER" | "BOOLEAN" => {
                    SqlValue::Int(row.try_get::<i64, _>(index).map_err(Error::engine)?)
                }
                "REAL" => SqlValue::Float(row.try_get::<f64, _>(index).map_err(Error::engine)?),
                "BLOB" => {
                    SqlValue::Blob(row.try_get::<Vec<u8>, _>(index).map_err(Error::engine)?)
                }
                _ => SqlValue::Text(row.try_get::<String, _>(index).map_err(Error::engine)?),
            }
        };
        out = out.set(column.name(), value);
    }
    Ok(out)
}

#[async_trait]
impl Engine for SqliteEngine {
    fn grammar(&self) -> Grammar {
        Grammar::new(&SqliteDialect)
    }

    async fn query(&self, sql: &str, args: &[SqlValue]) -> Result<u64> {
        let result = bind_all(sql, args)
            .execute(&self.pool)
            .await
            .map_err(Error::engine)?;
        Ok(result.rows_affected())
    }

    async fn get(&self, sql: &str, args: &[SqlValue]) -> Result<Vec<Row>> {
        let rows = bind_all(sql, args)
            .fetch_all(&self.pool)
            .await
            .map_err(Error::engine)?;
        rows.iter().map(decode_row).collect()
    }

    async fn insert_and_get_id(&self, _table: &str, sql: &str, args: &[SqlValue]) -> Result<i64> {
        let result = bind_all(sql, args)
            .execute(&self.pool)
            .await
            .map_err(Error::engine)?;
        Ok(result.last_insert_rowid())
    }
}
