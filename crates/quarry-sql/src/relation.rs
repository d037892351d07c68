//! Lazy relation handles.
//!
//! A [`Relation`] is an explicit stand-in for dynamically-intercepted
//! relation access: it owns a template query and resolves it at most once,
//! caching the rows for the handle's lifetime. The full builder method set
//! stays available through [`Relation::query`], which hands out a fresh
//! clone of the template for further refinement.

use tokio::sync::OnceCell;

use crate::builder::QueryBuilder;
use crate::error::Result;
use crate::row::Row;

/// A memoizing handle over a deferred query.
#[derive(Debug)]
pub struct Relation {
    query: QueryBuilder,
    cache: OnceCell<Vec<Row>>,
}

impl Relation {
    /// Wraps a query for deferred, memoized resolution.
    #[must_use]
    pub fn new(query: QueryBuilder) -> Self {
        Self {
            query,
            cache: OnceCell::new(),
        }
    }

    /// Executes the query on first call and returns the cached rows on
    /// every call after that.
    pub async fn resolve(&self) -> Result<&[Row]> {
        let rows = self
            .cache
            .get_or_try_init(|| async { self.query.clone().get().await })
            .await?;
        Ok(rows.as_slice())
    }

    /// Returns a fresh builder derived from the template query, exposing
    /// the full chainable method set.
    ///
    /// Refinements never touch the memoized result of this handle.
    #[must_use]
    pub fn query(&self) -> QueryBuilder {
        self.query.clone()
    }

    /// Returns whether the relation has already been resolved.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.cache.initialized()
    }
}
