//! SQLite-backed [`DictionaryStore`].
//!
//! Table: `dictionary(keyword TEXT)`. Membership is an exact,
//! case-sensitive match on the whole token.

use async_trait::async_trait;
use review_core::{DictionaryStore, StoreError};
use sqlx::SqlitePool;

const SELECT_KEYWORD: &str = "SELECT keyword FROM dictionary WHERE keyword = ?1";

#[derive(Debug, Clone)]
pub struct SqliteDictionaryStore {
    pool: SqlitePool,
}

impl SqliteDictionaryStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl DictionaryStore for SqliteDictionaryStore {
    async fn exists(&self, keyword: &str) -> Result<bool, StoreError> {
        let row: Option<(Option<String>,)> = sqlx::query_as(SELECT_KEYWORD)
            .bind(keyword)
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::io)?;
        Ok(row.is_some())
    }
}
