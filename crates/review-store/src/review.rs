//! SQLite-backed [`ReviewStore`].
//!
//! Table: `review(review_id INTEGER PRIMARY KEY, review TEXT)`.
//!
//! Keyword search is `instr(review, ?1) > 0`: a case-sensitive substring
//! test with the keyword bound as a parameter, never spliced into the SQL.
//! There is no index that can serve it, so every search is a full scan
//! costing O(n·m) for n rows of average length m.

use async_trait::async_trait;
use review_core::{Review, ReviewId, ReviewStore, StoreError, UpdateOutcome};
use sqlx::{FromRow, SqlitePool};
use tracing::debug;

const SELECT_ALL: &str = "SELECT review_id, review FROM review ORDER BY review_id";
const SELECT_BY_ID: &str = "SELECT review_id, review FROM review WHERE review_id = ?1";
const SELECT_BY_KEYWORD: &str =
    "SELECT review_id, review FROM review WHERE instr(review, ?1) > 0 ORDER BY review_id";
const UPDATE_CONTENT: &str = "UPDATE review SET review = ?1 WHERE review_id = ?2";

#[derive(Debug, FromRow)]
struct ReviewRow {
    review_id: u32,
    review: Option<String>,
}

impl From<ReviewRow> for Review {
    fn from(row: ReviewRow) -> Self {
        Review::new(row.review_id, row.review.unwrap_or_default())
    }
}

#[derive(Debug, Clone)]
pub struct SqliteReviewStore {
    pool: SqlitePool,
}

impl SqliteReviewStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl ReviewStore for SqliteReviewStore {
    async fn list_all(&self) -> Result<Vec<Review>, StoreError> {
        let rows: Vec<ReviewRow> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::io)?;
        Ok(rows.into_iter().map(Review::from).collect())
    }

    async fn get_by_id(&self, id: ReviewId) -> Result<Review, StoreError> {
        let row: Option<ReviewRow> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::io)?;
        row.map(Review::from).ok_or(StoreError::NotFound)
    }

    async fn search_by_keyword(&self, keyword: &str) -> Result<Vec<Review>, StoreError> {
        let rows: Vec<ReviewRow> = sqlx::query_as(SELECT_BY_KEYWORD)
            .bind(keyword)
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::io)?;
        debug!(keyword, matches = rows.len(), "keyword scan finished");

        if rows.is_empty() {
            return Err(StoreError::NotFound);
        }
        Ok(rows
            .into_iter()
            .map(|row| Review::from(row).with_keyword(keyword))
            .collect())
    }

    async fn update(&self, id: ReviewId, content: &str) -> Result<UpdateOutcome, StoreError> {
        // Dropping `tx` on any early return rolls it back.
        let mut tx = self.pool.begin().await.map_err(StoreError::io)?;

        let done = sqlx::query(UPDATE_CONTENT)
            .bind(content)
            .bind(id.get())
            .execute(&mut *tx)
            .await
            .map_err(StoreError::io)?;

        tx.commit().await.map_err(StoreError::io)?;
        Ok(UpdateOutcome::from_rows_affected(done.rows_affected()))
    }
}
