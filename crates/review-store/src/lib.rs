//! review-store: SQLite backends for food-review.
//!
//! Each store holds a cloned `sqlx::SqlitePool` and implements the matching
//! capability trait from `review-core`:
//!
//! | Type | Trait | Table |
//! |------|-------|-------|
//! | [`SqliteReviewStore`] | `ReviewStore` | `review` |
//! | [`SqliteDictionaryStore`] | `DictionaryStore` | `dictionary` |
//!
//! The pool is the only shared resource. Concurrent edits are serialised by
//! SQLite's write lock inside each transaction; no application lock exists.

mod database;
mod dictionary;
mod review;

pub use database::{Database, DICTIONARY_SCHEMA, REVIEW_SCHEMA};
pub use dictionary::SqliteDictionaryStore;
pub use review::SqliteReviewStore;

use review_core::config::DatabaseConfig;

/// Open both databases named in `config` and wrap them in their stores.
pub async fn connect(
    config: &DatabaseConfig,
) -> anyhow::Result<(SqliteReviewStore, SqliteDictionaryStore)> {
    let reviews = Database::open_reviews(&config.review_url, config).await?;
    let dictionary = Database::open_dictionary(&config.dictionary_url, config).await?;
    Ok((
        SqliteReviewStore::new(reviews.pool().clone()),
        SqliteDictionaryStore::new(dictionary.pool().clone()),
    ))
}
