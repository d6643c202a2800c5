//! Store capability interfaces.
//!
//! Backends (SQLite in `review-store`, in-memory fakes in tests) implement
//! these traits and are shared across request tasks as `Arc<dyn …>`. A store
//! holds no in-process lock of its own; write isolation comes from the
//! backing engine's transactions.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::types::{Review, ReviewId, UpdateOutcome};

#[async_trait]
pub trait ReviewStore: Send + Sync {
    /// Every review, in no guaranteed order. Zero reviews is `Ok(vec![])`.
    async fn list_all(&self) -> Result<Vec<Review>, StoreError>;

    /// The single review with `id`, or [`StoreError::NotFound`].
    async fn get_by_id(&self, id: ReviewId) -> Result<Review, StoreError>;

    /// Reviews whose content contains `keyword` as a case-sensitive
    /// substring, each annotated with `keyword`.
    ///
    /// An empty match set is [`StoreError::NotFound`], never an empty vec.
    /// Implementations must pass `keyword` as a bound parameter.
    async fn search_by_keyword(&self, keyword: &str) -> Result<Vec<Review>, StoreError>;

    /// Replace the content of `id` inside one transaction.
    ///
    /// A missing id commits with [`UpdateOutcome::NoRowsAffected`].
    async fn update(&self, id: ReviewId, content: &str) -> Result<UpdateOutcome, StoreError>;
}

#[async_trait]
pub trait DictionaryStore: Send + Sync {
    /// Whether `keyword` is in the controlled vocabulary. A missing row is
    /// `Ok(false)`; only backend failures are errors.
    async fn exists(&self, keyword: &str) -> Result<bool, StoreError>;
}
