//! Review service: orchestration over the review and dictionary stores.
//!
//! The service owns input validation and its ordering:
//!
//! | Operation | Checked first | Then |
//! |-----------|---------------|------|
//! | [`fetch_all`](ReviewService::fetch_all) | nothing | review store |
//! | [`fetch_by_id`](ReviewService::fetch_by_id) | id shape | review store |
//! | [`search_by_keyword`](ReviewService::search_by_keyword) | dictionary membership | review store |
//! | [`edit_content`](ReviewService::edit_content) | id shape, payload shape | review store (one transaction) |
//!
//! A rejected input never reaches a store.

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::error::{ServiceError, StoreError};
use crate::store::{DictionaryStore, ReviewStore};
use crate::types::{EditPayload, Review, ReviewId, UpdateOutcome};

#[derive(Clone)]
pub struct ReviewService {
    reviews: Arc<dyn ReviewStore>,
    dictionary: Arc<dyn DictionaryStore>,
}

impl ReviewService {
    pub fn new(reviews: Arc<dyn ReviewStore>, dictionary: Arc<dyn DictionaryStore>) -> Self {
        Self {
            reviews,
            dictionary,
        }
    }

    pub async fn fetch_all(&self) -> Result<Vec<Review>, ServiceError> {
        debug!("listing all reviews");
        self.reviews.list_all().await.map_err(|e| match e {
            StoreError::NotFound => io_error(e),
            StoreError::Io(inner) => log_io(ServiceError::Io(inner)),
        })
    }

    pub async fn fetch_by_id(&self, raw_id: &str) -> Result<Review, ServiceError> {
        let id = parse_id(raw_id)?;
        debug!(%id, "fetching review");
        self.reviews.get_by_id(id).await.map_err(|e| match e {
            StoreError::NotFound => ServiceError::ReviewNotFound(id),
            StoreError::Io(inner) => log_io(ServiceError::Io(inner)),
        })
    }

    pub async fn search_by_keyword(&self, keyword: &str) -> Result<Vec<Review>, ServiceError> {
        let known = match self.dictionary.exists(keyword).await {
            Ok(known) => known,
            Err(StoreError::NotFound) => false,
            Err(StoreError::Io(inner)) => return Err(log_io(ServiceError::Io(inner))),
        };
        if !known {
            warn!(keyword, "keyword not in dictionary");
            return Err(ServiceError::KeywordRejected(keyword.to_string()));
        }

        debug!(keyword, "searching reviews");
        self.reviews
            .search_by_keyword(keyword)
            .await
            .map_err(|e| match e {
                StoreError::NotFound => ServiceError::NoMatches(keyword.to_string()),
                StoreError::Io(inner) => log_io(ServiceError::Io(inner)),
            })
    }

    /// Replace the content of a review with the `review` field of `body`.
    ///
    /// A missing id is not an error: the transaction commits and the result
    /// is [`UpdateOutcome::NoRowsAffected`].
    pub async fn edit_content(
        &self,
        raw_id: &str,
        body: &[u8],
    ) -> Result<UpdateOutcome, ServiceError> {
        let id = parse_id(raw_id)?;
        let payload = EditPayload::from_slice(body).map_err(|e| {
            warn!(%id, error = %e, "malformed edit payload");
            ServiceError::MalformedPayload(e)
        })?;

        let outcome = self
            .reviews
            .update(id, &payload.content)
            .await
            .map_err(|e| match e {
                StoreError::NotFound => io_error(e),
                StoreError::Io(inner) => log_io(ServiceError::Io(inner)),
            })?;

        if outcome == UpdateOutcome::NoRowsAffected {
            warn!(%id, "edit committed but no review carries this id");
        } else {
            debug!(%id, "review content updated");
        }
        Ok(outcome)
    }
}

fn parse_id(raw: &str) -> Result<ReviewId, ServiceError> {
    ReviewId::parse(raw).map_err(|e| {
        warn!(raw, "rejected review id");
        ServiceError::from(e)
    })
}

fn io_error(err: StoreError) -> ServiceError {
    log_io(ServiceError::Io(Box::new(err)))
}

fn log_io(err: ServiceError) -> ServiceError {
    error!(error = %err, "review store failure");
    err
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
