//! Error taxonomy.
//!
//! Stores report [`StoreError`]; they never swallow a backend failure. The
//! service is the only layer that reclassifies store results into the
//! domain-level [`ServiceError`], and the HTTP layer maps an [`ErrorKind`]
//! to a status code.

use crate::types::{InvalidId, ReviewId};

/// Boxed backend error. Its `Display` text is what clients see on a 500.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

// ---------------------------------------------------------------------------
// Store errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The query ran but matched nothing where something was required.
    #[error("no rows in result set")]
    NotFound,
    /// Any failure of the backing engine.
    #[error("{0}")]
    Io(#[source] BoxError),
}

impl StoreError {
    pub fn io(err: impl Into<BoxError>) -> Self {
        StoreError::Io(err.into())
    }
}

// ---------------------------------------------------------------------------
// Service errors
// ---------------------------------------------------------------------------

/// Coarse classification consumed by the HTTP boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidId,
    NotFound,
    KeywordRejected,
    MalformedPayload,
    Io,
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Invalid ID")]
    InvalidId(#[from] InvalidId),
    #[error("No Review with this ID")]
    ReviewNotFound(ReviewId),
    #[error("Keyword not in dictionary")]
    KeywordRejected(String),
    #[error("No review you are looking for")]
    NoMatches(String),
    #[error("{0}")]
    MalformedPayload(#[source] serde_json::Error),
    #[error("{0}")]
    Io(#[source] BoxError),
}

impl ServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::InvalidId(_) => ErrorKind::InvalidId,
            ServiceError::ReviewNotFound(_) | ServiceError::NoMatches(_) => ErrorKind::NotFound,
            ServiceError::KeywordRejected(_) => ErrorKind::KeywordRejected,
            ServiceError::MalformedPayload(_) => ErrorKind::MalformedPayload,
            ServiceError::Io(_) => ErrorKind::Io,
        }
    }
}
