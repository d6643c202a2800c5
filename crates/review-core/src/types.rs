//! Core types for review-core.
//!
//! This module defines the data shared across every layer: the persisted
//! [`Review`], its [`ReviewId`], the partial [`EditPayload`] parsed from a
//! write body, and the [`UpdateOutcome`] reported by a store update.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ReviewId
// ---------------------------------------------------------------------------

/// Storage-assigned review identifier.
///
/// Identifiers are 32-bit unsigned integers. They are never mutated once a
/// review exists; only the content of a review changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewId(pub u32);

/// Returned by [`ReviewId::parse`] when the raw path segment is not a
/// non-negative integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid review id {0:?}")]
pub struct InvalidId(pub String);

impl ReviewId {
    /// Parse a raw path segment.
    ///
    /// Only a non-empty run of ASCII digits that fits in `u32` is accepted.
    /// Signs, fractions, whitespace and path separators are all rejected,
    /// so `"-1"`, `"+1"`, `"1.2"`, `"abc"` and `"1/1"` fail.
    pub fn parse(raw: &str) -> Result<Self, InvalidId> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidId(raw.to_string()));
        }
        raw.parse::<u32>()
            .map(ReviewId)
            .map_err(|_| InvalidId(raw.to_string()))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ReviewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ReviewId {
    fn from(id: u32) -> Self {
        ReviewId(id)
    }
}

// ---------------------------------------------------------------------------
// Review
// ---------------------------------------------------------------------------

/// A persisted review.
///
/// `keyword` is a transient annotation set only on search results; it is
/// never written back to storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    #[serde(rename = "review_id")]
    pub id: ReviewId,
    #[serde(rename = "review")]
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

impl Review {
    pub fn new(id: impl Into<ReviewId>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            keyword: None,
        }
    }

    /// Annotate this review with the keyword that matched it.
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }
}

// ---------------------------------------------------------------------------
// Write payload
// ---------------------------------------------------------------------------

/// The content-only partial review carried by a write body.
///
/// The body must be a JSON object with a string `review` field. Any other
/// keys, `review_id` included, are ignored: the identifier always comes
/// from the request path.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EditPayload {
    #[serde(rename = "review")]
    pub content: String,
}

impl EditPayload {
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        // Derived struct impls also accept a JSON array, so check the shape
        // before binding fields.
        let value: serde_json::Value = serde_json::from_slice(body)?;
        if !value.is_object() {
            return Err(serde::de::Error::custom("edit payload must be a JSON object"));
        }
        serde_json::from_value(value)
    }
}

// ---------------------------------------------------------------------------
// UpdateOutcome
// ---------------------------------------------------------------------------

/// What a committed update actually touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Exactly one row was rewritten.
    Applied,
    /// The transaction committed but no row carried the target id.
    NoRowsAffected,
}

impl UpdateOutcome {
    pub fn from_rows_affected(rows: u64) -> Self {
        if rows == 0 {
            UpdateOutcome::NoRowsAffected
        } else {
            UpdateOutcome::Applied
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
