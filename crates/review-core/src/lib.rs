//! review-core: food-review core library.
//!
//! This crate holds everything between the HTTP boundary and the database:
//! the shared types, the store capability traits, the error taxonomy and the
//! [`ReviewService`] that sequences the stores.
//!
//! # Architecture
//!
//! ```text
//! Handler ──► ReviewService ──► DictionaryStore
//!                   │
//!                   └─────────► ReviewStore
//! ```
//!
//! Stores are consumed through [`store::ReviewStore`] and
//! [`store::DictionaryStore`] so that SQLite backends and test doubles are
//! interchangeable.

pub mod config;
pub mod error;
pub mod service;
pub mod store;
pub mod types;

pub use error::{ErrorKind, ServiceError, StoreError};
pub use service::ReviewService;
pub use store::{DictionaryStore, ReviewStore};
pub use types::{EditPayload, InvalidId, Review, ReviewId, UpdateOutcome};
