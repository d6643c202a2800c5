//! food-review
//!
//! A small HTTP service over a table of restaurant reviews: list them, fetch
//! one, search by a dish keyword that must first appear in a controlled
//! dictionary, and replace a review's text. This crate re-exports the three
//! layers so that integration tests and benches can import them directly.
//!
//! # Architecture
//!
//! ```text
//! review-web ──► review-core (ReviewService) ──► review-store (SQLite)
//!     │                    │
//!     └── Renderer         └── ReviewStore / DictionaryStore traits
//! ```

pub use review_core;
pub use review_store;
pub use review_web;
