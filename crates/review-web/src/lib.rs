//! review-web: the HTTP boundary of food-review.
//!
//! ```text
//!   request ──► router ──► handler ──► ReviewService ──► stores
//!                             │
//!                             └──► Renderer ──► text/html
//! ```
//!
//! Failures become plain-text responses:
//!
//! | Condition | Status |
//! |-----------|--------|
//! | id is not a non-negative integer | 400 |
//! | no such id, keyword not in dictionary, no match | 422 |
//! | malformed edit payload, store failure, render failure | 500 |

pub mod error;
pub mod handlers;
pub mod render;
pub mod routes;
pub mod server;
pub mod state;

pub use error::WebError;
pub use render::{HandlebarsRenderer, RenderError, Renderer};
pub use routes::router;
pub use server::{build_renderer, serve};
pub use state::AppState;
