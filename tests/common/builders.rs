//! Test builders: a fluent way to stand up the router over fakes and drive
//! it without a socket.
//!
//! ```rust
//! let app = AppBuilder::new()
//!     .review(8888, "the foie gras was sublime")
//!     .keyword("foie gras")
//!     .build();
//! let response = app.get("/reviews?query=foie%20gras").await;
//! assert_status!(response, StatusCode::OK);
//! ```

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use review_core::{DictionaryStore, ReviewService, ReviewStore};
use review_web::{AppState, HandlebarsRenderer, Renderer};
use std::sync::Arc;
use tower::ServiceExt;

use super::fakes::{MemoryDictionary, MemoryReviewStore};

// ---------------------------------------------------------------------------
// AppBuilder
// ---------------------------------------------------------------------------

pub struct AppBuilder {
    reviews: Vec<(u32, String)>,
    words: Vec<String>,
    review_store: Option<Arc<dyn ReviewStore>>,
    dictionary: Option<Arc<dyn DictionaryStore>>,
    renderer: Option<Arc<dyn Renderer>>,
}

impl AppBuilder {
    pub fn new() -> Self {
        Self {
            reviews: Vec::new(),
            words: Vec::new(),
            review_store: None,
            dictionary: None,
            renderer: None,
        }
    }

    pub fn review(mut self, id: u32, content: &str) -> Self {
        self.reviews.push((id, content.to_string()));
        self
    }

    pub fn keyword(mut self, word: &str) -> Self {
        self.words.push(word.to_string());
        self
    }

    /// Replace the in-memory review store. `review()` rows are ignored.
    pub fn review_store(mut self, store: Arc<dyn ReviewStore>) -> Self {
        self.review_store = Some(store);
        self
    }

    /// Replace the in-memory dictionary. `keyword()` words are ignored.
    pub fn dictionary(mut self, dictionary: Arc<dyn DictionaryStore>) -> Self {
        self.dictionary = Some(dictionary);
        self
    }

    /// Defaults to the embedded Handlebars templates.
    pub fn renderer(mut self, renderer: Arc<dyn Renderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn build(self) -> TestApp {
        let memory = Arc::new(MemoryReviewStore::default());
        for (id, content) in &self.reviews {
            memory.insert(*id, content);
        }
        let reviews: Arc<dyn ReviewStore> = match self.review_store {
            Some(store) => store,
            None => memory.clone(),
        };
        let dictionary: Arc<dyn DictionaryStore> = match self.dictionary {
            Some(dictionary) => dictionary,
            None => {
                let words: Vec<&str> = self.words.iter().map(String::as_str).collect();
                Arc::new(MemoryDictionary::with(&words))
            }
        };
        let renderer: Arc<dyn Renderer> = match self.renderer {
            Some(renderer) => renderer,
            None => Arc::new(HandlebarsRenderer::embedded().expect("embedded templates compile")),
        };

        let service = ReviewService::new(reviews, dictionary);
        TestApp {
            router: review_web::router(AppState::new(service, renderer)),
            memory,
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// TestApp
// ---------------------------------------------------------------------------

pub struct TestApp {
    router: Router,
    /// The default in-memory store, populated by `AppBuilder::review`.
    pub memory: Arc<MemoryReviewStore>,
}

#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

impl TestApp {
    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, Body::empty()).await
    }

    pub async fn put(&self, uri: &str, body: &str) -> TestResponse {
        self.send(Method::PUT, uri, Body::from(body.to_string())).await
    }

    pub async fn send(&self, method: Method, uri: &str, body: Body) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(body)
            .expect("valid request");
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let content_type = response
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body collects")
            .to_bytes();
        TestResponse {
            status,
            content_type,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}
