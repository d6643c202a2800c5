use std::sync::Arc;

use review_core::ReviewService;

use crate::render::Renderer;

/// Handles shared by every request. Built once in [`serve`](crate::serve)
/// (or by a test) and cloned into each handler by axum.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ReviewService>,
    pub renderer: Arc<dyn Renderer>,
}

impl AppState {
    pub fn new(service: ReviewService, renderer: Arc<dyn Renderer>) -> Self {
        Self {
            service: Arc::new(service),
            renderer,
        }
    }
}
