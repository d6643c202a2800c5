//! Route handlers. Each one calls a single service operation and hands the
//! result to the renderer; status mapping lives in [`WebError`].

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
};
use serde::Serialize;
use tracing::debug;

use crate::error::WebError;
use crate::render::{self, RenderError, Renderer};
use crate::state::AppState;

pub const GREETING: &str = "hello world";

/// First `query` value in a query string. Repeats are ignored rather than
/// rejected.
fn first_query(pairs: Vec<(String, String)>) -> Option<String> {
    pairs
        .into_iter()
        .find_map(|(key, value)| (key == "query").then_some(value))
}

pub async fn index() -> &'static str {
    GREETING
}

/// `GET /reviews`, or the keyword search when `?query=` is present.
pub async fn list_reviews(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Html<String>, WebError> {
    match first_query(pairs) {
        Some(keyword) => {
            let hits = state.service.search_by_keyword(&keyword).await?;
            debug!(keyword, hits = hits.len(), "search matched");
            render(state.renderer.as_ref(), render::REVIEWS_KEYWORD, &hits)
        }
        None => {
            let reviews = state.service.fetch_all().await?;
            render(state.renderer.as_ref(), render::REVIEWS, &reviews)
        }
    }
}

pub async fn get_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, WebError> {
    let review = state.service.fetch_by_id(&id).await?;
    render(state.renderer.as_ref(), render::REVIEW, &review)
}

pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, WebError> {
    let review = state.service.fetch_by_id(&id).await?;
    render(state.renderer.as_ref(), render::EDIT, &review)
}

/// `PUT /reviews/{id}`. The body is read raw so that payload errors are
/// classified by the service rather than rejected by an extractor.
pub async fn edit_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<StatusCode, WebError> {
    state.service.edit_content(&id, &body).await?;
    Ok(StatusCode::OK)
}

fn render<T: Serialize>(
    renderer: &dyn Renderer,
    template: &str,
    data: &T,
) -> Result<Html<String>, WebError> {
    let value = serde_json::to_value(data).map_err(RenderError::from)?;
    Ok(Html(renderer.render(template, &value)?))
}
