use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use review_core::{ErrorKind, ServiceError};
use thiserror::Error;
use tracing::error;

use crate::render::RenderError;

/// Everything a handler can fail with. The body of the response is the
/// error's own text as plain text.
#[derive(Error, Debug)]
pub enum WebError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl WebError {
    pub fn status(&self) -> StatusCode {
        match self {
            WebError::Service(err) => match err.kind() {
                ErrorKind::InvalidId => StatusCode::BAD_REQUEST,
                ErrorKind::NotFound | ErrorKind::KeywordRejected => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                ErrorKind::MalformedPayload | ErrorKind::Io => StatusCode::INTERNAL_SERVER_ERROR,
            },
            WebError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let WebError::Render(err) = &self {
            error!(error = %err, "render failed");
        }
        (status, self.to_string()).into_response()
    }
}
