//! HTML rendering for food-review.
//!
//! Handlers never format HTML themselves; they hand a template name and a
//! JSON data value to a [`Renderer`]. The production renderer is
//! [`HandlebarsRenderer`]. Its default templates are embedded in the binary
//! via [`include_str!`] so the server works without any files on disk;
//! [`HandlebarsRenderer::from_dir`] loads every `*.html` file in a directory
//! instead.
//!
//! The renderer is built once at startup and shared by handle through
//! [`AppState`](crate::AppState).

use handlebars::Handlebars;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const REVIEWS: &str = "reviews.html";
pub const REVIEW: &str = "review.html";
pub const REVIEWS_KEYWORD: &str = "reviews_keyword.html";
pub const EDIT: &str = "edit.html";

const EMBEDDED: &[(&str, &str)] = &[
    (REVIEWS, include_str!("templates/reviews.html")),
    (REVIEW, include_str!("templates/review.html")),
    (REVIEWS_KEYWORD, include_str!("templates/reviews_keyword.html")),
    (EDIT, include_str!("templates/edit.html")),
];

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error(transparent)]
    Template(#[from] handlebars::TemplateError),
    #[error(transparent)]
    Render(#[from] handlebars::RenderError),
    #[error("reading templates from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no *.html templates found in {}", .0.display())]
    Empty(PathBuf),
    #[error("serializing template data: {0}")]
    Data(#[from] serde_json::Error),
}

/// Turns a template name and a data value into response bytes.
pub trait Renderer: Send + Sync {
    fn render(&self, template: &str, data: &Value) -> Result<String, RenderError>;
}

pub struct HandlebarsRenderer {
    registry: Handlebars<'static>,
}

impl HandlebarsRenderer {
    /// Renderer backed by the templates compiled into the binary.
    pub fn embedded() -> Result<Self, RenderError> {
        let mut registry = strict_registry();
        for (name, source) in EMBEDDED {
            registry.register_template_string(name, source)?;
        }
        Ok(Self { registry })
    }

    /// Renderer backed by every `*.html` file directly inside `dir`. Each
    /// template is registered under its file name, e.g. `reviews.html`.
    pub fn from_dir(dir: &Path) -> Result<Self, RenderError> {
        let io_err = |source| RenderError::Io {
            path: dir.to_path_buf(),
            source,
        };

        let mut registry = strict_registry();
        let mut loaded = 0usize;
        for entry in std::fs::read_dir(dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("html") {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let source = std::fs::read_to_string(&path).map_err(|source| RenderError::Io {
                path: path.clone(),
                source,
            })?;
            registry.register_template_string(name, source)?;
            debug!(template = name, "registered template");
            loaded += 1;
        }

        if loaded == 0 {
            return Err(RenderError::Empty(dir.to_path_buf()));
        }
        Ok(Self { registry })
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.registry.has_template(name)
    }
}

impl Renderer for HandlebarsRenderer {
    fn render(&self, template: &str, data: &Value) -> Result<String, RenderError> {
        Ok(self.registry.render(template, data)?)
    }
}

// Strict mode turns a reference to a missing field into a render error
// instead of silently printing nothing.
fn strict_registry() -> Handlebars<'static> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    registry
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
