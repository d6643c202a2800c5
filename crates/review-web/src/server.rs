use std::sync::Arc;

use anyhow::Context;
use review_core::config::{Config, TemplatesConfig};
use review_core::ReviewService;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::render::{HandlebarsRenderer, Renderer};
use crate::routes::router;
use crate::state::AppState;

/// Open both databases, build the renderer, and serve until Ctrl-C.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let (reviews, dictionary) = review_store::connect(&config.database).await?;
    let service = ReviewService::new(Arc::new(reviews), Arc::new(dictionary));
    let renderer = build_renderer(&config.templates)?;
    let app = router(AppState::new(service, renderer));

    let listener = TcpListener::bind(&config.server.listen_addr)
        .await
        .with_context(|| format!("binding {}", config.server.listen_addr))?;
    info!(addr = %listener.local_addr()?, "food-review listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("shut down");
    Ok(())
}

pub fn build_renderer(config: &TemplatesConfig) -> anyhow::Result<Arc<dyn Renderer>> {
    let renderer = match &config.dir {
        Some(dir) => {
            info!(dir = %dir.display(), "loading templates");
            HandlebarsRenderer::from_dir(dir)?
        }
        None => HandlebarsRenderer::embedded()?,
    };
    Ok(Arc::new(renderer))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "could not listen for ctrl-c; shutting down");
    }
}
