use std::path::PathBuf;

use clap::Parser;
use review_core::config::Config;

#[derive(Parser)]
#[command(name = "food-review", about = "Food reviews over HTTP")]
struct Cli {
    /// TOML config file layered over the built-in defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Address to listen on, e.g. 127.0.0.1:8080.
    #[arg(long)]
    listen: Option<String>,

    /// Directory of *.html templates to use instead of the embedded ones.
    #[arg(long)]
    templates: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(listen) = cli.listen {
        config.server.listen_addr = listen;
    }
    if let Some(dir) = cli.templates {
        config.templates.dir = Some(dir);
    }
    tracing::debug!(?config, "configuration loaded");

    review_web::serve(config).await
}
