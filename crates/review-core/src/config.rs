//! Configuration types for food-review.
//!
//! [`Config::load`] layers, lowest priority first: the embedded defaults, an
//! optional TOML file, and `FOOD_REVIEW_*` environment variables (nested
//! keys separated by `__`, e.g. `FOOD_REVIEW_SERVER__LISTEN_ADDR`).
//! [`Config::defaults`] returns the embedded defaults without touching the
//! filesystem or environment (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[server]
listen_addr = "0.0.0.0:8080"

[database]
review_url      = "sqlite://db/review.db"
dictionary_url  = "sqlite://db/dictionary.db"
max_connections = 5
busy_timeout_ms = 5000

[templates]
"#;

const ENV_PREFIX: &str = "FOOD_REVIEW";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub templates: TemplatesConfig,
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

/// `[database]` section. Both stores share the pool settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_review_url")]
    pub review_url: String,
    #[serde(default = "default_dictionary_url")]
    pub dictionary_url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// How long a writer waits on a locked database before failing.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

/// `[templates]` section. With no `dir`, the templates compiled into the
/// binary are used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemplatesConfig {
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

fn default_listen_addr() -> String { "0.0.0.0:8080".to_string() }
fn default_review_url() -> String { "sqlite://db/review.db".to_string() }
fn default_dictionary_url() -> String { "sqlite://db/dictionary.db".to_string() }
fn default_max_connections() -> u32 { 5 }
fn default_busy_timeout_ms() -> u64 { 5000 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            review_url: default_review_url(),
            dictionary_url: default_dictionary_url(),
            max_connections: default_max_connections(),
            busy_timeout_ms: default_busy_timeout_ms(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the embedded defaults, then `path` if given (it must exist),
    /// then environment overrides.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml));

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
