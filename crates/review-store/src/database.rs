//! Connection pool and schema bootstrap for the SQLite stores.
//!
//! [`Database::open`] creates the database file (and its parent directory)
//! if missing, switches the journal to WAL so readers never block on the
//! single writer, sets the busy timeout used to queue concurrent writers,
//! and runs the table's init statement.

use anyhow::Context;
use review_core::config::DatabaseConfig;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

pub const REVIEW_SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS
    review (
        review_id INTEGER PRIMARY KEY,
        review TEXT
    )
"#;

pub const DICTIONARY_SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS
    dictionary (
        keyword TEXT
    )
"#;

/// An open SQLite pool with its schema in place.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub async fn open(
        url: &str,
        config: &DatabaseConfig,
        init_statement: &str,
    ) -> anyhow::Result<Self> {
        anyhow::ensure!(
            url.starts_with("sqlite:"),
            "invalid database url {url:?}: only sqlite: urls are supported"
        );
        let options = SqliteConnectOptions::from_str(url)
            .with_context(|| format!("invalid database url {url:?}"))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_millis(config.busy_timeout_ms));

        if let Some(parent) = options.get_filename().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await
            .with_context(|| format!("connecting to {url}"))?;

        sqlx::query(init_statement)
            .execute(&pool)
            .await
            .with_context(|| format!("initialising schema for {url}"))?;

        info!(url, "database ready");
        Ok(Self { pool })
    }

    pub async fn open_reviews(url: &str, config: &DatabaseConfig) -> anyhow::Result<Self> {
        Self::open(url, config, REVIEW_SCHEMA).await
    }

    pub async fn open_dictionary(url: &str, config: &DatabaseConfig) -> anyhow::Result<Self> {
        Self::open(url, config, DICTIONARY_SCHEMA).await
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
