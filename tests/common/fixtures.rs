//! Sample data and throwaway SQLite databases.
//!
//! [`SqliteFixture`] creates both databases under a fresh temp directory and
//! seeds them through a plain sqlx pool, so the stores under test see exactly
//! what a previously populated deployment would. The directory is removed
//! when the fixture drops.

use review_core::config::DatabaseConfig;
use review_store::{Database, SqliteDictionaryStore, SqliteReviewStore};
use tempfile::TempDir;

pub const FOIE_GRAS: &str = "foie gras";

/// A small review table in the shape the service ships with.
pub const SAMPLE_REVIEWS: &[(u32, &str)] = &[
    (1, "Gordan Ramsey is crying"),
    (2, "the tiramisu was dense and perfect"),
    (3, "Foie Gras on the menu, but I skipped it"),
    (8888, "the foie gras was sublime"),
    (9999, "this restaurant sucks"),
];

pub const SAMPLE_DICTIONARY: &[&str] = &["foie gras", "tiramisu", "ramen", "soup"];

/// `count` reviews, every seventh mentioning foie gras.
pub fn review_corpus(count: u32) -> Vec<(u32, String)> {
    (1..=count)
        .map(|id| {
            let content = if id % 7 == 0 {
                format!("review {id}: the foie gras was rich")
            } else {
                format!("review {id}: service was slow, the bread was stale")
            };
            (id, content)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// SqliteFixture
// ---------------------------------------------------------------------------

pub struct SqliteFixture {
    pub config: DatabaseConfig,
    pub reviews: SqliteReviewStore,
    pub dictionary: SqliteDictionaryStore,
    review_db: Database,
    dictionary_db: Database,
    _dir: TempDir,
}

impl SqliteFixture {
    pub async fn empty() -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = DatabaseConfig {
            review_url: format!("sqlite://{}", dir.path().join("review.db").display()),
            dictionary_url: format!("sqlite://{}", dir.path().join("dictionary.db").display()),
            ..DatabaseConfig::default()
        };
        let review_db = Database::open_reviews(&config.review_url, &config)
            .await
            .expect("open review db");
        let dictionary_db = Database::open_dictionary(&config.dictionary_url, &config)
            .await
            .expect("open dictionary db");

        Self {
            reviews: SqliteReviewStore::new(review_db.pool().clone()),
            dictionary: SqliteDictionaryStore::new(dictionary_db.pool().clone()),
            config,
            review_db,
            dictionary_db,
            _dir: dir,
        }
    }

    pub async fn seeded(reviews: &[(u32, &str)], words: &[&str]) -> Self {
        let fixture = Self::empty().await;
        for (id, content) in reviews {
            fixture.insert_review(*id, content).await;
        }
        for word in words {
            fixture.insert_keyword(word).await;
        }
        fixture
    }

    pub async fn sample() -> Self {
        Self::seeded(SAMPLE_REVIEWS, SAMPLE_DICTIONARY).await
    }

    pub async fn insert_review(&self, id: u32, content: &str) {
        sqlx::query("INSERT INTO review (review_id, review) VALUES (?1, ?2)")
            .bind(id)
            .bind(content)
            .execute(self.review_db.pool())
            .await
            .expect("insert review");
    }

    pub async fn insert_keyword(&self, word: &str) {
        sqlx::query("INSERT INTO dictionary (keyword) VALUES (?1)")
            .bind(word)
            .execute(self.dictionary_db.pool())
            .await
            .expect("insert keyword");
    }

    /// Read a review's content straight from the table, bypassing the store.
    pub async fn raw_content(&self, id: u32) -> Option<String> {
        sqlx::query_scalar::<_, Option<String>>("SELECT review FROM review WHERE review_id = ?1")
            .bind(id)
            .fetch_optional(self.review_db.pool())
            .await
            .expect("select review")
            .flatten()
    }
}
