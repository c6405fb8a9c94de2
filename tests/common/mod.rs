//! Shared setup for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use nourish_net::config::Config;
use nourish_net::infra::Database;
use nourish_net::services::Services;

pub const TEST_SECRET: &str = "integration-test-secret-32-chars-min";

/// Config for a private in-memory SQLite database.
///
/// The pool is pinned to one connection so every query sees the same
/// in-memory database.
pub fn test_config() -> Config {
    let mut config = Config::new("sqlite::memory:", TEST_SECRET).unwrap();
    config.database_max_connections = 1;
    config.database_min_connections = 1;
    config
}

/// Fresh migrated database.
pub async fn test_database() -> Arc<Database> {
    Arc::new(Database::connect(&test_config()).await.unwrap())
}

/// Services over a fresh migrated database.
pub async fn test_services() -> (Services, Arc<Database>) {
    let db = test_database().await;
    (Services::from_connection(db.get_connection(), test_config()), db)
}
