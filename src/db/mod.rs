pub mod pool;
pub mod tweets;
pub mod users;

pub use pool::create_pool;
pub use tweets::TweetStore;
pub use users::UserStore;

use std::path::Path;

use sqlx::SqlitePool;

use crate::error::Result;

/// Database handle type (a pool is already cheap to clone and share)
pub type Db = SqlitePool;

/// Open the database at the given URL and bring its schema up to date
pub async fn open_database(database_url: &str) -> Result<Db> {
    tracing::info!("Opening database at: {}", database_url);

    // Create parent directory of a file-backed database if it doesn't exist
    if let Some(path) = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))
        .filter(|p| !p.contains(":memory:"))
    {
        let path = path.split('?').next().unwrap_or(path);
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    tracing::error!("Failed to create database directory: {}", e);
                    e
                })?;
            }
        }
    }

    let pool = create_pool(database_url).await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database initialized successfully");

    Ok(pool)
}

/// Open a fresh, migrated in-memory database
pub async fn open_in_memory() -> Result<Db> {
    open_database("sqlite::memory:").await
}
