//! Error type shared by the persistence and authentication layers.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("password hash error: {0}")]
    PasswordHash(String),

    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
