//! # Database module — the persistence accessor
//!
//! Every handler reaches storage through the [`Repository`] trait, held once per
//! process as an `Arc<dyn Repository>` in the web crate's application state.
//! Handlers never cache what it returns; each request asks again.
//!
//! ## Implementations
//!
//! - [`PgRepository`] — PostgreSQL through a shared `sqlx` pool. Each method issues
//!   a single parameterised statement; nothing spans a transaction.
//! - [`MemoryRepository`] — `RwLock`-guarded tables for tests and database-less runs.
//!
//! ## Re-exports
//!
//! - [`connect`] — opens the pool.
//! - [`run_migrations`] — applies the embedded schema in `migrations/`.

mod memory;
mod pool;
mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Error;
use crate::models::{Note, User};

pub use memory::MemoryRepository;
pub use pool::{connect, run_migrations};
pub use postgres::PgRepository;

/// Storage operations needed by the application.
#[async_trait]
pub trait Repository: Send + Sync {
    /// Exact-match lookup by email.
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, Error>;

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, Error>;

    /// Create a user. Returns `Ok(None)` when the email is already taken.
    async fn insert_user(&self, email: &str, password_hash: &str) -> Result<Option<User>, Error>;

    /// Notes owned by `user_id`, oldest first.
    async fn list_notes(&self, user_id: Uuid) -> Result<Vec<Note>, Error>;

    async fn insert_note(&self, user_id: Uuid, title: &str, content: &str) -> Result<Note, Error>;
}
