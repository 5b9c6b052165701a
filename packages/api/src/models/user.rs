//! # User model
//!
//! A row of the `users` table:
//!
//! - `id` — primary key (`UUID v4`), the only value ever written into a session.
//! - `email` — unique across all users; the login name.
//! - `password` — Argon2 PHC string, never the plaintext.
//! - `created_at` — audit timestamp.
//!
//! Users are created at registration and only read afterwards.

use std::fmt;

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Full user record from the database.
#[derive(Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Build a fresh record. Used by the in-memory repository; Postgres fills
    /// `id` and `created_at` itself.
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            password: password_hash.into(),
            created_at: Utc::now(),
        }
    }
}

// The hash stays out of logs.
impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("created_at", &self.created_at)
            .finish_non_exhaustive()
    }
}
