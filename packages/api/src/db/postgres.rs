//! PostgreSQL-backed [`Repository`].

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::Repository;
use crate::error::Error;
use crate::models::{Note, User};

#[derive(Debug, Clone)]
pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository for PgRepository {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, Error> {
        let user = sqlx::query_as("SELECT id, email, password, created_at FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, Error> {
        let user = sqlx::query_as("SELECT id, email, password, created_at FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn insert_user(&self, email: &str, password_hash: &str) -> Result<Option<User>, Error> {
        // A concurrent registration that wins the unique index leaves us with no row.
        let user = sqlx::query_as(
            "INSERT INTO users (email, password) VALUES ($1, $2)
             ON CONFLICT (email) DO NOTHING
             RETURNING id, email, password, created_at",
        )
        .bind(email)
        .bind(password_hash)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn list_notes(&self, user_id: Uuid) -> Result<Vec<Note>, Error> {
        let notes = sqlx::query_as(
            "SELECT id, user_id, title, content, created_at FROM notes
             WHERE user_id = $1 ORDER BY created_at, id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(notes)
    }

    async fn insert_note(&self, user_id: Uuid, title: &str, content: &str) -> Result<Note, Error> {
        let note = sqlx::query_as(
            "INSERT INTO notes (user_id, title, content) VALUES ($1, $2, $3)
             RETURNING id, user_id, title, content, created_at",
        )
        .bind(user_id)
        .bind(title)
        .bind(content)
        .fetch_one(&self.pool)
        .await?;
        Ok(note)
    }
}
