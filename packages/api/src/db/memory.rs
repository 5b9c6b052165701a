//! In-memory [`Repository`] with the same uniqueness rules as the SQL schema.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::Repository;
use crate::error::Error;
use crate::models::{Note, User};

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    notes: Vec<Note>,
}

/// Cloning shares the underlying tables.
#[derive(Clone, Default)]
pub struct MemoryRepository {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn user_count(&self) -> usize {
        self.tables.read().await.users.len()
    }
}

#[async_trait]
impl Repository for MemoryRepository {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, Error> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, Error> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn insert_user(&self, email: &str, password_hash: &str) -> Result<Option<User>, Error> {
        let mut tables = self.tables.write().await;
        if tables.users.iter().any(|u| u.email == email) {
            return Ok(None);
        }
        let user = User::new(email, password_hash);
        tables.users.push(user.clone());
        Ok(Some(user))
    }

    async fn list_notes(&self, user_id: Uuid) -> Result<Vec<Note>, Error> {
        let tables = self.tables.read().await;
        Ok(tables
            .notes
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn insert_note(&self, user_id: Uuid, title: &str, content: &str) -> Result<Note, Error> {
        let mut tables = self.tables.write().await;
        let note = Note::new(user_id, title, content);
        tables.notes.push(note.clone());
        Ok(note)
    }
}
