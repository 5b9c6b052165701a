//! # Session (de)serializer
//!
//! A session holds one value: the signed-in user's id under [`SESSION_USER_ID_KEY`].
//! [`serialize_user`] and [`deserialize_user`] convert between that id and a full
//! [`User`]; the remaining helpers apply them to a `tower_sessions::Session`.
//!
//! A user that can no longer be loaded makes the request anonymous, not an error.

use tower_sessions::Session;
use uuid::Uuid;

use crate::db::Repository;
use crate::error::Error;
use crate::models::User;

/// Key for storing user ID in session.
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// The value persisted in the session for `user`.
pub fn serialize_user(user: &User) -> String {
    user.id.to_string()
}

/// Re-fetch the user a session id refers to.
pub async fn deserialize_user(repo: &dyn Repository, id: &str) -> Result<Option<User>, Error> {
    let Ok(id) = Uuid::parse_str(id) else {
        return Ok(None);
    };
    repo.find_user_by_id(id).await
}

/// Sign `user` in on this session. The session id is cycled first.
pub async fn establish(session: &Session, user: &User) -> Result<(), Error> {
    session.cycle_id().await?;
    session.insert(SESSION_USER_ID_KEY, serialize_user(user)).await?;
    Ok(())
}

/// The user this session is signed in as, if any.
pub async fn current_user(session: &Session, repo: &dyn Repository) -> Result<Option<User>, Error> {
    let user_id: Option<String> = session.get(SESSION_USER_ID_KEY).await?;
    match user_id {
        Some(id) => deserialize_user(repo, &id).await,
        None => Ok(None),
    }
}

/// Delete the session record and expire its cookie.
pub async fn destroy(session: &Session) -> Result<(), Error> {
    session.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tower_sessions::MemoryStore;

    use super::*;
    use crate::db::MemoryRepository;

    fn new_session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    #[tokio::test]
    async fn test_round_trip_through_session() {
        let repo = MemoryRepository::new();
        let user = repo.insert_user("a@x.com", "h").await.unwrap().unwrap();
        let session = new_session();

        assert!(current_user(&session, &repo).await.unwrap().is_none());

        establish(&session, &user).await.unwrap();
        let loaded = current_user(&session, &repo).await.unwrap().unwrap();
        assert_eq!(loaded.id, user.id);

        destroy(&session).await.unwrap();
        assert!(current_user(&session, &repo).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_vanished_user_is_anonymous() {
        let repo = MemoryRepository::new();
        let ghost = User::new("ghost@x.com", "h");
        let session = new_session();

        establish(&session, &ghost).await.unwrap();
        assert!(current_user(&session, &repo).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_garbage_id_is_anonymous() {
        let repo = MemoryRepository::new();
        assert!(deserialize_user(&repo, "not-a-uuid").await.unwrap().is_none());
    }

    #[test]
    fn test_serialize_stores_only_the_id() {
        let user = User::new("a@x.com", "h");
        assert_eq!(serialize_user(&user), user.id.to_string());
    }
}
