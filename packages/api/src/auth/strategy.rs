//! Email + password authentication strategy.
//!
//! [`authenticate`] yields exactly one of: an authenticated user, a rejection, or an
//! error. The rejection reason exists for logging; callers must not show it.

use tracing::debug;

use super::password::spawn_verify;
use crate::db::Repository;
use crate::error::Error;
use crate::models::User;

#[derive(Debug)]
pub enum AuthOutcome {
    Authenticated(User),
    Rejected(Rejection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    UserNotFound,
    BadPassword,
}

/// Look the user up by exact email and check the password against the stored hash.
///
/// A failed lookup or a malformed stored hash is an `Err`, never a rejection.
pub async fn authenticate(
    repo: &dyn Repository,
    email: &str,
    password: &str,
) -> Result<AuthOutcome, Error> {
    let Some(user) = repo.find_user_by_email(email).await? else {
        debug!(email, "login rejected: user not found");
        return Ok(AuthOutcome::Rejected(Rejection::UserNotFound));
    };

    if spawn_verify(password.to_string(), user.password.clone()).await? {
        Ok(AuthOutcome::Authenticated(user))
    } else {
        debug!(email, "login rejected: bad password");
        Ok(AuthOutcome::Rejected(Rejection::BadPassword))
    }
}
