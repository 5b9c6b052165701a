//! Access-control gate for protected routes.

use api::User;
use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Response},
};
use tower_sessions::Session;

use crate::error::FailWith;
use crate::routes::redirect;
use crate::state::AppState;

/// The signed-in user, rehydrated from the session for this request.
///
/// Extracting it from an anonymous request redirects to `/login`; the handler
/// never runs.
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        match api::auth::current_user(&session, state.repo.as_ref())
            .await
            .fail_with("Session lookup failed")
        {
            Ok(Some(user)) => Ok(CurrentUser(user)),
            Ok(None) => Err(redirect("/login")),
            Err(e) => Err(e.into_response()),
        }
    }
}
