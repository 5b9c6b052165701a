//! Route handlers.
//!
//! | Route | Method | Gate | Outcome |
//! |-------|--------|------|---------|
//! | `/` | GET | — | landing page |
//! | `/login` | GET | — | login form |
//! | `/login` | POST | — | `/notes` on success, `/login` otherwise |
//! | `/register` | GET | — | register form |
//! | `/register` | POST | — | `/notes` on success, `/login` if the email is taken |
//! | `/logout` | GET | — | always `/` |
//! | `/notes` | GET | [`CurrentUser`] | the user's notes |
//! | `/notes` | POST | [`CurrentUser`] | back to `/notes` |
//!
//! POST bodies may be urlencoded forms or JSON.

use api::auth::{self, AuthOutcome};
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::{error, info};

use crate::auth::CurrentUser;
use crate::error::{AppError, FailWith};
use crate::extract::FormOrJson;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(landing))
        .route("/login", get(login_page).post(login))
        .route("/register", get(register_page).post(register))
        .route("/logout", get(logout))
        .route("/notes", get(list_notes).post(create_note))
}

/// `302 Found` to `location`.
pub fn redirect(location: &'static str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

#[derive(Deserialize)]
pub struct Credentials {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

impl Credentials {
    fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }
}

#[derive(Deserialize)]
pub struct NewNote {
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
}

async fn landing() -> Html<String> {
    Html(ui::render_landing())
}

async fn login_page() -> Html<String> {
    Html(ui::render_login())
}

async fn register_page() -> Html<String> {
    Html(ui::render_register())
}

async fn register(
    State(state): State<AppState>,
    session: Session,
    FormOrJson(form): FormOrJson<Credentials>,
) -> Result<Response, AppError> {
    const FAILED: &str = "Registration failed";

    if !form.is_complete() {
        return Ok(redirect("/register"));
    }

    if state
        .repo
        .find_user_by_email(&form.email)
        .await
        .fail_with(FAILED)?
        .is_some()
    {
        return Ok(redirect("/login"));
    }

    let hash = auth::spawn_hash(form.password).await.fail_with(FAILED)?;

    let Some(user) = state
        .repo
        .insert_user(&form.email, &hash)
        .await
        .fail_with(FAILED)?
    else {
        // Lost a race with a concurrent registration for the same email.
        return Ok(redirect("/login"));
    };

    info!(user_id = %user.id, "Registered new user");
    auth::establish(&session, &user).await.fail_with(FAILED)?;
    Ok(redirect("/notes"))
}

async fn login(
    State(state): State<AppState>,
    session: Session,
    FormOrJson(form): FormOrJson<Credentials>,
) -> Result<Response, AppError> {
    const FAILED: &str = "Login failed";

    if !form.is_complete() {
        return Ok(redirect("/login"));
    }

    match auth::authenticate(state.repo.as_ref(), &form.email, &form.password)
        .await
        .fail_with(FAILED)?
    {
        AuthOutcome::Authenticated(user) => {
            auth::establish(&session, &user).await.fail_with(FAILED)?;
            Ok(redirect("/notes"))
        }
        AuthOutcome::Rejected(_) => Ok(redirect("/login")),
    }
}

async fn logout(session: Session) -> Response {
    if let Err(e) = auth::destroy(&session).await {
        error!(error = %e, "Failed to destroy session");
    }
    redirect("/")
}

async fn list_notes(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Html<String>, AppError> {
    let notes = state
        .repo
        .list_notes(user.id)
        .await
        .fail_with("Database not ready")?;
    Ok(Html(ui::render_notes(user.email, notes)))
}

async fn create_note(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    FormOrJson(note): FormOrJson<NewNote>,
) -> Result<Response, AppError> {
    state
        .repo
        .insert_note(user.id, &note.title, &note.content)
        .await
        .fail_with("Error saving note")?;
    Ok(redirect("/notes"))
}
