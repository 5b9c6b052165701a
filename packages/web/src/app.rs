use axum::Router;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer, SessionStore};

use crate::routes;
use crate::settings::Settings;
use crate::state::AppState;

/// The full application: routes, static files, session cookie handling and
/// request tracing.
pub fn build_router<Store>(state: AppState, store: Store, settings: &Settings) -> Router
where
    Store: SessionStore + Clone,
{
    let session = &settings.session;
    let session_layer = SessionManagerLayer::new(store)
        .with_secure(session.secure)
        .with_http_only(true)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(session.ttl)))
        .with_signed(session.key());

    routes::router()
        .nest_service("/public", ServeDir::new(&settings.server.public))
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
