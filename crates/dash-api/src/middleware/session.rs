// ============================================================================
// Dash API - Session Cookie Middleware
// File: crates/dash-api/src/middleware/session.rs
// ============================================================================

use axum::{
    extract::{Request, State},
    http::{
        header::{COOKIE, SET_COOKIE},
        HeaderMap, HeaderValue,
    },
    middleware::Next,
    response::Response,
};
use dash_shared::SessionId;
use tracing::{debug, warn};

use crate::state::AppState;

/// Session id carried in the `cookie_name` cookie, if present and well formed.
pub fn session_cookie(headers: &HeaderMap, cookie_name: &str) -> Option<SessionId> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == cookie_name)
        .and_then(|(_, value)| SessionId::parse(value))
}

/// Attaches a `SessionId` to every request, issuing a new cookie when the
/// browser did not send a usable one.
pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let cookie_name = state.config.session.cookie_name.clone();
    let existing = session_cookie(request.headers(), &cookie_name);
    let session = existing.unwrap_or_default();
    request.extensions_mut().insert(session);

    let mut response = next.run(request).await;

    if existing.is_none() {
        debug!("Issuing session {}", session);
        let cookie = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", cookie_name, session);
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(e) => warn!("Could not build session cookie: {}", e),
        }
    }

    response
}
