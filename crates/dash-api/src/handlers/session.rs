// ============================================================================
// Dash API - Session Handlers
// File: crates/dash-api/src/handlers/session.rs
// ============================================================================
//! Login and logout. Signing in only sets the session flags; there are no
//! credentials to check.

use axum::{
    extract::{Extension, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use dash_core::DomainError;
use dash_shared::constants::LOGIN_PATH;
use dash_shared::SessionId;
use serde::Deserialize;
use tracing::info;

use crate::error::ApiError;
use crate::render::LoginPage;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub portal: Option<String>,
}

/// Login page - GET /login
pub async fn login_page(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    Ok(Html(state.renderer.login(&LoginPage::default())?))
}

/// Login handler - POST /login
pub async fn login(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Form(form): Form<LoginForm>,
) -> Result<Response, ApiError> {
    match state.guard().sign_in(&session, &form.email).await {
        Ok(()) => {
            let target = match form.portal.as_deref() {
                Some("consumer") => "/consumer",
                _ => "/admin",
            };
            Ok(Redirect::to(target).into_response())
        }
        Err(DomainError::Validation(errors)) => {
            let page = LoginPage {
                email: form.email,
                error: errors.get("email").map(str::to_string),
            };
            let html = state.renderer.login(&page)?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response())
        }
        Err(other) => Err(other.into()),
    }
}

/// Logout handler - POST /logout
pub async fn logout(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> Result<Redirect, ApiError> {
    state.guard().sign_out(&session).await?;
    state.workspaces.remove(session);
    info!("Session {} logged out", session);
    Ok(Redirect::to(LOGIN_PATH))
}
