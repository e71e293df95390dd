//! Login guards. Pages redirect to the login form; the JSON API answers 401.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use dash_core::services::Access;
use dash_shared::constants::LOGIN_PATH;
use dash_shared::SessionId;
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn require_page_login(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let session = request.extensions().get::<SessionId>().copied();
    match state.guard().check(session.as_ref()).await? {
        Access::Granted(viewer) => {
            request.extensions_mut().insert(viewer);
            Ok(next.run(request).await)
        }
        Access::Denied => {
            debug!("Redirecting {} to login", request.uri().path());
            Ok(Redirect::to(LOGIN_PATH).into_response())
        }
    }
}

pub async fn require_api_login(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let session = request.extensions().get::<SessionId>().copied();
    match state.guard().check(session.as_ref()).await? {
        Access::Granted(viewer) => {
            request.extensions_mut().insert(viewer);
            Ok(next.run(request).await)
        }
        Access::Denied => Err(ApiError::Unauthorized("login required".to_string())),
    }
}
