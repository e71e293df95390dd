// ============================================================================
// Dash API - JSON Handlers
// File: crates/dash-api/src/handlers/api.rs
// ============================================================================
//! JSON access to the same per-session stores the admin page edits.

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use dash_core::services::consumer_summary::{
    self, ConsumerStats, CreditSummary, InfoPair, ListEntry,
};
use dash_core::services::AdminConsole;
use dash_core::{EntityKind, Product, ProductForm, User, UserForm};
use dash_shared::{EntityId, SessionId};
use serde::Serialize;

use crate::error::ApiError;
use crate::render::charts::{consumer_charts, ConsumerCharts};
use crate::response::ApiResponse;
use crate::state::AppState;

type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

#[derive(Debug, Serialize)]
pub struct DeleteResult {
    pub deleted: bool,
}

#[derive(Debug, Serialize)]
pub struct ConsumerSummary {
    pub stats: ConsumerStats,
    pub recent_orders: Vec<ListEntry>,
    pub pending_payments: Vec<ListEntry>,
    pub last_payments: Vec<ListEntry>,
    pub offers: Vec<ListEntry>,
    pub due_reminder: Option<String>,
    pub profile: Vec<InfoPair>,
    pub credit: CreditSummary,
}

fn with_console<T>(
    state: &AppState,
    session: SessionId,
    f: impl FnOnce(&mut AdminConsole) -> T,
) -> T {
    let workspace = state.workspaces.get_or_create(session);
    let mut workspace = workspace.lock();
    f(&mut workspace.admin)
}

fn not_found(entity: EntityKind, id: EntityId) -> ApiError {
    ApiError::NotFound(format!("{} {}", entity, id))
}

/// GET /api/v1/users
pub async fn list_users(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> Json<ApiResponse<Vec<User>>> {
    let users = with_console(&state, session, |console| console.users().list().to_vec());
    Json(ApiResponse::success(users))
}

/// GET /api/v1/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Path(id): Path<EntityId>,
) -> ApiResult<User> {
    let user = with_console(&state, session, |console| console.users().find(id).cloned())
        .ok_or_else(|| not_found(EntityKind::User, id))?;
    Ok(Json(ApiResponse::success(user)))
}

/// POST /api/v1/users
pub async fn create_user(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Json(form): Json<UserForm>,
) -> Result<(StatusCode, Json<ApiResponse<User>>), ApiError> {
    let today = Utc::now().date_naive();
    let user = with_console(&state, session, |console| {
        let id = console.create_user(&form, today)?;
        console
            .users()
            .find(id)
            .cloned()
            .ok_or_else(|| not_found(EntityKind::User, id))
    })?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(user))))
}

/// PUT /api/v1/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Path(id): Path<EntityId>,
    Json(form): Json<UserForm>,
) -> ApiResult<User> {
    let user = with_console(&state, session, |console| {
        console.update_user(id, &form)?;
        console
            .users()
            .find(id)
            .cloned()
            .ok_or_else(|| not_found(EntityKind::User, id))
    })?;
    Ok(Json(ApiResponse::success(user)))
}

/// DELETE /api/v1/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Path(id): Path<EntityId>,
) -> Json<ApiResponse<DeleteResult>> {
    let deleted = with_console(&state, session, |console| console.delete(EntityKind::User, id));
    Json(ApiResponse::success(DeleteResult { deleted }))
}

/// GET /api/v1/products
pub async fn list_products(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> Json<ApiResponse<Vec<Product>>> {
    let products = with_console(&state, session, |console| console.products().list().to_vec());
    Json(ApiResponse::success(products))
}

/// GET /api/v1/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Path(id): Path<EntityId>,
) -> ApiResult<Product> {
    let product = with_console(&state, session, |console| console.products().find(id).cloned())
        .ok_or_else(|| not_found(EntityKind::Product, id))?;
    Ok(Json(ApiResponse::success(product)))
}

/// POST /api/v1/products
pub async fn create_product(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Json(form): Json<ProductForm>,
) -> Result<(StatusCode, Json<ApiResponse<Product>>), ApiError> {
    let product = with_console(&state, session, |console| {
        let id = console.create_product(&form)?;
        console
            .products()
            .find(id)
            .cloned()
            .ok_or_else(|| not_found(EntityKind::Product, id))
    })?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(product))))
}

/// PUT /api/v1/products/{id}
pub async fn update_product(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Path(id): Path<EntityId>,
    Json(form): Json<ProductForm>,
) -> ApiResult<Product> {
    let product = with_console(&state, session, |console| {
        console.update_product(id, &form)?;
        console
            .products()
            .find(id)
            .cloned()
            .ok_or_else(|| not_found(EntityKind::Product, id))
    })?;
    Ok(Json(ApiResponse::success(product)))
}

/// DELETE /api/v1/products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Path(id): Path<EntityId>,
) -> Json<ApiResponse<DeleteResult>> {
    let deleted = with_console(&state, session, |console| console.delete(EntityKind::Product, id));
    Json(ApiResponse::success(DeleteResult { deleted }))
}

/// GET /api/v1/consumer/summary
pub async fn consumer_summary(State(state): State<AppState>) -> Json<ApiResponse<ConsumerSummary>> {
    let ledger = state.workspaces.ledger();
    let today = Utc::now().date_naive();
    Json(ApiResponse::success(ConsumerSummary {
        stats: consumer_summary::stats(&ledger, today),
        recent_orders: consumer_summary::recent_orders(&ledger),
        pending_payments: consumer_summary::pending_payments(&ledger),
        last_payments: consumer_summary::last_payments(&ledger),
        offers: consumer_summary::offers(&ledger),
        due_reminder: consumer_summary::due_reminder(&ledger),
        profile: consumer_summary::profile_info(&ledger),
        credit: consumer_summary::credit_summary(&ledger),
    }))
}

/// GET /api/v1/consumer/charts
pub async fn consumer_chart_configs(State(state): State<AppState>) -> Json<ApiResponse<ConsumerCharts>> {
    let ledger = state.workspaces.ledger();
    Json(ApiResponse::success(consumer_charts(&ledger.trends)))
}
