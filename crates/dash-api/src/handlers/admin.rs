// ============================================================================
// Dash API - Admin Page Handlers
// File: crates/dash-api/src/handlers/admin.rs
// ============================================================================
//! Every POST applies one event to the session's admin console and redirects
//! back to `/admin`, which renders the resulting state.

use axum::{
    extract::{Extension, Path, State},
    response::{Html, Redirect},
    Form,
};
use chrono::Utc;
use dash_core::services::navigation::Section;
use dash_core::services::{
    AdminConsole, AdminSection, ModalKind, RowAction, SidebarCommand, Theme, Viewer,
};
use dash_core::{EntityKind, ProductForm, UserForm};
use dash_shared::SessionId;
use serde::Deserialize;
use tracing::debug;

use crate::error::ApiError;
use crate::render::{AdminPage, HeaderView};
use crate::state::AppState;

const ADMIN_PATH: &str = "/admin";

#[derive(Debug, Deserialize)]
pub struct RowActionForm {
    pub action: String,
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct ModalForm {
    #[serde(default)]
    pub kind: String,
}

#[derive(Debug, Deserialize)]
pub struct SidebarForm {
    pub command: SidebarCommand,
}

#[derive(Debug, Deserialize)]
pub struct ProfileMenuForm {
    #[serde(default)]
    pub action: String,
}

#[derive(Debug, Deserialize)]
pub struct ViewportForm {
    pub width: u32,
}

#[derive(Debug, Deserialize)]
pub struct ThemeForm {
    pub theme: String,
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

fn back() -> Redirect {
    Redirect::to(ADMIN_PATH)
}

/// Admin page - GET /admin
pub async fn page(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Extension(viewer): Extension<Viewer>,
) -> Result<Html<String>, ApiError> {
    let theme = state.admin_theme().current(&session).await?;
    let header = HeaderView::from_email(viewer.email.as_deref().unwrap_or_default());
    let dashboard = &state.config.dashboard;
    let page = with_console(&state, session, |console| {
        AdminPage::build(
            console,
            header,
            theme,
            dashboard.notification_dismiss_ms,
            dashboard.sidebar_breakpoint_px,
        )
    });
    Ok(Html(state.renderer.admin(&page)?))
}

/// GET /admin/sections/{id}
pub async fn switch_section(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Path(id): Path<String>,
) -> Redirect {
    with_console(&state, session, |console| console.navigate(AdminSection::from_id(&id)));
    back()
}

/// POST /admin/sidebar
pub async fn sidebar(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Form(form): Form<SidebarForm>,
) -> Redirect {
    with_console(&state, session, |console| console.sidebar(form.command));
    back()
}

/// POST /admin/profile-menu
pub async fn profile_menu(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Form(form): Form<ProfileMenuForm>,
) -> Redirect {
    with_console(&state, session, |console| match form.action.as_str() {
        "close" => console.sidebar.close_profile_menu(),
        _ => console.sidebar.toggle_profile_menu(),
    });
    back()
}

/// POST /admin/viewport
pub async fn viewport(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Form(form): Form<ViewportForm>,
) -> Redirect {
    let breakpoint = state.config.dashboard.sidebar_breakpoint_px;
    with_console(&state, session, |console| console.sidebar.on_resize(form.width, breakpoint));
    back()
}

/// POST /admin/theme
pub async fn theme(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Form(form): Form<ThemeForm>,
) -> Result<Redirect, ApiError> {
    let theme = Theme::parse(&form.theme)
        .ok_or_else(|| ApiError::BadRequest(format!("unknown theme: {}", form.theme)))?;
    state.admin_theme().set(&session, theme).await?;
    Ok(back())
}

fn open_create(state: &AppState, session: SessionId, entity: EntityKind) -> Redirect {
    with_console(state, session, |console| console.open_create(entity));
    back()
}

/// POST /admin/users/new
pub async fn new_user(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> Redirect {
    open_create(&state, session, EntityKind::User)
}

/// POST /admin/products/new
pub async fn new_product(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> Redirect {
    open_create(&state, session, EntityKind::Product)
}

fn row_action(
    state: &AppState,
    session: SessionId,
    entity: EntityKind,
    form: RowActionForm,
) -> Result<Redirect, ApiError> {
    let action = RowAction::parse(&form.action)
        .ok_or_else(|| ApiError::BadRequest(format!("unknown action: {}", form.action)))?;
    let id = form
        .id
        .trim()
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("invalid id: {}", form.id)))?;

    let opened = with_console(state, session, |console| console.row_action(entity, action, id));
    if !opened {
        debug!("{} on {} {} had no effect", action.as_str(), entity, id);
    }
    Ok(back())
}

/// POST /admin/users/actions
pub async fn user_action(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Form(form): Form<RowActionForm>,
) -> Result<Redirect, ApiError> {
    row_action(&state, session, EntityKind::User, form)
}

/// POST /admin/products/actions
pub async fn product_action(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Form(form): Form<RowActionForm>,
) -> Result<Redirect, ApiError> {
    row_action(&state, session, EntityKind::Product, form)
}

/// POST /admin/users/save
pub async fn save_user(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Form(form): Form<UserForm>,
) -> Redirect {
    let today = Utc::now().date_naive();
    with_console(&state, session, |console| console.save_user(form, today));
    back()
}

/// POST /admin/products/save
pub async fn save_product(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Form(form): Form<ProductForm>,
) -> Redirect {
    with_console(&state, session, |console| console.save_product(form));
    back()
}

/// POST /admin/modal/confirm
pub async fn confirm(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> Redirect {
    with_console(&state, session, |console| console.confirm());
    back()
}

/// POST /admin/modal/close
pub async fn close_modal(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Form(form): Form<ModalForm>,
) -> Redirect {
    match ModalKind::parse(&form.kind) {
        Some(kind) => {
            with_console(&state, session, |console| console.close_modal(kind));
        }
        None => debug!("Ignoring close of unknown modal kind {:?}", form.kind),
    }
    back()
}

/// POST /admin/escape
pub async fn escape(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> Redirect {
    with_console(&state, session, |console| console.escape());
    back()
}
