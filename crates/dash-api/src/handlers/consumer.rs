//! Consumer (retailer) page handlers

use axum::{
    extract::{Extension, Path, State},
    response::{Html, Redirect},
    Form,
};
use chrono::Utc;
use dash_core::services::navigation::Section;
use dash_core::services::{ConsumerConsole, ConsumerSection, ProfileTab, SidebarCommand, Theme, Viewer};
use dash_shared::constants::FALLBACK_CONSUMER_EMAIL;
use dash_shared::SessionId;
use serde::Deserialize;

use crate::error::ApiError;
use crate::render::{ConsumerPage, HeaderView};
use crate::state::AppState;

const CONSUMER_PATH: &str = "/consumer";

#[derive(Debug, Deserialize)]
pub struct SidebarForm {
    pub command: SidebarCommand,
}

#[derive(Debug, Deserialize)]
pub struct ThemeForm {
    pub theme: String,
}

#[derive(Debug, Deserialize)]
pub struct TabForm {
    pub tab: String,
}

fn with_console<T>(
    state: &AppState,
    session: SessionId,
    f: impl FnOnce(&mut ConsumerConsole) -> T,
) -> T {
    let workspace = state.workspaces.get_or_create(session);
    let mut workspace = workspace.lock();
    f(&mut workspace.consumer)
}

/// Consumer page - GET /consumer
pub async fn page(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Extension(viewer): Extension<Viewer>,
) -> Result<Html<String>, ApiError> {
    let theme = state.consumer_theme().current(&session).await?;
    let email = viewer.email.as_deref().unwrap_or(FALLBACK_CONSUMER_EMAIL);
    let header = HeaderView::from_email(email);
    let today = Utc::now().date_naive();
    let page = with_console(&state, session, |console| {
        ConsumerPage::build(console, header, theme, today)
    })?;
    Ok(Html(state.renderer.consumer(&page)?))
}

/// GET /consumer/sections/{id}
pub async fn switch_section(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Path(id): Path<String>,
) -> Redirect {
    with_console(&state, session, |console| console.navigate(ConsumerSection::from_id(&id)));
    Redirect::to(CONSUMER_PATH)
}

/// POST /consumer/sidebar
pub async fn sidebar(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Form(form): Form<SidebarForm>,
) -> Redirect {
    with_console(&state, session, |console| console.sidebar(form.command));
    Redirect::to(CONSUMER_PATH)
}

/// POST /consumer/profile-tab
pub async fn profile_tab(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Form(form): Form<TabForm>,
) -> Redirect {
    with_console(&state, session, |console| console.select_tab(ProfileTab::from_id(&form.tab)));
    Redirect::to(CONSUMER_PATH)
}

/// POST /consumer/theme
pub async fn theme(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Form(form): Form<ThemeForm>,
) -> Result<Redirect, ApiError> {
    let theme = Theme::parse(&form.theme)
        .ok_or_else(|| ApiError::BadRequest(format!("unknown theme: {}", form.theme)))?;
    state.consumer_theme().set(&session, theme).await?;
    Ok(Redirect::to(CONSUMER_PATH))
}
