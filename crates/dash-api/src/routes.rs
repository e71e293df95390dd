// ============================================================================
// Dash API - Router
// File: crates/dash-api/src/routes.rs
// ============================================================================

use axum::{
    middleware,
    response::Redirect,
    routing::{get, post},
    Router,
};
use tower_http::{
    services::ServeDir,
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::handlers::{admin, api, consumer, health, session};
use crate::middleware::{require_api_login, require_page_login, session_middleware};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let admin_routes = Router::new()
        .route("/admin", get(admin::page))
        .route("/admin/sections/{id}", get(admin::switch_section))
        .route("/admin/sidebar", post(admin::sidebar))
        .route("/admin/profile-menu", post(admin::profile_menu))
        .route("/admin/viewport", post(admin::viewport))
        .route("/admin/theme", post(admin::theme))
        .route("/admin/users/new", post(admin::new_user))
        .route("/admin/users/actions", post(admin::user_action))
        .route("/admin/users/save", post(admin::save_user))
        .route("/admin/products/new", post(admin::new_product))
        .route("/admin/products/actions", post(admin::product_action))
        .route("/admin/products/save", post(admin::save_product))
        .route("/admin/modal/confirm", post(admin::confirm))
        .route("/admin/modal/close", post(admin::close_modal))
        .route("/admin/escape", post(admin::escape))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_page_login));

    let consumer_routes = Router::new()
        .route("/consumer", get(consumer::page))
        .route("/consumer/sections/{id}", get(consumer::switch_section))
        .route("/consumer/sidebar", post(consumer::sidebar))
        .route("/consumer/profile-tab", post(consumer::profile_tab))
        .route("/consumer/theme", post(consumer::theme))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_page_login));

    let api_routes = Router::new()
        .route("/api/v1/users", get(api::list_users).post(api::create_user))
        .route(
            "/api/v1/users/{id}",
            get(api::get_user).put(api::update_user).delete(api::delete_user),
        )
        .route("/api/v1/products", get(api::list_products).post(api::create_product))
        .route(
            "/api/v1/products/{id}",
            get(api::get_product)
                .put(api::update_product)
                .delete(api::delete_product),
        )
        .route("/api/v1/consumer/summary", get(api::consumer_summary))
        .route("/api/v1/consumer/charts", get(api::consumer_chart_configs))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_api_login));

    let static_dir = state.config.dashboard.static_dir.clone();

    Router::new()
        .route("/health", get(health::health_check))
        .route("/", get(|| async { Redirect::to("/admin") }))
        .route("/login", get(session::login_page).post(session::login))
        .route("/logout", post(session::logout))
        .merge(admin_routes)
        .merge(consumer_routes)
        .merge(api_routes)
        .nest_service("/assets", ServeDir::new(static_dir))
        .layer(middleware::from_fn_with_state(state.clone(), session_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .with_state(state)
}
