//! # Dash API
//! 
//! HTTP handlers, middleware, page rendering and the router.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod render;
pub mod response;
pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
