//! Request middleware: session cookie and login guards

pub mod guard;
pub mod session;

pub use guard::{require_api_login, require_page_login};
pub use session::{session_cookie, session_middleware};
