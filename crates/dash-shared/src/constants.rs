//! Application-wide constants

pub const DEFAULT_SESSION_COOKIE: &str = "dash_session";
pub const DEFAULT_NOTIFICATION_DISMISS_MS: u64 = 3000;
pub const SIDEBAR_BREAKPOINT_PX: u32 = 992;

// Idle sessions are swept after this long without a request
pub const DEFAULT_SESSION_IDLE_TTL_SECS: u64 = 1800;
pub const DEFAULT_SESSION_SWEEP_INTERVAL_SECS: u64 = 60;

// Persisted flag keys
pub const FLAG_LOGGED_IN: &str = "isLoggedIn";
pub const FLAG_USER_EMAIL: &str = "userEmail";
pub const FLAG_ADMIN_THEME: &str = "theme";
pub const FLAG_CONSUMER_THEME: &str = "consumer-theme";

pub const LOGIN_PATH: &str = "/login";
pub const FALLBACK_CONSUMER_EMAIL: &str = "retailer@example.com";
