//! Configuration management

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::error::AppError;
use crate::constants::{
    DEFAULT_NOTIFICATION_DISMISS_MS, DEFAULT_SESSION_COOKIE, DEFAULT_SESSION_IDLE_TTL_SECS,
    DEFAULT_SESSION_SWEEP_INTERVAL_SECS, SIDEBAR_BREAKPOINT_PX,
};

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub session: SessionSettings,
    pub dashboard: DashboardSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionSettings {
    pub cookie_name: String,
    /// Sessions with no request for this long lose their flags and workspace.
    pub idle_ttl_secs: u64,
    pub sweep_interval_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardSettings {
    /// How long a notice stays on screen before the page script removes it.
    pub notification_dismiss_ms: u64,
    /// Viewports wider than this close the sidebar on resize.
    pub sidebar_breakpoint_px: u32,
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub filter: String,
    pub directory: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Self::builder_with_defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Configuration made of defaults only, ignoring files and environment.
    pub fn defaults() -> Result<Self, AppError> {
        Ok(Self::builder_with_defaults()?.build()?.try_deserialize()?)
    }

    fn builder_with_defaults(
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "dash-server")?
            .set_default("session.cookie_name", DEFAULT_SESSION_COOKIE)?
            .set_default("session.idle_ttl_secs", DEFAULT_SESSION_IDLE_TTL_SECS as i64)?
            .set_default(
                "session.sweep_interval_secs",
                DEFAULT_SESSION_SWEEP_INTERVAL_SECS as i64,
            )?
            .set_default(
                "dashboard.notification_dismiss_ms",
                DEFAULT_NOTIFICATION_DISMISS_MS as i64,
            )?
            .set_default("dashboard.sidebar_breakpoint_px", SIDEBAR_BREAKPOINT_PX as i64)?
            .set_default("dashboard.static_dir", "static/assets")?
            .set_default("logging.filter", "info")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_load() {
        let config = AppConfig::defaults().unwrap();
        assert_eq!(config.app.port, 8080);
        assert_eq!(config.session.cookie_name, "dash_session");
        assert_eq!(config.session.idle_ttl_secs, 1800);
        assert_eq!(config.session.sweep_interval_secs, 60);
        assert_eq!(config.dashboard.notification_dismiss_ms, 3000);
        assert_eq!(config.dashboard.sidebar_breakpoint_px, 992);
        assert!(config.logging.directory.is_none());
    }
}
