use std::sync::Arc;

use dash_core::repositories::FlagRepository;
use dash_core::services::{SessionGuard, ThemeController};
use dash_infrastructure::SessionWorkspaces;
use dash_shared::config::AppConfig;
use dash_shared::constants::{FLAG_ADMIN_THEME, FLAG_CONSUMER_THEME};

use crate::error::ApiError;
use crate::render::Renderer;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub flags: Arc<dyn FlagRepository>,
    pub workspaces: SessionWorkspaces,
    pub renderer: Arc<Renderer>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        flags: Arc<dyn FlagRepository>,
        workspaces: SessionWorkspaces,
    ) -> Result<Self, ApiError> {
        Ok(Self {
            config: Arc::new(config),
            flags,
            workspaces,
            renderer: Arc::new(Renderer::new()?),
        })
    }

    pub fn guard(&self) -> SessionGuard<dyn FlagRepository> {
        SessionGuard::new(self.flags.clone())
    }

    pub fn admin_theme(&self) -> ThemeController<dyn FlagRepository> {
        ThemeController::new(self.flags.clone(), FLAG_ADMIN_THEME)
    }

    pub fn consumer_theme(&self) -> ThemeController<dyn FlagRepository> {
        ThemeController::new(self.flags.clone(), FLAG_CONSUMER_THEME)
    }
}
