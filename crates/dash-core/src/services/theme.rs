//! Theme preference, persisted as a local-scope flag

use dash_shared::SessionId;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::error::DomainError;
use crate::repositories::{FlagRepository, FlagScope};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// Reads and writes one theme flag. Admin and consumer pages use separate keys.
pub struct ThemeController<R: FlagRepository + ?Sized> {
    flags: Arc<R>,
    key: &'static str,
}

impl<R: FlagRepository + ?Sized> ThemeController<R> {
    pub fn new(flags: Arc<R>, key: &'static str) -> Self {
        Self { flags, key }
    }

    /// Stored theme, or light when nothing valid is stored.
    pub async fn current(&self, session: &SessionId) -> Result<Theme, DomainError> {
        let stored = self.flags.get(session, FlagScope::Local, self.key).await?;
        Ok(stored
            .as_deref()
            .and_then(Theme::parse)
            .unwrap_or_default())
    }

    pub async fn set(&self, session: &SessionId, theme: Theme) -> Result<(), DomainError> {
        self.flags
            .set(session, FlagScope::Local, self.key, theme.as_str())
            .await?;
        info!("Theme {} set to {}", self.key, theme.as_str());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockFlagRepository;

    #[tokio::test]
    async fn test_defaults_to_light() {
        let mut flags = MockFlagRepository::new();
        flags.expect_get().returning(|_, _, _| Ok(None));
        let themes = ThemeController::new(Arc::new(flags), "theme");
        assert_eq!(themes.current(&SessionId::new()).await.unwrap(), Theme::Light);
    }

    #[tokio::test]
    async fn test_unknown_stored_value_reads_as_light() {
        let mut flags = MockFlagRepository::new();
        flags
            .expect_get()
            .returning(|_, _, _| Ok(Some("solarized".to_string())));
        let themes = ThemeController::new(Arc::new(flags), "theme");
        assert_eq!(themes.current(&SessionId::new()).await.unwrap(), Theme::Light);
    }

    #[tokio::test]
    async fn test_set_writes_local_scope() {
        let mut flags = MockFlagRepository::new();
        flags
            .expect_set()
            .withf(|_, scope, key, value| {
                *scope == FlagScope::Local && key == "consumer-theme" && value == "dark"
            })
            .times(1)
            .returning(|_, _, _, _| Ok(()));
        let themes = ThemeController::new(Arc::new(flags), "consumer-theme");
        themes.set(&SessionId::new(), Theme::Dark).await.unwrap();
    }
}
