// ============================================================================
// Dash Core - Session Guard
// File: crates/dash-core/src/services/session_guard.rs
// Description: Login flag gate checked before any page work
// ============================================================================

use dash_shared::constants::{FLAG_LOGGED_IN, FLAG_USER_EMAIL};
use dash_shared::SessionId;
use std::sync::Arc;
use tracing::{info, warn};

use crate::error::DomainError;
use crate::repositories::{FlagRepository, FlagScope};
use crate::validation::{is_valid_email, FieldErrors};

/// The signed-in viewer as far as the flags tell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Granted(Viewer),
    Denied,
}

pub struct SessionGuard<R: FlagRepository + ?Sized> {
    flags: Arc<R>,
}

impl<R: FlagRepository + ?Sized> SessionGuard<R> {
    pub fn new(flags: Arc<R>) -> Self {
        Self { flags }
    }

    /// Any value of the login flag grants access; its absence (or no session
    /// at all) denies it.
    pub async fn check(&self, session: Option<&SessionId>) -> Result<Access, DomainError> {
        let Some(session) = session else {
            return Ok(Access::Denied);
        };

        if self
            .flags
            .get(session, FlagScope::Session, FLAG_LOGGED_IN)
            .await?
            .is_none()
        {
            return Ok(Access::Denied);
        }

        let email = self
            .flags
            .get(session, FlagScope::Session, FLAG_USER_EMAIL)
            .await?;
        Ok(Access::Granted(Viewer { email }))
    }

    pub async fn sign_in(&self, session: &SessionId, email: &str) -> Result<(), DomainError> {
        let email = email.trim();
        if !is_valid_email(email) {
            warn!("Sign-in rejected for malformed email");
            let mut errors = FieldErrors::new();
            let message = if email.is_empty() {
                "Email is required"
            } else {
                "Invalid email format"
            };
            errors.push("email", message);
            return Err(DomainError::Validation(errors));
        }

        self.flags
            .set(session, FlagScope::Session, FLAG_LOGGED_IN, "true")
            .await?;
        self.flags
            .set(session, FlagScope::Session, FLAG_USER_EMAIL, email)
            .await?;
        info!("Session {} signed in", session);
        Ok(())
    }

    /// Clears session flags only; theme preferences stay.
    pub async fn sign_out(&self, session: &SessionId) -> Result<(), DomainError> {
        self.flags.clear(session, FlagScope::Session).await?;
        info!("Session {} signed out", session);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockFlagRepository;

    #[tokio::test]
    async fn test_no_session_is_denied() {
        let guard = SessionGuard::new(Arc::new(MockFlagRepository::new()));
        assert_eq!(guard.check(None).await.unwrap(), Access::Denied);
    }

    #[tokio::test]
    async fn test_missing_flag_is_denied() {
        let mut flags = MockFlagRepository::new();
        flags.expect_get().returning(|_, _, _| Ok(None));
        let guard = SessionGuard::new(Arc::new(flags));
        assert_eq!(
            guard.check(Some(&SessionId::new())).await.unwrap(),
            Access::Denied
        );
    }

    #[tokio::test]
    async fn test_flag_grants_access_with_email() {
        let mut flags = MockFlagRepository::new();
        flags.expect_get().returning(|_, _, key| {
            Ok(Some(match key {
                "isLoggedIn" => "true".to_string(),
                _ => "neha@example.com".to_string(),
            }))
        });
        let guard = SessionGuard::new(Arc::new(flags));
        assert_eq!(
            guard.check(Some(&SessionId::new())).await.unwrap(),
            Access::Granted(Viewer {
                email: Some("neha@example.com".to_string())
            })
        );
    }

    #[tokio::test]
    async fn test_sign_in_rejects_bad_email() {
        let mut flags = MockFlagRepository::new();
        flags.expect_set().times(0);
        let guard = SessionGuard::new(Arc::new(flags));
        let err = guard.sign_in(&SessionId::new(), "bad-email").await.unwrap_err();
        match err {
            DomainError::Validation(errors) => {
                assert_eq!(errors.get("email"), Some("Invalid email format"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_sign_out_clears_session_scope_only() {
        let mut flags = MockFlagRepository::new();
        flags
            .expect_clear()
            .withf(|_, scope| *scope == FlagScope::Session)
            .times(1)
            .returning(|_, _| Ok(()));
        let guard = SessionGuard::new(Arc::new(flags));
        guard.sign_out(&SessionId::new()).await.unwrap();
    }
}
