//! Persisted flag repository trait (port)

use async_trait::async_trait;
use dash_shared::SessionId;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Lifetime of a flag. Session flags are wiped on logout; local flags
/// (theme preferences) outlive it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlagScope {
    Session,
    Local,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FlagRepository: Send + Sync {
    async fn get(
        &self,
        session: &SessionId,
        scope: FlagScope,
        key: &str,
    ) -> Result<Option<String>, DomainError>;

    async fn set(
        &self,
        session: &SessionId,
        scope: FlagScope,
        key: &str,
        value: &str,
    ) -> Result<(), DomainError>;

    /// Removes every flag of `scope` for the session.
    async fn clear(&self, session: &SessionId, scope: FlagScope) -> Result<(), DomainError>;

    /// Drops all flags, in every scope, of sessions last seen before
    /// `cutoff_ms`. Returns how many sessions were dropped.
    async fn evict_idle(&self, cutoff_ms: u64) -> Result<usize, DomainError>;
}
