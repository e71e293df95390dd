// ============================================================================
// Dash Infrastructure - Idle Session Sweeper
// File: crates/dash-infrastructure/src/memory/sweeper.rs
// Description: Periodically drops flags and workspaces of idle sessions
// ============================================================================

use std::sync::Arc;
use tokio::time::{sleep, Duration};
use tracing::{debug, info, warn};

use dash_core::error::DomainError;
use dash_core::repositories::FlagRepository;
use dash_shared::utils::now_ms;

use super::SessionWorkspaces;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SweepStats {
    pub flag_sessions: usize,
    pub workspaces: usize,
}

pub struct SessionSweeper {
    flags: Arc<dyn FlagRepository>,
    workspaces: SessionWorkspaces,
    idle_ttl: Duration,
    interval: Duration,
}

impl SessionSweeper {
    pub fn new(
        flags: Arc<dyn FlagRepository>,
        workspaces: SessionWorkspaces,
        idle_ttl: Duration,
        interval: Duration,
    ) -> Self {
        Self {
            flags,
            workspaces,
            idle_ttl,
            interval,
        }
    }

    /// Evicts everything last seen more than `idle_ttl` before `now_ms`.
    pub async fn sweep_at(&self, now_ms: u64) -> Result<SweepStats, DomainError> {
        let cutoff = now_ms.saturating_sub(self.idle_ttl.as_millis() as u64);
        let flag_sessions = self.flags.evict_idle(cutoff).await?;
        let workspaces = self.workspaces.evict_idle(cutoff);
        Ok(SweepStats {
            flag_sessions,
            workspaces,
        })
    }

    pub async fn run(self: Arc<Self>) {
        info!(
            "Session sweeper started (idle ttl {}s, every {}s)",
            self.idle_ttl.as_secs(),
            self.interval.as_secs()
        );
        loop {
            sleep(self.interval).await;

            match self.sweep_at(now_ms()).await {
                Ok(stats) if stats != SweepStats::default() => info!(
                    "Evicted {} idle flag sessions and {} workspaces",
                    stats.flag_sessions, stats.workspaces
                ),
                Ok(_) => debug!("No idle sessions to evict"),
                Err(e) => warn!("Session sweep failed: {}", e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryFlagRepository;
    use crate::seed;
    use dash_core::services::{Access, SessionGuard};
    use dash_shared::SessionId;

    fn sweeper(flags: Arc<MemoryFlagRepository>, workspaces: SessionWorkspaces) -> SessionSweeper {
        SessionSweeper::new(
            flags,
            workspaces,
            Duration::from_secs(60),
            Duration::from_secs(5),
        )
    }

    #[tokio::test]
    async fn test_idle_login_is_swept() {
        let flags = Arc::new(MemoryFlagRepository::new());
        let workspaces = SessionWorkspaces::new(Arc::new(seed::consumer_ledger()));
        let guard = SessionGuard::new(flags.clone());
        let session = SessionId::new();

        guard.sign_in(&session, "neha@example.com").await.unwrap();
        workspaces.get_or_create(session);
        let sweeper = sweeper(flags.clone(), workspaces.clone());

        let fresh = sweeper.sweep_at(now_ms() + 30_000).await.unwrap();
        assert_eq!(fresh, SweepStats::default());
        assert!(matches!(guard.check(Some(&session)).await.unwrap(), Access::Granted(_)));

        let stats = sweeper.sweep_at(now_ms() + 61_000).await.unwrap();
        assert_eq!(stats.flag_sessions, 1);
        assert_eq!(stats.workspaces, 1);
        assert_eq!(guard.check(Some(&session)).await.unwrap(), Access::Denied);
        assert!(workspaces.is_empty());
        assert_eq!(flags.session_count(), 0);
    }
}
