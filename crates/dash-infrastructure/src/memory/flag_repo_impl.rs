// ============================================================================
// Dash Infrastructure - In-Memory Flag Repository
// File: crates/dash-infrastructure/src/memory/flag_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use dash_core::error::DomainError;
use dash_core::repositories::{FlagRepository, FlagScope};
use dash_shared::utils::now_ms;
use dash_shared::SessionId;

/// Flags per (session, scope). Cloning shares the same storage.
#[derive(Clone, Default)]
pub struct MemoryFlagRepository {
    storage: Arc<DashMap<(SessionId, FlagScope), HashMap<String, String>>>,
    /// Last read or write per session, in epoch milliseconds.
    touched: Arc<DashMap<SessionId, u64>>,
}

impl MemoryFlagRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn touch(&self, session: &SessionId) {
        self.touched.insert(*session, now_ms());
    }

    /// Number of sessions holding at least one flag.
    pub fn session_count(&self) -> usize {
        self.touched.len()
    }
}

#[async_trait]
impl FlagRepository for MemoryFlagRepository {
    async fn get(
        &self,
        session: &SessionId,
        scope: FlagScope,
        key: &str,
    ) -> Result<Option<String>, DomainError> {
        let value = self
            .storage
            .get(&(*session, scope))
            .and_then(|flags| flags.get(key).cloned());
        if let Some(mut touched) = self.touched.get_mut(session) {
            *touched = now_ms();
        }
        Ok(value)
    }

    async fn set(
        &self,
        session: &SessionId,
        scope: FlagScope,
        key: &str,
        value: &str,
    ) -> Result<(), DomainError> {
        self.storage
            .entry((*session, scope))
            .or_default()
            .insert(key.to_string(), value.to_string());
        self.touch(session);
        debug!("Flag {} set for session {}", key, session);
        Ok(())
    }

    async fn clear(&self, session: &SessionId, scope: FlagScope) -> Result<(), DomainError> {
        if self.storage.remove(&(*session, scope)).is_some() {
            debug!("Cleared {:?} flags for session {}", scope, session);
        }
        Ok(())
    }

    async fn evict_idle(&self, cutoff_ms: u64) -> Result<usize, DomainError> {
        let idle: Vec<SessionId> = self
            .touched
            .iter()
            .filter(|entry| *entry.value() < cutoff_ms)
            .map(|entry| *entry.key())
            .collect();

        let mut evicted = 0;
        for session in &idle {
            // A request may have touched the session since the scan.
            if self
                .touched
                .remove_if(session, |_, touched| *touched < cutoff_ms)
                .is_some()
            {
                self.storage.remove(&(*session, FlagScope::Session));
                self.storage.remove(&(*session, FlagScope::Local));
                debug!("Evicted idle flags for session {}", session);
                evicted += 1;
            }
        }
        Ok(evicted)
    }
}
