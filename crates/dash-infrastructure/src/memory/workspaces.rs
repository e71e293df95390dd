// ============================================================================
// Dash Infrastructure - Session Workspaces
// File: crates/dash-infrastructure/src/memory/workspaces.rs
// Description: One admin and one consumer console per browser session
// ============================================================================

use dashmap::DashMap;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

use dash_core::services::{AdminConsole, ConsumerConsole};
use dash_core::ConsumerLedger;
use dash_shared::utils::now_ms;
use dash_shared::SessionId;

use crate::seed;

/// Everything one session can mutate.
#[derive(Debug)]
pub struct Workspace {
    pub admin: AdminConsole,
    pub consumer: ConsumerConsole,
}

struct Slot {
    workspace: Arc<Mutex<Workspace>>,
    touched_ms: AtomicU64,
}

impl Slot {
    fn touch(&self, now: u64) {
        self.touched_ms.store(now, Ordering::Relaxed);
    }

    fn is_idle(&self, cutoff_ms: u64) -> bool {
        self.touched_ms.load(Ordering::Relaxed) < cutoff_ms
    }
}

/// Session-keyed workspaces. A request locks its workspace for the whole
/// event; the guard must be dropped before any `.await`.
#[derive(Clone)]
pub struct SessionWorkspaces {
    storage: Arc<DashMap<SessionId, Slot>>,
    ledger: Arc<ConsumerLedger>,
}

impl SessionWorkspaces {
    pub fn new(ledger: Arc<ConsumerLedger>) -> Self {
        info!("Initializing session workspaces");
        Self {
            storage: Arc::new(DashMap::new()),
            ledger,
        }
    }

    pub fn ledger(&self) -> Arc<ConsumerLedger> {
        self.ledger.clone()
    }

    /// Workspace of `session`, created from the seed data on first use.
    /// Every call counts as activity for idle eviction.
    pub fn get_or_create(&self, session: SessionId) -> Arc<Mutex<Workspace>> {
        let now = now_ms();
        let slot = self.storage.entry(session).or_insert_with(|| {
            debug!("Creating workspace for session {}", session);
            Slot {
                workspace: Arc::new(Mutex::new(Workspace {
                    admin: AdminConsole::new(seed::user_store(), seed::product_store()),
                    consumer: ConsumerConsole::new(self.ledger.clone()),
                })),
                touched_ms: AtomicU64::new(now),
            }
        });
        slot.touch(now);
        slot.workspace.clone()
    }

    /// Drops workspaces not used since `cutoff_ms`; returns how many went.
    pub fn evict_idle(&self, cutoff_ms: u64) -> usize {
        let mut evicted = 0;
        self.storage.retain(|session, slot| {
            if slot.is_idle(cutoff_ms) {
                debug!("Evicting idle workspace for session {}", session);
                evicted += 1;
                false
            } else {
                true
            }
        });
        evicted
    }

    pub fn remove(&self, session: SessionId) -> bool {
        let removed = self.storage.remove(&session).is_some();
        if removed {
            debug!("Dropped workspace for session {}", session);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}
