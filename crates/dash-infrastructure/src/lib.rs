//! # Dash Infrastructure
//! 
//! In-memory adapters: the flag store, per-session workspaces and seed data.

pub mod memory;
pub mod seed;

pub use memory::{MemoryFlagRepository, SessionSweeper, SessionWorkspaces, SweepStats, Workspace};
