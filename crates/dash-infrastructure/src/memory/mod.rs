//! In-memory adapters

pub mod flag_repo_impl;
pub mod sweeper;
pub mod workspaces;

pub use flag_repo_impl::MemoryFlagRepository;
pub use sweeper::{SessionSweeper, SweepStats};
pub use workspaces::{SessionWorkspaces, Workspace};
