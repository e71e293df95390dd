//! Repository traits (ports)

pub mod flag_repository;

pub use flag_repository::{FlagRepository, FlagScope};

#[cfg(test)]
pub use flag_repository::MockFlagRepository;
