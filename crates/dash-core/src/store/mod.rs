//! In-memory entity stores

mod entity_store;

pub use entity_store::{EntityStore, Record};
