//! # Dash Core
//! 
//! Domain entities, entity stores, validation, dashboard services and
//! repository traits for the dashboard application.

pub mod domain;
pub mod store;
pub mod validation;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
pub use store::{EntityStore, Record};
pub use validation::{FieldError, FieldErrors};
