//! Domain errors

use dash_shared::EntityId;
use thiserror::Error;

use crate::domain::EntityKind;
use crate::validation::FieldErrors;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("{entity} not found: {id}")]
    NotFound { entity: EntityKind, id: EntityId },

    #[error("Flag store error: {0}")]
    FlagStoreError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}
