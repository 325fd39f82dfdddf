use crate::types::DbId;

/// Domain-level error taxonomy.
///
/// Three outcomes cover every domain failure in this service: the entity is
/// not visible to the caller, the input is bad, or the caller is not signed
/// in. The api crate maps these onto HTTP statuses; see its `error` module.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The entity does not exist, or the caller is not allowed to know
    /// whether it exists (owner mismatches collapse into this variant).
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}
