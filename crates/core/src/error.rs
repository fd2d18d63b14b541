use crate::types::DbId;

/// Domain error taxonomy shared by the repository layer and the API.
///
/// Every persistence failure is tagged with one of these kinds so callers
/// can branch on the variant instead of comparing against sentinel error
/// values or string-matching driver messages.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A lookup, update, or delete targeted an id absent from the store.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A required field is missing, empty, or malformed.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A uniqueness or foreign-key rule was broken.
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// Any other failure from the persistence engine.
    #[error("Storage error: {0}")]
    Storage(String),
}
