#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The id carried here is the caller-facing form (decimal for lots,
    /// canonical hyphenated UUID for tickets).
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl CoreError {
    /// Shorthand for the common not-found case.
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        CoreError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}
