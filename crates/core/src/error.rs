//! Domain-level error taxonomy.
//!
//! Every layer maps its failures into [`CoreError`]; the api crate translates
//! these into HTTP status codes and a stable machine-readable error code.

/// Domain errors shared across the workspace.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested resource does not exist -- or, for a client caller, is
    /// not owned by them. The two cases are deliberately indistinguishable.
    #[error("{0}")]
    NotFound(String),

    /// Malformed or out-of-bounds input.
    #[error("{0}")]
    Validation(String),

    /// The operation conflicts with existing state.
    #[error("{0}")]
    Conflict(String),

    /// Missing, malformed, or expired credential.
    #[error("{0}")]
    Unauthorized(String),

    /// Authenticated but not allowed. Reserved for future role-mismatch
    /// cases; client ownership mismatches are reported as `NotFound`.
    #[error("{0}")]
    Forbidden(String),

    /// An on-disk read/write/delete failed.
    #[error("{0}")]
    Storage(String),

    /// Anything else. The message is logged but not shown to callers.
    #[error("{0}")]
    Internal(String),
}

impl CoreError {
    /// Build a `NotFound` with the conventional "{entity} not found" message.
    pub fn not_found(entity: &str) -> Self {
        Self::NotFound(format!("{entity} not found"))
    }
}
