//! Admin entity model and DTOs.

use portal_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full admin row from the `admins` table.
///
/// Contains the password hash and deliberately derives no `Serialize`;
/// admins authenticate but are never returned by the API.
#[derive(Debug, Clone, FromRow)]
pub struct Admin {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub created_at: Timestamp,
}

/// DTO for inserting a new admin (startup bootstrap).
#[derive(Debug, Clone)]
pub struct CreateAdmin {
    pub username: String,
    pub email: String,
    pub name: String,
    /// Argon2id PHC hash, never the plaintext.
    pub password_hash: String,
}
