//! Client entity model and DTOs.

use portal_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full client row from the `clients` table.
///
/// Contains the password hash -- never serialize this to API responses.
/// Use [`ClientResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Client {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub password_hash: String,
    pub created_at: Timestamp,
}

/// Safe client representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct ClientResponse {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub created_at: Timestamp,
}

impl From<Client> for ClientResponse {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            name: client.name,
            email: client.email,
            company: client.company,
            phone: client.phone,
            created_at: client.created_at,
        }
    }
}

/// DTO for creating a new client account (admin only).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateClient {
    pub name: String,
    pub email: String,
    /// Plaintext here; hashed before it reaches the repository.
    pub password: String,
    pub company: Option<String>,
    pub phone: Option<String>,
}
