//! Repository for the `clients` table.

use portal_core::types::DbId;
use sqlx::PgPool;

use crate::models::client::Client;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, company, phone, password_hash, created_at";

/// Provides CRUD operations for client accounts.
pub struct ClientRepo;

impl ClientRepo {
    /// Insert a new client, returning the created row.
    ///
    /// `password_hash` is the Argon2id PHC string, hashed by the caller.
    pub async fn create(
        pool: &PgPool,
        name: &str,
        email: &str,
        company: Option<&str>,
        phone: Option<&str>,
        password_hash: &str,
    ) -> Result<Client, sqlx::Error> {
        let query = format!(
            "INSERT INTO clients (name, email, company, phone, password_hash)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(name)
            .bind(email)
            .bind(company)
            .bind(phone)
            .bind(password_hash)
            .fetch_one(pool)
            .await
    }

    /// Find a client by email (login).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE email = $1");
        sqlx::query_as::<_, Client>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Find a client by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE id = $1");
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a client with this id exists. Used to validate `client_id`
    /// references before creating or re-assigning a project.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as("SELECT EXISTS (SELECT 1 FROM clients WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// List all clients, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients ORDER BY created_at DESC");
        sqlx::query_as::<_, Client>(&query).fetch_all(pool).await
    }

    /// Delete a client by id. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign-key violation if the client still owns projects;
    /// the api layer surfaces that as a conflict.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
