//! Repository for the `client_projects` table.

use portal_core::types::DbId;
use sqlx::PgPool;

use crate::models::client_project::{ClientProject, CreateClientProject, UpdateClientProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, client_id, description, status, progress, expected_delivery, \
                       notes, created_at, created_by, updated_at";

/// Provides CRUD operations for client projects.
pub struct ClientProjectRepo;

impl ClientProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// `status` defaults to `pending` when the input omits it. The caller is
    /// responsible for clamping `progress` and validating `client_id`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateClientProject,
        progress: i32,
        created_by: DbId,
    ) -> Result<ClientProject, sqlx::Error> {
        let query = format!(
            "INSERT INTO client_projects
                (name, client_id, description, status, progress, expected_delivery, notes, created_by)
             VALUES ($1, $2, $3, COALESCE($4, 'pending'::project_status), $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ClientProject>(&query)
            .bind(&input.name)
            .bind(input.client_id)
            .bind(&input.description)
            .bind(input.status)
            .bind(progress)
            .bind(input.expected_delivery)
            .bind(&input.notes)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a project by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ClientProject>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM client_projects WHERE id = $1");
        sqlx::query_as::<_, ClientProject>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a project by id, scoped to its owning client.
    ///
    /// Returns `None` both when the id does not exist and when it belongs to
    /// a different client -- callers cannot tell the cases apart.
    pub async fn find_by_id_for_client(
        pool: &PgPool,
        id: DbId,
        client_id: DbId,
    ) -> Result<Option<ClientProject>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM client_projects WHERE id = $1 AND client_id = $2");
        sqlx::query_as::<_, ClientProject>(&query)
            .bind(id)
            .bind(client_id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ClientProject>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM client_projects ORDER BY created_at DESC");
        sqlx::query_as::<_, ClientProject>(&query)
            .fetch_all(pool)
            .await
    }

    /// List the projects owned by one client, newest first.
    pub async fn list_by_client(
        pool: &PgPool,
        client_id: DbId,
    ) -> Result<Vec<ClientProject>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM client_projects WHERE client_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, ClientProject>(&query)
            .bind(client_id)
            .fetch_all(pool)
            .await
    }

    /// Apply a partial update in one atomic statement.
    ///
    /// Plain-`Option` fields fall back to their current value via COALESCE;
    /// tri-state fields overwrite (possibly with NULL) only when their flag
    /// bind is true. `updated_at` is always set, even for an empty patch.
    ///
    /// Returns `None` if no row with the given `id` exists. The caller is
    /// responsible for clamping `progress` and validating a re-assigned
    /// `client_id`.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateClientProject,
    ) -> Result<Option<ClientProject>, sqlx::Error> {
        let query = format!(
            "UPDATE client_projects SET
                name = COALESCE($2, name),
                client_id = COALESCE($3, client_id),
                status = COALESCE($4, status),
                progress = COALESCE($5, progress),
                description = CASE WHEN $6 THEN $7 ELSE description END,
                expected_delivery = CASE WHEN $8 THEN $9 ELSE expected_delivery END,
                notes = CASE WHEN $10 THEN $11 ELSE notes END,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ClientProject>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.client_id)
            .bind(input.status)
            .bind(input.progress)
            .bind(input.description.is_some())
            .bind(input.description.clone().flatten())
            .bind(input.expected_delivery.is_some())
            .bind(input.expected_delivery.flatten())
            .bind(input.notes.is_some())
            .bind(input.notes.clone().flatten())
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by id. Returns `true` if a row was removed.
    ///
    /// Attachment metadata rows go with it via ON DELETE CASCADE; the caller
    /// removes the on-disk objects first.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM client_projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
