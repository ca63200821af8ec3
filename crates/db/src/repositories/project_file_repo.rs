//! Repository for the `project_files` table.

use portal_core::types::DbId;
use sqlx::PgPool;

use crate::models::project_file::{CreateProjectFile, ProjectFile};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, filename, file_path, uploaded_at, uploaded_by";

/// Provides attachment metadata operations.
///
/// Append and remove are single-row statements, so two admins mutating the
/// same project's file list concurrently cannot lose each other's writes.
pub struct ProjectFileRepo;

impl ProjectFileRepo {
    /// Append an attachment row. The on-disk object must already exist.
    pub async fn add(pool: &PgPool, input: &CreateProjectFile) -> Result<ProjectFile, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_files (id, project_id, filename, file_path, uploaded_by)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectFile>(&query)
            .bind(input.id)
            .bind(input.project_id)
            .bind(&input.filename)
            .bind(&input.file_path)
            .bind(input.uploaded_by)
            .fetch_one(pool)
            .await
    }

    /// Find one attachment scoped to its project.
    pub async fn find(
        pool: &PgPool,
        project_id: DbId,
        file_id: DbId,
    ) -> Result<Option<ProjectFile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_files WHERE project_id = $1 AND id = $2");
        sqlx::query_as::<_, ProjectFile>(&query)
            .bind(project_id)
            .bind(file_id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's attachments in upload order.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ProjectFile>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_files WHERE project_id = $1 ORDER BY uploaded_at, id"
        );
        sqlx::query_as::<_, ProjectFile>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// List attachments for many projects at once, in upload order.
    /// Used to assemble project lists without one query per project.
    pub async fn list_by_projects(
        pool: &PgPool,
        project_ids: &[DbId],
    ) -> Result<Vec<ProjectFile>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_files WHERE project_id = ANY($1) ORDER BY uploaded_at, id"
        );
        sqlx::query_as::<_, ProjectFile>(&query)
            .bind(project_ids)
            .fetch_all(pool)
            .await
    }

    /// Remove one attachment row. Returns `true` if a row was removed.
    /// The caller removes the on-disk object before calling this.
    pub async fn remove(
        pool: &PgPool,
        project_id: DbId,
        file_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM project_files WHERE project_id = $1 AND id = $2")
            .bind(project_id)
            .bind(file_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
