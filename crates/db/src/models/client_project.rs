//! Client project entity model and DTOs.

use chrono::NaiveDate;
use portal_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::double_option;
use crate::models::project_file::ProjectFile;

/// Project lifecycle status. Free-form: any value may move to any other
/// value, no transition graph is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "project_status", rename_all = "snake_case")]
pub enum ProjectStatus {
    Pending,
    InProgress,
    Review,
    Completed,
}

/// A project row from the `client_projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ClientProject {
    pub id: DbId,
    pub name: String,
    pub client_id: DbId,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub progress: i32,
    pub expected_delivery: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub created_by: DbId,
    pub updated_at: Option<Timestamp>,
}

/// API representation of a project together with its attachments, ordered by
/// upload time.
#[derive(Debug, Clone, Serialize)]
pub struct ClientProjectResponse {
    #[serde(flatten)]
    pub project: ClientProject,
    pub files: Vec<ProjectFile>,
}

impl ClientProjectResponse {
    pub fn new(project: ClientProject, files: Vec<ProjectFile>) -> Self {
        Self { project, files }
    }
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateClientProject {
    pub name: String,
    pub client_id: DbId,
    pub description: Option<String>,
    /// Defaults to `pending` if omitted.
    pub status: Option<ProjectStatus>,
    /// Defaults to 0; clamped to `[0, 100]` before insert.
    pub progress: Option<i32>,
    pub expected_delivery: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// DTO for partially updating a project.
///
/// Non-nullable columns use plain `Option` (absent = untouched). Nullable
/// columns are tri-state: absent = untouched, explicit `null` = cleared,
/// value = overwritten.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateClientProject {
    pub name: Option<String>,
    pub client_id: Option<DbId>,
    pub status: Option<ProjectStatus>,
    pub progress: Option<i32>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub expected_delivery: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "double_option")]
    pub notes: Option<Option<String>>,
}
