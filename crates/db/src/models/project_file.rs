//! Project file attachment model and DTOs.

use portal_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// One attachment row from the `project_files` table.
///
/// `file_path` is the storage key relative to the upload root, derived from
/// generated ids; `filename` is the uploader-supplied name kept only for
/// display and for the download `Content-Disposition` header.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectFile {
    pub id: DbId,
    #[serde(skip_serializing)]
    pub project_id: DbId,
    pub filename: String,
    pub file_path: String,
    pub uploaded_at: Timestamp,
    pub uploaded_by: DbId,
}

/// DTO for inserting a new attachment row after its bytes are on disk.
#[derive(Debug, Clone)]
pub struct CreateProjectFile {
    /// Generated before the disk write so the storage key and the row agree.
    pub id: DbId,
    pub project_id: DbId,
    pub filename: String,
    pub file_path: String,
    pub uploaded_by: DbId,
}
