//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods that
//! accept `&PgPool` as the first argument. Every method issues a single SQL
//! statement, so per-operation atomicity comes from the database itself.

pub mod admin_repo;
pub mod client_project_repo;
pub mod client_repo;
pub mod project_file_repo;

pub use admin_repo::AdminRepo;
pub use client_project_repo::ClientProjectRepo;
pub use client_repo::ClientRepo;
pub use project_file_repo::ProjectFileRepo;
