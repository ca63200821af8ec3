//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO for patches, where nullable columns use a
//!   tri-state `Option<Option<T>>` (absent / set / cleared to NULL)

pub mod admin;
pub mod client;
pub mod client_project;
pub mod project_file;

use serde::{Deserialize, Deserializer};

/// Deserializer for tri-state update fields.
///
/// With `#[serde(default, deserialize_with = "double_option")]` on an
/// `Option<Option<T>>` field: a missing key stays `None` (leave untouched),
/// an explicit `null` becomes `Some(None)` (clear the column), and a value
/// becomes `Some(Some(v))`.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
