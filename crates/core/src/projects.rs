//! Project field validation and clamping.

use crate::error::CoreError;

/// Inclusive progress bounds.
pub const PROGRESS_MIN: i32 = 0;
pub const PROGRESS_MAX: i32 = 100;

/// Clamp a progress value into `[0, 100]`.
///
/// Out-of-range input is clamped rather than rejected: `150` stores as
/// `100`, `-10` stores as `0`.
pub fn clamp_progress(value: i32) -> i32 {
    value.clamp(PROGRESS_MIN, PROGRESS_MAX)
}

/// Validate that a project name is non-empty after trimming.
pub fn validate_project_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Project name must not be empty".into(),
        ));
    }
    Ok(())
}
