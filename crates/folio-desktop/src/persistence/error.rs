//! Preference store errors

/// Errors reading or writing preferences.
///
/// Callers log these and continue with defaults; a broken store never
/// blocks the shell.
#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    /// Backing file could not be read or written.
    #[error("preference io error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored value is not valid JSON for the requested type.
    #[error("preference decode error: {0}")]
    Json(#[from] serde_json::Error),
}
