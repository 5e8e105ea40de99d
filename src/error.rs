pub use masterror::{AppError, AppResult};

/// Create file read error
pub fn file_read_error(path: &str, source: std::io::Error) -> AppError {
    AppError::internal(format!("Failed to read file '{}': {}", path, source))
}

/// Create file write error
pub fn file_write_error(path: &str, source: std::io::Error) -> AppError {
    AppError::internal(format!("Failed to write file '{}': {}", path, source))
}

/// Create error for a history file that is not a JSON array of strings
pub fn history_format_error(path: &str, message: impl Into<String>) -> AppError {
    AppError::bad_request(format!(
        "Invalid history file '{}':\n  {}",
        path,
        message.into()
    ))
}

/// Create serialization error
pub fn serialize_error(message: impl Into<String>) -> AppError {
    AppError::internal(format!("Serialization failed: {}", message.into()))
}

/// Create config error
pub fn config_error(message: impl Into<String>) -> AppError {
    AppError::bad_request(message.into())
}
