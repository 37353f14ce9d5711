/// Crate-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main error type for the normalization engine and its orchestration seam.
///
/// The engine functions themselves are total and never return an error;
/// these variants cover the validation, configuration, and transport
/// boundaries around them.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Validation errors for mandatory document fields
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Transport errors surfaced by a ServiceCaller implementation
    #[error("Transport error: {0}")]
    Transport(String),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        AppError::Transport(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
