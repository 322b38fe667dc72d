use std::io;

use thiserror::Error;
use workflow_engine::WorkflowError;

use crate::codes;

/// Top-level error for the admission binaries
#[derive(Error, Debug)]
pub enum RustCareError {
    /// Operator input that cannot be parsed
    #[error("Input error: {0}")]
    InputError(String),

    /// Admission workflow failures
    #[error("Admission error: {0}")]
    AdmissionError(#[from] WorkflowError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Terminal I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

impl RustCareError {
    pub fn code(&self) -> &'static str {
        match self {
            RustCareError::InputError(_) => codes::input::MALFORMED_SELECTION,
            RustCareError::AdmissionError(_) => codes::admission::ADMISSION_FAILED,
            RustCareError::ConfigError(_) => codes::system::CONFIGURATION,
            RustCareError::IoError(_) => codes::system::IO,
        }
    }
}

/// Result type alias for RustCare operations
pub type Result<T> = std::result::Result<T, RustCareError>;

/// Log an error with its code
pub fn log_error(context: &str, error: &RustCareError) {
    tracing::error!(
        context = context,
        error_code = error.code(),
        error = %error,
        "RustCare error occurred"
    );
}
