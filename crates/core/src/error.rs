/// Error taxonomy for the FormAI front-end.
///
/// Configuration and connection failures surface to clients as a generic
/// server fault; the underlying detail is only ever logged.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Missing environment variable: {0}")]
    MissingEnv(&'static str),

    #[error("Invalid value for {var}: {reason}")]
    InvalidEnv { var: &'static str, reason: String },

    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Submission not found: {0}")]
    NotFound(String),

    #[error("Processing failed for submission {0}")]
    ProcessingFailed(String),
}
