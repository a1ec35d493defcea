//! Error types and exit codes for uninotas
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, malformed score text)
//! - 3: Data/store error (missing store, unknown record, duplicate account)
//! - 4: Authentication error (bad credentials, guest or signed-out session)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the uninotas CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/store error (3)
    Data = 3,
    /// Authentication error (4)
    Auth = 4,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during uninotas operations
#[derive(Error, Debug)]
pub enum UninotasError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid score: {text:?} (expected a number between 0 and 5 with at most two decimals, e.g. 2.70)")]
    InvalidScore { text: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data/store errors (exit code 3)
    #[error("store not found (searched from {search_root:?})")]
    StoreNotFound { search_root: PathBuf },

    #[error("invalid store: {reason}")]
    InvalidStore { reason: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    // Authentication errors (exit code 4)
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("{0}")]
    AuthenticationRequired(String),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl UninotasError {
    /// Create an error for a failed database operation
    pub fn db_operation(operation: &str, error: impl std::fmt::Display) -> Self {
        UninotasError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        UninotasError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that already exists
    pub fn already_exists(context: &str, value: impl std::fmt::Display) -> Self {
        UninotasError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        UninotasError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            UninotasError::UnknownFormat(_)
            | UninotasError::UsageError(_)
            | UninotasError::InvalidScore { .. }
            | UninotasError::InvalidValue { .. } => ExitCode::Usage,

            UninotasError::StoreNotFound { .. }
            | UninotasError::InvalidStore { .. }
            | UninotasError::NotFound { .. }
            | UninotasError::AlreadyExists { .. } => ExitCode::Data,

            UninotasError::InvalidCredentials | UninotasError::AuthenticationRequired(_) => {
                ExitCode::Auth
            }

            UninotasError::Io(_)
            | UninotasError::Json(_)
            | UninotasError::Toml(_)
            | UninotasError::Database(_)
            | UninotasError::FailedOperation { .. }
            | UninotasError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            UninotasError::UnknownFormat(_) => "unknown_format",
            UninotasError::UsageError(_) => "usage_error",
            UninotasError::InvalidScore { .. } => "invalid_score",
            UninotasError::InvalidValue { .. } => "invalid_value",
            UninotasError::StoreNotFound { .. } => "store_not_found",
            UninotasError::InvalidStore { .. } => "invalid_store",
            UninotasError::NotFound { .. } => "not_found",
            UninotasError::AlreadyExists { .. } => "already_exists",
            UninotasError::InvalidCredentials => "invalid_credentials",
            UninotasError::AuthenticationRequired(_) => "authentication_required",
            UninotasError::Io(_) => "io_error",
            UninotasError::Json(_) => "json_error",
            UninotasError::Toml(_) => "toml_error",
            UninotasError::Database(_) => "database_error",
            UninotasError::FailedOperation { .. } => "failed_operation",
            UninotasError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for uninotas operations
pub type Result<T> = std::result::Result<T, UninotasError>;
