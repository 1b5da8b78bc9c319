//! Error types and exit codes for docket
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data/store error (missing store, missing post, invalid JSON document)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes reported by the docket binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/store error - missing store, missing post, invalid document (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during docket operations
#[derive(Error, Debug)]
pub enum DocketError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("unknown search mode: {0} (expected: all, tag, keyword, or combined)")]
    UnknownMode(String),

    #[error("{0}")]
    UsageError(String),

    // Data/store errors (exit code 3)
    #[error("store not found (searched from {search_root:?})")]
    StoreNotFound { search_root: PathBuf },

    #[error("invalid store: {reason}")]
    InvalidStore { reason: String },

    #[error("post not found: {id}")]
    PostNotFound { id: String },

    #[error("invalid post document {path:?}: {reason}")]
    InvalidPost { path: PathBuf, reason: String },

    #[error("invalid config {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl DocketError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            DocketError::UnknownFormat(_)
            | DocketError::UnknownMode(_)
            | DocketError::UsageError(_) => ExitCode::Usage,

            DocketError::StoreNotFound { .. }
            | DocketError::InvalidStore { .. }
            | DocketError::PostNotFound { .. }
            | DocketError::InvalidPost { .. }
            | DocketError::InvalidConfig { .. } => ExitCode::Data,

            DocketError::Io(_)
            | DocketError::Json(_)
            | DocketError::Toml(_)
            | DocketError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier used in JSON output
    fn error_type(&self) -> &'static str {
        match self {
            DocketError::UnknownFormat(_) => "unknown_format",
            DocketError::UnknownMode(_) => "unknown_mode",
            DocketError::UsageError(_) => "usage_error",
            DocketError::StoreNotFound { .. } => "store_not_found",
            DocketError::InvalidStore { .. } => "invalid_store",
            DocketError::PostNotFound { .. } => "post_not_found",
            DocketError::InvalidPost { .. } => "invalid_post",
            DocketError::InvalidConfig { .. } => "invalid_config",
            DocketError::Io(_) => "io_error",
            DocketError::Json(_) => "json_error",
            DocketError::Toml(_) => "toml_error",
            DocketError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
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

/// Result type alias for docket operations
pub type Result<T> = std::result::Result<T, DocketError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            DocketError::UsageError("bad".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            DocketError::PostNotFound { id: "x".into() }.exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            DocketError::Other("boom".into()).exit_code(),
            ExitCode::Failure
        );
    }

    #[test]
    fn test_json_envelope() {
        let err = DocketError::PostNotFound { id: "a-post".into() };
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "post_not_found");
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("a-post"));
    }
}
