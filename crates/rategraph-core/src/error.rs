//! Error types and exit codes for rategraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Rejected request (bad flags, validation or domain errors)
//! - 3: Referenced entity not found (node, snapshot, scenario)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Rejected request - usage, validation or domain error (2)
    Rejected = 2,
    /// Referenced entity not found (3)
    NotFound = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building graphs or running algorithms
#[derive(Error, Debug)]
pub enum GraphError {
    // Rejected requests (exit code 2)
    #[error("{0}")]
    UsageError(String),

    /// Malformed or incomplete input to graph construction
    #[error("validation error: {reason}")]
    Validation { reason: String },

    /// Numeric precondition violated during weight computation
    #[error("domain error: {reason}")]
    Domain { reason: String },

    // Not found (exit code 3)
    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create a validation error
    pub fn validation(reason: impl Into<String>) -> Self {
        GraphError::Validation {
            reason: reason.into(),
        }
    }

    /// Create a domain error
    pub fn domain(reason: impl Into<String>) -> Self {
        GraphError::Domain {
            reason: reason.into(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create a validation error naming nodes that have no value
    pub fn missing_values<S: AsRef<str>>(nodes: &[S]) -> Self {
        let names: Vec<&str> = nodes.iter().map(|n| n.as_ref()).collect();
        GraphError::validation(format!("missing values for nodes: {}", names.join(", ")))
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UsageError(_)
            | GraphError::Validation { .. }
            | GraphError::Domain { .. } => ExitCode::Rejected,

            GraphError::NotFound { .. } => ExitCode::NotFound,

            GraphError::Io(_)
            | GraphError::Json(_)
            | GraphError::Toml(_)
            | GraphError::Yaml(_)
            | GraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Stable error category identifier
    pub fn category(&self) -> &'static str {
        match self {
            GraphError::UsageError(_) => "usage_error",
            GraphError::Validation { .. } => "validation_error",
            GraphError::Domain { .. } => "domain_error",
            GraphError::NotFound { .. } => "not_found",
            GraphError::Io(_) => "io_error",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Yaml(_) => "yaml_error",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.category(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for rategraph operations
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_by_category() {
        assert_eq!(
            GraphError::validation("bad").exit_code(),
            ExitCode::Rejected
        );
        assert_eq!(GraphError::domain("bad").exit_code(), ExitCode::Rejected);
        assert_eq!(
            GraphError::not_found("node", "X").exit_code(),
            ExitCode::NotFound
        );
        assert_eq!(
            GraphError::Other("boom".to_string()).exit_code(),
            ExitCode::Failure
        );
    }

    #[test]
    fn test_missing_values_names_nodes() {
        let err = GraphError::missing_values(&["B", "C"]);
        assert_eq!(err.category(), "validation_error");
        assert!(err.to_string().contains("B, C"));
    }

    #[test]
    fn test_to_json_envelope() {
        let json = GraphError::not_found("snapshot", "abc").to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "not_found");
        assert_eq!(json["error"]["message"], "snapshot not found: abc");
    }
}
