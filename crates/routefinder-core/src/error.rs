//! Error types and exit codes for routefinder
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (engine integrity violations, I/O)
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (malformed map, unknown village)

mod macros;

use thiserror::Error;

use crate::search::SearchStatus;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed map, unknown village (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading maps and searching them
#[derive(Error, Debug)]
pub enum RouteError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("unknown search strategy: {0} (expected: depth-first or breadth-first)")]
    UnknownStrategy(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("malformed row at line {line}: {reason}")]
    MalformedTuple { line: usize, reason: String },

    #[error("malformed map header: {reason}")]
    MalformedHeader { reason: String },

    #[error("unknown village: {name}")]
    UnknownNode { name: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Engine integrity failures (exit code 1)
    #[error("frontier is empty; the search cannot proceed")]
    FrontierExhausted,

    #[error("no search in progress (state: {status})")]
    SearchNotActive { status: SearchStatus },

    #[error("cannot repair path: no village on the current path connects to {node}")]
    PathRepair { node: String },

    #[error("cannot reconstruct path from {from} to {to}: predecessor chain is broken")]
    DisconnectedGraph { from: String, to: String },

    #[error("path is broken: {from} and {to} are not connected")]
    DisconnectedPath { from: String, to: String },

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

impl RouteError {
    /// Create an error for a row that failed validation
    pub fn malformed(line: usize, reason: impl std::fmt::Display) -> Self {
        RouteError::MalformedTuple {
            line,
            reason: reason.to_string(),
        }
    }

    /// Create an error for a village name missing from the registry
    pub fn unknown_node(name: impl std::fmt::Display) -> Self {
        RouteError::UnknownNode {
            name: name.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        RouteError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RouteError::UnknownFormat(_)
            | RouteError::UnknownStrategy(_)
            | RouteError::UsageError(_) => ExitCode::Usage,

            RouteError::MalformedTuple { .. }
            | RouteError::MalformedHeader { .. }
            | RouteError::UnknownNode { .. }
            | RouteError::InvalidValue { .. } => ExitCode::Data,

            RouteError::FrontierExhausted
            | RouteError::SearchNotActive { .. }
            | RouteError::PathRepair { .. }
            | RouteError::DisconnectedGraph { .. }
            | RouteError::DisconnectedPath { .. }
            | RouteError::Io(_)
            | RouteError::Json(_)
            | RouteError::Toml(_)
            | RouteError::Other(_) => ExitCode::Failure,
        }
    }

    /// Whether the caller can fix this by re-prompting instead of reloading the map
    pub fn is_recoverable(&self) -> bool {
        matches!(self, RouteError::UnknownNode { .. })
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

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            RouteError::UnknownFormat(_) => "unknown_format",
            RouteError::UnknownStrategy(_) => "unknown_strategy",
            RouteError::UsageError(_) => "usage_error",
            RouteError::MalformedTuple { .. } => "malformed_tuple",
            RouteError::MalformedHeader { .. } => "malformed_header",
            RouteError::UnknownNode { .. } => "unknown_node",
            RouteError::InvalidValue { .. } => "invalid_value",
            RouteError::FrontierExhausted => "frontier_exhausted",
            RouteError::SearchNotActive { .. } => "search_not_active",
            RouteError::PathRepair { .. } => "path_repair",
            RouteError::DisconnectedGraph { .. } => "disconnected_graph",
            RouteError::DisconnectedPath { .. } => "disconnected_path",
            RouteError::Io(_) => "io_error",
            RouteError::Json(_) => "json_error",
            RouteError::Toml(_) => "toml_error",
            RouteError::Other(_) => "other",
        }
    }
}

/// Result type alias for routefinder operations
pub type Result<T> = std::result::Result<T, RouteError>;
