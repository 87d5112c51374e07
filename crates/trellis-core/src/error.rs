//! Error types and exit codes for trellis
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Graph data error (structural violation, unknown node)

use std::fmt;

use crate::graph::types::{Cost, NodeId};

/// Exit codes reported by the trellis binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Graph data error - structural violation, unknown node (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during trellis operations
#[derive(Debug)]
pub enum TrellisError {
    // Usage errors (exit code 2)
    UnknownFormat(String),

    UsageError(String),

    // Graph data errors (exit code 3)
    SelfLoop { node: NodeId },

    NotDirected,

    EdgeAlreadyExists {
        source: NodeId,
        destination: NodeId,
        cost: Cost,
    },

    UnknownNode { node: NodeId },

    // Generic failures (exit code 1)
    Io(std::io::Error),

    Json(serde_json::Error),

    Other(String),
}

impl fmt::Display for TrellisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrellisError::UnknownFormat(fmt_name) => {
                write!(f, "unknown format: {fmt_name} (expected: human or json)")
            }
            TrellisError::UsageError(msg) => write!(f, "{msg}"),
            TrellisError::SelfLoop { node } => {
                write!(f, "source and destination are the same node: {node}")
            }
            TrellisError::NotDirected => {
                write!(f, "directed edge cannot be added to an undirected graph")
            }
            TrellisError::EdgeAlreadyExists {
                source,
                destination,
                cost,
            } => write!(
                f,
                "edge already present between {source} and {destination} (attempted cost {cost})"
            ),
            TrellisError::UnknownNode { node } => write!(f, "unknown node: {node}"),
            TrellisError::Io(err) => write!(f, "IO error: {err}"),
            TrellisError::Json(err) => write!(f, "JSON error: {err}"),
            TrellisError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for TrellisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TrellisError::Io(err) => Some(err),
            TrellisError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TrellisError {
    fn from(err: std::io::Error) -> Self {
        TrellisError::Io(err)
    }
}

impl From<serde_json::Error> for TrellisError {
    fn from(err: serde_json::Error) -> Self {
        TrellisError::Json(err)
    }
}

impl TrellisError {
    /// Map this error to a process exit code
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            TrellisError::UnknownFormat(_) | TrellisError::UsageError(_) => ExitCode::Usage,

            // Graph data errors
            TrellisError::SelfLoop { .. }
            | TrellisError::NotDirected
            | TrellisError::EdgeAlreadyExists { .. }
            | TrellisError::UnknownNode { .. } => ExitCode::Data,

            // Generic failures
            TrellisError::Io(_) | TrellisError::Json(_) | TrellisError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            TrellisError::UnknownFormat(_) => "unknown_format",
            TrellisError::UsageError(_) => "usage_error",
            TrellisError::SelfLoop { .. } => "self_loop",
            TrellisError::NotDirected => "not_directed",
            TrellisError::EdgeAlreadyExists { .. } => "edge_already_exists",
            TrellisError::UnknownNode { .. } => "unknown_node",
            TrellisError::Io(_) => "io_error",
            TrellisError::Json(_) => "json_error",
            TrellisError::Other(_) => "other",
        }
    }

    /// Structured error envelope for `--format json`
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

pub type Result<T> = std::result::Result<T, TrellisError>;
