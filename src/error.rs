//! Error types for Gofer
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in Gofer
#[derive(Debug, Error)]
pub enum GoferError {
    /// A tool was registered under a name that is already taken
    #[error("Duplicate tool: {0}")]
    DuplicateTool(String),

    /// A tool name was looked up that no tool is registered under
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// An arithmetic expression could not be evaluated
    #[error("Calculation error in '{expression}': {reason}")]
    Calculation { expression: String, reason: String },

    /// A tool invocation failed
    #[error("Tool '{tool}' failed: {message}")]
    ToolExecution { tool: String, message: String },

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Gofer operations
pub type Result<T> = std::result::Result<T, GoferError>;
