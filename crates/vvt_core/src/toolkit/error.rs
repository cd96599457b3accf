//! Media-toolkit error types.

use std::path::PathBuf;

/// Errors from external media-toolkit (ffmpeg/ffprobe) invocations.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// The tool binary could not be started.
    #[error("Failed to run {tool}: {source}")]
    SpawnFailed {
        tool: String,
        source: std::io::Error,
    },

    /// The tool exited non-zero.
    #[error("{tool} failed with exit code {exit_code}: {message}")]
    CommandFailed {
        tool: String,
        exit_code: i32,
        message: String,
    },

    /// The tool exited zero but its declared output file does not exist.
    #[error("{tool} exited successfully but did not produce '{path}'")]
    MissingOutput { tool: String, path: PathBuf },

    /// An input file is missing before the tool was even invoked.
    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    /// The tool's output could not be interpreted.
    #[error("Failed to parse {tool} output: {message}")]
    OutputParse { tool: String, message: String },

    /// Filesystem failure around a tool invocation.
    #[error("I/O error at '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type for toolkit operations.
pub type ToolResult<T> = Result<T, ToolError>;
