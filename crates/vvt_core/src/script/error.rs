//! Script error types.

use std::path::PathBuf;

/// Errors that can occur while loading or writing narration scripts.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    /// Failed to read a script file.
    #[error("Failed to read script '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write a script file.
    #[error("Failed to write script '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Cue sequence violates the timing invariants.
    #[error("Timing violation: {0}")]
    Timing(#[from] TimingError),
}

impl ScriptError {
    /// Create a read error.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Create a write error.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteError {
            path: path.into(),
            source,
        }
    }
}

/// Errors raised while interpreting cue text and timing.
///
/// Any of these aborts the run before synthesis begins; a script that
/// cannot be fully interpreted never reaches the timeline assembler.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// A cue block is structurally broken (missing range or text).
    #[error("Malformed cue at line {line}: {message}")]
    MalformedCue { line: usize, message: String },

    /// A time token could not be interpreted.
    #[error("Invalid time format at line {line}: '{value}'")]
    InvalidTime { line: usize, value: String },

    /// The input contained no cues at all.
    #[error("Script contains no cues")]
    Empty,
}

impl ParseError {
    /// Create a malformed-cue error.
    pub fn malformed(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedCue {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid-time error.
    pub fn invalid_time(line: usize, value: impl Into<String>) -> Self {
        Self::InvalidTime {
            line,
            value: value.into(),
        }
    }
}

/// Violations of the cue-sequence ordering invariants.
///
/// Cues must have non-empty windows, ascending starts, and no overlap
/// (`cue[i].end <= cue[i+1].start`). The index identifies the offending
/// cue, 0-based in parse order.
#[derive(Debug, thiserror::Error)]
pub enum TimingError {
    /// A cue's window has zero or negative length.
    #[error("Cue {index} has an empty window ({start_ms}ms .. {end_ms}ms)")]
    EmptyWindow {
        index: usize,
        start_ms: f64,
        end_ms: f64,
    },

    /// A cue's window starts before the previous cue's window ends.
    #[error("Cue {index} starts at {start_ms}ms, before the previous cue ends at {prev_end_ms}ms")]
    Overlap {
        index: usize,
        start_ms: f64,
        prev_end_ms: f64,
    },
}
