//! External speech synthesis.
//!
//! Synthesis is delegated to an external engine behind the
//! [`SpeechSynthesizer`] trait. The engine is treated as unreliable:
//! every call's exit status and output artifact are verified, and a
//! failure propagates as [`SynthesisError`] rather than being papered
//! over with silence.

mod piper;

pub use piper::PiperSynthesizer;

use std::path::{Path, PathBuf};

/// Errors from an external TTS engine call.
#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    /// The engine binary could not be started.
    #[error("Failed to spawn TTS engine '{program}': {source}")]
    SpawnFailed {
        program: String,
        source: std::io::Error,
    },

    /// The engine exited non-zero.
    #[error("TTS engine exited with code {exit_code}: {message}")]
    EngineFailed { exit_code: i32, message: String },

    /// The engine reported success but wrote no audio.
    #[error("TTS engine reported success but produced no audio at '{path}'")]
    MissingOutput { path: PathBuf },

    /// I/O failure while feeding text to the engine.
    #[error("I/O error talking to TTS engine: {0}")]
    Io(#[from] std::io::Error),
}

/// A text-to-speech engine.
///
/// Implementations synthesize one clip per call; the clip's duration is
/// engine-determined and is conformed to the cue window downstream.
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize `text` into a WAV file at `output_path`.
    fn synthesize(&self, text: &str, output_path: &Path) -> Result<(), SynthesisError>;
}
