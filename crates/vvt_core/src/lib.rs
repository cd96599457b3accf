//! VVT Core - backend logic for the Voiceover Video Tool.
//!
//! Turns a timestamped narration script and a video into a single media
//! file whose audio track is machine-synthesized narration aligned to the
//! script's timing windows, optionally mixed with a background music bed.
//!
//! This crate contains all business logic with zero UI dependencies.
//! Speech synthesis is delegated to an external TTS engine behind the
//! [`tts::SpeechSynthesizer`] trait; all decoding, encoding, and muxing is
//! delegated to ffmpeg/ffprobe subprocesses behind [`toolkit::FfmpegToolkit`].

pub mod config;
pub mod logging;
pub mod mixer;
pub mod pipeline;
pub mod script;
pub mod timeline;
pub mod toolkit;
pub mod tts;
pub mod workspace;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_returns_value() {
        assert!(!version().is_empty());
    }
}
