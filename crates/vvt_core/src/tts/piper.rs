//! Piper TTS engine wrapper.
//!
//! Spawns a `piper`-style process per clip, feeding the narration text on
//! stdin. The voice (and thereby the language) is selected by the model
//! file; multi-speaker models can additionally pin a speaker id.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use super::{SpeechSynthesizer, SynthesisError};
use crate::config::TtsSettings;

/// Synthesizer backed by the piper CLI.
#[derive(Debug, Clone)]
pub struct PiperSynthesizer {
    program: PathBuf,
    model: PathBuf,
    speaker: Option<String>,
}

impl PiperSynthesizer {
    /// Create a synthesizer for the given piper binary and voice model.
    pub fn new(program: impl Into<PathBuf>, model: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            model: model.into(),
            speaker: None,
        }
    }

    /// Pin a speaker id (multi-speaker models).
    pub fn with_speaker(mut self, speaker: impl Into<String>) -> Self {
        self.speaker = Some(speaker.into());
        self
    }

    /// Build from configuration.
    pub fn from_settings(settings: &TtsSettings) -> Self {
        let mut synth = Self::new(&settings.program, &settings.model);
        if !settings.speaker.is_empty() {
            synth = synth.with_speaker(&settings.speaker);
        }
        synth
    }

    /// Command-line arguments for one synthesis call.
    fn build_args(&self, output_path: &Path) -> Vec<String> {
        let mut args = vec![
            "--model".to_string(),
            self.model.to_string_lossy().to_string(),
            "--output_file".to_string(),
            output_path.to_string_lossy().to_string(),
        ];
        if let Some(ref speaker) = self.speaker {
            args.push("--speaker".to_string());
            args.push(speaker.clone());
        }
        args
    }
}

impl SpeechSynthesizer for PiperSynthesizer {
    fn synthesize(&self, text: &str, output_path: &Path) -> Result<(), SynthesisError> {
        let args = self.build_args(output_path);

        tracing::debug!(
            "Running: {} {} (stdin: {} chars)",
            self.program.display(),
            args.join(" "),
            text.len()
        );

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| SynthesisError::SpawnFailed {
                program: self.program.display().to_string(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes())?;
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SynthesisError::EngineFailed {
                exit_code: output.status.code().unwrap_or(-1),
                message: stderr.trim().to_string(),
            });
        }

        if !output_path.exists() {
            return Err(SynthesisError::MissingOutput {
                path: output_path.to_path_buf(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_carry_model_and_output() {
        let synth = PiperSynthesizer::new("piper", "/voices/en_US-amy-medium.onnx");
        let args = synth.build_args(Path::new("/tmp/out.wav"));
        assert_eq!(
            args,
            vec![
                "--model",
                "/voices/en_US-amy-medium.onnx",
                "--output_file",
                "/tmp/out.wav",
            ]
        );
    }

    #[test]
    fn speaker_id_is_optional() {
        let synth =
            PiperSynthesizer::new("piper", "voice.onnx").with_speaker("3");
        let args = synth.build_args(Path::new("out.wav"));
        assert!(args.windows(2).any(|w| w == ["--speaker", "3"]));
    }

    #[test]
    fn missing_binary_is_a_spawn_failure() {
        let synth = PiperSynthesizer::new("/nonexistent/piper", "voice.onnx");
        let result = synth.synthesize("hello", Path::new("/tmp/never-written.wav"));
        assert!(matches!(result, Err(SynthesisError::SpawnFailed { .. })));
    }
}
