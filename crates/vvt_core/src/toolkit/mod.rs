//! External media-toolkit (ffmpeg/ffprobe) invocation.
//!
//! Every invocation is a synchronous process call with explicit input and
//! output paths. Success means the process exited zero AND the declared
//! output file exists on disk; exit code 0 with a missing output counts
//! as a failure, so a silently-broken tool run can never feed the next
//! pipeline stage.

mod args;
mod audio;
mod error;
mod mux;
mod probe;

pub use error::{ToolError, ToolResult};

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::{AudioSettings, ToolSettings};

/// Default sample rate for assembled narration audio.
pub const DEFAULT_SAMPLE_RATE: u32 = 48_000;

/// Assembler-facing audio operations.
///
/// [`FfmpegToolkit`] is the production implementation; tests substitute a
/// mock so timeline logic can be exercised without external tools.
pub trait AudioBackend {
    /// Measured duration of an audio clip, in milliseconds.
    fn clip_duration_ms(&self, path: &Path) -> ToolResult<f64>;

    /// Write `duration_ms` of silence to `output`.
    fn generate_silence(&self, duration_ms: f64, output: &Path) -> ToolResult<()>;

    /// Re-encode `input` into `output`, cut to exactly `target_ms`
    /// measured from the head of the clip.
    fn trim_to(&self, input: &Path, target_ms: f64, output: &Path) -> ToolResult<()>;

    /// Re-encode `input` into `output`, extended with trailing silence to
    /// exactly `target_ms`.
    fn pad_to(&self, input: &Path, target_ms: f64, output: &Path) -> ToolResult<()>;

    /// Concatenate `segments` into `output`, preserving the given order.
    fn concat(&self, segments: &[PathBuf], output: &Path) -> ToolResult<()>;
}

/// Configured ffmpeg/ffprobe invoker.
///
/// Tool paths are explicit configuration passed in at construction, not
/// process-wide state.
#[derive(Debug, Clone)]
pub struct FfmpegToolkit {
    ffmpeg: PathBuf,
    ffprobe: PathBuf,
    sample_rate: u32,
}

impl FfmpegToolkit {
    /// Create a toolkit for the given ffmpeg/ffprobe binaries.
    pub fn new(ffmpeg: impl Into<PathBuf>, ffprobe: impl Into<PathBuf>) -> Self {
        Self {
            ffmpeg: ffmpeg.into(),
            ffprobe: ffprobe.into(),
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }

    /// Build from configuration.
    pub fn from_settings(tools: &ToolSettings, audio: &AudioSettings) -> Self {
        Self::new(&tools.ffmpeg_path, &tools.ffprobe_path).with_sample_rate(audio.sample_rate)
    }

    /// Override the narration sample rate.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Sample rate used for generated and re-encoded audio.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Run a command, checking exit status and the declared output file.
    fn run_checked(
        &self,
        program: &Path,
        args: &[String],
        declared_output: Option<&Path>,
    ) -> ToolResult<std::process::Output> {
        let tool = program
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("tool")
            .to_string();

        tracing::debug!("Running: {} {}", program.display(), args.join(" "));

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| ToolError::SpawnFailed {
                tool: tool.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ToolError::CommandFailed {
                tool,
                exit_code: output.status.code().unwrap_or(-1),
                message: stderr.trim().to_string(),
            });
        }

        if let Some(path) = declared_output {
            if !path.exists() {
                return Err(ToolError::MissingOutput {
                    tool,
                    path: path.to_path_buf(),
                });
            }
        }

        Ok(output)
    }
}
