//! Audio/video remux and audio export.

use std::path::Path;

use super::args;
use super::error::{ToolError, ToolResult};
use super::FfmpegToolkit;

impl FfmpegToolkit {
    /// Replace `video`'s audio with `audio`, writing to `output`.
    ///
    /// The video stream is copied without re-encoding; the audio stream is
    /// encoded fresh. Output duration follows the shortest stream, so a
    /// narration track shorter than the video truncates the output rather
    /// than freezing on the last frame.
    pub fn remux(&self, video: &Path, audio: &Path, output: &Path) -> ToolResult<()> {
        if !video.exists() {
            return Err(ToolError::InputNotFound(video.to_path_buf()));
        }
        if !audio.exists() {
            return Err(ToolError::InputNotFound(audio.to_path_buf()));
        }

        let cmd = args::remux_args(video, audio, output);
        self.run_checked(&self.ffmpeg, &cmd, Some(output))?;

        tracing::info!(
            "Muxed {} + {} -> {}",
            video.display(),
            audio.display(),
            output.display()
        );
        Ok(())
    }

    /// Encode an audio file into the container implied by `output`'s
    /// extension (narration-only export).
    pub fn encode_audio(&self, input: &Path, output: &Path) -> ToolResult<()> {
        if !input.exists() {
            return Err(ToolError::InputNotFound(input.to_path_buf()));
        }

        let cmd = args::encode_args(input, output);
        self.run_checked(&self.ffmpeg, &cmd, Some(output))?;

        tracing::info!("Exported audio {} -> {}", input.display(), output.display());
        Ok(())
    }
}
