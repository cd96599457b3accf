//! Audio operations on the ffmpeg toolkit.

use std::fs;
use std::path::{Path, PathBuf};

use super::args;
use super::error::{ToolError, ToolResult};
use super::{AudioBackend, FfmpegToolkit};
use crate::mixer::MixSpec;

impl AudioBackend for FfmpegToolkit {
    fn clip_duration_ms(&self, path: &Path) -> ToolResult<f64> {
        self.probe_duration_ms(path)
    }

    fn generate_silence(&self, duration_ms: f64, output: &Path) -> ToolResult<()> {
        let cmd = args::silence_args(duration_ms, self.sample_rate, output);
        self.run_checked(&self.ffmpeg, &cmd, Some(output))?;
        Ok(())
    }

    fn trim_to(&self, input: &Path, target_ms: f64, output: &Path) -> ToolResult<()> {
        if !input.exists() {
            return Err(ToolError::InputNotFound(input.to_path_buf()));
        }
        let cmd = args::trim_args(input, target_ms, self.sample_rate, output);
        self.run_checked(&self.ffmpeg, &cmd, Some(output))?;
        Ok(())
    }

    fn pad_to(&self, input: &Path, target_ms: f64, output: &Path) -> ToolResult<()> {
        if !input.exists() {
            return Err(ToolError::InputNotFound(input.to_path_buf()));
        }
        let cmd = args::pad_args(input, target_ms, self.sample_rate, output);
        self.run_checked(&self.ffmpeg, &cmd, Some(output))?;
        Ok(())
    }

    fn concat(&self, segments: &[PathBuf], output: &Path) -> ToolResult<()> {
        let list_path = write_concat_list(segments, output)?;
        let cmd = args::concat_args(&list_path, self.sample_rate, output);
        self.run_checked(&self.ffmpeg, &cmd, Some(output))?;
        Ok(())
    }
}

impl FfmpegToolkit {
    /// Mix `music` under `narration` according to `spec`.
    pub fn mix(
        &self,
        narration: &Path,
        music: &Path,
        spec: &MixSpec,
        output: &Path,
    ) -> ToolResult<()> {
        if !music.exists() {
            return Err(ToolError::InputNotFound(music.to_path_buf()));
        }
        let cmd = args::mix_args(narration, music, spec, self.sample_rate, output);
        self.run_checked(&self.ffmpeg, &cmd, Some(output))?;
        tracing::info!(
            "Mixed music bed {} under {}",
            music.display(),
            narration.display()
        );
        Ok(())
    }
}

/// Write the concat-demuxer list file next to the output.
///
/// Segment paths go in as absolute paths, one `file '...'` directive per
/// line, in append order.
fn write_concat_list(segments: &[PathBuf], output: &Path) -> ToolResult<PathBuf> {
    let list_path = output.with_extension("list.txt");

    let mut list = String::new();
    for segment in segments {
        let escaped = segment.to_string_lossy().replace('\'', "'\\''");
        list.push_str(&format!("file '{}'\n", escaped));
    }

    fs::write(&list_path, list).map_err(|source| ToolError::Io {
        path: list_path.clone(),
        source,
    })?;

    Ok(list_path)
}
