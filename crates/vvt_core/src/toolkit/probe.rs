//! Media probing using ffprobe.

use std::path::Path;

use serde_json::Value;

use super::error::{ToolError, ToolResult};
use super::FfmpegToolkit;

impl FfmpegToolkit {
    /// Measure a media file's duration with ffprobe, in milliseconds.
    pub fn probe_duration_ms(&self, path: &Path) -> ToolResult<f64> {
        if !path.exists() {
            return Err(ToolError::InputNotFound(path.to_path_buf()));
        }

        let cmd = vec![
            "-v".to_string(),
            "error".to_string(),
            "-print_format".to_string(),
            "json".to_string(),
            "-show_format".to_string(),
            path.to_string_lossy().to_string(),
        ];

        let output = self.run_checked(&self.ffprobe, &cmd, None)?;
        parse_duration_ms(&output.stdout)
    }
}

/// Pull `format.duration` out of ffprobe's JSON output.
fn parse_duration_ms(stdout: &[u8]) -> ToolResult<f64> {
    let json: Value = serde_json::from_slice(stdout).map_err(|e| ToolError::OutputParse {
        tool: "ffprobe".to_string(),
        message: e.to_string(),
    })?;

    json.get("format")
        .and_then(|f| f.get("duration"))
        .and_then(|d| d.as_str())
        .and_then(|s| s.parse::<f64>().ok())
        .map(|secs| secs * 1000.0)
        .ok_or_else(|| ToolError::OutputParse {
            tool: "ffprobe".to_string(),
            message: "missing format.duration field".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_parses_from_format_section() {
        let json = br#"{"format": {"filename": "clip.wav", "duration": "2.500000"}}"#;
        let ms = parse_duration_ms(json).unwrap();
        assert!((ms - 2500.0).abs() < 0.001);
    }

    #[test]
    fn missing_duration_is_a_parse_error() {
        let json = br#"{"format": {"filename": "clip.wav"}}"#;
        assert!(matches!(
            parse_duration_ms(json),
            Err(ToolError::OutputParse { .. })
        ));
    }

    #[test]
    fn garbage_output_is_a_parse_error() {
        assert!(matches!(
            parse_duration_ms(b"not json"),
            Err(ToolError::OutputParse { .. })
        ));
    }
}
