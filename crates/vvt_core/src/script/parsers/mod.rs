//! Narration script parsers.

mod bracket;
mod srt;

pub use bracket::parse_bracket;
pub use srt::parse_srt;

use std::fs;
use std::path::Path;

use crate::script::error::{ParseError, ScriptError};
use crate::script::types::{CueScript, ScriptFormat};

/// Parse script content in the given format.
pub fn parse_script(content: &str, format: ScriptFormat) -> Result<CueScript, ParseError> {
    match format {
        ScriptFormat::Bracket => parse_bracket(content),
        ScriptFormat::Srt => parse_srt(content),
    }
}

/// Load and parse a script file.
///
/// When `format` is `None`, the format is detected from the file
/// extension, falling back to content sniffing.
pub fn parse_script_file(
    path: &Path,
    format: Option<ScriptFormat>,
) -> Result<CueScript, ScriptError> {
    let content = fs::read_to_string(path).map_err(|e| ScriptError::read(path, e))?;

    let format = format
        .or_else(|| ScriptFormat::from_extension(path))
        .unwrap_or_else(|| ScriptFormat::sniff(&content));

    let mut script = parse_script(&content, format)?;
    script.source_path = Some(path.to_path_buf());
    Ok(script)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_on_format() {
        let bracket = "[0:00 - 0:02]\n\"Hi\"\n";
        let srt = "1\n00:00:00,000 --> 00:00:02,000\nHi\n";

        let a = parse_script(bracket, ScriptFormat::Bracket).unwrap();
        let b = parse_script(srt, ScriptFormat::Srt).unwrap();

        assert_eq!(a.cues, b.cues);
    }

    #[test]
    fn file_parsing_detects_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cues.srt");
        fs::write(&path, "1\n00:00:01,000 --> 00:00:02,000\nHello\n").unwrap();

        let script = parse_script_file(&path, None).unwrap();
        assert_eq!(script.format, ScriptFormat::Srt);
        assert_eq!(script.cues.len(), 1);
        assert_eq!(script.source_path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn file_parsing_sniffs_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cues.script_dump");
        fs::write(&path, "[0:00 - 0:02]\n\"Hi\"\n").unwrap();

        let script = parse_script_file(&path, None).unwrap();
        assert_eq!(script.format, ScriptFormat::Bracket);
    }
}
