//! SRT subtitle parser.
//!
//! Parses SubRip (.srt) blocks into narration cues:
//!
//! ```text
//! 1
//! 00:00:01,000 --> 00:00:04,000
//! Hello, world!
//!
//! 2
//! 00:00:05,000 --> 00:00:08,000
//! Text may span
//! several lines.
//! ```
//!
//! Index numbers are ignored (regenerated on write). Multi-line text
//! collapses into a single line joined by spaces. Unlike lenient subtitle
//! tooling, a structurally broken block is a hard error here: a cue that
//! cannot be interpreted must abort the run before any synthesis starts.

use crate::script::error::ParseError;
use crate::script::types::{CueScript, NarrationCue, ScriptFormat};

/// Parse SRT content into a [`CueScript`].
pub fn parse_srt(content: &str) -> Result<CueScript, ParseError> {
    let mut script = CueScript::with_format(ScriptFormat::Srt);

    let content = content.replace("\r\n", "\n").replace('\r', "\n");

    // Best-effort line numbers: blocks are separated by one blank line.
    let mut line_offset = 0;

    for block in content.split("\n\n") {
        let lines: Vec<&str> = block.lines().collect();
        let block_start_line = line_offset + 1;
        line_offset += lines.len().max(1) + 1;

        if lines.iter().all(|l| l.trim().is_empty()) {
            continue;
        }

        let (timing_idx, timing_line) = match find_timing_line(&lines) {
            Some(found) => found,
            None => {
                return Err(ParseError::malformed(
                    block_start_line,
                    "cue block has no '<start> --> <end>' time range line",
                ));
            }
        };
        let timing_line_no = block_start_line + timing_idx;

        let (start_ms, end_ms) = parse_srt_timing(timing_line)
            .ok_or_else(|| ParseError::invalid_time(timing_line_no, timing_line.trim()))?;

        let text = normalize_text(&lines[timing_idx + 1..]);
        if text.is_empty() {
            return Err(ParseError::malformed(
                timing_line_no,
                "cue block has no text lines",
            ));
        }

        script.cues.push(NarrationCue::new(start_ms, end_ms, text));
    }

    if script.cues.is_empty() {
        return Err(ParseError::Empty);
    }

    Ok(script)
}

/// Find the timing line in a block (the index line before it is optional).
fn find_timing_line<'a>(lines: &[&'a str]) -> Option<(usize, &'a str)> {
    lines
        .iter()
        .enumerate()
        .find(|(_, line)| line.contains(" --> "))
        .map(|(i, line)| (i, *line))
}

/// Parse an SRT timing line: `HH:MM:SS,mmm --> HH:MM:SS,mmm`.
fn parse_srt_timing(line: &str) -> Option<(f64, f64)> {
    let parts: Vec<&str> = line.split(" --> ").collect();
    if parts.len() != 2 {
        return None;
    }
    Some((parse_srt_time(parts[0])?, parse_srt_time(parts[1])?))
}

/// Parse an SRT timestamp (`HH:MM:SS,mmm` or `HH:MM:SS.mmm`) into
/// milliseconds.
///
/// The comma millisecond separator is normalized to a decimal point
/// before numeric parsing, so the seconds field parses as one float.
pub(crate) fn parse_srt_time(s: &str) -> Option<f64> {
    let s = s.trim().replace(',', ".");

    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 3 {
        return None;
    }

    let hours: f64 = parts[0].parse().ok()?;
    let minutes: f64 = parts[1].parse().ok()?;
    let seconds: f64 = parts[2].parse().ok()?;
    if hours < 0.0 || minutes < 0.0 || seconds < 0.0 {
        return None;
    }

    Some(((hours * 60.0 + minutes) * 60.0 + seconds) * 1000.0)
}

/// Join text lines into one line with single spaces.
fn normalize_text(lines: &[&str]) -> String {
    lines
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_srt_times() {
        assert_eq!(parse_srt_time("00:00:00,000"), Some(0.0));
        assert_eq!(parse_srt_time("00:00:01,500"), Some(1500.0));
        assert_eq!(parse_srt_time("00:01:00,000"), Some(60000.0));
        assert_eq!(parse_srt_time("01:00:00,000"), Some(3600000.0));

        // Period accepted as millisecond separator too.
        assert_eq!(parse_srt_time("00:00:01.500"), Some(1500.0));

        assert_eq!(parse_srt_time("00:01"), None);
        assert_eq!(parse_srt_time("aa:bb:cc,ddd"), None);
    }

    #[test]
    fn parse_basic_srt() {
        let content = "1\n00:00:01,000 --> 00:00:04,000\nHello, world!\n\n2\n00:00:05,000 --> 00:00:08,000\nAnother cue.\n";
        let script = parse_srt(content).unwrap();

        assert_eq!(script.cues.len(), 2);
        assert_eq!(script.cues[0], NarrationCue::new(1000.0, 4000.0, "Hello, world!"));
        assert_eq!(script.cues[1], NarrationCue::new(5000.0, 8000.0, "Another cue."));
    }

    #[test]
    fn multiline_text_collapses_with_single_spaces() {
        let content = "1\n00:00:00,000 --> 00:00:03,000\nText split across\ntwo lines.\n";
        let script = parse_srt(content).unwrap();

        assert_eq!(script.cues.len(), 1);
        assert_eq!(script.cues[0].text, "Text split across two lines.");
    }

    #[test]
    fn index_line_is_optional() {
        let content = "00:00:01,000 --> 00:00:02,000\nNo index here.\n";
        let script = parse_srt(content).unwrap();
        assert_eq!(script.cues.len(), 1);
    }

    #[test]
    fn block_without_timing_is_malformed() {
        let content = "1\nJust some text\n";
        assert!(matches!(
            parse_srt(content),
            Err(ParseError::MalformedCue { .. })
        ));
    }

    #[test]
    fn block_without_text_is_malformed() {
        let content = "1\n00:00:01,000 --> 00:00:02,000\n";
        assert!(matches!(
            parse_srt(content),
            Err(ParseError::MalformedCue { .. })
        ));
    }

    #[test]
    fn bad_timestamp_is_invalid_time() {
        let content = "1\n00:00:xx,000 --> 00:00:02,000\nHi\n";
        assert!(matches!(
            parse_srt(content),
            Err(ParseError::InvalidTime { line: 2, .. })
        ));
    }

    #[test]
    fn empty_input_has_no_cues() {
        assert!(matches!(parse_srt(""), Err(ParseError::Empty)));
    }
}
