//! Bracket-script parser.
//!
//! The bracket script format pairs a timing window with a quoted
//! narration line:
//!
//! ```text
//! [0:00 - 0:05]
//! "Welcome to the tour."
//!
//! [0:06 - 0:12.5]
//! "On your left, the old mill."
//! ```
//!
//! Times are `minutes:seconds`; fractional seconds are allowed and
//! preserved. Quoted text may span several lines; line breaks inside the
//! quotes collapse into single spaces.

use crate::script::error::ParseError;
use crate::script::types::{CueScript, NarrationCue, ScriptFormat};

/// Parse bracket-script content into a [`CueScript`].
pub fn parse_bracket(content: &str) -> Result<CueScript, ParseError> {
    let mut script = CueScript::with_format(ScriptFormat::Bracket);
    let lines: Vec<&str> = content.lines().collect();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i].trim();
        if line.is_empty() {
            i += 1;
            continue;
        }

        // Line numbers are 1-based in errors.
        let range_line_no = i + 1;
        let range = line
            .strip_prefix('[')
            .and_then(|r| r.strip_suffix(']'))
            .ok_or_else(|| {
                ParseError::malformed(range_line_no, "expected a '[<start> - <end>]' time range")
            })?;
        let (start_ms, end_ms) = parse_time_range(range, range_line_no)?;

        // The next non-blank line must open the quoted narration text.
        i += 1;
        while i < lines.len() && lines[i].trim().is_empty() {
            i += 1;
        }
        if i >= lines.len() {
            return Err(ParseError::malformed(
                range_line_no,
                "time range has no quoted narration line",
            ));
        }

        let text_line_no = i + 1;
        let first = lines[i].trim();
        if !first.starts_with('"') {
            return Err(ParseError::malformed(
                text_line_no,
                "expected a quoted narration line",
            ));
        }

        let mut pieces: Vec<&str> = Vec::new();
        let mut fragment = &first[1..];
        let mut closed = false;
        loop {
            if let Some(stripped) = fragment.strip_suffix('"') {
                pieces.push(stripped);
                closed = true;
                i += 1;
                break;
            }
            pieces.push(fragment);
            i += 1;
            if i >= lines.len() {
                break;
            }
            fragment = lines[i].trim();
        }
        if !closed {
            return Err(ParseError::malformed(
                text_line_no,
                "unterminated quoted narration line",
            ));
        }

        let text = normalize_text(&pieces);
        if text.is_empty() {
            return Err(ParseError::malformed(text_line_no, "narration text is empty"));
        }

        script.cues.push(NarrationCue::new(start_ms, end_ms, text));
    }

    if script.cues.is_empty() {
        return Err(ParseError::Empty);
    }

    Ok(script)
}

/// Split a `<start> - <end>` range into two clock times.
fn parse_time_range(range: &str, line_no: usize) -> Result<(f64, f64), ParseError> {
    let tokens: Vec<&str> = range.split(" - ").collect();
    if tokens.len() != 2 {
        return Err(ParseError::malformed(
            line_no,
            format!("time range '{}' must be '<start> - <end>'", range.trim()),
        ));
    }

    let start = parse_clock_time(tokens[0])
        .ok_or_else(|| ParseError::invalid_time(line_no, tokens[0].trim()))?;
    let end = parse_clock_time(tokens[1])
        .ok_or_else(|| ParseError::invalid_time(line_no, tokens[1].trim()))?;

    Ok((start, end))
}

/// Parse a `minutes:seconds` clock time into milliseconds.
///
/// Fractional seconds are allowed (`1:23.5`).
pub(crate) fn parse_clock_time(s: &str) -> Option<f64> {
    let (minutes, seconds) = s.trim().split_once(':')?;
    let minutes: f64 = minutes.trim().parse().ok()?;
    let seconds: f64 = seconds.trim().parse().ok()?;
    if minutes < 0.0 || seconds < 0.0 {
        return None;
    }
    Some((minutes * 60.0 + seconds) * 1000.0)
}

/// Join text fragments into one line with single spaces.
fn normalize_text(pieces: &[&str]) -> String {
    pieces
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_clock_times() {
        assert_eq!(parse_clock_time("0:00"), Some(0.0));
        assert_eq!(parse_clock_time("0:05"), Some(5000.0));
        assert_eq!(parse_clock_time("1:30"), Some(90000.0));
        assert_eq!(parse_clock_time("0:02.5"), Some(2500.0));
        assert_eq!(parse_clock_time("10:00"), Some(600000.0));

        assert_eq!(parse_clock_time("abc"), None);
        assert_eq!(parse_clock_time("1"), None);
        assert_eq!(parse_clock_time("-1:00"), None);
    }

    #[test]
    fn parse_basic_script() {
        let content = "[0:00 - 0:02]\n\"Hi\"\n\n[0:03 - 0:05]\n\"Bye\"\n";
        let script = parse_bracket(content).unwrap();

        assert_eq!(script.cues.len(), 2);
        assert_eq!(script.cues[0], NarrationCue::new(0.0, 2000.0, "Hi"));
        assert_eq!(script.cues[1], NarrationCue::new(3000.0, 5000.0, "Bye"));
        assert_eq!(script.total_duration_ms(), 5000.0);
    }

    #[test]
    fn fractional_seconds_are_preserved() {
        let content = "[0:01.25 - 0:03.75]\n\"Precise\"\n";
        let script = parse_bracket(content).unwrap();
        assert_eq!(script.cues[0].start_ms, 1250.0);
        assert_eq!(script.cues[0].end_ms, 3750.0);
    }

    #[test]
    fn multiline_quote_collapses_to_one_line() {
        let content = "[0:00 - 0:10]\n\"This narration\nspans two lines\"\n";
        let script = parse_bracket(content).unwrap();
        assert_eq!(script.cues[0].text, "This narration spans two lines");
    }

    #[test]
    fn missing_quoted_line_is_malformed() {
        let content = "[0:00 - 0:02]\nHi there\n";
        assert!(matches!(
            parse_bracket(content),
            Err(ParseError::MalformedCue { line: 2, .. })
        ));
    }

    #[test]
    fn range_without_separator_is_malformed() {
        let content = "[0:00 0:02]\n\"Hi\"\n";
        assert!(matches!(
            parse_bracket(content),
            Err(ParseError::MalformedCue { line: 1, .. })
        ));
    }

    #[test]
    fn bad_time_token_is_invalid_time() {
        let content = "[0:00 - nope]\n\"Hi\"\n";
        assert!(matches!(
            parse_bracket(content),
            Err(ParseError::InvalidTime { line: 1, .. })
        ));
    }

    #[test]
    fn trailing_range_without_text_is_malformed() {
        let content = "[0:00 - 0:02]\n\"Hi\"\n\n[0:03 - 0:05]\n";
        assert!(matches!(
            parse_bracket(content),
            Err(ParseError::MalformedCue { line: 4, .. })
        ));
    }

    #[test]
    fn empty_input_has_no_cues() {
        assert!(matches!(parse_bracket(""), Err(ParseError::Empty)));
        assert!(matches!(parse_bracket("\n\n"), Err(ParseError::Empty)));
    }
}
