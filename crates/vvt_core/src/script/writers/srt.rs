//! SRT subtitle writer.
//!
//! SRT timing is millisecond-precise (`HH:MM:SS,mmm`); internal float
//! milliseconds are rounded according to the configured [`RoundingMode`]
//! at write time. Indices are regenerated 1-based.

use crate::script::types::{CueScript, RoundingMode};

/// Write a cue sequence in SRT form.
pub fn write_srt(script: &CueScript, rounding: RoundingMode) -> String {
    let mut output = String::new();

    for (i, cue) in script.cues.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format!("{}\n", i + 1));
        output.push_str(&format!(
            "{} --> {}\n",
            format_srt_time(cue.start_ms, rounding),
            format_srt_time(cue.end_ms, rounding)
        ));
        output.push_str(&cue.text);
        output.push('\n');
    }

    output
}

/// Format milliseconds as an SRT timestamp (`HH:MM:SS,mmm`).
pub fn format_srt_time(ms: f64, rounding: RoundingMode) -> String {
    let ms = rounding.apply(ms).max(0.0) as u64;

    let millis = ms % 1000;
    let total_secs = ms / 1000;
    let secs = total_secs % 60;
    let total_mins = total_secs / 60;
    let mins = total_mins % 60;
    let hours = total_mins / 60;

    format!("{:02}:{:02}:{:02},{:03}", hours, mins, secs, millis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::types::{NarrationCue, ScriptFormat};

    #[test]
    fn srt_time_formatting() {
        assert_eq!(format_srt_time(0.0, RoundingMode::Round), "00:00:00,000");
        assert_eq!(format_srt_time(1500.0, RoundingMode::Round), "00:00:01,500");
        assert_eq!(format_srt_time(60000.0, RoundingMode::Round), "00:01:00,000");
        assert_eq!(
            format_srt_time(3600000.0, RoundingMode::Round),
            "01:00:00,000"
        );

        assert_eq!(format_srt_time(1234.5, RoundingMode::Floor), "00:00:01,234");
        assert_eq!(format_srt_time(1234.5, RoundingMode::Round), "00:00:01,235");
        assert_eq!(format_srt_time(1234.2, RoundingMode::Ceil), "00:00:01,235");
    }

    #[test]
    fn writes_indexed_blocks() {
        let mut script = CueScript::with_format(ScriptFormat::Srt);
        script.cues.push(NarrationCue::new(1000.0, 4000.0, "Hello, world!"));
        script.cues.push(NarrationCue::new(5000.0, 8000.0, "Another cue."));

        let text = write_srt(&script, RoundingMode::Round);
        assert_eq!(
            text,
            "1\n00:00:01,000 --> 00:00:04,000\nHello, world!\n\n2\n00:00:05,000 --> 00:00:08,000\nAnother cue.\n"
        );
    }
}
