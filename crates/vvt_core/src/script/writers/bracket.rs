//! Bracket-script writer.

use crate::script::types::CueScript;

/// Write a cue sequence in bracket-script form.
pub fn write_bracket(script: &CueScript) -> String {
    let mut output = String::new();

    for (i, cue) in script.cues.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format!(
            "[{} - {}]\n",
            format_clock_time(cue.start_ms),
            format_clock_time(cue.end_ms)
        ));
        output.push_str(&format!("\"{}\"\n", cue.text));
    }

    output
}

/// Format milliseconds as a `minutes:seconds` clock time.
///
/// Whole seconds print as `M:SS`; fractional seconds keep three decimal
/// places (`M:SS.sss`), matching what the parser accepts.
pub(crate) fn format_clock_time(ms: f64) -> String {
    let ms = ms.max(0.0);
    let mut minutes = (ms / 60_000.0).floor() as u64;
    let mut seconds = (ms - minutes as f64 * 60_000.0) / 1000.0;
    if seconds >= 60.0 {
        minutes += 1;
        seconds -= 60.0;
    }

    if (seconds - seconds.round()).abs() < 1e-4 {
        format!("{}:{:02}", minutes, seconds.round() as u64)
    } else {
        format!("{}:{:06.3}", minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::types::{NarrationCue, ScriptFormat};

    #[test]
    fn clock_time_formatting() {
        assert_eq!(format_clock_time(0.0), "0:00");
        assert_eq!(format_clock_time(5000.0), "0:05");
        assert_eq!(format_clock_time(90000.0), "1:30");
        assert_eq!(format_clock_time(600000.0), "10:00");
        assert_eq!(format_clock_time(2500.0), "0:02.500");
    }

    #[test]
    fn writes_blocks_in_script_order() {
        let mut script = CueScript::with_format(ScriptFormat::Bracket);
        script.cues.push(NarrationCue::new(0.0, 2000.0, "Hi"));
        script.cues.push(NarrationCue::new(3000.0, 5000.0, "Bye"));

        let text = write_bracket(&script);
        assert_eq!(text, "[0:00 - 0:02]\n\"Hi\"\n\n[0:03 - 0:05]\n\"Bye\"\n");
    }
}
