//! Narration script writers.
//!
//! Serialize a cue sequence back to its textual form. Round-tripping a
//! script through the matching writer and parser yields the same cue
//! sequence.

mod bracket;
mod srt;

pub use bracket::write_bracket;
pub use srt::{format_srt_time, write_srt};

use crate::script::types::{CueScript, RoundingMode, ScriptFormat};

/// Write a script in its own format.
pub fn write_script(script: &CueScript, rounding: RoundingMode) -> String {
    match script.format {
        ScriptFormat::Bracket => write_bracket(script),
        ScriptFormat::Srt => write_srt(script, rounding),
    }
}
