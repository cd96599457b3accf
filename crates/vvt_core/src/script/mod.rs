//! Narration cue model, parsers, and writers.
//!
//! A narration script is an ordered sequence of cues, each pairing a
//! timing window with the text spoken inside it. Two textual formats are
//! recognized: the bracket script format and SubRip subtitles. Both parse
//! into the same [`CueScript`], and both can be written back out for
//! round-tripping.

pub mod error;
pub mod parsers;
pub mod types;
pub mod writers;

pub use error::{ParseError, ScriptError, TimingError};
pub use parsers::{parse_script, parse_script_file};
pub use types::{CueScript, NarrationCue, RoundingMode, ScriptFormat};
pub use writers::write_script;
