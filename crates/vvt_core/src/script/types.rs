//! Core narration cue types.
//!
//! All timing values are stored as `f64` milliseconds. Fractional input
//! times are preserved exactly; rounding to whole milliseconds (SRT)
//! happens only at write time.

use std::path::{Path, PathBuf};

use crate::script::error::TimingError;

/// Supported narration script formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptFormat {
    /// Bracket script: `[<start> - <end>]` followed by a quoted line.
    #[default]
    Bracket,
    /// SubRip (.srt) subtitles.
    Srt,
}

impl ScriptFormat {
    /// Detect format from file extension.
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "srt" => Some(Self::Srt),
            "txt" | "script" => Some(Self::Bracket),
            _ => None,
        }
    }

    /// Detect format from content: the SRT timing arrow wins, anything
    /// else is treated as a bracket script.
    pub fn sniff(content: &str) -> Self {
        if content.contains(" --> ") {
            Self::Srt
        } else {
            Self::Bracket
        }
    }

    /// Get the typical file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Bracket => "txt",
            Self::Srt => "srt",
        }
    }
}

/// A single timed narration instruction: a window plus the text spoken
/// inside it.
///
/// Created once by a parser, immutable thereafter, consumed exactly once
/// by the timeline assembler.
#[derive(Debug, Clone, PartialEq)]
pub struct NarrationCue {
    /// Window start in milliseconds.
    pub start_ms: f64,
    /// Window end in milliseconds. Must be greater than `start_ms`.
    pub end_ms: f64,
    /// Narration text, a single line (line breaks collapse at parse time).
    pub text: String,
}

impl NarrationCue {
    /// Create a new cue.
    pub fn new(start_ms: f64, end_ms: f64, text: impl Into<String>) -> Self {
        Self {
            start_ms,
            end_ms,
            text: text.into(),
        }
    }

    /// Window length in milliseconds.
    pub fn duration_ms(&self) -> f64 {
        self.end_ms - self.start_ms
    }
}

/// An ordered narration script.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CueScript {
    /// Cues in parse order.
    pub cues: Vec<NarrationCue>,
    /// Format the script was parsed from (used again at write time).
    pub format: ScriptFormat,
    /// Source file path (if loaded from a file).
    pub source_path: Option<PathBuf>,
}

impl CueScript {
    /// Create an empty script with the given format.
    pub fn with_format(format: ScriptFormat) -> Self {
        Self {
            format,
            ..Default::default()
        }
    }

    /// Number of cues.
    pub fn len(&self) -> usize {
        self.cues.len()
    }

    /// Whether the script has no cues.
    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    /// End of the last cue, i.e. the length of a gap-correct narration
    /// timeline built from this script.
    pub fn total_duration_ms(&self) -> f64 {
        self.cues.last().map(|c| c.end_ms).unwrap_or(0.0)
    }

    /// Check the cue-sequence invariants: every window is non-empty,
    /// windows ascend, and no window starts before the previous one ends.
    pub fn validate(&self) -> Result<(), TimingError> {
        let mut prev_end_ms: Option<f64> = None;

        for (index, cue) in self.cues.iter().enumerate() {
            if cue.end_ms <= cue.start_ms {
                return Err(TimingError::EmptyWindow {
                    index,
                    start_ms: cue.start_ms,
                    end_ms: cue.end_ms,
                });
            }
            if let Some(prev_end_ms) = prev_end_ms {
                if cue.start_ms < prev_end_ms {
                    return Err(TimingError::Overlap {
                        index,
                        start_ms: cue.start_ms,
                        prev_end_ms,
                    });
                }
            }
            prev_end_ms = Some(cue.end_ms);
        }

        Ok(())
    }
}

/// Rounding mode for time values when writing SRT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundingMode {
    /// Round down (floor).
    Floor,
    /// Round to nearest.
    #[default]
    Round,
    /// Round up (ceil).
    Ceil,
}

impl RoundingMode {
    /// Apply rounding to a millisecond value.
    pub fn apply(&self, ms: f64) -> f64 {
        match self {
            Self::Floor => ms.floor(),
            Self::Round => ms.round(),
            Self::Ceil => ms.ceil(),
        }
    }
}
