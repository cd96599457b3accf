//! Timeline assembly errors.

use crate::script::TimingError;
use crate::toolkit::ToolError;
use crate::tts::SynthesisError;

/// Errors that abort timeline assembly.
///
/// Assembly is all-or-nothing: a partial timeline is meaningless because
/// every later cue's placement depends on the cumulative length written
/// so far, so any failure surfaces the offending cue and aborts.
#[derive(Debug, thiserror::Error)]
pub enum AssemblyError {
    /// The cue sequence violates the timing invariants.
    #[error("Timing violation: {0}")]
    Timing(#[from] TimingError),

    /// Speech synthesis failed for a specific cue.
    #[error("Speech synthesis failed for cue {index}: {source}")]
    Synthesis {
        index: usize,
        #[source]
        source: SynthesisError,
    },

    /// A media-toolkit call failed.
    #[error("Media toolkit failure: {0}")]
    Tool(#[from] ToolError),

    /// Cooperative cancellation between cues.
    #[error("Assembly cancelled at cue {index}")]
    Cancelled { index: usize },

    /// Nothing to assemble.
    #[error("Cannot assemble an empty cue sequence")]
    NoCues,
}
