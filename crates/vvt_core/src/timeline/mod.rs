//! Narration timeline construction.
//!
//! The two halves of the core: duration conformance (forcing each
//! synthesized clip to exactly its cue window) and timeline assembly
//! (folding cues into one gap-correct audio track).

mod assembler;
mod conform;
mod error;
mod types;

pub use assembler::TimelineAssembler;
pub use conform::{conform_clip, ConformAction, DURATION_TOLERANCE_MS};
pub use error::AssemblyError;
pub use types::{ConformedClip, NarrationTrack};
