//! Concrete pipeline steps: Parse -> Narration -> Mix -> Mux.

mod mix;
mod mux;
mod narration;
mod parse;

pub use mix::MixMusicStep;
pub use mux::MuxStep;
pub use narration::AssembleNarrationStep;
pub use parse::ParseScriptStep;
