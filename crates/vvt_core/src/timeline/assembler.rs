//! Timeline assembly.
//!
//! Walks cues in start order, filling timeline gaps with silence and
//! appending duration-conformed speech clips. The timeline grows
//! monotonically: after each cue the write position equals that cue's
//! end, so the finished track's length equals the last cue's end.
//!
//! Assembly is an inherently sequential fold — each cue's gap depends on
//! the cumulative length of everything written before it — so cues are
//! processed strictly in order.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::conform::conform_clip;
use super::error::AssemblyError;
use super::types::NarrationTrack;
use crate::script::CueScript;
use crate::toolkit::AudioBackend;
use crate::tts::SpeechSynthesizer;
use crate::workspace::Workspace;

/// Assembles a cue script into one narration track.
pub struct TimelineAssembler<'a> {
    backend: &'a dyn AudioBackend,
    synthesizer: &'a dyn SpeechSynthesizer,
    workspace: &'a Workspace,
    cancel: Option<Arc<AtomicBool>>,
}

impl<'a> TimelineAssembler<'a> {
    /// Create an assembler over the given collaborators.
    pub fn new(
        backend: &'a dyn AudioBackend,
        synthesizer: &'a dyn SpeechSynthesizer,
        workspace: &'a Workspace,
    ) -> Self {
        Self {
            backend,
            synthesizer,
            workspace,
            cancel: None,
        }
    }

    /// Attach a cooperative cancellation flag, checked before each cue.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .map(|flag| flag.load(Ordering::SeqCst))
            .unwrap_or(false)
    }

    /// Assemble the narration timeline for `script` into `output`.
    ///
    /// The cue sequence is validated before any synthesis starts; a
    /// single cue's synthesis failure aborts the whole assembly with the
    /// cue's index.
    pub fn assemble(
        &self,
        script: &CueScript,
        output: &Path,
    ) -> Result<NarrationTrack, AssemblyError> {
        if script.is_empty() {
            return Err(AssemblyError::NoCues);
        }
        script.validate()?;

        let mut current_len_ms = 0.0_f64;
        let mut segments: Vec<PathBuf> = Vec::with_capacity(script.len() * 2);

        for (index, cue) in script.cues.iter().enumerate() {
            if self.is_cancelled() {
                return Err(AssemblyError::Cancelled { index });
            }

            // validate() guarantees the window never starts behind the
            // write position.
            let gap_ms = cue.start_ms - current_len_ms;
            debug_assert!(gap_ms >= 0.0);
            if gap_ms > 0.0 {
                let silence = self.workspace.alloc("gap", "wav");
                self.backend.generate_silence(gap_ms, &silence)?;
                tracing::debug!("Cue {}: {:.1}ms silence gap", index, gap_ms);
                segments.push(silence);
            }

            let raw = self.workspace.alloc("speech", "wav");
            self.synthesizer
                .synthesize(&cue.text, &raw)
                .map_err(|source| AssemblyError::Synthesis { index, source })?;

            let conformed = self.workspace.alloc("conformed", "wav");
            let (clip, action) = conform_clip(self.backend, &raw, cue.duration_ms(), &conformed)?;
            tracing::debug!(
                "Cue {}: \"{}\" -> {:.1}ms window ({:?})",
                index,
                cue.text,
                clip.duration_ms,
                action
            );
            segments.push(clip.path);

            current_len_ms = cue.end_ms;
        }

        self.backend.concat(&segments, output)?;

        tracing::info!(
            "Assembled {} cues into {} ({:.1}ms)",
            script.len(),
            output.display(),
            current_len_ms
        );

        Ok(NarrationTrack {
            path: output.to_path_buf(),
            duration_ms: current_len_ms,
        })
    }
}
