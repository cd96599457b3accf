//! Pipeline context and state types.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::Settings;
use crate::script::{CueScript, ScriptFormat};
use crate::timeline::NarrationTrack;
use crate::toolkit::FfmpegToolkit;
use crate::tts::SpeechSynthesizer;
use crate::workspace::Workspace;

/// Progress callback type: (step_name, percent_complete, message).
pub type ProgressCallback = Box<dyn Fn(&str, u32, &str) + Send + Sync>;

/// Read-only context passed to pipeline steps.
///
/// Holds the job inputs and shared collaborators; mutable results go in
/// [`JobState`].
pub struct Context {
    /// Job name (used in logs and errors).
    pub job_name: String,
    /// Application settings.
    pub settings: Settings,
    /// Narration script file.
    pub script_path: PathBuf,
    /// Script format override (`None` = detect).
    pub script_format: Option<ScriptFormat>,
    /// Source video; `None` means narration-only export.
    pub video_path: Option<PathBuf>,
    /// Optional background music bed.
    pub music_path: Option<PathBuf>,
    /// Final deliverable path.
    pub output_path: PathBuf,
    /// Media toolkit.
    pub toolkit: FfmpegToolkit,
    /// Speech synthesis engine.
    pub synthesizer: Box<dyn SpeechSynthesizer>,
    /// Scratch space for intermediate artifacts.
    pub workspace: Workspace,
    cancel: Arc<AtomicBool>,
    progress_callback: Option<ProgressCallback>,
}

impl Context {
    /// Create a context for a job.
    pub fn new(
        job_name: impl Into<String>,
        settings: Settings,
        script_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
        toolkit: FfmpegToolkit,
        synthesizer: Box<dyn SpeechSynthesizer>,
        workspace: Workspace,
    ) -> Self {
        Self {
            job_name: job_name.into(),
            settings,
            script_path: script_path.into(),
            script_format: None,
            video_path: None,
            music_path: None,
            output_path: output_path.into(),
            toolkit,
            synthesizer,
            workspace,
            cancel: Arc::new(AtomicBool::new(false)),
            progress_callback: None,
        }
    }

    /// Set the source video.
    pub fn with_video(mut self, path: impl Into<PathBuf>) -> Self {
        self.video_path = Some(path.into());
        self
    }

    /// Set the background music bed.
    pub fn with_music(mut self, path: impl Into<PathBuf>) -> Self {
        self.music_path = Some(path.into());
        self
    }

    /// Pin the script format instead of detecting it.
    pub fn with_script_format(mut self, format: ScriptFormat) -> Self {
        self.script_format = Some(format);
        self
    }

    /// Set the progress callback.
    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    /// Get a cancellation handle for this job.
    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle {
            flag: Arc::clone(&self.cancel),
        }
    }

    /// Whether the job has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::SeqCst)
    }

    /// The raw cancellation flag, for wiring into the assembler.
    pub(crate) fn cancel_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }

    /// Report progress to the callback (if set).
    pub fn report_progress(&self, step_name: &str, percent: u32, message: &str) {
        if let Some(ref callback) = self.progress_callback {
            callback(step_name, percent, message);
        }
    }
}

/// Handle for cancelling a running job from another thread.
#[derive(Clone)]
pub struct CancelHandle {
    flag: Arc<AtomicBool>,
}

impl CancelHandle {
    /// Request cancellation at the next step/cue boundary.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

/// Outcome of a single step's execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Step completed its work.
    Success,
    /// Step decided it had nothing to do (not an error).
    Skipped(String),
}

/// Mutable job state that accumulates results from pipeline steps.
///
/// Steps add new data; they do not overwrite earlier steps' results.
#[derive(Debug, Default)]
pub struct JobState {
    /// Job identifier.
    pub job_id: String,
    /// When the job started (RFC 3339).
    pub started_at: Option<String>,
    /// Parsed narration script (from the Parse step).
    pub script: Option<CueScript>,
    /// Assembled narration track (from the Narration step).
    pub narration: Option<NarrationTrack>,
    /// Mixed track (from the Mix step; absent when the step was skipped).
    pub mixed_track: Option<PathBuf>,
    /// Delivered file (from the Mux step).
    pub output_file: Option<PathBuf>,
}

impl JobState {
    /// Create a new job state with the given ID.
    pub fn new(job_id: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            started_at: Some(chrono::Local::now().to_rfc3339()),
            ..Default::default()
        }
    }

    /// The audio track to deliver: the mix when it exists, the bare
    /// narration otherwise.
    pub fn final_audio(&self) -> Option<&Path> {
        self.mixed_track
            .as_deref()
            .or_else(|| self.narration.as_ref().map(|n| n.path.as_path()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_audio_prefers_the_mix() {
        let mut state = JobState::new("job");
        assert!(state.final_audio().is_none());

        state.narration = Some(NarrationTrack {
            path: PathBuf::from("narration.wav"),
            duration_ms: 1000.0,
        });
        assert_eq!(state.final_audio(), Some(Path::new("narration.wav")));

        state.mixed_track = Some(PathBuf::from("mixed.wav"));
        assert_eq!(state.final_audio(), Some(Path::new("mixed.wav")));
    }

    #[test]
    fn cancel_handle_flips_the_flag() {
        let flag = Arc::new(AtomicBool::new(false));
        let handle = CancelHandle {
            flag: Arc::clone(&flag),
        };
        assert!(!handle.is_cancelled());
        handle.cancel();
        assert!(flag.load(Ordering::SeqCst));
    }
}
