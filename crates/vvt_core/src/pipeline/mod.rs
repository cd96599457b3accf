//! Job orchestration.
//!
//! A job runs as a fixed sequence of steps over a read-only [`Context`]
//! and a mutable [`JobState`]: Parse -> Narration -> Mix -> Mux. Each
//! step validates its inputs before running and its outputs after, and
//! cancellation is honored at every step boundary (and between cues
//! inside the narration step).

pub mod errors;
mod runner;
pub mod step;
pub mod steps;
pub mod types;

pub use errors::{PipelineError, PipelineResult, StepError, StepResult};
pub use runner::{Pipeline, PipelineRunResult};
pub use step::PipelineStep;
pub use types::{CancelHandle, Context, JobState, ProgressCallback, StepOutcome};

use std::path::PathBuf;

/// Build the standard narration pipeline.
pub fn standard_pipeline() -> Pipeline {
    Pipeline::new()
        .with_step(steps::ParseScriptStep)
        .with_step(steps::AssembleNarrationStep)
        .with_step(steps::MixMusicStep)
        .with_step(steps::MuxStep)
}

/// Run a complete job, returning the delivered file's path.
pub fn run_job(ctx: &Context) -> PipelineResult<PathBuf> {
    let mut state = JobState::new(&ctx.job_name);
    standard_pipeline().run(ctx, &mut state)?;

    match state.output_file {
        Some(path) => Ok(path),
        None => Err(PipelineError::step_failed(
            &ctx.job_name,
            "Mux",
            StepError::invalid_output("no delivered file recorded"),
        )),
    }
}
