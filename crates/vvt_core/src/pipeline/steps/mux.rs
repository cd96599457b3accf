//! Final delivery step.
//!
//! With a source video: replaces its audio with the finished track,
//! copying the video stream bit-exact. Without one: exports the finished
//! audio track itself (narration-only job).

use std::fs;

use crate::pipeline::errors::{StepError, StepResult};
use crate::pipeline::step::PipelineStep;
use crate::pipeline::types::{Context, JobState, StepOutcome};

/// Muxes the finished audio onto the source video, or exports the audio.
pub struct MuxStep;

impl PipelineStep for MuxStep {
    fn name(&self) -> &str {
        "Mux"
    }

    fn validate_input(&self, ctx: &Context, state: &JobState) -> StepResult<()> {
        if state.final_audio().is_none() {
            return Err(StepError::invalid_input("no finished audio track"));
        }
        if let Some(ref video) = ctx.video_path {
            if !video.exists() {
                return Err(StepError::invalid_input(format!(
                    "video file not found: {}",
                    video.display()
                )));
            }
        }
        Ok(())
    }

    fn execute(&self, ctx: &Context, state: &mut JobState) -> StepResult<StepOutcome> {
        let audio = state
            .final_audio()
            .ok_or_else(|| StepError::invalid_input("no finished audio track"))?
            .to_path_buf();

        if let Some(parent) = ctx.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| StepError::io("create output directory", e))?;
            }
        }

        match ctx.video_path {
            Some(ref video) => {
                ctx.toolkit.remux(video, &audio, &ctx.output_path)?;
            }
            None => {
                ctx.toolkit.encode_audio(&audio, &ctx.output_path)?;
            }
        }

        state.output_file = Some(ctx.output_path.clone());
        Ok(StepOutcome::Success)
    }

    fn validate_output(&self, _ctx: &Context, state: &JobState) -> StepResult<()> {
        match state.output_file {
            Some(ref path) if path.exists() => Ok(()),
            Some(ref path) => Err(StepError::invalid_output(format!(
                "delivered file missing on disk: {}",
                path.display()
            ))),
            None => Err(StepError::invalid_output("no delivered file recorded")),
        }
    }
}
