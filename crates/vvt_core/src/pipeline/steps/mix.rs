//! Background-music mix step.

use crate::mixer::{mix_tracks, MixSpec};
use crate::pipeline::errors::{StepError, StepResult};
use crate::pipeline::step::PipelineStep;
use crate::pipeline::types::{Context, JobState, StepOutcome};

/// Overlays the configured music bed under the narration.
///
/// Skipped entirely when no music is configured; the narration track
/// then flows to the mux step untouched.
pub struct MixMusicStep;

impl PipelineStep for MixMusicStep {
    fn name(&self) -> &str {
        "Mix"
    }

    fn validate_input(&self, ctx: &Context, state: &JobState) -> StepResult<()> {
        if state.narration.is_none() {
            return Err(StepError::invalid_input("narration has not been assembled"));
        }
        if let Some(ref music) = ctx.music_path {
            if !music.exists() {
                return Err(StepError::invalid_input(format!(
                    "music file not found: {}",
                    music.display()
                )));
            }
        }
        Ok(())
    }

    fn execute(&self, ctx: &Context, state: &mut JobState) -> StepResult<StepOutcome> {
        let music = match ctx.music_path {
            Some(ref music) => music,
            None => {
                return Ok(StepOutcome::Skipped(
                    "no background music configured".to_string(),
                ))
            }
        };

        let narration = state
            .narration
            .as_ref()
            .ok_or_else(|| StepError::invalid_input("narration has not been assembled"))?;

        let spec = MixSpec::from_settings(&ctx.settings.audio);
        let output = ctx.workspace.alloc("mixed", "wav");
        let mixed = mix_tracks(&ctx.toolkit, narration, Some(music.as_path()), &spec, &output)?;

        state.mixed_track = Some(mixed);
        Ok(StepOutcome::Success)
    }

    fn validate_output(&self, _ctx: &Context, state: &JobState) -> StepResult<()> {
        match state.mixed_track {
            Some(ref path) if path.exists() => Ok(()),
            Some(ref path) => Err(StepError::invalid_output(format!(
                "mixed track missing on disk: {}",
                path.display()
            ))),
            None => Err(StepError::invalid_output("no mixed track recorded")),
        }
    }
}
