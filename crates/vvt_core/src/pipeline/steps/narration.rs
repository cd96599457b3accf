//! Narration assembly step.

use crate::pipeline::errors::{StepError, StepResult};
use crate::pipeline::step::PipelineStep;
use crate::pipeline::types::{Context, JobState, StepOutcome};
use crate::timeline::TimelineAssembler;

/// Synthesizes every cue and assembles the gap-correct narration track.
pub struct AssembleNarrationStep;

impl PipelineStep for AssembleNarrationStep {
    fn name(&self) -> &str {
        "Narration"
    }

    fn validate_input(&self, _ctx: &Context, state: &JobState) -> StepResult<()> {
        match state.script {
            Some(ref script) if !script.is_empty() => Ok(()),
            _ => Err(StepError::invalid_input("script has not been parsed")),
        }
    }

    fn execute(&self, ctx: &Context, state: &mut JobState) -> StepResult<StepOutcome> {
        let script = state
            .script
            .as_ref()
            .ok_or_else(|| StepError::invalid_input("script has not been parsed"))?;

        let output = ctx.workspace.alloc("narration", "wav");
        let assembler =
            TimelineAssembler::new(&ctx.toolkit, ctx.synthesizer.as_ref(), &ctx.workspace)
                .with_cancel_flag(ctx.cancel_flag());

        let track = assembler.assemble(script, &output)?;
        state.narration = Some(track);
        Ok(StepOutcome::Success)
    }

    fn validate_output(&self, _ctx: &Context, state: &JobState) -> StepResult<()> {
        match state.narration {
            Some(ref track) if track.path.exists() => Ok(()),
            Some(ref track) => Err(StepError::invalid_output(format!(
                "narration track missing on disk: {}",
                track.path.display()
            ))),
            None => Err(StepError::invalid_output("no narration track recorded")),
        }
    }
}
