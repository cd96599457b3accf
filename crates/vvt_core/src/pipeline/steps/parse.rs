//! Script parsing step.

use crate::pipeline::errors::{StepError, StepResult};
use crate::pipeline::step::PipelineStep;
use crate::pipeline::types::{Context, JobState, StepOutcome};
use crate::script::{self, ScriptError};

/// Parses the narration script and validates its timing invariants.
///
/// All parse and timing failures happen here, before any synthesis.
pub struct ParseScriptStep;

impl PipelineStep for ParseScriptStep {
    fn name(&self) -> &str {
        "Parse"
    }

    fn validate_input(&self, ctx: &Context, _state: &JobState) -> StepResult<()> {
        if !ctx.script_path.exists() {
            return Err(StepError::invalid_input(format!(
                "script file not found: {}",
                ctx.script_path.display()
            )));
        }
        Ok(())
    }

    fn execute(&self, ctx: &Context, state: &mut JobState) -> StepResult<StepOutcome> {
        let script = script::parse_script_file(&ctx.script_path, ctx.script_format)?;
        script.validate().map_err(ScriptError::from)?;

        tracing::info!(
            "Parsed {} cues, {:.1}s timeline ({:?} format)",
            script.len(),
            script.total_duration_ms() / 1000.0,
            script.format
        );

        state.script = Some(script);
        Ok(StepOutcome::Success)
    }

    fn validate_output(&self, _ctx: &Context, state: &JobState) -> StepResult<()> {
        match state.script {
            Some(ref script) if !script.is_empty() => Ok(()),
            _ => Err(StepError::invalid_output("no cues were parsed")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::toolkit::FfmpegToolkit;
    use crate::tts::{SpeechSynthesizer, SynthesisError};
    use crate::workspace::Workspace;

    struct NullSynthesizer;

    impl SpeechSynthesizer for NullSynthesizer {
        fn synthesize(
            &self,
            _text: &str,
            _output_path: &std::path::Path,
        ) -> Result<(), SynthesisError> {
            Ok(())
        }
    }

    fn context_for(script_path: &std::path::Path, root: &std::path::Path) -> Context {
        Context::new(
            "parse_test",
            Settings::default(),
            script_path,
            root.join("out.mp4"),
            FfmpegToolkit::new("ffmpeg", "ffprobe"),
            Box::new(NullSynthesizer),
            Workspace::new(root).unwrap(),
        )
    }

    #[test]
    fn parses_a_bracket_script_file() {
        let dir = tempfile::tempdir().unwrap();
        let script_path = dir.path().join("script.txt");
        std::fs::write(&script_path, "[0:00 - 0:02]\n\"Hi\"\n\n[0:03 - 0:05]\n\"Bye\"\n").unwrap();

        let ctx = context_for(&script_path, dir.path());
        let mut state = JobState::new("parse_test");

        let step = ParseScriptStep;
        step.validate_input(&ctx, &state).unwrap();
        assert_eq!(step.execute(&ctx, &mut state).unwrap(), StepOutcome::Success);
        step.validate_output(&ctx, &state).unwrap();

        assert_eq!(state.script.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn missing_script_fails_input_validation() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context_for(&dir.path().join("absent.txt"), dir.path());
        let state = JobState::new("parse_test");

        assert!(matches!(
            ParseScriptStep.validate_input(&ctx, &state),
            Err(StepError::InvalidInput(_))
        ));
    }

    #[test]
    fn overlapping_cues_fail_the_step() {
        let dir = tempfile::tempdir().unwrap();
        let script_path = dir.path().join("script.txt");
        std::fs::write(
            &script_path,
            "[0:00 - 0:05]\n\"a\"\n\n[0:03 - 0:08]\n\"b\"\n",
        )
        .unwrap();

        let ctx = context_for(&script_path, dir.path());
        let mut state = JobState::new("parse_test");

        let err = ParseScriptStep.execute(&ctx, &mut state).unwrap_err();
        assert!(matches!(
            err,
            StepError::Script(ScriptError::Timing(_))
        ));
    }
}
