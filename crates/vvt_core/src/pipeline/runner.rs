//! Pipeline runner that executes steps in sequence.

use super::errors::{PipelineError, PipelineResult};
use super::step::PipelineStep;
use super::types::{Context, JobState, StepOutcome};

/// Pipeline that runs a sequence of steps.
///
/// Steps execute in order with validation before and after each one.
/// Cancellation is checked at every step boundary.
pub struct Pipeline {
    steps: Vec<Box<dyn PipelineStep>>,
}

impl Pipeline {
    /// Create a new empty pipeline.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Add a step (builder pattern).
    pub fn with_step<S: PipelineStep + 'static>(mut self, step: S) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    /// Number of steps in the pipeline.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Step names in execution order.
    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    /// Run the pipeline with the given context and state.
    pub fn run(&self, ctx: &Context, state: &mut JobState) -> PipelineResult<PipelineRunResult> {
        let mut result = PipelineRunResult {
            steps_completed: Vec::new(),
            steps_skipped: Vec::new(),
        };

        let total_steps = self.steps.len();

        for (i, step) in self.steps.iter().enumerate() {
            if ctx.is_cancelled() {
                tracing::warn!("Pipeline cancelled before step '{}'", step.name());
                return Err(PipelineError::cancelled(&ctx.job_name));
            }

            let step_name = step.name();
            tracing::info!("[{}] {}", ctx.job_name, step_name);

            let percent = ((i as f64 / total_steps as f64) * 100.0) as u32;
            ctx.report_progress(step_name, percent, "starting");

            if let Err(e) = step.validate_input(ctx, state) {
                tracing::error!("[{}] {} input validation failed: {}", ctx.job_name, step_name, e);
                return Err(PipelineError::step_failed(&ctx.job_name, step_name, e));
            }

            let outcome = step.execute(ctx, state).map_err(|e| {
                tracing::error!("[{}] {} failed: {}", ctx.job_name, step_name, e);
                PipelineError::step_failed(&ctx.job_name, step_name, e)
            })?;

            match outcome {
                StepOutcome::Success => {
                    if let Err(e) = step.validate_output(ctx, state) {
                        tracing::error!(
                            "[{}] {} output validation failed: {}",
                            ctx.job_name,
                            step_name,
                            e
                        );
                        return Err(PipelineError::step_failed(&ctx.job_name, step_name, e));
                    }
                    result.steps_completed.push(step_name.to_string());
                }
                StepOutcome::Skipped(reason) => {
                    tracing::info!("[{}] {} skipped: {}", ctx.job_name, step_name, reason);
                    result.steps_skipped.push(step_name.to_string());
                }
            }
        }

        ctx.report_progress("Complete", 100, "pipeline finished");
        Ok(result)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Which steps ran and which were skipped.
#[derive(Debug, Clone, Default)]
pub struct PipelineRunResult {
    pub steps_completed: Vec<String>,
    pub steps_skipped: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::pipeline::errors::{StepError, StepResult};
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

    fn test_context(root: &std::path::Path) -> Context {
        Context::new(
            "test_job",
            Settings::default(),
            root.join("script.txt"),
            root.join("out.mp4"),
            FfmpegToolkit::new("ffmpeg", "ffprobe"),
            Box::new(NullSynthesizer),
            Workspace::new(root).unwrap(),
        )
    }

    struct MockStep {
        name: &'static str,
        skip: bool,
        fail: bool,
    }

    impl PipelineStep for MockStep {
        fn name(&self) -> &str {
            self.name
        }

        fn validate_input(&self, _ctx: &Context, _state: &JobState) -> StepResult<()> {
            Ok(())
        }

        fn execute(&self, _ctx: &Context, _state: &mut JobState) -> StepResult<StepOutcome> {
            if self.fail {
                Err(StepError::invalid_input("mock failure"))
            } else if self.skip {
                Ok(StepOutcome::Skipped("mock skip".to_string()))
            } else {
                Ok(StepOutcome::Success)
            }
        }

        fn validate_output(&self, _ctx: &Context, _state: &JobState) -> StepResult<()> {
            Ok(())
        }
    }

    #[test]
    fn runs_steps_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = test_context(dir.path());
        let mut state = JobState::new("test_job");

        let pipeline = Pipeline::new()
            .with_step(MockStep { name: "A", skip: false, fail: false })
            .with_step(MockStep { name: "B", skip: true, fail: false })
            .with_step(MockStep { name: "C", skip: false, fail: false });

        let result = pipeline.run(&ctx, &mut state).unwrap();
        assert_eq!(result.steps_completed, vec!["A", "C"]);
        assert_eq!(result.steps_skipped, vec!["B"]);
    }

    #[test]
    fn failure_aborts_with_step_context() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = test_context(dir.path());
        let mut state = JobState::new("test_job");

        let pipeline = Pipeline::new()
            .with_step(MockStep { name: "A", skip: false, fail: false })
            .with_step(MockStep { name: "Broken", skip: false, fail: true });

        let err = pipeline.run(&ctx, &mut state).unwrap_err();
        match err {
            PipelineError::StepFailed { step_name, .. } => assert_eq!(step_name, "Broken"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn cancellation_stops_at_the_step_boundary() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = test_context(dir.path());
        let mut state = JobState::new("test_job");
        ctx.cancel_handle().cancel();

        let pipeline = Pipeline::new().with_step(MockStep {
            name: "Never",
            skip: false,
            fail: false,
        });

        let err = pipeline.run(&ctx, &mut state).unwrap_err();
        assert!(matches!(err, PipelineError::Cancelled { .. }));
    }
}
