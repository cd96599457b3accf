//! Pipeline step trait definition.

use super::errors::StepResult;
use super::types::{Context, JobState, StepOutcome};

/// Trait for pipeline steps.
///
/// The pipeline runner calls these methods in order for each step:
///
/// 1. `validate_input` - check preconditions before execution
/// 2. `execute` - perform the step's work
/// 3. `validate_output` - verify the step produced valid output
///
/// A step that determines it has nothing to do returns
/// `StepOutcome::Skipped` from `execute`; output validation is then
/// skipped too.
pub trait PipelineStep: Send + Sync {
    /// Step name, used in logs and error context.
    fn name(&self) -> &str;

    /// Validate inputs before execution (files exist, prior steps ran).
    fn validate_input(&self, ctx: &Context, state: &JobState) -> StepResult<()>;

    /// Execute the step's main work, recording results in `state`.
    fn execute(&self, ctx: &Context, state: &mut JobState) -> StepResult<StepOutcome>;

    /// Validate outputs after a successful execution.
    fn validate_output(&self, ctx: &Context, state: &JobState) -> StepResult<()>;
}
