//! Fail-fast composition of dependent connector actions.
//!
//! A run is an ordered list of steps. Each step receives the outcome of the step before it
//! (`None` for the first) and the run stops at the first unsuccessful outcome, so no step is
//! ever issued against a failed predecessor.

use common_utils::CustomResult;
use domain_types::{errors::ConnectorError, router_response_types::Outcome};
use error_stack::report;

pub type Step<'a> =
    Box<dyn FnOnce(Option<&Outcome>) -> CustomResult<Outcome, ConnectorError> + 'a>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum RunState {
    Pending,
    /// Step at this index is executing.
    Running(usize),
    Succeeded,
    /// Step at this index returned an unsuccessful outcome or an error.
    Failed(usize),
}

pub struct MultiStepRun<'a> {
    steps: Vec<Step<'a>>,
    state: RunState,
}

impl std::fmt::Debug for MultiStepRun<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultiStepRun")
            .field("steps", &self.steps.len())
            .field("state", &self.state)
            .finish()
    }
}

impl Default for MultiStepRun<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> MultiStepRun<'a> {
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            state: RunState::Pending,
        }
    }

    pub fn step<S>(mut self, step: S) -> Self
    where
        S: FnOnce(Option<&Outcome>) -> CustomResult<Outcome, ConnectorError> + 'a,
    {
        self.steps.push(Box::new(step));
        self
    }

    /// Outcome of the last step when every step succeeds, otherwise the first failing outcome.
    ///
    /// Errors raised by a step abort the run and are returned as is.
    pub fn run(self) -> CustomResult<Outcome, ConnectorError> {
        self.execute().1
    }

    fn execute(mut self) -> (RunState, CustomResult<Outcome, ConnectorError>) {
        let steps = std::mem::take(&mut self.steps);
        if steps.is_empty() {
            return (self.state, Err(report!(ConnectorError::EmptyStepSequence)));
        }

        let mut prior: Option<Outcome> = None;
        for (index, step) in steps.into_iter().enumerate() {
            self.transition(RunState::Running(index));
            let outcome = match step(prior.as_ref()) {
                Ok(outcome) => outcome,
                Err(error) => {
                    self.transition(RunState::Failed(index));
                    return (self.state, Err(error));
                }
            };
            if !outcome.success {
                self.transition(RunState::Failed(index));
                return (self.state, Ok(outcome));
            }
            prior = Some(outcome);
        }

        self.transition(RunState::Succeeded);
        match prior {
            Some(outcome) => (self.state, Ok(outcome)),
            None => (self.state, Err(report!(ConnectorError::EmptyStepSequence))),
        }
    }

    fn transition(&mut self, next: RunState) {
        tracing::debug!(from = %self.state, to = %next, "multi step run");
        self.state = next;
    }
}
