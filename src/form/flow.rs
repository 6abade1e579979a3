//! Submit lifecycle as a reducer-driven state machine.

use scopeguard::ScopeGuard;

use crate::storefront::CustomerRecord;
use crate::ui::mvi::{Intent, Reducer, UiState};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FlowState {
    #[default]
    Idle,
    Validating,
    Submitting,
    /// Terminal: the form has been replaced by the success banner.
    Registered { user: Option<CustomerRecord> },
}

impl UiState for FlowState {}

impl FlowState {
    pub fn accepts_submit(&self) -> bool {
        matches!(self, FlowState::Idle)
    }

    pub fn is_registered(&self) -> bool {
        matches!(self, FlowState::Registered { .. })
    }

    /// Runs `intent` through the reducer in place.
    pub fn advance(&mut self, intent: FlowIntent) {
        let state = std::mem::take(self);
        *self = FlowReducer::reduce(state, intent);
    }
}

/// Guards a submission in flight.
///
/// Dropping the guard applies `SubmissionFailed`, so an abandoned request
/// leaves the flow ready for another submit. Take the state back with
/// [`ScopeGuard::into_inner`] once the request has resolved.
pub fn submission_guard<'a>(
    flow: &'a mut FlowState,
) -> ScopeGuard<&'a mut FlowState, impl FnOnce(&'a mut FlowState)> {
    scopeguard::guard(flow, |flow| {
        tracing::debug!(state = ?flow, "Submission abandoned");
        flow.advance(FlowIntent::SubmissionFailed);
    })
}

#[derive(Debug, Clone)]
pub enum FlowIntent {
    SubmitRequested,
    /// At least one field (or the terms checkbox) failed validation.
    ValidationFailed,
    ValidationPassed,
    SubmissionSucceeded { user: Option<CustomerRecord> },
    /// Backend failure or network error; the form is usable again.
    SubmissionFailed,
}

impl Intent for FlowIntent {}

pub struct FlowReducer;

impl Reducer for FlowReducer {
    type State = FlowState;
    type Intent = FlowIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state, intent) {
            (FlowState::Idle, FlowIntent::SubmitRequested) => FlowState::Validating,
            (FlowState::Validating, FlowIntent::ValidationFailed) => FlowState::Idle,
            (FlowState::Validating, FlowIntent::ValidationPassed) => FlowState::Submitting,
            (FlowState::Submitting, FlowIntent::SubmissionSucceeded { user }) => {
                FlowState::Registered { user }
            }
            (FlowState::Submitting, FlowIntent::SubmissionFailed) => FlowState::Idle,
            // Out-of-order intents leave the state untouched
            (state, _) => state,
        }
    }
}
