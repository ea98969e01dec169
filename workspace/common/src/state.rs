//! Request lifecycle shared by the prediction form and the dashboard.

use crate::prediction::PredictionResult;
use crate::response::PredictionOutcome;

/// User-facing banners a page shows when a request settles without a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleMessages {
    /// The service answered but had no prediction
    pub empty: &'static str,
    /// The call itself failed
    pub failed: &'static str,
}

impl SettleMessages {
    pub const PREDICTION_FORM: SettleMessages = SettleMessages {
        empty: "Failed to fetch prediction. Please try again.",
        failed: "An error occurred while making the prediction.",
    };

    pub const DASHBOARD: SettleMessages = SettleMessages {
        empty: "No predictions found. Please make a prediction first.",
        failed: "An error occurred while fetching the prediction.",
    };
}

/// State of a page's prediction request.
///
/// `Idle` before the first request, `Loading` while a call is outstanding,
/// and one of the three settled variants afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PredictionState {
    #[default]
    Idle,
    /// A call is outstanding. `previous` is the result that was on screen when
    /// it started, kept visible until the call settles.
    Loading { previous: Option<PredictionResult> },
    Success(PredictionResult),
    Empty,
    Failed(String),
}

/// Transitions of [`PredictionState`].
#[derive(Debug)]
pub enum PredictionAction {
    /// A call was started
    Begin,
    /// A call finished with the given outcome
    Settle(PredictionOutcome),
    /// The request never left the page, e.g. an incomplete form
    Reject(String),
}

impl PredictionState {
    /// Next state after `action`.
    ///
    /// Settling is accepted in any state: with overlapping calls each response
    /// replaces the previous one, so the last to resolve wins.
    pub fn apply(&self, action: PredictionAction, messages: &SettleMessages) -> Self {
        match action {
            PredictionAction::Begin => Self::Loading { previous: self.shown_result().cloned() },
            PredictionAction::Settle(outcome) => Self::settle(outcome, messages),
            PredictionAction::Reject(message) => Self::Failed(message),
        }
    }

    /// Settles a finished call. Failure details never reach the user; they
    /// only see the page's generic message.
    pub fn settle(outcome: PredictionOutcome, messages: &SettleMessages) -> Self {
        match outcome {
            Ok(Some(result)) => Self::Success(result),
            Ok(None) => Self::Empty,
            Err(_) => Self::Failed(messages.failed.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// Result of the last settled call, if it produced one.
    pub fn result(&self) -> Option<&PredictionResult> {
        match self {
            Self::Success(result) => Some(result),
            _ => None,
        }
    }

    /// Result to keep on screen: the settled one, or while loading the one
    /// shown before the call started.
    pub fn shown_result(&self) -> Option<&PredictionResult> {
        match self {
            Self::Success(result) => Some(result),
            Self::Loading { previous } => previous.as_ref(),
            _ => None,
        }
    }

    /// Banner text for the settled-without-result variants.
    pub fn error_message<'a>(&'a self, messages: &SettleMessages) -> Option<&'a str> {
        match self {
            Self::Empty => Some(messages.empty),
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    fn result_73() -> PredictionResult {
        PredictionResult { churn_prediction: 1, churn_probability: Some(73.0) }
    }

    fn result_12() -> PredictionResult {
        PredictionResult { churn_prediction: 0, churn_probability: Some(12.0) }
    }

    /// Applies `actions` in order and returns every state visited, the
    /// starting one included.
    fn run(
        start: PredictionState,
        actions: Vec<PredictionAction>,
        messages: &SettleMessages,
    ) -> Vec<PredictionState> {
        let mut states = vec![start];
        for action in actions {
            let next = states[states.len() - 1].apply(action, messages);
            states.push(next);
        }
        states
    }

    #[test]
    fn test_initial_state_is_idle() {
        let state = PredictionState::default();
        assert_eq!(state, PredictionState::Idle);
        assert!(!state.is_loading());
        assert_eq!(state.shown_result(), None);
        assert_eq!(state.error_message(&SettleMessages::PREDICTION_FORM), None);
    }

    #[test]
    fn test_submit_cycle_passes_through_loading_once() {
        let messages = SettleMessages::PREDICTION_FORM;
        let states = run(
            PredictionState::Idle,
            vec![
                PredictionAction::Begin,
                PredictionAction::Settle(Ok(Some(result_73()))),
            ],
            &messages,
        );

        let busy: Vec<bool> = states.iter().map(PredictionState::is_loading).collect();
        assert_eq!(busy, vec![false, true, false]);
        assert_eq!(states[2], PredictionState::Success(result_73()));
    }

    #[test]
    fn test_every_outcome_leaves_loading() {
        let messages = SettleMessages::DASHBOARD;
        let outcomes: Vec<PredictionOutcome> = vec![
            Ok(Some(result_73())),
            Ok(None),
            Err(ApiError::Network("offline".to_string())),
            Err(ApiError::Decode("bad body".to_string())),
        ];

        for outcome in outcomes {
            let loading = PredictionState::Idle.apply(PredictionAction::Begin, &messages);
            assert!(loading.is_loading());

            let settled = loading.apply(PredictionAction::Settle(outcome), &messages);
            assert!(!settled.is_loading(), "{:?}", settled);
            assert!(
                settled.result().is_some() || settled.error_message(&messages).is_some(),
                "{:?}",
                settled
            );
        }
    }

    #[test]
    fn test_overlapping_calls_last_response_wins() {
        let messages = SettleMessages::DASHBOARD;
        let states = run(
            PredictionState::Idle,
            vec![
                PredictionAction::Begin,
                PredictionAction::Begin,
                PredictionAction::Settle(Ok(Some(result_73()))),
                PredictionAction::Settle(Ok(Some(result_12()))),
            ],
            &messages,
        );

        assert_eq!(states.last(), Some(&PredictionState::Success(result_12())));
    }

    #[test]
    fn test_late_failure_replaces_earlier_success() {
        let messages = SettleMessages::DASHBOARD;
        let states = run(
            PredictionState::Idle,
            vec![
                PredictionAction::Begin,
                PredictionAction::Settle(Ok(Some(result_73()))),
                PredictionAction::Settle(Err(ApiError::Status { status: 503, message: None })),
            ],
            &messages,
        );

        let last = &states[states.len() - 1];
        assert_eq!(last.result(), None);
        assert_eq!(
            last.error_message(&messages),
            Some("An error occurred while fetching the prediction.")
        );
    }

    #[test]
    fn test_refresh_keeps_previous_result_on_screen() {
        let messages = SettleMessages::DASHBOARD;
        let shown = PredictionState::Success(result_73());

        let loading = shown.apply(PredictionAction::Begin, &messages);
        assert!(loading.is_loading());
        assert_eq!(loading.result(), None);
        assert_eq!(loading.shown_result(), Some(&result_73()));

        let refreshed = loading.apply(PredictionAction::Settle(Ok(Some(result_12()))), &messages);
        assert_eq!(refreshed.shown_result(), Some(&result_12()));
    }

    #[test]
    fn test_refresh_after_failure_shows_nothing_while_loading() {
        let messages = SettleMessages::DASHBOARD;
        let failed = PredictionState::settle(Ok(None), &messages);

        let loading = failed.apply(PredictionAction::Begin, &messages);
        assert_eq!(loading, PredictionState::Loading { previous: None });
        assert_eq!(loading.error_message(&messages), None);
    }

    #[test]
    fn test_rejected_form_shows_its_own_message() {
        let state = PredictionState::Idle.apply(
            PredictionAction::Reject("Please select a value for Contract".to_string()),
            &SettleMessages::PREDICTION_FORM,
        );
        assert_eq!(
            state.error_message(&SettleMessages::PREDICTION_FORM),
            Some("Please select a value for Contract")
        );
    }

    #[test]
    fn test_transport_failure_on_form_shows_generic_message() {
        let state = PredictionState::settle(
            Err(ApiError::Network("connection refused".to_string())),
            &SettleMessages::PREDICTION_FORM,
        );

        assert_eq!(
            state.error_message(&SettleMessages::PREDICTION_FORM),
            Some("An error occurred while making the prediction.")
        );
        assert_eq!(state.result(), None);
    }

    #[test]
    fn test_no_result_on_form() {
        let state = PredictionState::settle(Ok(None), &SettleMessages::PREDICTION_FORM);
        assert_eq!(state, PredictionState::Empty);
        assert_eq!(
            state.error_message(&SettleMessages::PREDICTION_FORM),
            Some("Failed to fetch prediction. Please try again.")
        );
    }

    #[test]
    fn test_dashboard_distinguishes_absence_from_failure() {
        let messages = SettleMessages::DASHBOARD;

        let empty = PredictionState::settle(Ok(None), &messages);
        assert_eq!(
            empty.error_message(&messages),
            Some("No predictions found. Please make a prediction first.")
        );
        assert_eq!(empty.result(), None);

        let failed = PredictionState::settle(
            Err(ApiError::Status { status: 500, message: None }),
            &messages,
        );
        assert_eq!(
            failed.error_message(&messages),
            Some("An error occurred while fetching the prediction.")
        );
    }

    #[test]
    fn test_success_has_no_banner() {
        let state = PredictionState::settle(Ok(Some(result_73())), &SettleMessages::DASHBOARD);
        assert_eq!(state.result(), Some(&result_73()));
        assert_eq!(state.error_message(&SettleMessages::DASHBOARD), None);
    }
}
