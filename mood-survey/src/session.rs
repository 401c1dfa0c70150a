//! The mood survey state machine.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::guard::{Abandon, InFlight};
use crate::{
    AffectScores, DefinitionError, Item, Navigation, Questionnaire, RECOMMENDATIONS_ROUTE, Rating,
    Responses, Submission, Submitter, SurveyConfig, SurveyError,
};

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum SessionState {
    /// Collecting ratings on the given step (1-indexed).
    Answering { step: usize },

    /// A submission is in flight. Every mutation is refused.
    Submitting,

    /// Submitted successfully. Terminal.
    Done,

    /// The last submission failed. Ratings are kept and the session can retry.
    Failed,
}

/// A move between two steps. Hosts react to it, e.g. by scrolling to the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepChange {
    pub from: usize,
    pub to: usize,
}

/// Outcome of pressing Next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved on to the next step.
    Moved(StepChange),

    /// The last step is complete. The session stays in `Answering` on the
    /// last step; moving it to `Submitting` is up to the host, by calling
    /// [`Session::finalize`] (or [`Session::begin_submit`]) with a submitter.
    Finalize,

    /// Nothing happened: the step is incomplete, or the session is busy or done.
    Stayed,
}

/// The result of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Completion {
    pub scores: AffectScores,
    pub navigation: Navigation,
}

/// One user's traversal of the mood survey.
///
/// Created at step 1 with no ratings and discarded once the host has
/// navigated away. Ratings are only ever added or replaced; stepping back
/// leaves them in place.
#[derive(Debug, Clone)]
pub struct Session {
    questionnaire: Questionnaire,
    route: String,
    responses: Responses,
    step: usize,
    state: SessionState,
    completion: Option<Completion>,
}

impl Session {
    /// Start a session over the given questionnaire.
    pub fn new(questionnaire: Questionnaire) -> Self {
        Self {
            questionnaire,
            route: RECOMMENDATIONS_ROUTE.to_string(),
            responses: Responses::new(),
            step: 1,
            state: SessionState::Answering { step: 1 },
            completion: None,
        }
    }

    /// Start a session over the standard PANAS questionnaire.
    pub fn panas() -> Self {
        Self::new(Questionnaire::panas())
    }

    /// Start a session configured by `config`.
    pub fn from_config(config: &SurveyConfig) -> Result<Self, DefinitionError> {
        Ok(Self::new(config.questionnaire()?).with_route(config.recommendations_route.clone()))
    }

    /// Set the route the final navigation points at.
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = route.into();
        self
    }

    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    pub fn responses(&self) -> &Responses {
        &self.responses
    }

    /// The rating recorded for `item`, if any.
    pub fn rating(&self, item: &str) -> Option<Rating> {
        self.responses.get(item)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The current step, 1-indexed. Stays on the last step while submitting
    /// and after completion.
    pub fn current_step(&self) -> usize {
        self.step
    }

    pub fn total_steps(&self) -> usize {
        self.questionnaire.total_steps()
    }

    /// True while a submission is in flight.
    pub fn is_busy(&self) -> bool {
        self.state == SessionState::Submitting
    }

    pub fn is_done(&self) -> bool {
        self.state == SessionState::Done
    }

    pub fn is_last_step(&self) -> bool {
        self.step == self.total_steps()
    }

    /// The completion, once the session is done.
    pub fn completion(&self) -> Option<&Completion> {
        self.completion.as_ref()
    }

    /// Items shown on the current step.
    pub fn current_items(&self) -> &[Item] {
        self.questionnaire.step_items(self.step).unwrap_or(&[])
    }

    /// Record (or replace) the rating for `item`.
    ///
    /// Rejects unknown items and values outside 1-5 without touching the
    /// session, and refuses all changes while busy or once done.
    pub fn record_response(&mut self, item: &str, value: i64) -> Result<(), SurveyError> {
        self.ensure_editable()?;
        if self.questionnaire.item(item).is_none() {
            debug!(item, "rejected response for unknown item");
            return Err(SurveyError::UnknownItem(item.to_string()));
        }
        let rating = Rating::new(value).inspect_err(|_| {
            debug!(item, value, "rejected out-of-range rating");
        })?;
        self.responses.insert(item, rating);
        debug!(item, rating = rating.value(), step = self.step, "recorded response");
        Ok(())
    }

    /// Check if every item on `step` has a rating. Steps outside
    /// `1..=total_steps` are never complete.
    pub fn is_step_complete(&self, step: usize) -> bool {
        self.questionnaire
            .step_items(step)
            .is_some_and(|items| self.responses.answers_all(items))
    }

    pub fn is_current_step_complete(&self) -> bool {
        self.is_step_complete(self.step)
    }

    /// Check if every item in the questionnaire has a rating.
    pub fn is_complete(&self) -> bool {
        self.responses.answers_all(self.questionnaire.items())
    }

    /// Press Next.
    ///
    /// Moves to the following step when the current one is complete. On the
    /// last step it asks the host to finalize instead.
    pub fn advance(&mut self) -> Advance {
        if self.ensure_editable().is_err() {
            debug!(state = ?self.state, "advance refused");
            return Advance::Stayed;
        }
        if !self.is_current_step_complete() {
            debug!(step = self.step, "advance refused: step incomplete");
            return Advance::Stayed;
        }
        if self.is_last_step() {
            return Advance::Finalize;
        }
        let change = StepChange {
            from: self.step,
            to: self.step + 1,
        };
        self.move_to(change.to);
        Advance::Moved(change)
    }

    /// Press Back. Does nothing on step 1, while busy or once done.
    pub fn retreat(&mut self) -> Option<StepChange> {
        if self.ensure_editable().is_err() || self.step == 1 {
            debug!(step = self.step, state = ?self.state, "retreat refused");
            return None;
        }
        let change = StepChange {
            from: self.step,
            to: self.step - 1,
        };
        self.move_to(change.to);
        Some(change)
    }

    /// Fraction of the survey reached, `current_step / total_steps`.
    pub fn progress(&self) -> f32 {
        self.step as f32 / self.total_steps() as f32
    }

    /// Label of the Next button in the current state.
    pub fn next_label(&self) -> &'static str {
        if self.is_busy() {
            "Processing..."
        } else if self.is_last_step() {
            "Get Recommendations"
        } else {
            "Next"
        }
    }

    /// Score the survey and submit it.
    ///
    /// The session is busy for as long as the submission is in flight. If the
    /// returned future is dropped before it resolves, the submission is
    /// cancelled and the session returns to the last step with its ratings.
    /// A failed submission leaves the session in [`SessionState::Failed`]; call
    /// `finalize` again to retry.
    pub async fn finalize<S: Submitter>(
        &mut self,
        submitter: &S,
    ) -> Result<Completion, SurveyError> {
        let submission = self.begin_submit()?;
        let mut flight = InFlight::new(self);
        let outcome: Result<(), anyhow::Error> =
            submitter.submit(&submission).await.map_err(Into::into);
        flight.disarm();
        flight.target().finish_submit(outcome)
    }

    /// Score the survey and mark it as submitting.
    ///
    /// For hosts that drive the submission themselves; report the outcome
    /// with [`Session::finish_submit`] or abort with [`Session::cancel_submit`].
    pub fn begin_submit(&mut self) -> Result<Submission, SurveyError> {
        self.ensure_editable()?;
        if !self.is_complete() {
            let missing = self.responses.missing(self.questionnaire.items());
            debug!(?missing, "finalize refused: responses missing");
            return Err(SurveyError::MissingResponses(missing));
        }

        let scores = AffectScores::from_responses(&self.questionnaire, &self.responses);
        self.step = self.total_steps();
        self.state = SessionState::Submitting;
        info!(
            positive = scores.positive,
            negative = scores.negative,
            "submitting mood survey"
        );
        Ok(Submission::Mood(scores))
    }

    /// Report how an in-flight submission ended.
    pub fn finish_submit(
        &mut self,
        outcome: Result<(), anyhow::Error>,
    ) -> Result<Completion, SurveyError> {
        if !self.is_busy() {
            return Err(SurveyError::NotSubmitting);
        }
        match outcome {
            Ok(()) => {
                let scores = AffectScores::from_responses(&self.questionnaire, &self.responses);
                let completion = Completion {
                    scores,
                    navigation: Navigation::mood(self.route.clone(), &scores),
                };
                info!(navigation = %completion.navigation, "mood survey submitted");
                self.state = SessionState::Done;
                self.completion = Some(completion.clone());
                Ok(completion)
            }
            Err(err) => {
                warn!(error = %err, "mood survey submission failed");
                self.state = SessionState::Failed;
                Err(SurveyError::Submission(err))
            }
        }
    }

    /// Abort an in-flight submission and return to the last step.
    ///
    /// Returns false if nothing was in flight.
    pub fn cancel_submit(&mut self) -> bool {
        if !self.is_busy() {
            return false;
        }
        warn!("mood survey submission cancelled");
        self.move_to(self.total_steps());
        true
    }

    fn move_to(&mut self, step: usize) {
        debug!(from = self.step, to = step, "step change");
        self.step = step;
        self.state = SessionState::Answering { step };
    }

    fn ensure_editable(&self) -> Result<(), SurveyError> {
        match self.state {
            SessionState::Submitting => Err(SurveyError::Busy),
            SessionState::Done => Err(SurveyError::Finished),
            SessionState::Answering { .. } | SessionState::Failed => Ok(()),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::panas()
    }
}

impl Abandon for Session {
    fn abandon(&mut self) {
        self.cancel_submit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer_step(session: &mut Session, value: i64) {
        let names: Vec<String> = session
            .current_items()
            .iter()
            .map(|item| item.name().to_string())
            .collect();
        for name in names {
            session.record_response(&name, value).unwrap();
        }
    }

    #[test]
    fn starts_on_step_one() {
        let session = Session::panas();
        assert_eq!(session.state(), SessionState::Answering { step: 1 });
        assert_eq!(session.current_step(), 1);
        assert_eq!(session.total_steps(), 4);
        assert!(session.responses().is_empty());
        assert_eq!(session.current_items().len(), 5);
        assert_eq!(session.current_items()[0].name(), "Interested");
    }

    #[test]
    fn rejects_unknown_item() {
        let mut session = Session::panas();
        let err = session.record_response("Bored", 3).unwrap_err();
        assert!(matches!(err, SurveyError::UnknownItem(name) if name == "Bored"));
        assert!(session.responses().is_empty());
    }

    #[test]
    fn rejects_out_of_range_rating() {
        let mut session = Session::panas();
        assert!(matches!(
            session.record_response("Interested", 0),
            Err(SurveyError::RatingOutOfRange(_))
        ));
        assert!(matches!(
            session.record_response("Interested", 6),
            Err(SurveyError::RatingOutOfRange(_))
        ));
        assert!(session.rating("Interested").is_none());
    }

    #[test]
    fn response_is_visible_immediately() {
        let mut session = Session::panas();
        let names: Vec<String> = session
            .current_items()
            .iter()
            .map(|item| item.name().to_string())
            .collect();
        for name in &names[..4] {
            session.record_response(name, 2).unwrap();
        }
        assert!(!session.is_current_step_complete());
        session.record_response(&names[4], 2).unwrap();
        assert!(session.is_current_step_complete());
        assert!(session.is_step_complete(1));
    }

    #[test]
    fn out_of_range_steps_are_incomplete() {
        let session = Session::panas();
        assert!(!session.is_step_complete(0));
        assert!(!session.is_step_complete(5));
    }

    #[test]
    fn advance_moves_and_reports_change() {
        let mut session = Session::panas();
        answer_step(&mut session, 3);
        assert_eq!(
            session.advance(),
            Advance::Moved(StepChange { from: 1, to: 2 })
        );
        assert_eq!(session.state(), SessionState::Answering { step: 2 });
    }

    #[test]
    fn advance_on_last_step_asks_for_finalize() {
        let mut session = Session::panas();
        for _ in 1..4 {
            answer_step(&mut session, 3);
            session.advance();
        }
        assert_eq!(session.current_step(), 4);
        assert_eq!(session.advance(), Advance::Stayed);
        answer_step(&mut session, 3);
        assert_eq!(session.advance(), Advance::Finalize);
        assert_eq!(session.current_step(), 4);
        assert_eq!(session.state(), SessionState::Answering { step: 4 });
    }

    #[test]
    fn complete_only_when_every_item_is_rated() {
        let mut session = Session::panas();
        for _ in 1..4 {
            answer_step(&mut session, 2);
            session.advance();
        }
        assert!(!session.is_complete());
        answer_step(&mut session, 2);
        assert!(session.is_complete());
    }

    #[test]
    fn state_and_completion_serialize() {
        let mut session = Session::panas();
        assert_eq!(
            serde_json::to_value(session.state()).unwrap(),
            serde_json::json!({ "state": "answering", "step": 1 })
        );

        for _ in 1..=4 {
            answer_step(&mut session, 5);
            session.advance();
        }
        session.begin_submit().unwrap();
        assert_eq!(
            serde_json::to_value(session.state()).unwrap(),
            serde_json::json!({ "state": "submitting" })
        );

        let completion = session.finish_submit(Ok(())).unwrap();
        let value = serde_json::to_value(&completion).unwrap();
        assert_eq!(value["scores"], serde_json::json!({ "positive": 50, "negative": 50 }));
        assert_eq!(value["navigation"]["route"], "/recommendations");
        assert_eq!(
            value["navigation"]["query"][2],
            serde_json::json!(["type", "mood"])
        );
        assert_eq!(
            serde_json::to_value(session.state()).unwrap(),
            serde_json::json!({ "state": "done" })
        );
    }

    #[test]
    fn retreat_from_first_step_is_noop() {
        let mut session = Session::panas();
        assert_eq!(session.retreat(), None);
        assert_eq!(session.state(), SessionState::Answering { step: 1 });
    }

    #[test]
    fn labels_and_progress() {
        let mut session = Session::panas();
        assert_eq!(session.next_label(), "Next");
        assert_eq!(session.progress(), 0.25);
        for _ in 1..4 {
            answer_step(&mut session, 1);
            session.advance();
        }
        assert_eq!(session.next_label(), "Get Recommendations");
        assert_eq!(session.progress(), 1.0);
    }

    #[test]
    fn busy_session_refuses_changes() {
        let mut session = Session::panas();
        for _ in 1..=4 {
            answer_step(&mut session, 4);
            session.advance();
        }
        session.begin_submit().unwrap();

        assert!(session.is_busy());
        assert_eq!(session.next_label(), "Processing...");
        assert!(matches!(
            session.record_response("Alert", 1),
            Err(SurveyError::Busy)
        ));
        assert_eq!(session.advance(), Advance::Stayed);
        assert_eq!(session.retreat(), None);
        assert!(matches!(session.begin_submit(), Err(SurveyError::Busy)));
        assert_eq!(session.rating("Alert").map(|r| r.value()), Some(4));
    }

    #[test]
    fn begin_submit_requires_every_rating() {
        let mut session = Session::panas();
        answer_step(&mut session, 2);
        let err = session.begin_submit().unwrap_err();
        match err {
            SurveyError::MissingResponses(missing) => assert_eq!(missing.len(), 15),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(session.state(), SessionState::Answering { step: 1 });
    }

    #[test]
    fn finish_without_submission() {
        let mut session = Session::panas();
        assert!(matches!(
            session.finish_submit(Ok(())),
            Err(SurveyError::NotSubmitting)
        ));
        assert!(!session.cancel_submit());
    }

    #[test]
    fn custom_route() {
        let mut session = Session::panas().with_route("/picks");
        for _ in 1..=4 {
            answer_step(&mut session, 2);
            session.advance();
        }
        session.begin_submit().unwrap();
        let completion = session.finish_submit(Ok(())).unwrap();
        assert_eq!(
            completion.navigation.to_url(),
            "/picks?positive=20&negative=20&type=mood"
        );
    }
}
