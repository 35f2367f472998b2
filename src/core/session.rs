use crate::backend::PlanningBackend;
use crate::core::budget::BudgetBreakdown;
use crate::core::input::{Interest, TripField, TripInput};
use crate::core::phase::PlanningPhase;
use crate::error::{Result, SessionError};
use crate::notify::{NoticeKind, NotificationSink};
use crate::types::itinerary::Itinerary;
use crate::types::snapshot::SessionSnapshot;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Default ceiling on a single planning operation
pub const DEFAULT_SUBMIT_TIMEOUT: Duration = Duration::from_secs(30);

/// Claim on one submit cycle, handed out by [`TripSession::begin_submit`]
///
/// Carries the input frozen at submit time and the generation the eventual
/// result must match to be applied.
#[derive(Debug, Clone)]
pub struct SubmitTicket {
    pub generation: u64,
    pub input: TripInput,
}

/// How a call to [`TripSession::submit`] concluded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A planning operation was already in flight; nothing was invoked
    AlreadyPlanning,
    /// The backend produced an itinerary
    Ready,
    /// The backend failed or timed out
    Failed,
}

/// One user's in-progress trip-planning interaction
///
/// Owns the trip input, the interest selection, and the planning phase machine.
/// The presentation layer dispatches intents (`set_field`, `toggle_interest`,
/// `submit`) and renders from `snapshot()`; the planning backend and the
/// notification sink are injected collaborators.
#[derive(Debug)]
pub struct TripSession {
    input: TripInput,
    phase: PlanningPhase,
    last_error: Option<String>,
    itinerary: Option<Itinerary>,
    /// Bumped on every accepted submit and on reset; stale results are dropped
    generation: u64,
    backend: Arc<dyn PlanningBackend>,
    sink: Arc<dyn NotificationSink>,
    timeout: Duration,
}

impl TripSession {
    pub fn new(backend: Arc<dyn PlanningBackend>, sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            input: TripInput::new(),
            phase: PlanningPhase::Idle,
            last_error: None,
            itinerary: None,
            generation: 0,
            backend,
            sink,
            timeout: DEFAULT_SUBMIT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn phase(&self) -> PlanningPhase {
        self.phase
    }

    pub fn input(&self) -> &TripInput {
        &self.input
    }

    /// Update one input field
    ///
    /// Edits invalidate a settled result: `Ready | Failed -> Idle`, and the
    /// recorded error and itinerary are cleared.
    pub fn set_field(&mut self, field: TripField) {
        debug!(target: "trip_session::intent", field = field.name(), "set_field");
        self.input.apply(field);
        if self.phase.is_settled() {
            info!(target: "trip_session::phase", from = %self.phase, "edit re-arms session to idle");
            self.phase = PlanningPhase::Idle;
            self.last_error = None;
            self.itinerary = None;
        }
    }

    /// Toggle an interest on or off; has no effect on the planning phase
    pub fn toggle_interest(&mut self, interest: Interest) {
        debug!(target: "trip_session::intent", %interest, "toggle_interest");
        self.input.toggle_interest(interest);
    }

    /// Derived budget figures; all-zero when the budget is 0/unset
    pub fn budget_breakdown(&self) -> BudgetBreakdown {
        BudgetBreakdown::from_budget(self.input.budget)
    }

    /// Immutable read of the session for rendering
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            input: self.input.clone(),
            phase: self.phase,
            last_error: self.last_error.clone(),
            itinerary: self.itinerary.clone(),
        }
    }

    /// Discard all state and start a fresh session
    ///
    /// Bumps the generation so an in-flight planning result settles into the void.
    pub fn reset(&mut self) {
        info!(target: "trip_session::phase", "session reset");
        self.input = TripInput::new();
        self.phase = PlanningPhase::Idle;
        self.last_error = None;
        self.itinerary = None;
        self.generation += 1;
    }

    /// Validate and open a submit cycle
    ///
    /// Returns `Ok(None)` while a planning operation is already in flight: the
    /// `Planning` phase is the guard that keeps submits at most one deep.
    /// Validation failures notify the sink and leave the phase untouched.
    pub fn begin_submit(&mut self) -> Result<Option<SubmitTicket>> {
        if self.phase.is_planning() {
            debug!(target: "trip_session::phase", "submit ignored: planning already in flight");
            return Ok(None);
        }

        let missing = self.input.missing_required_fields();
        if !missing.is_empty() {
            let message = format!(
                "Please fill in all required fields: {}",
                missing.join(", ")
            );
            self.sink.notify(NoticeKind::Error, &message);
            return Err(SessionError::Validation(message));
        }

        self.phase = PlanningPhase::Planning;
        self.last_error = None;
        self.itinerary = None;
        self.generation += 1;
        info!(
            target: "trip_session::phase",
            generation = self.generation,
            origin = %self.input.origin,
            destination = %self.input.destination,
            "idle -> planning"
        );

        Ok(Some(SubmitTicket {
            generation: self.generation,
            input: self.input.clone(),
        }))
    }

    /// Apply the settled result of a submit cycle
    ///
    /// The result is dropped unless the session is still `Planning` and the
    /// generation matches the ticket, so a response that arrives after a reset
    /// or a newer submit cannot clobber current state. Returns whether the
    /// result was applied.
    pub fn resolve(&mut self, generation: u64, result: Result<Itinerary>) -> bool {
        if !self.phase.is_planning() || generation != self.generation {
            warn!(
                target: "trip_session::phase",
                stale = generation,
                current = self.generation,
                "dropping stale planning result"
            );
            return false;
        }

        match result {
            Ok(itinerary) => {
                info!(target: "trip_session::phase", "planning -> ready");
                self.phase = PlanningPhase::Ready;
                self.itinerary = Some(itinerary);
                self.last_error = None;
                self.sink
                    .notify(NoticeKind::Success, "Your itinerary is ready! 🎉");
            }
            Err(err) => {
                info!(target: "trip_session::phase", error = %err, "planning -> failed");
                self.phase = PlanningPhase::Failed;
                self.last_error = Some(err.to_string());
                self.itinerary = None;
                self.sink.notify(NoticeKind::Error, &err.to_string());
            }
        }
        true
    }

    /// Validate, run the backend once, and settle the phase
    ///
    /// Returns `Err` only for validation failures; backend failures and
    /// timeouts settle the session to `Failed` and report `SubmitOutcome::Failed`.
    pub async fn submit(&mut self) -> Result<SubmitOutcome> {
        let ticket = match self.begin_submit()? {
            Some(ticket) => ticket,
            None => return Ok(SubmitOutcome::AlreadyPlanning),
        };

        let backend = Arc::clone(&self.backend);
        let settled = tokio::time::timeout(self.timeout, backend.plan(&ticket.input)).await;
        let result = match settled {
            Ok(result) => result,
            Err(_) => Err(SessionError::Timeout(self.timeout.as_secs())),
        };

        self.resolve(ticket.generation, result);
        match self.phase {
            PlanningPhase::Ready => Ok(SubmitOutcome::Ready),
            _ => Ok(SubmitOutcome::Failed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockPlanner;
    use crate::notify::NullSink;

    fn session_with(planner: MockPlanner) -> TripSession {
        TripSession::new(Arc::new(planner), Arc::new(NullSink))
    }

    fn fill_required(session: &mut TripSession) {
        session.set_field(TripField::Origin("Delhi".to_string()));
        session.set_field(TripField::Destination("Shimla".to_string()));
        session.set_field(TripField::StartDate("2024-05-01".to_string()));
    }

    #[test]
    fn test_begin_submit_requires_fields() {
        let mut session = session_with(MockPlanner::new());
        let err = session.begin_submit().unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert_eq!(session.phase(), PlanningPhase::Idle);
    }

    #[test]
    fn test_begin_submit_noop_while_planning() {
        let mut session = session_with(MockPlanner::new());
        fill_required(&mut session);
        let ticket = session.begin_submit().unwrap();
        assert!(ticket.is_some());
        assert_eq!(session.phase(), PlanningPhase::Planning);

        // Second submit while in flight hands out no ticket
        assert!(session.begin_submit().unwrap().is_none());
    }

    #[test]
    fn test_resolve_drops_stale_generation() {
        let mut session = session_with(MockPlanner::new());
        fill_required(&mut session);
        let ticket = session.begin_submit().unwrap().unwrap();

        session.reset();
        let applied = session.resolve(
            ticket.generation,
            Ok(Itinerary::sample_day("Delhi", "Shimla")),
        );
        assert!(!applied);
        assert_eq!(session.phase(), PlanningPhase::Idle);
        assert!(session.snapshot().itinerary.is_none());
    }

    #[test]
    fn test_resolve_applies_matching_generation() {
        let mut session = session_with(MockPlanner::new());
        fill_required(&mut session);
        let ticket = session.begin_submit().unwrap().unwrap();

        let applied = session.resolve(
            ticket.generation,
            Ok(Itinerary::sample_day("Delhi", "Shimla")),
        );
        assert!(applied);
        assert_eq!(session.phase(), PlanningPhase::Ready);
    }

    #[test]
    fn test_edit_rearms_after_ready() {
        let mut session = session_with(MockPlanner::new());
        fill_required(&mut session);
        let ticket = session.begin_submit().unwrap().unwrap();
        session.resolve(
            ticket.generation,
            Ok(Itinerary::sample_day("Delhi", "Shimla")),
        );
        assert_eq!(session.phase(), PlanningPhase::Ready);

        session.set_field(TripField::Budget(500.0));
        assert_eq!(session.phase(), PlanningPhase::Idle);
        assert!(session.snapshot().itinerary.is_none());
    }

    #[test]
    fn test_toggle_interest_leaves_phase_alone() {
        let mut session = session_with(MockPlanner::new());
        fill_required(&mut session);
        let ticket = session.begin_submit().unwrap().unwrap();
        session.resolve(
            ticket.generation,
            Ok(Itinerary::sample_day("Delhi", "Shimla")),
        );

        session.toggle_interest(Interest::Nature);
        assert_eq!(session.phase(), PlanningPhase::Ready);
    }

    #[tokio::test]
    async fn test_submit_timeout_fails_session() {
        let planner = MockPlanner::new().with_delay(Duration::from_secs(60));
        let mut session = session_with(planner).with_timeout(Duration::from_millis(10));
        fill_required(&mut session);

        let outcome = session.submit().await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(session.phase(), PlanningPhase::Failed);
        let snapshot = session.snapshot();
        assert!(snapshot.last_error.unwrap().contains("timed out"));
    }
}
