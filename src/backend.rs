//! Planning backend contract and the in-tree mock implementation
//!
//! A real system would put a routing/itinerary service behind [`PlanningBackend`].
//! The crate ships [`MockPlanner`], which settles after a fixed delay the way the
//! demo's simulated planning step did.

use crate::core::input::TripInput;
use crate::error::{Result, SessionError};
use crate::types::itinerary::Itinerary;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Asynchronous planning operation, invoked at most once per submit cycle
pub trait PlanningBackend: Send + Sync + std::fmt::Debug {
    /// Produce an itinerary for the given input, or fail with a reason
    fn plan<'a>(
        &'a self,
        input: &'a TripInput,
    ) -> Pin<Box<dyn std::future::Future<Output = Result<Itinerary>> + Send + 'a>>;
}

/// Default delay before the mock settles, matching the demo's simulated wait
pub const MOCK_PLANNING_DELAY: Duration = Duration::from_secs(2);

/// A mock planning backend that resolves after a fixed delay
///
/// Counts invocations so tests can assert the at-most-once-per-submit contract.
#[derive(Debug)]
pub struct MockPlanner {
    delay: Duration,
    fail_with: Option<String>,
    calls: AtomicUsize,
}

impl Default for MockPlanner {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPlanner {
    pub fn new() -> Self {
        Self {
            delay: MOCK_PLANNING_DELAY,
            fail_with: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Make every plan call fail with the given reason
    pub fn failing(mut self, reason: impl Into<String>) -> Self {
        self.fail_with = Some(reason.into());
        self
    }

    /// Number of times `plan` has been invoked
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PlanningBackend for MockPlanner {
    fn plan<'a>(
        &'a self,
        input: &'a TripInput,
    ) -> Pin<Box<dyn std::future::Future<Output = Result<Itinerary>> + Send + 'a>> {
        Box::pin(async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;

            if let Some(reason) = &self.fail_with {
                return Err(SessionError::Planning(reason.clone()));
            }

            Ok(Itinerary::sample_day(&input.origin, &input.destination))
        })
    }
}
