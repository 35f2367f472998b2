use crate::core::input::TripInput;
use crate::core::phase::PlanningPhase;
use crate::types::itinerary::Itinerary;
use serde::{Deserialize, Serialize};

/// Immutable read of a session for rendering
///
/// The snapshot is a clone; mutating it never touches the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub input: TripInput,
    pub phase: PlanningPhase,
    /// Human-readable reason for the last planning or validation failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
    /// Present only while the phase is `Ready`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub itinerary: Option<Itinerary>,
}
