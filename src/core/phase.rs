use serde::{Deserialize, Serialize};
use std::fmt;

/// State machine tracking whether a plan request is pending, succeeded, or failed
///
/// Transitions: `Idle -> Planning -> Ready | Failed`, and `Ready | Failed -> Idle`
/// on any subsequent field edit. Nothing moves without an explicit submit or edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanningPhase {
    Idle,
    Planning,
    Ready,
    Failed,
}

impl PlanningPhase {
    /// A planning operation is currently in flight
    pub fn is_planning(&self) -> bool {
        matches!(self, PlanningPhase::Planning)
    }

    /// A prior submit has settled, successfully or not
    pub fn is_settled(&self) -> bool {
        matches!(self, PlanningPhase::Ready | PlanningPhase::Failed)
    }
}

impl Default for PlanningPhase {
    fn default() -> Self {
        PlanningPhase::Idle
    }
}

impl fmt::Display for PlanningPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PlanningPhase::Idle => "idle",
            PlanningPhase::Planning => "planning",
            PlanningPhase::Ready => "ready",
            PlanningPhase::Failed => "failed",
        };
        f.write_str(label)
    }
}
