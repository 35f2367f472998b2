use crate::updates::alert::{Alert, AlertKind, Severity};
use rand::Rng;

/// Producer of live alerts, polled once per feed tick
///
/// Injecting the source keeps the timer out of the feed, so tests can drive
/// ticks deterministically and a real integration can poll actual services.
pub trait AlertSource: Send + std::fmt::Debug {
    /// The next alert for this tick, if the source has one
    fn next_alert(&mut self) -> Option<Alert>;
}

/// Probability a tick of the simulated source emits an alert
pub const DEFAULT_ALERT_CHANCE: f64 = 0.3;

/// Source that occasionally emits a canned recommendation, like the demo's timer did
#[derive(Debug)]
pub struct SimulatedAlertSource {
    chance: f64,
    emitted: u64,
}

impl Default for SimulatedAlertSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedAlertSource {
    pub fn new() -> Self {
        Self {
            chance: DEFAULT_ALERT_CHANCE,
            emitted: 0,
        }
    }

    /// Override the per-tick emission probability; 1.0 and 0.0 make tests deterministic
    pub fn with_chance(mut self, chance: f64) -> Self {
        self.chance = chance.clamp(0.0, 1.0);
        self
    }
}

impl AlertSource for SimulatedAlertSource {
    fn next_alert(&mut self) -> Option<Alert> {
        if !rand::rng().random_bool(self.chance) {
            return None;
        }

        self.emitted += 1;
        Some(Alert {
            id: format!("sim-{}", self.emitted),
            kind: AlertKind::Suggestion,
            severity: Severity::Info,
            title: "New Recommendation".to_string(),
            message: "AI found a scenic route with beautiful views. Would you like to explore?"
                .to_string(),
            location: None,
            timestamp: "Just now".to_string(),
            action_required: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_certain_source_always_emits() {
        let mut source = SimulatedAlertSource::new().with_chance(1.0);
        let first = source.next_alert().unwrap();
        let second = source.next_alert().unwrap();
        assert_eq!(first.id, "sim-1");
        assert_eq!(second.id, "sim-2");
        assert_eq!(first.kind, AlertKind::Suggestion);
    }

    #[test]
    fn test_silent_source_never_emits() {
        let mut source = SimulatedAlertSource::new().with_chance(0.0);
        for _ in 0..20 {
            assert!(source.next_alert().is_none());
        }
    }
}
