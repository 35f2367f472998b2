use crate::updates::alert::{sample_alerts, Alert};
use crate::updates::source::AlertSource;
use tracing::debug;

/// Most alerts the feed keeps; older entries fall off the bottom
pub const MAX_VISIBLE_ALERTS: usize = 5;

/// Newest-first list of live alerts with a pause switch
#[derive(Debug, Default)]
pub struct AlertFeed {
    alerts: Vec<Alert>,
    live: bool,
}

impl AlertFeed {
    /// Empty feed with live updates on
    pub fn new() -> Self {
        Self {
            alerts: Vec::new(),
            live: true,
        }
    }

    /// Feed pre-populated with the canned sample alerts
    pub fn seeded() -> Self {
        Self {
            alerts: sample_alerts(),
            live: true,
        }
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn is_live(&self) -> bool {
        self.live
    }

    /// Flip the live/paused switch; returns the new state
    pub fn toggle_live(&mut self) -> bool {
        self.live = !self.live;
        debug!(target: "trip_session::updates", live = self.live, "feed toggled");
        self.live
    }

    /// Insert at the top and drop anything past the cap
    pub fn push(&mut self, alert: Alert) {
        debug!(target: "trip_session::updates", id = %alert.id, "alert pushed");
        self.alerts.insert(0, alert);
        self.alerts.truncate(MAX_VISIBLE_ALERTS);
    }

    /// Remove an alert by id; returns whether anything was removed
    pub fn dismiss(&mut self, id: &str) -> bool {
        let before = self.alerts.len();
        self.alerts.retain(|alert| alert.id != id);
        self.alerts.len() != before
    }

    /// Poll the source for one tick; no-op while paused
    ///
    /// Returns whether a new alert landed in the feed.
    pub fn pump(&mut self, source: &mut dyn AlertSource) -> bool {
        if !self.live {
            return false;
        }
        match source.next_alert() {
            Some(alert) => {
                self.push(alert);
                true
            }
            None => false,
        }
    }
}
