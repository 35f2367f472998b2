//! Simulated map-service connection toggle
//!
//! The demo never talks to a real maps API: a non-blank key flips the panel to
//! "connected" and a blank one is rejected through the notification sink.

use crate::error::{Result, SessionError};
use crate::notify::{NoticeKind, NotificationSink};
use std::sync::Arc;
use tracing::info;

#[derive(Debug)]
pub struct MapLink {
    connected: bool,
    sink: Arc<dyn NotificationSink>,
}

impl MapLink {
    pub fn new(sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            connected: false,
            sink,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Connect with an API key; blank keys are a recoverable validation error
    pub fn connect(&mut self, api_key: &str) -> Result<()> {
        if api_key.trim().is_empty() {
            let message = "Please enter your maps API key";
            self.sink.notify(NoticeKind::Error, message);
            return Err(SessionError::Validation(message.to_string()));
        }

        self.connected = true;
        info!(target: "trip_session::maplink", "maps API connected");
        self.sink
            .notify(NoticeKind::Success, "Maps API connected successfully! 🗺️");
        Ok(())
    }

    pub fn disconnect(&mut self) {
        self.connected = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NullSink;

    #[test]
    fn test_blank_key_rejected() {
        let mut link = MapLink::new(Arc::new(NullSink));
        let err = link.connect("   ").unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert!(!link.is_connected());
    }

    #[test]
    fn test_connect_and_disconnect() {
        let mut link = MapLink::new(Arc::new(NullSink));
        link.connect("AIza-demo-key").unwrap();
        assert!(link.is_connected());
        link.disconnect();
        assert!(!link.is_connected());
    }
}
