//! Notification sink contract for transient user-facing messages
//!
//! The session fires notices at validation failures, planning success, and
//! planning failure. Delivery is fire-and-forget; no acknowledgment flows back.

use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// Kind of transient message surfaced to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// Receiver for transient user-facing messages
pub trait NotificationSink: Send + Sync + std::fmt::Debug {
    fn notify(&self, kind: NoticeKind, message: &str);
}

/// Sink that forwards notices to the tracing subscriber
#[derive(Debug, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl NotificationSink for TracingSink {
    fn notify(&self, kind: NoticeKind, message: &str) {
        match kind {
            NoticeKind::Info => info!(target: "trip_session::notify", "{}", message),
            NoticeKind::Success => info!(target: "trip_session::notify", "✅ {}", message),
            NoticeKind::Error => error!(target: "trip_session::notify", "{}", message),
        }
    }
}

/// Sink that drops every notice; useful when the caller renders from snapshots only
#[derive(Debug, Default)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&self, _kind: NoticeKind, _message: &str) {}
}
