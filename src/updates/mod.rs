//! Live-updates collaborators: the alert feed and its injected event source

pub mod alert;
pub mod feed;
pub mod source;

pub use alert::{sample_alerts, sample_weather, Alert, AlertKind, Severity, WeatherReport};
pub use feed::{AlertFeed, MAX_VISIBLE_ALERTS};
pub use source::{AlertSource, SimulatedAlertSource, DEFAULT_ALERT_CHANCE};
