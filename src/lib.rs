//! trip-session-rs: a UI-independent trip-planning session state machine
//!
//! This library models one user's trip-planning interaction: the trip input
//! form, the derived budget breakdown, and the asynchronous planning workflow
//! with its `Idle -> Planning -> Ready | Failed` phases. The presentation
//! layer, planning backend, and notification sink are collaborators behind
//! traits; mocks for the latter two ship in-tree.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//! use trip_session_rs::{MockPlanner, NullSink, SubmitOutcome, TripField, TripSession};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let planner = Arc::new(MockPlanner::new().with_delay(Duration::from_millis(10)));
//!     let mut session = TripSession::new(planner, Arc::new(NullSink));
//!
//!     session.set_field(TripField::Origin("Delhi".to_string()));
//!     session.set_field(TripField::Destination("Shimla".to_string()));
//!     session.set_field(TripField::StartDate("2024-05-01".to_string()));
//!     session.set_field(TripField::Budget(200.0));
//!
//!     let outcome = session.submit().await?;
//!     assert_eq!(outcome, SubmitOutcome::Ready);
//!     println!("total: ${}", session.snapshot().itinerary.unwrap().total_cost());
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod core;
pub mod error;
pub mod maplink;
pub mod notify;
pub mod types;
pub mod updates;

pub use crate::core::{
    BudgetBreakdown, Interest, PlanningPhase, SubmitOutcome, SubmitTicket, TripField, TripInput,
    TripSession, DEFAULT_SUBMIT_TIMEOUT, MAX_TRAVELERS, MIN_TRAVELERS,
};
pub use backend::{MockPlanner, PlanningBackend, MOCK_PLANNING_DELAY};
pub use error::{Result, SessionError};
pub use maplink::MapLink;
pub use notify::{NoticeKind, NotificationSink, NullSink, TracingSink};
pub use types::{ItemKind, Itinerary, ItineraryItem, SessionSnapshot};
pub use updates::{
    sample_alerts, sample_weather, Alert, AlertFeed, AlertKind, AlertSource, Severity,
    SimulatedAlertSource, WeatherReport, MAX_VISIBLE_ALERTS,
};

#[cfg(feature = "cli")]
pub mod cli;
