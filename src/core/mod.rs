pub mod budget;
pub mod input;
pub mod phase;
pub mod session;

pub use budget::BudgetBreakdown;
pub use input::{Interest, TripField, TripInput, MAX_TRAVELERS, MIN_TRAVELERS};
pub use phase::PlanningPhase;
pub use session::{SubmitOutcome, SubmitTicket, TripSession, DEFAULT_SUBMIT_TIMEOUT};
