use crate::error::SessionError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Travelers are clamped to this range on write
pub const MIN_TRAVELERS: u32 = 1;
pub const MAX_TRAVELERS: u32 = 20;

/// Fixed multi-select interest options offered by the planner form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interest {
    Adventure,
    Culture,
    Food,
    Nature,
    Relaxation,
    Photography,
    Shopping,
    Nightlife,
}

impl Interest {
    /// All options, in the order the form presents them
    pub const ALL: [Interest; 8] = [
        Interest::Adventure,
        Interest::Culture,
        Interest::Food,
        Interest::Nature,
        Interest::Relaxation,
        Interest::Photography,
        Interest::Shopping,
        Interest::Nightlife,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Interest::Adventure => "Adventure",
            Interest::Culture => "Culture",
            Interest::Food => "Food",
            Interest::Nature => "Nature",
            Interest::Relaxation => "Relaxation",
            Interest::Photography => "Photography",
            Interest::Shopping => "Shopping",
            Interest::Nightlife => "Nightlife",
        }
    }
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Interest {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "adventure" => Ok(Interest::Adventure),
            "culture" => Ok(Interest::Culture),
            "food" => Ok(Interest::Food),
            "nature" => Ok(Interest::Nature),
            "relaxation" => Ok(Interest::Relaxation),
            "photography" => Ok(Interest::Photography),
            "shopping" => Ok(Interest::Shopping),
            "nightlife" => Ok(Interest::Nightlife),
            other => Err(SessionError::InvalidInterest(other.to_string())),
        }
    }
}

/// A single-field write intent dispatched by the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum TripField {
    Origin(String),
    Destination(String),
    /// ISO-8601 date string, empty means unset
    StartDate(String),
    /// ISO-8601 date string, empty means unset
    EndDate(String),
    Budget(f64),
    Travelers(u32),
}

impl TripField {
    pub fn name(&self) -> &'static str {
        match self {
            TripField::Origin(_) => "origin",
            TripField::Destination(_) => "destination",
            TripField::StartDate(_) => "start_date",
            TripField::EndDate(_) => "end_date",
            TripField::Budget(_) => "budget",
            TripField::Travelers(_) => "travelers",
        }
    }
}

/// The mutable trip parameters owned by a session
///
/// `end_date` is not required to follow `start_date`; the form never enforced
/// an ordering and the gap is kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripInput {
    pub origin: String,
    pub destination: String,
    /// ISO-8601 date string, empty means unset
    pub start_date: String,
    /// ISO-8601 date string, empty means unset
    pub end_date: String,
    /// Total budget; 0 is treated as "unset"
    pub budget: f64,
    /// Clamped to [MIN_TRAVELERS, MAX_TRAVELERS]
    pub travelers: u32,
    pub interests: BTreeSet<Interest>,
}

impl Default for TripInput {
    fn default() -> Self {
        Self {
            origin: String::new(),
            destination: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            budget: 0.0,
            travelers: MIN_TRAVELERS,
            interests: BTreeSet::new(),
        }
    }
}

impl TripInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a single-field write; numeric fields are normalized here
    pub fn apply(&mut self, field: TripField) {
        match field {
            TripField::Origin(v) => self.origin = v,
            TripField::Destination(v) => self.destination = v,
            TripField::StartDate(v) => self.start_date = v,
            TripField::EndDate(v) => self.end_date = v,
            TripField::Budget(v) => self.budget = v.max(0.0),
            TripField::Travelers(v) => self.travelers = v.clamp(MIN_TRAVELERS, MAX_TRAVELERS),
        }
    }

    /// Toggle an interest on or off; applying twice restores the original set
    pub fn toggle_interest(&mut self, interest: Interest) {
        if !self.interests.insert(interest) {
            self.interests.remove(&interest);
        }
    }

    /// Names of required fields that are still empty, in form order
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.origin.trim().is_empty() {
            missing.push("origin");
        }
        if self.destination.trim().is_empty() {
            missing.push("destination");
        }
        if self.start_date.trim().is_empty() {
            missing.push("start_date");
        }
        missing
    }

    pub fn is_submittable(&self) -> bool {
        self.missing_required_fields().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interest_parse_roundtrip() {
        for interest in Interest::ALL {
            let parsed: Interest = interest.label().parse().unwrap();
            assert_eq!(parsed, interest);
        }
    }

    #[test]
    fn test_interest_parse_unknown() {
        let err = "Skydiving".parse::<Interest>().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INTEREST_OPTION");
    }

    #[test]
    fn test_toggle_is_involution() {
        let mut input = TripInput::new();
        let before = input.interests.clone();
        input.toggle_interest(Interest::Food);
        assert!(input.interests.contains(&Interest::Food));
        input.toggle_interest(Interest::Food);
        assert_eq!(input.interests, before);
    }

    #[test]
    fn test_travelers_clamped() {
        let mut input = TripInput::new();
        input.apply(TripField::Travelers(0));
        assert_eq!(input.travelers, 1);
        input.apply(TripField::Travelers(50));
        assert_eq!(input.travelers, 20);
    }

    #[test]
    fn test_negative_budget_normalized() {
        let mut input = TripInput::new();
        input.apply(TripField::Budget(-100.0));
        assert_eq!(input.budget, 0.0);
    }

    #[test]
    fn test_missing_required_fields() {
        let mut input = TripInput::new();
        assert_eq!(
            input.missing_required_fields(),
            vec!["origin", "destination", "start_date"]
        );

        input.apply(TripField::Origin("Delhi".to_string()));
        input.apply(TripField::Destination("Shimla".to_string()));
        input.apply(TripField::StartDate("2024-05-01".to_string()));
        assert!(input.is_submittable());
    }

    #[test]
    fn test_end_date_before_start_date_accepted() {
        // No ordering constraint between the two dates
        let mut input = TripInput::new();
        input.apply(TripField::Origin("Delhi".to_string()));
        input.apply(TripField::Destination("Shimla".to_string()));
        input.apply(TripField::StartDate("2024-05-10".to_string()));
        input.apply(TripField::EndDate("2024-05-01".to_string()));
        assert!(input.is_submittable());
    }
}
