use serde::{Deserialize, Serialize};

/// Fixed allocation shares across the four spending categories
const ACCOMMODATION_SHARE: f64 = 0.4;
const FOOD_SHARE: f64 = 0.3;
const TRANSPORT_SHARE: f64 = 0.2;
const ACTIVITIES_SHARE: f64 = 0.1;

/// Derived allocation of the total budget across four fixed categories
///
/// Each share is rounded independently from the total, so the four figures may
/// not sum back to the budget exactly. That drift is a documented property of
/// the estimate, not something the breakdown reconciles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetBreakdown {
    pub accommodation: u64,
    pub food: u64,
    pub transport: u64,
    pub activities: u64,
}

impl BudgetBreakdown {
    /// Compute the breakdown for a budget; all-zero when the budget is 0/unset
    pub fn from_budget(budget: f64) -> Self {
        let budget = budget.max(0.0);
        Self {
            accommodation: (budget * ACCOMMODATION_SHARE).round() as u64,
            food: (budget * FOOD_SHARE).round() as u64,
            transport: (budget * TRANSPORT_SHARE).round() as u64,
            activities: (budget * ACTIVITIES_SHARE).round() as u64,
        }
    }

    /// Sum of the four rounded shares; may drift from the input budget
    pub fn total(&self) -> u64 {
        self.accommodation + self.food + self.transport + self.activities
    }

    pub fn is_zero(&self) -> bool {
        self.total() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown_example() {
        let breakdown = BudgetBreakdown::from_budget(200.0);
        assert_eq!(breakdown.accommodation, 80);
        assert_eq!(breakdown.food, 60);
        assert_eq!(breakdown.transport, 40);
        assert_eq!(breakdown.activities, 20);
        assert_eq!(breakdown.total(), 200);
    }

    #[test]
    fn test_zero_budget() {
        let breakdown = BudgetBreakdown::from_budget(0.0);
        assert!(breakdown.is_zero());
    }

    #[test]
    fn test_shares_rounded_independently() {
        // 4*0.4 = 1.6 -> 2, 4*0.3 = 1.2 -> 1, 4*0.2 = 0.8 -> 1, 4*0.1 = 0.4 -> 0
        let breakdown = BudgetBreakdown::from_budget(4.0);
        assert_eq!(breakdown.accommodation, 2);
        assert_eq!(breakdown.food, 1);
        assert_eq!(breakdown.transport, 1);
        assert_eq!(breakdown.activities, 0);
        // Rounding drift: the shares sum to 4 here, but each was rounded alone
        assert_eq!(breakdown.total(), 4);
    }

    #[test]
    fn test_rounding_drift() {
        // 5*0.4 = 2, 5*0.3 = 1.5 -> 2, 5*0.2 = 1, 5*0.1 = 0.5 -> 1; total 6 != 5
        let breakdown = BudgetBreakdown::from_budget(5.0);
        assert_eq!(breakdown.total(), 6);
    }

    #[test]
    fn test_each_share_matches_round() {
        for budget in [0.0, 1.0, 37.5, 200.0, 999.99, 12_345.0] {
            let breakdown = BudgetBreakdown::from_budget(budget);
            assert_eq!(breakdown.accommodation, (budget * 0.4).round() as u64);
            assert_eq!(breakdown.food, (budget * 0.3).round() as u64);
            assert_eq!(breakdown.transport, (budget * 0.2).round() as u64);
            assert_eq!(breakdown.activities, (budget * 0.1).round() as u64);
        }
    }
}
