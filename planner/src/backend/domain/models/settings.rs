use serde::{Deserialize, Serialize};

use super::ValidationError;

pub const DEFAULT_TOTAL_BUDGET: f64 = 5000.0;
pub const DEFAULT_PEOPLE_COUNT: u32 = 1;

/// Budget and headcount shared across the planning session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerSettings {
    pub total_budget: f64,
    pub people_count: u32,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            total_budget: DEFAULT_TOTAL_BUDGET,
            people_count: DEFAULT_PEOPLE_COUNT,
        }
    }
}

impl PlannerSettings {
    pub fn build(total_budget: f64, people_count: u32) -> Result<Self, ValidationError> {
        if !total_budget.is_finite() || total_budget < 0.0 {
            return Err(ValidationError::InvalidBudget(total_budget));
        }
        if people_count == 0 {
            return Err(ValidationError::InvalidPeopleCount);
        }
        Ok(Self {
            total_budget,
            people_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = PlannerSettings::default();
        assert_eq!(settings.total_budget, 5000.0);
        assert_eq!(settings.people_count, 1);
    }

    #[test]
    fn test_build_validates() {
        assert!(PlannerSettings::build(0.0, 1).is_ok());
        assert_eq!(
            PlannerSettings::build(-1.0, 1),
            Err(ValidationError::InvalidBudget(-1.0))
        );
        assert_eq!(
            PlannerSettings::build(100.0, 0),
            Err(ValidationError::InvalidPeopleCount)
        );
    }
}
