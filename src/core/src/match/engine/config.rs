use crate::r#match::MatchError;
use serde::Serialize;

pub const DEFAULT_TOTAL_MINUTES: u32 = 90;
pub const DEFAULT_SHOT_PROBABILITY: f64 = 0.10;
pub const DEFAULT_GOAL_PROBABILITY: f64 = 0.30;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchConfig {
    pub total_minutes: u32,
    pub shot_probability: f64,
    pub goal_probability: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            total_minutes: DEFAULT_TOTAL_MINUTES,
            shot_probability: DEFAULT_SHOT_PROBABILITY,
            goal_probability: DEFAULT_GOAL_PROBABILITY,
        }
    }
}

impl MatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_total_minutes(mut self, total_minutes: u32) -> Self {
        self.total_minutes = total_minutes;
        self
    }

    pub fn with_shot_probability(mut self, probability: f64) -> Self {
        self.shot_probability = probability;
        self
    }

    pub fn with_goal_probability(mut self, probability: f64) -> Self {
        self.goal_probability = probability;
        self
    }

    /// Rejects anything outside the documented ranges. Probabilities must lie
    /// in `(0, 1]`; `1.0` is allowed to force an outcome every minute.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.total_minutes == 0 {
            return Err(MatchError::InvalidConfig(String::from(
                "total_minutes must be greater than 0",
            )));
        }

        Self::validate_probability("shot_probability", self.shot_probability)?;
        Self::validate_probability("goal_probability", self.goal_probability)?;

        Ok(())
    }

    fn validate_probability(name: &str, value: f64) -> Result<(), MatchError> {
        if value.is_nan() || value <= 0.0 || value > 1.0 {
            return Err(MatchError::InvalidConfig(format!(
                "{} must be in (0, 1], got {}",
                name, value
            )));
        }

        Ok(())
    }
}
