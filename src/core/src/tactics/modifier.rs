use crate::tactics::TacticsProfile;

/// Maps a base event probability onto an effective one given the attacking
/// side's and the defending side's current tactics.
pub trait TacticalModifier: Send + Sync {
    fn shot_probability(
        &self,
        base: f64,
        attacking: &TacticsProfile,
        defending: &TacticsProfile,
    ) -> f64;

    fn goal_probability(
        &self,
        base: f64,
        attacking: &TacticsProfile,
        defending: &TacticsProfile,
    ) -> f64;
}

/// Leaves every probability untouched
#[derive(Debug, Default, Clone, Copy)]
pub struct NeutralModifier;

impl TacticalModifier for NeutralModifier {
    fn shot_probability(&self, base: f64, _: &TacticsProfile, _: &TacticsProfile) -> f64 {
        base
    }

    fn goal_probability(&self, base: f64, _: &TacticsProfile, _: &TacticsProfile) -> f64 {
        base
    }
}

/// Linear scaling around the neutral 0.5 dial:
/// `p * (1 + attack_weight * (attack - 0.5) - press_weight * (opponent press - 0.5))`,
/// clamped into `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedModifier {
    pub attack_weight: f64,
    pub press_weight: f64,
}

impl WeightedModifier {
    pub fn new(attack_weight: f64, press_weight: f64) -> Self {
        WeightedModifier {
            attack_weight,
            press_weight,
        }
    }

    fn scale(&self, base: f64, attacking: &TacticsProfile, defending: &TacticsProfile) -> f64 {
        let factor = 1.0 + self.attack_weight * (attacking.attack - 0.5)
            - self.press_weight * (defending.press - 0.5);

        (base * factor).clamp(0.0, 1.0)
    }
}

impl TacticalModifier for WeightedModifier {
    fn shot_probability(
        &self,
        base: f64,
        attacking: &TacticsProfile,
        defending: &TacticsProfile,
    ) -> f64 {
        self.scale(base, attacking, defending)
    }

    fn goal_probability(
        &self,
        base: f64,
        attacking: &TacticsProfile,
        defending: &TacticsProfile,
    ) -> f64 {
        self.scale(base, attacking, defending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tactics::formation_bias;

    #[test]
    fn test_neutral_returns_base() {
        let attacking = formation_bias("343");
        let defending = formation_bias("541");

        assert_eq!(NeutralModifier.shot_probability(0.1, &attacking, &defending), 0.1);
        assert_eq!(NeutralModifier.goal_probability(0.3, &attacking, &defending), 0.3);
    }

    #[test]
    fn test_weighted_neutral_profiles_keep_base() {
        let neutral = TacticsProfile::new(0.5, 0.5, 0.25);
        let modifier = WeightedModifier::new(1.0, 1.0);

        assert!((modifier.shot_probability(0.1, &neutral, &neutral) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_weighted_rewards_attack_and_punishes_press() {
        let modifier = WeightedModifier::new(1.0, 1.0);
        let neutral = TacticsProfile::new(0.5, 0.5, 0.25);
        let attacking = TacticsProfile::new(0.9, 0.5, 0.25);
        let pressing = TacticsProfile::new(0.5, 0.9, 0.25);

        assert!(modifier.shot_probability(0.1, &attacking, &neutral) > 0.1);
        assert!(modifier.goal_probability(0.3, &neutral, &pressing) < 0.3);
    }

    #[test]
    fn test_weighted_result_is_a_probability() {
        let modifier = WeightedModifier::new(50.0, 50.0);
        let high = TacticsProfile::new(0.95, 0.95, 0.95);
        let low = TacticsProfile::new(0.05, 0.05, 0.05);

        assert_eq!(modifier.shot_probability(0.9, &high, &low), 1.0);
        assert_eq!(modifier.shot_probability(0.9, &low, &high), 0.0);
    }
}
