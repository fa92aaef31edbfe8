use crate::r#match::{Match, MatchError, MatchStatus, RandomSource, StatusManager, TeamSide};

pub const PASS_ACCURACY_MIN: u32 = 60;
pub const PASS_ACCURACY_MAX: u32 = 90;

pub struct StatsAggregator;

impl StatsAggregator {
    /// Converts the raw per-minute counters into display-ready figures.
    ///
    /// Home possession becomes `round(tally / minutes * 100)` and away takes
    /// the remainder, so the two always sum to 100. Pass accuracy is a
    /// placeholder drawn uniformly from `[60, 90]`, home first.
    pub fn finalize<R: RandomSource + ?Sized>(
        m: &mut Match,
        random: &mut R,
    ) -> Result<(), MatchError> {
        StatusManager::ensure(m, MatchStatus::InProgress)?;

        let minutes = m.minute();
        if minutes == 0 {
            return Err(MatchError::InvalidConfig(String::from(
                "cannot finalize a match that played no minutes",
            )));
        }

        let home_tally = m.home_stats().possession.min(minutes);
        let home_possession =
            ((home_tally as f64 / minutes as f64) * 100.0).round() as u32;

        m.stats_mut(TeamSide::Home).possession = home_possession;
        m.stats_mut(TeamSide::Away).possession = 100 - home_possession;

        for side in [TeamSide::Home, TeamSide::Away] {
            let accuracy = random.next_in_range(PASS_ACCURACY_MIN, PASS_ACCURACY_MAX);
            m.stats_mut(side).pass_accuracy = accuracy as u8;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::{MatchTeam, ScriptedRandom, SeededRandom};

    fn running_match(minutes: u32, home_tally: u32) -> Match {
        let mut m = Match::new(MatchTeam::new(1, "Home"), MatchTeam::new(2, "Away"));

        m.set_status(MatchStatus::InProgress);
        m.set_minute(minutes);
        m.stats_mut(TeamSide::Home).possession = home_tally;
        m.stats_mut(TeamSide::Away).possession = minutes - home_tally;

        m
    }

    #[test]
    fn test_possession_rounds_and_closes() {
        let mut m = running_match(90, 47);

        StatsAggregator::finalize(&mut m, &mut SeededRandom::new(1)).unwrap();

        assert_eq!(m.home_stats().possession, 52);
        assert_eq!(m.away_stats().possession, 48);
    }

    #[test]
    fn test_possession_sum_is_exact_for_thirds() {
        let mut m = running_match(3, 1);

        StatsAggregator::finalize(&mut m, &mut SeededRandom::new(1)).unwrap();

        assert_eq!(m.home_stats().possession, 33);
        assert_eq!(m.away_stats().possession, 67);
    }

    #[test]
    fn test_pass_accuracy_from_draws() {
        let mut m = running_match(10, 5);
        let mut random = ScriptedRandom::new(vec![0.0, 0.999_999]);

        StatsAggregator::finalize(&mut m, &mut random).unwrap();

        assert_eq!(m.home_stats().pass_accuracy, 60);
        assert_eq!(m.away_stats().pass_accuracy, 90);
        assert_eq!(random.draws(), 2);
    }

    #[test]
    fn test_finalize_requires_running_match() {
        let mut m = Match::new(MatchTeam::new(1, "Home"), MatchTeam::new(2, "Away"));

        let result = StatsAggregator::finalize(&mut m, &mut SeededRandom::new(1));

        assert!(matches!(result, Err(MatchError::InvalidState { .. })));
        assert_eq!(m.home_stats().pass_accuracy, 0);
    }
}
