use crate::r#match::{Match, MatchError, MatchOutcome, MatchSimulator, MatchTeam, SeededRandom};
use crate::tactics::MatchTactics;
use crate::utils::Logging;
use log::info;
use rayon::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct Fixture {
    pub home: MatchTeam,
    pub away: MatchTeam,
    pub tactics: Option<MatchTactics>,
}

impl Fixture {
    pub fn new(home: MatchTeam, away: MatchTeam) -> Self {
        Fixture {
            home,
            away,
            tactics: None,
        }
    }

    pub fn with_tactics(mut self, tactics: MatchTactics) -> Self {
        self.tactics = Some(tactics);
        self
    }
}

impl MatchSimulator {
    /// Plays every fixture in parallel. Fixture `i` draws from its own
    /// `SeededRandom(seed + i)`, so the batch replays identically no matter
    /// how the work is scheduled. Results keep the input order.
    pub fn simulate_fixtures(&self, fixtures: &[Fixture], seed: u64) -> Vec<Result<Match, MatchError>> {
        let results: Vec<Result<Match, MatchError>> = fixtures
            .par_iter()
            .enumerate()
            .map(|(idx, fixture)| {
                let message = format!("play match: {} vs {}", fixture.home.name, fixture.away.name);

                Logging::estimate_result(
                    || self.play_fixture(fixture, seed.wrapping_add(idx as u64)),
                    &message,
                )
            })
            .collect();

        info!("⚽ played {} fixtures", results.len());

        results
    }

    fn play_fixture(&self, fixture: &Fixture, seed: u64) -> Result<Match, MatchError> {
        let mut m = Self::create(fixture.home.clone(), fixture.away.clone())?;
        let mut random = SeededRandom::new(seed);

        match &fixture.tactics {
            Some(tactics) => self.simulate_with_tactics(&mut m, &mut random, tactics)?,
            None => self.simulate(&mut m, &mut random)?,
        };

        Ok(m)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub played: u32,
    pub failed: u32,
    pub home_wins: u32,
    pub draws: u32,
    pub away_wins: u32,
    pub home_goals: u32,
    pub away_goals: u32,
}

impl BatchSummary {
    pub fn from_results(results: &[Result<Match, MatchError>]) -> Self {
        let mut summary = BatchSummary::default();

        for result in results {
            let Ok(m) = result else {
                summary.failed += 1;
                continue;
            };

            summary.played += 1;
            summary.home_goals += m.home_score();
            summary.away_goals += m.away_score();

            match m.outcome() {
                Some(MatchOutcome::HomeWin) => summary.home_wins += 1,
                Some(MatchOutcome::Draw) => summary.draws += 1,
                Some(MatchOutcome::AwayWin) => summary.away_wins += 1,
                None => {}
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::{MatchConfig, MatchStatus};
    use crate::tactics::TeamTactics;

    fn fixtures(count: u32) -> Vec<Fixture> {
        (0..count)
            .map(|i| {
                Fixture::new(
                    MatchTeam::new(i * 2, format!("Home {}", i)),
                    MatchTeam::new(i * 2 + 1, format!("Away {}", i)),
                )
            })
            .collect()
    }

    #[test]
    fn test_batch_is_reproducible() {
        let simulator = MatchSimulator::default();
        let fixtures = fixtures(16);

        let first = simulator.simulate_fixtures(&fixtures, 99);
        let second = simulator.simulate_fixtures(&fixtures, 99);

        assert_eq!(first, second);
    }

    #[test]
    fn test_batch_matches_sequential_play() {
        let simulator = MatchSimulator::default();
        let fixtures = fixtures(4);

        let results = simulator.simulate_fixtures(&fixtures, 10);

        for (idx, fixture) in fixtures.iter().enumerate() {
            let mut m = MatchSimulator::create(fixture.home.clone(), fixture.away.clone()).unwrap();
            simulator
                .simulate(&mut m, &mut SeededRandom::new(10 + idx as u64))
                .unwrap();

            assert_eq!(results[idx].as_ref().unwrap(), &m);
        }
    }

    #[test]
    fn test_batch_reports_invalid_fixture_in_place() {
        let simulator = MatchSimulator::new(MatchConfig::new().with_total_minutes(10));
        let mut fixtures = fixtures(3);
        fixtures[1].away.name = String::new();
        fixtures[2] = fixtures[2].clone().with_tactics(MatchTactics::new(
            TeamTactics::from_codes("433", "attacking"),
            TeamTactics::default(),
        ));

        let results = simulator.simulate_fixtures(&fixtures, 1);

        assert_eq!(results[0].as_ref().unwrap().status(), MatchStatus::Completed);
        assert!(matches!(results[1], Err(MatchError::InvalidTeam(_))));
        assert_eq!(results[2].as_ref().unwrap().minute(), 10);

        let summary = BatchSummary::from_results(&results);
        assert_eq!(summary.played, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.home_wins + summary.draws + summary.away_wins, 2);
    }
}
