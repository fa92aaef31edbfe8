use crate::r#match::{
    Match, MatchConfig, MatchError, MatchStatus, MatchTeam, RandomSource, StatsAggregator,
    StatusManager, TeamSide,
};
use crate::tactics::{MatchTactics, NeutralModifier, TacticalModifier, TacticsProfile};
use log::{debug, info, trace, warn};

/// Minute-stepped stochastic match engine.
///
/// The simulator holds the configuration and the tactical modifier; every
/// random draw comes from the `RandomSource` handed to `simulate`, so the same
/// source replays the same match.
pub struct MatchSimulator {
    config: MatchConfig,
    modifier: Box<dyn TacticalModifier>,
}

impl Default for MatchSimulator {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}

impl MatchSimulator {
    pub fn new(config: MatchConfig) -> Self {
        MatchSimulator {
            config,
            modifier: Box::new(NeutralModifier),
        }
    }

    pub fn with_modifier(mut self, modifier: impl TacticalModifier + 'static) -> Self {
        self.modifier = Box::new(modifier);
        self
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn create(home: MatchTeam, away: MatchTeam) -> Result<Match, MatchError> {
        for (side, team) in [(TeamSide::Home, &home), (TeamSide::Away, &away)] {
            if team.name.trim().is_empty() {
                warn!("rejected match with unnamed {:?} team (id {})", side, team.id);

                return Err(MatchError::InvalidTeam(format!(
                    "{:?} team {} has no name",
                    side, team.id
                )));
            }
        }

        debug!("match created: {} vs {}", home.name, away.name);

        Ok(Match::new(home, away))
    }

    pub fn simulate<'m, R: RandomSource + ?Sized>(
        &self,
        m: &'m mut Match,
        random: &mut R,
    ) -> Result<&'m mut Match, MatchError> {
        self.simulate_observed(m, random, None, |_| {})
    }

    pub fn simulate_with_tactics<'m, R: RandomSource + ?Sized>(
        &self,
        m: &'m mut Match,
        random: &mut R,
        tactics: &MatchTactics,
    ) -> Result<&'m mut Match, MatchError> {
        self.simulate_observed(m, random, Some(tactics), |_| {})
    }

    /// Plays the whole match, calling `observer` after every minute.
    ///
    /// Nothing is touched unless the match is pending and the config is valid.
    pub fn simulate_observed<'m, R, F>(
        &self,
        m: &'m mut Match,
        random: &mut R,
        tactics: Option<&MatchTactics>,
        mut observer: F,
    ) -> Result<&'m mut Match, MatchError>
    where
        R: RandomSource + ?Sized,
        F: FnMut(&Match),
    {
        StatusManager::ensure(m, MatchStatus::Pending)?;
        self.config.validate()?;

        StatusManager::advance(m, MatchStatus::Pending)?;

        let bases = tactics.map(|t| (t.home.base_profile(), t.away.base_profile()));

        for minute in 1..=self.config.total_minutes {
            m.set_minute(minute);

            let profiles = bases.map(|(home, away)| {
                let home = home.dynamic(minute, m.score_diff(TeamSide::Home));
                let away = away.dynamic(minute, m.score_diff(TeamSide::Away));

                trace!("minute {}: home {:?}, away {:?}", minute, home, away);

                (home, away)
            });

            Self::sample_possession(m, random);
            self.generate_events(m, random, profiles.as_ref());

            observer(m);
        }

        StatsAggregator::finalize(m, random)?;
        StatusManager::advance(m, MatchStatus::InProgress)?;

        info!("match finished: {}", m);

        Ok(m)
    }

    fn sample_possession<R: RandomSource + ?Sized>(m: &mut Match, random: &mut R) {
        let side = if random.next_f64() > 0.5 {
            TeamSide::Home
        } else {
            TeamSide::Away
        };

        m.stats_mut(side).possession += 1;
    }

    fn generate_events<R: RandomSource + ?Sized>(
        &self,
        m: &mut Match,
        random: &mut R,
        profiles: Option<&(TacticsProfile, TacticsProfile)>,
    ) {
        let odds = self.minute_odds(profiles);

        if random.next_f64() >= odds.shot {
            return;
        }

        let side = if random.next_f64() > 1.0 - odds.home_share {
            TeamSide::Home
        } else {
            TeamSide::Away
        };

        m.stats_mut(side).shots += 1;

        let goal_probability = match side {
            TeamSide::Home => odds.home_goal,
            TeamSide::Away => odds.away_goal,
        };

        if random.next_f64() < goal_probability {
            m.record_goal(side);

            debug!(
                "goal: {}' {} ({} - {})",
                m.minute(),
                m.team(side).name,
                m.home_score(),
                m.away_score()
            );
        }
    }

    fn minute_odds(&self, profiles: Option<&(TacticsProfile, TacticsProfile)>) -> MinuteOdds {
        let shot = self.config.shot_probability;
        let goal = self.config.goal_probability;

        let Some((home, away)) = profiles else {
            return MinuteOdds {
                shot,
                home_share: 0.5,
                home_goal: goal,
                away_goal: goal,
            };
        };

        let home_shot = self.modifier.shot_probability(shot, home, away);
        let away_shot = self.modifier.shot_probability(shot, away, home);
        let total = home_shot + away_shot;

        MinuteOdds {
            shot: total / 2.0,
            home_share: if total > 0.0 { home_shot / total } else { 0.5 },
            home_goal: self.modifier.goal_probability(goal, home, away),
            away_goal: self.modifier.goal_probability(goal, away, home),
        }
    }
}

struct MinuteOdds {
    shot: f64,
    home_share: f64,
    home_goal: f64,
    away_goal: f64,
}
