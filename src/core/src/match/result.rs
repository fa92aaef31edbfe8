use itertools::Itertools;
use serde::Serialize;
use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchTeam {
    pub id: u32,
    pub name: String,
}

impl MatchTeam {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        MatchTeam {
            id,
            name: name.into(),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamSide {
    Home,
    Away,
}

impl TeamSide {
    pub fn opposite(self) -> Self {
        match self {
            TeamSide::Home => TeamSide::Away,
            TeamSide::Away => TeamSide::Home,
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            TeamSide::Home => "H",
            TeamSide::Away => "A",
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Pending,
    InProgress,
    Completed,
}

impl Display for MatchStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            MatchStatus::Pending => "pending",
            MatchStatus::InProgress => "in_progress",
            MatchStatus::Completed => "completed",
        };

        write!(f, "{}", name)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchEventType {
    Goal,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
pub struct MatchEvent {
    pub minute: u32,
    #[serde(rename = "type")]
    pub event_type: MatchEventType,
    pub team: TeamSide,
}

impl MatchEvent {
    pub fn goal(minute: u32, team: TeamSide) -> Self {
        MatchEvent {
            minute,
            event_type: MatchEventType::Goal,
            team,
        }
    }
}

/// Per-team counters. `possession` holds a raw minute tally while the match
/// is running and a percentage once it has been finalized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TeamStatistics {
    pub possession: u32,
    pub shots: u32,
    pub shots_on_target: u32,
    pub corners: u32,
    pub fouls: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub offsides: u32,
    pub passes: u32,
    pub pass_accuracy: u8,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    HomeWin,
    Draw,
    AwayWin,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match {
    home: MatchTeam,
    away: MatchTeam,
    home_score: u32,
    away_score: u32,
    minute: u32,
    events: Vec<MatchEvent>,
    status: MatchStatus,
    home_stats: TeamStatistics,
    away_stats: TeamStatistics,
}

impl Match {
    pub(crate) fn new(home: MatchTeam, away: MatchTeam) -> Self {
        Match {
            home,
            away,
            home_score: 0,
            away_score: 0,
            minute: 0,
            events: Vec::new(),
            status: MatchStatus::Pending,
            home_stats: TeamStatistics::default(),
            away_stats: TeamStatistics::default(),
        }
    }

    pub fn home(&self) -> &MatchTeam {
        &self.home
    }

    pub fn away(&self) -> &MatchTeam {
        &self.away
    }

    pub fn team(&self, side: TeamSide) -> &MatchTeam {
        match side {
            TeamSide::Home => &self.home,
            TeamSide::Away => &self.away,
        }
    }

    pub fn home_score(&self) -> u32 {
        self.home_score
    }

    pub fn away_score(&self) -> u32 {
        self.away_score
    }

    pub fn score(&self, side: TeamSide) -> u32 {
        match side {
            TeamSide::Home => self.home_score,
            TeamSide::Away => self.away_score,
        }
    }

    /// Own goals minus opponent goals, from `side`'s point of view
    pub fn score_diff(&self, side: TeamSide) -> i32 {
        self.score(side) as i32 - self.score(side.opposite()) as i32
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    pub fn home_stats(&self) -> &TeamStatistics {
        &self.home_stats
    }

    pub fn away_stats(&self) -> &TeamStatistics {
        &self.away_stats
    }

    pub fn stats(&self, side: TeamSide) -> &TeamStatistics {
        match side {
            TeamSide::Home => &self.home_stats,
            TeamSide::Away => &self.away_stats,
        }
    }

    /// Number of goal events attributed to `side`
    pub fn goal_events(&self, side: TeamSide) -> usize {
        self.events
            .iter()
            .filter(|e| e.event_type == MatchEventType::Goal && e.team == side)
            .count()
    }

    pub fn outcome(&self) -> Option<MatchOutcome> {
        if self.status != MatchStatus::Completed {
            return None;
        }

        let outcome = match self.home_score.cmp(&self.away_score) {
            std::cmp::Ordering::Greater => MatchOutcome::HomeWin,
            std::cmp::Ordering::Less => MatchOutcome::AwayWin,
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
        };

        Some(outcome)
    }

    pub(crate) fn stats_mut(&mut self, side: TeamSide) -> &mut TeamStatistics {
        match side {
            TeamSide::Home => &mut self.home_stats,
            TeamSide::Away => &mut self.away_stats,
        }
    }

    pub(crate) fn set_minute(&mut self, minute: u32) {
        self.minute = minute;
    }

    pub(crate) fn set_status(&mut self, status: MatchStatus) {
        self.status = status;
    }

    // Score and event log move together so they never disagree
    pub(crate) fn record_goal(&mut self, side: TeamSide) {
        match side {
            TeamSide::Home => self.home_score += 1,
            TeamSide::Away => self.away_score += 1,
        }

        self.stats_mut(side).shots_on_target += 1;
        self.events.push(MatchEvent::goal(self.minute, side));
    }
}

impl Display for Match {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.home.name, self.home_score, self.away_score, self.away.name
        )?;

        if !self.events.is_empty() {
            let timeline = self
                .events
                .iter()
                .map(|e| format!("{}' {}", e.minute, e.team.short_name()))
                .join(", ");

            write!(f, " ({})", timeline)?;
        }

        Ok(())
    }
}
