pub mod r#match;
pub mod tactics;
pub mod utils;

pub use r#match::{
    BatchSummary, Fixture, Match, MatchConfig, MatchError, MatchEvent, MatchEventType,
    MatchOutcome, MatchSimulator, MatchStatus, MatchTeam, RandomSource, ScriptedRandom,
    SeededRandom, StatsAggregator, StatusManager, TeamSide, TeamStatistics, ThreadRandom,
};

pub use tactics::{
    Formation, MatchTactics, Mentality, MentalityModifiers, NeutralModifier, TacticalModifier,
    TacticsProfile, TeamTactics, WeightedModifier, dynamic_tactics, formation_bias,
    mentality_modifiers, tactic_description,
};

pub use utils::*;
