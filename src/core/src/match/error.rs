use crate::r#match::MatchStatus;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    #[error("invalid match state: expected {expected}, found {actual}")]
    InvalidState {
        expected: MatchStatus,
        actual: MatchStatus,
    },

    #[error("invalid team: {0}")]
    InvalidTeam(String),

    #[error("invalid match config: {0}")]
    InvalidConfig(String),
}
