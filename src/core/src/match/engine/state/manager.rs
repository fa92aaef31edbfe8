use crate::r#match::{Match, MatchError, MatchStatus};

/// Drives the forward-only status lifecycle of a match:
/// `Pending -> InProgress -> Completed`.
pub struct StatusManager;

impl StatusManager {
    pub fn next(current: MatchStatus) -> Option<MatchStatus> {
        match current {
            MatchStatus::Pending => Some(MatchStatus::InProgress),
            MatchStatus::InProgress => Some(MatchStatus::Completed),
            MatchStatus::Completed => None,
        }
    }

    pub fn ensure(m: &Match, expected: MatchStatus) -> Result<(), MatchError> {
        if m.status() != expected {
            return Err(MatchError::InvalidState {
                expected,
                actual: m.status(),
            });
        }

        Ok(())
    }

    /// Moves `m` one step forward, provided it currently sits in `expected`
    pub fn advance(m: &mut Match, expected: MatchStatus) -> Result<MatchStatus, MatchError> {
        Self::ensure(m, expected)?;

        let next = Self::next(expected).ok_or(MatchError::InvalidState {
            expected,
            actual: m.status(),
        })?;

        m.set_status(next);

        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::MatchTeam;

    fn new_match() -> Match {
        Match::new(MatchTeam::new(1, "Home"), MatchTeam::new(2, "Away"))
    }

    #[test]
    fn test_status_manager_next() {
        assert_eq!(StatusManager::next(MatchStatus::Pending), Some(MatchStatus::InProgress));
        assert_eq!(StatusManager::next(MatchStatus::InProgress), Some(MatchStatus::Completed));
        assert_eq!(StatusManager::next(MatchStatus::Completed), None);
    }

    #[test]
    fn test_advance_walks_forward() {
        let mut m = new_match();

        assert_eq!(
            StatusManager::advance(&mut m, MatchStatus::Pending),
            Ok(MatchStatus::InProgress)
        );
        assert_eq!(
            StatusManager::advance(&mut m, MatchStatus::InProgress),
            Ok(MatchStatus::Completed)
        );
        assert_eq!(m.status(), MatchStatus::Completed);
    }

    #[test]
    fn test_advance_rejects_wrong_status() {
        let mut m = new_match();

        let result = StatusManager::advance(&mut m, MatchStatus::InProgress);

        assert_eq!(
            result,
            Err(MatchError::InvalidState {
                expected: MatchStatus::InProgress,
                actual: MatchStatus::Pending,
            })
        );
        assert_eq!(m.status(), MatchStatus::Pending);
    }

    #[test]
    fn test_completed_is_terminal() {
        let mut m = new_match();
        m.set_status(MatchStatus::Completed);

        assert!(StatusManager::advance(&mut m, MatchStatus::Completed).is_err());
        assert_eq!(m.status(), MatchStatus::Completed);
    }
}
