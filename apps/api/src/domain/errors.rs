use thiserror::Error;

use crate::domain::team::TeamId;

/// Reasons a team operation is refused
///
/// None of these are fatal: they describe input the rules reject or a
/// target the store does not hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TeamError {
    #[error("an invalid team Id was provided: {0}")]
    InvalidIdentifier(TeamId),

    #[error("invalid team record: {0}")]
    MissingOrMalformedRecord(String),

    #[error("Team not found: {0}")]
    NotFound(TeamId),

    #[error("A team with id {0} or name '{1}' already exists")]
    DuplicateRecord(TeamId, String),

    #[error("'all' is a query filter and cannot be recorded as a match result")]
    InvalidResultTag,
}

pub type TeamResult<T> = Result<T, TeamError>;

impl TeamError {
    /// Error for a team whose name is empty or whitespace
    pub fn empty_name() -> Self {
        Self::MissingOrMalformedRecord("Null or empty team names are not allowed".to_string())
    }
}
