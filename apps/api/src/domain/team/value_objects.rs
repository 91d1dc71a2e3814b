use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::domain::errors::TeamError;

/// Outcome of a match that can be recorded against a team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum MatchResult {
    Win,
    Lose,
    Tie,
}

/// Read-side selector for match totals
///
/// `All` only exists here: it sums every recorded outcome and can never be
/// stored as a result itself.
///
/// # Example
/// ```
/// use myteam_api::domain::team::value_objects::{MatchFilter, MatchResult};
///
/// assert!(MatchFilter::Win.matches(MatchResult::Win));
/// assert!(MatchFilter::All.matches(MatchResult::Tie));
/// assert!(MatchResult::try_from(MatchFilter::All).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum MatchFilter {
    Win,
    Lose,
    Tie,
    #[default]
    All,
}

impl MatchFilter {
    /// Checks whether a recorded result is counted by this filter
    pub fn matches(&self, result: MatchResult) -> bool {
        match self {
            MatchFilter::All => true,
            MatchFilter::Win => result == MatchResult::Win,
            MatchFilter::Lose => result == MatchResult::Lose,
            MatchFilter::Tie => result == MatchResult::Tie,
        }
    }
}

impl From<MatchResult> for MatchFilter {
    fn from(result: MatchResult) -> Self {
        match result {
            MatchResult::Win => MatchFilter::Win,
            MatchResult::Lose => MatchFilter::Lose,
            MatchResult::Tie => MatchFilter::Tie,
        }
    }
}

impl TryFrom<MatchFilter> for MatchResult {
    type Error = TeamError;

    fn try_from(filter: MatchFilter) -> Result<Self, Self::Error> {
        match filter {
            MatchFilter::Win => Ok(MatchResult::Win),
            MatchFilter::Lose => Ok(MatchResult::Lose),
            MatchFilter::Tie => Ok(MatchResult::Tie),
            MatchFilter::All => Err(TeamError::InvalidResultTag),
        }
    }
}

impl FromStr for MatchFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "win" => Ok(MatchFilter::Win),
            "lose" => Ok(MatchFilter::Lose),
            "tie" => Ok(MatchFilter::Tie),
            "all" => Ok(MatchFilter::All),
            other => Err(format!("Unknown match result type: {}", other)),
        }
    }
}

impl FromStr for MatchResult {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let filter = s.parse::<MatchFilter>()?;
        MatchResult::try_from(filter).map_err(|e| e.to_string())
    }
}

impl TryFrom<String> for MatchFilter {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for MatchResult {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchResult::Win => write!(f, "win"),
            MatchResult::Lose => write!(f, "lose"),
            MatchResult::Tie => write!(f, "tie"),
        }
    }
}

impl fmt::Display for MatchFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchFilter::Win => write!(f, "win"),
            MatchFilter::Lose => write!(f, "lose"),
            MatchFilter::Tie => write!(f, "tie"),
            MatchFilter::All => write!(f, "all"),
        }
    }
}
