use async_trait::async_trait;

use crate::domain::team::{MatchFilter, MatchResult, Team, TeamFilter, TeamId, TeamPatch};

#[cfg(test)]
use mockall::automock;

/// Repository trait for Team records
///
/// Low-level access without business validation. Implementations only
/// guarantee structural uniqueness of ids and (case-insensitive) names,
/// across active and inactive records alike.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Active teams matching the filter, in insertion order
    async fn list_active(&self, filter: &TeamFilter) -> Vec<Team>;

    /// First team with the given id, active or not
    async fn find_by_id(&self, id: TeamId) -> Option<Team>;

    /// Appends a team; `false` if its id or name is already taken
    async fn insert(&self, team: Team) -> bool;

    /// Applies a patch to every team with the given id; `false` if none exists
    async fn apply_update(&self, id: TeamId, patch: &TeamPatch) -> bool;

    /// Records a match result; `false` if the team does not exist
    async fn append_match(&self, id: TeamId, result: MatchResult) -> bool;

    /// Matches selected by the filter; 0 if the team does not exist
    async fn count_matches(&self, id: TeamId, filter: MatchFilter) -> usize;
}
