use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::repositories::TeamRepository;
use crate::domain::team::{MatchFilter, MatchResult, Team, TeamFilter, TeamId, TeamPatch};

/// In-memory implementation of TeamRepository
///
/// Records live in a single `Vec` behind a lock, kept in insertion order.
/// Nothing is ever removed; soft-deleted teams stay in the list.
#[derive(Debug, Default)]
pub struct InMemoryTeamRepository {
    teams: RwLock<Vec<Team>>,
}

impl InMemoryTeamRepository {
    /// Creates an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding the given teams, as-is
    pub fn with_teams(teams: Vec<Team>) -> Self {
        Self {
            teams: RwLock::new(teams),
        }
    }

    /// Creates a repository pre-loaded with the demo teams
    pub fn with_seed_data() -> Self {
        Self::with_teams(seed_teams())
    }

    /// Number of stored records, active or not
    pub async fn len(&self) -> usize {
        self.teams.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.teams.read().await.is_empty()
    }
}

/// Demo teams the service starts with
pub fn seed_teams() -> Vec<Team> {
    vec![
        Team::new(1, "Sporting", Some("Damasio".to_string())),
        Team::new(2, "Benfica", Some("Andre".to_string())),
        Team::new(3, "Beira Mar", Some("Mourinho".to_string())),
    ]
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn list_active(&self, filter: &TeamFilter) -> Vec<Team> {
        let teams = self.teams.read().await;
        teams
            .iter()
            .filter(|t| t.is_active() && filter.matches(t))
            .cloned()
            .collect()
    }

    async fn find_by_id(&self, id: TeamId) -> Option<Team> {
        let teams = self.teams.read().await;
        teams.iter().find(|t| t.id() == id).cloned()
    }

    async fn insert(&self, team: Team) -> bool {
        let mut teams = self.teams.write().await;

        let taken = teams
            .iter()
            .any(|t| t.id() == team.id() || t.has_name_like(team.name()));
        if taken {
            tracing::debug!(team_id = team.id(), "id or name already in use");
            return false;
        }

        tracing::debug!(team_id = team.id(), "inserting team");
        teams.push(team);
        true
    }

    async fn apply_update(&self, id: TeamId, patch: &TeamPatch) -> bool {
        let mut teams = self.teams.write().await;

        let mut updated = false;
        for team in teams.iter_mut().filter(|t| t.id() == id) {
            team.apply_patch(patch);
            updated = true;
        }

        tracing::debug!(team_id = id, updated, "applied team patch");
        updated
    }

    async fn append_match(&self, id: TeamId, result: MatchResult) -> bool {
        let mut teams = self.teams.write().await;

        match teams.iter_mut().find(|t| t.id() == id) {
            Some(team) => {
                team.record_match(result);
                true
            }
            None => false,
        }
    }

    async fn count_matches(&self, id: TeamId, filter: MatchFilter) -> usize {
        let teams = self.teams.read().await;
        teams
            .iter()
            .find(|t| t.id() == id)
            .map(|t| t.total_matches(filter))
            .unwrap_or(0)
    }
}
