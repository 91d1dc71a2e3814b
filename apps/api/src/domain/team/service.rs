use std::sync::Arc;

use crate::domain::errors::{TeamError, TeamResult};
use crate::domain::repositories::TeamRepository;

use super::team::{Team, TeamFilter, TeamId, TeamPatch};
use super::value_objects::{MatchFilter, MatchResult};

/// Business rules in front of the team store
///
/// Every check runs before the repository is touched, so rejected input
/// never reaches it. Multi-step operations (update, soft-delete) confirm the
/// target exists first.
#[derive(Clone)]
pub struct TeamService {
    repo: Arc<dyn TeamRepository>,
}

impl TeamService {
    pub fn new(repo: Arc<dyn TeamRepository>) -> Self {
        Self { repo }
    }

    /// Lists active teams, optionally filtered by name and/or coach
    pub async fn list_teams(&self, filter: &TeamFilter) -> Vec<Team> {
        self.repo.list_active(filter).await
    }

    /// Fetches a team, active or not
    ///
    /// # Returns
    /// * `Err(InvalidIdentifier)` - `id <= 0`, the store is not queried
    /// * `Err(NotFound)` - no team with this id
    pub async fn get_team(&self, id: TeamId) -> TeamResult<Team> {
        ensure_valid_id(id)?;

        self.repo
            .find_by_id(id)
            .await
            .ok_or(TeamError::NotFound(id))
    }

    /// Inserts a new team
    ///
    /// # Business Rules Enforced
    /// - Id must be positive
    /// - Name must not be blank
    /// - Id and name (case-insensitive) must be unused, including by
    ///   deleted teams
    pub async fn create_team(&self, team: Team) -> TeamResult<()> {
        if team.id() <= 0 {
            tracing::warn!(team_id = team.id(), "rejected team with invalid id");
            return Err(TeamError::MissingOrMalformedRecord(format!(
                "invalid team id {}",
                team.id()
            )));
        }
        if !team.is_valid() {
            tracing::warn!(team_id = team.id(), "rejected team with empty name");
            return Err(TeamError::empty_name());
        }

        let (id, name) = (team.id(), team.name().to_string());
        if !self.repo.insert(team).await {
            tracing::warn!(team_id = id, name = %name, "duplicate team");
            return Err(TeamError::DuplicateRecord(id, name));
        }

        tracing::info!(team_id = id, name = %name, "team created");
        Ok(())
    }

    /// Updates a team's name, coach and active flag
    ///
    /// The patch must carry a non-blank name and the team must exist.
    pub async fn update_team(&self, id: TeamId, patch: &TeamPatch) -> TeamResult<()> {
        ensure_valid_id(id)?;
        if !patch.has_name() {
            tracing::warn!(team_id = id, "rejected update with empty name");
            return Err(TeamError::empty_name());
        }

        self.get_team(id).await?;

        if !self.repo.apply_update(id, patch).await {
            return Err(TeamError::NotFound(id));
        }

        tracing::info!(team_id = id, "team updated");
        Ok(())
    }

    /// Soft-deletes a team by clearing its active flag
    pub async fn delete_team(&self, id: TeamId) -> TeamResult<()> {
        ensure_valid_id(id)?;

        let mut team = self.get_team(id).await?;
        team.deactivate();

        if !self.repo.apply_update(id, &team.to_patch()).await {
            return Err(TeamError::NotFound(id));
        }

        tracing::info!(team_id = id, "team deactivated");
        Ok(())
    }

    /// Records a match result for a team
    pub async fn add_match(&self, team_id: TeamId, result: MatchResult) -> TeamResult<()> {
        ensure_valid_id(team_id)?;

        if !self.repo.append_match(team_id, result).await {
            return Err(TeamError::NotFound(team_id));
        }

        tracing::info!(team_id, result = %result, "match recorded");
        Ok(())
    }

    /// Total matches selected by the filter; 0 for an invalid or unknown id
    pub async fn get_matches_total(&self, team_id: TeamId, filter: MatchFilter) -> usize {
        if team_id <= 0 {
            return 0;
        }

        self.repo.count_matches(team_id, filter).await
    }
}

fn ensure_valid_id(id: TeamId) -> TeamResult<()> {
    if id <= 0 {
        tracing::warn!(team_id = id, "invalid team id");
        return Err(TeamError::InvalidIdentifier(id));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::team_repository::MockTeamRepository;
    use mockall::predicate::eq;

    fn team_list() -> Vec<Team> {
        vec![
            Team::new(1, "Sporting", Some("Damasio".to_string())),
            Team::new(2, "Benfica", Some("Andre".to_string())),
            Team::new(3, "Beira Mar", Some("Mourinho".to_string())),
        ]
    }

    fn service(mock: MockTeamRepository) -> TeamService {
        TeamService::new(Arc::new(mock))
    }

    fn named_patch(name: &str) -> TeamPatch {
        TeamPatch {
            name: Some(name.to_string()),
            coach_name: None,
            is_active: true,
        }
    }

    #[tokio::test]
    async fn list_teams_passes_filter_through() {
        let mut mock = MockTeamRepository::new();
        mock.expect_list_active()
            .withf(|f| f.name.as_deref() == Some("Benfica") && f.coach.is_none())
            .times(1)
            .returning(|_| team_list());

        let result = service(mock)
            .list_teams(&TeamFilter::new(Some("Benfica"), None))
            .await;

        assert_eq!(result, team_list());
    }

    // ===== get_team =====

    #[tokio::test]
    async fn get_team_returns_existing_team() {
        let expected = team_list()[0].clone();
        let returned = expected.clone();

        let mut mock = MockTeamRepository::new();
        mock.expect_find_by_id()
            .with(eq(3))
            .times(1)
            .returning(move |_| Some(returned.clone()));

        let result = service(mock).get_team(3).await;

        assert_eq!(result, Ok(expected));
    }

    #[tokio::test]
    async fn get_team_with_non_positive_id_never_queries_store() {
        for id in [0, -1, i64::MIN] {
            let mut mock = MockTeamRepository::new();
            mock.expect_find_by_id().never();

            let result = service(mock).get_team(id).await;

            assert_eq!(result, Err(TeamError::InvalidIdentifier(id)));
        }
    }

    #[tokio::test]
    async fn get_team_unknown_id_is_not_found() {
        let mut mock = MockTeamRepository::new();
        mock.expect_find_by_id().times(1).returning(|_| None);

        let result = service(mock).get_team(42).await;

        assert_eq!(result, Err(TeamError::NotFound(42)));
    }

    // ===== create_team =====

    #[tokio::test]
    async fn create_valid_team_succeeds() {
        let mut mock = MockTeamRepository::new();
        mock.expect_insert()
            .withf(|t| t.id() == 4 && t.name() == "New Team Name")
            .times(1)
            .returning(|_| true);

        let result = service(mock)
            .create_team(Team::new(4, "New Team Name", None))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn create_team_with_blank_name_never_reaches_store() {
        let mut mock = MockTeamRepository::new();
        mock.expect_insert().never();

        let result = service(mock).create_team(Team::new(1, " ", None)).await;

        assert!(matches!(result, Err(TeamError::MissingOrMalformedRecord(_))));
    }

    #[tokio::test]
    async fn create_team_with_invalid_id_never_reaches_store() {
        let mut mock = MockTeamRepository::new();
        mock.expect_insert().never();

        let svc = service(mock);

        assert!(matches!(
            svc.create_team(Team::new(-1, "team's name", None)).await,
            Err(TeamError::MissingOrMalformedRecord(_))
        ));
        assert!(matches!(
            svc.create_team(Team::new(0, "team's name", None)).await,
            Err(TeamError::MissingOrMalformedRecord(_))
        ));
    }

    #[tokio::test]
    async fn create_duplicate_team_reports_duplicate() {
        let mut mock = MockTeamRepository::new();
        mock.expect_insert().times(1).returning(|_| false);

        let result = service(mock).create_team(Team::new(1, "Sporting", None)).await;

        assert_eq!(
            result,
            Err(TeamError::DuplicateRecord(1, "Sporting".to_string()))
        );
    }

    // ===== update_team =====

    #[tokio::test]
    async fn update_existing_team_succeeds() {
        let existing = team_list()[0].clone();

        let mut mock = MockTeamRepository::new();
        mock.expect_find_by_id()
            .with(eq(1))
            .times(1)
            .returning(move |_| Some(existing.clone()));
        mock.expect_apply_update()
            .withf(|id, patch| *id == 1 && patch.name.as_deref() == Some("New Team Name"))
            .times(1)
            .returning(|_, _| true);

        let result = service(mock)
            .update_team(1, &named_patch("New Team Name"))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn update_with_invalid_id_never_reaches_store() {
        let mut mock = MockTeamRepository::new();
        mock.expect_find_by_id().never();
        mock.expect_apply_update().never();

        let result = service(mock)
            .update_team(-1, &named_patch("A new team name"))
            .await;

        assert_eq!(result, Err(TeamError::InvalidIdentifier(-1)));
    }

    #[tokio::test]
    async fn update_with_blank_name_never_reaches_store() {
        let mut mock = MockTeamRepository::new();
        mock.expect_find_by_id().never();
        mock.expect_apply_update().never();

        let svc = service(mock);

        assert_eq!(
            svc.update_team(1, &named_patch(" ")).await,
            Err(TeamError::empty_name())
        );
        let nameless = TeamPatch {
            name: None,
            coach_name: Some("Andre".to_string()),
            is_active: true,
        };
        assert_eq!(
            svc.update_team(1, &nameless).await,
            Err(TeamError::empty_name())
        );
    }

    #[tokio::test]
    async fn update_unknown_team_is_not_found() {
        let mut mock = MockTeamRepository::new();
        mock.expect_find_by_id().times(1).returning(|_| None);
        mock.expect_apply_update().never();

        let result = service(mock).update_team(9, &named_patch("Porto")).await;

        assert_eq!(result, Err(TeamError::NotFound(9)));
    }

    // ===== delete_team =====

    #[tokio::test]
    async fn delete_writes_back_inactive_team() {
        let existing = team_list()[0].clone();

        let mut mock = MockTeamRepository::new();
        mock.expect_find_by_id()
            .times(1)
            .returning(move |_| Some(existing.clone()));
        mock.expect_apply_update()
            .withf(|id, patch| {
                *id == 1
                    && !patch.is_active
                    && patch.name.as_deref() == Some("Sporting")
                    && patch.coach_name.as_deref() == Some("Damasio")
            })
            .times(1)
            .returning(|_, _| true);

        let result = service(mock).delete_team(1).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn delete_with_invalid_id_never_reaches_store() {
        let mut mock = MockTeamRepository::new();
        mock.expect_find_by_id().never();
        mock.expect_apply_update().never();

        let result = service(mock).delete_team(-1).await;

        assert_eq!(result, Err(TeamError::InvalidIdentifier(-1)));
    }

    #[tokio::test]
    async fn delete_unknown_team_is_not_found() {
        let mut mock = MockTeamRepository::new();
        mock.expect_find_by_id().times(1).returning(|_| None);
        mock.expect_apply_update().never();

        let result = service(mock).delete_team(5).await;

        assert_eq!(result, Err(TeamError::NotFound(5)));
    }

    // ===== add_match =====

    #[tokio::test]
    async fn add_match_to_valid_team() {
        let mut mock = MockTeamRepository::new();
        mock.expect_append_match()
            .with(eq(1), eq(MatchResult::Win))
            .times(1)
            .returning(|_, _| true);

        let result = service(mock).add_match(1, MatchResult::Win).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn add_match_with_invalid_id_never_reaches_store() {
        let mut mock = MockTeamRepository::new();
        mock.expect_append_match().never();

        let result = service(mock).add_match(-1, MatchResult::Win).await;

        assert_eq!(result, Err(TeamError::InvalidIdentifier(-1)));
    }

    #[tokio::test]
    async fn add_match_to_unknown_team_is_not_found() {
        let mut mock = MockTeamRepository::new();
        mock.expect_append_match().times(1).returning(|_, _| false);

        let result = service(mock).add_match(8, MatchResult::Tie).await;

        assert_eq!(result, Err(TeamError::NotFound(8)));
    }

    // ===== get_matches_total =====

    #[tokio::test]
    async fn matches_total_delegates_to_store() {
        let mut mock = MockTeamRepository::new();
        mock.expect_count_matches()
            .with(eq(1), eq(MatchFilter::Win))
            .times(1)
            .returning(|_, _| 2);

        assert_eq!(service(mock).get_matches_total(1, MatchFilter::Win).await, 2);
    }

    #[tokio::test]
    async fn matches_total_with_invalid_id_is_zero() {
        let mut mock = MockTeamRepository::new();
        mock.expect_count_matches().never();

        assert_eq!(service(mock).get_matches_total(-1, MatchFilter::All).await, 0);
    }
}
