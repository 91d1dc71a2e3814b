use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::api::errors::ApiError;
use crate::domain::team::{
    MatchFilter, MatchResult, Team, TeamFilter, TeamId, TeamPatch, TeamService,
};

/// Entry of the team listing
#[derive(Debug, Serialize)]
pub struct TeamSummary {
    pub id: TeamId,
    pub name: String,
    pub coach: Option<String>,
}

impl From<&Team> for TeamSummary {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id(),
            name: team.name().to_string(),
            coach: team.coach_name().map(str::to_string),
        }
    }
}

fn require_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(body)| body)
        .map_err(|e| ApiError::bad_request(format!("Invalid team payload: {}", e)))
}

/// List active teams, optionally filtered by name and coach
///
/// GET /api/teams?name=&coach=
pub async fn list_teams(
    State(service): State<TeamService>,
    Query(filter): Query<TeamFilter>,
) -> Json<Vec<TeamSummary>> {
    let teams = service.list_teams(&filter).await;
    Json(teams.iter().map(TeamSummary::from).collect())
}

/// Get a team by ID
///
/// GET /api/teams/:id
pub async fn get_team(
    State(service): State<TeamService>,
    Path(id): Path<TeamId>,
) -> Result<Json<Team>, ApiError> {
    let team = service.get_team(id).await?;
    Ok(Json(team))
}

/// Total of all recorded matches for a team
///
/// GET /api/teams/:id/match
pub async fn get_match_totals(
    State(service): State<TeamService>,
    Path(id): Path<TeamId>,
) -> Result<Json<usize>, ApiError> {
    match_totals(&service, id, MatchFilter::All).await
}

/// Total of a team's matches with the given result (`win`, `lose`, `tie`, `all`)
///
/// GET /api/teams/:id/match/:result
pub async fn get_match_totals_by_result(
    State(service): State<TeamService>,
    Path((id, filter)): Path<(TeamId, MatchFilter)>,
) -> Result<Json<usize>, ApiError> {
    match_totals(&service, id, filter).await
}

async fn match_totals(
    service: &TeamService,
    id: TeamId,
    filter: MatchFilter,
) -> Result<Json<usize>, ApiError> {
    service.get_team(id).await?;
    Ok(Json(service.get_matches_total(id, filter).await))
}

/// Create a new team
///
/// POST /api/teams
pub async fn create_team(
    State(service): State<TeamService>,
    payload: Result<Json<Team>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let team = require_body(payload)?;
    service.create_team(team).await?;
    Ok(StatusCode::OK)
}

/// Update a team's name, coach and active flag
///
/// PUT /api/teams/:id
pub async fn update_team(
    State(service): State<TeamService>,
    Path(id): Path<TeamId>,
    payload: Result<Json<TeamPatch>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let patch = require_body(payload)?;
    service.get_team(id).await?;

    service.update_team(id, &patch).await?;
    Ok(StatusCode::OK)
}

/// Record a match result for a team
///
/// PUT /api/teams/:id/match/:result
pub async fn add_match(
    State(service): State<TeamService>,
    Path((id, filter)): Path<(TeamId, MatchFilter)>,
) -> Result<StatusCode, ApiError> {
    service.get_team(id).await?;
    let result = MatchResult::try_from(filter)?;

    service.add_match(id, result).await?;
    Ok(StatusCode::OK)
}

/// Deactivate a team
///
/// DELETE /api/teams/:id
pub async fn delete_team(
    State(service): State<TeamService>,
    Path(id): Path<TeamId>,
) -> Result<StatusCode, ApiError> {
    service.delete_team(id).await?;
    Ok(StatusCode::OK)
}
