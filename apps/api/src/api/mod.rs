// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod errors;
pub mod handlers;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::domain::team::TeamService;
use handlers::{health, teams};

/// Builds the application router around a team service
pub fn router(service: TeamService) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Team routes
        .route("/api/teams", get(teams::list_teams).post(teams::create_team))
        .route(
            "/api/teams/:id",
            get(teams::get_team)
                .put(teams::update_team)
                .delete(teams::delete_team),
        )
        .route("/api/teams/:id/match", get(teams::get_match_totals))
        .route(
            "/api/teams/:id/match/:result",
            get(teams::get_match_totals_by_result).put(teams::add_match),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(service)
}
