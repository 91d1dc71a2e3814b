use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use myteam_api::api;
use myteam_api::config::AppConfig;
use myteam_api::domain::team::TeamService;
use myteam_api::infrastructure::repositories::InMemoryTeamRepository;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = AppConfig::from_env();

    let repo = if config.seed_teams {
        tracing::info!("Seeding demo teams");
        InMemoryTeamRepository::with_seed_data()
    } else {
        InMemoryTeamRepository::new()
    };
    let service = TeamService::new(Arc::new(repo));

    let app = api::router(service);

    // Start server
    let addr = config.addr();
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
