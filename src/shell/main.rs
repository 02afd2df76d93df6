use tracing_subscriber::{EnvFilter, fmt};

use event_planner::shell::config::AppConfig;
use event_planner::shell::http::{GRAPHQL_PATH, router};
use event_planner::shell::seed::seed_sample_data;
use event_planner::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;
    let state = AppState::from_config(&config);

    if config.seed_sample_data {
        seed_sample_data(&state.store).await?;
    }

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(id_strategy = ?config.id_strategy, "GraphQL endpoint: http://{}{}", addr, GRAPHQL_PATH);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
