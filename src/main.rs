use std::env;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use league_sim::api::{self, AppState};
use league_sim::service::LeagueService;
use league_sim::store;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("league_sim=info,tower_http=info")),
        )
        .init();

    let db_path = env::var("LEAGUE_DB").unwrap_or_else(|_| "league.db".to_string());
    let mut conn = store::open_db(Path::new(&db_path))
        .with_context(|| format!("open league database {db_path}"))?;
    store::seed_if_empty(&mut conn).context("seed league")?;

    let state = AppState::new(LeagueService::new(conn));
    let router = api::build_router(state);

    let addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    tracing::info!("listening on {addr}");
    axum::serve(listener, router).await.context("serve")?;
    Ok(())
}
