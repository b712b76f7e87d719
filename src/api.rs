use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::json;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::LeagueError;
use crate::model::{Match, MatchId, MatchResult, Team, TeamStats};
use crate::service::LeagueService;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<Mutex<LeagueService>>,
}

impl AppState {
    pub fn new(service: LeagueService) -> Self {
        Self {
            service: Arc::new(Mutex::new(service)),
        }
    }
}

/// Transport-level error: maps the core taxonomy onto status codes. Storage
/// detail goes to the log, never into a response body.
pub struct ApiError(LeagueError);

impl From<LeagueError> for ApiError {
    fn from(err: LeagueError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            LeagueError::InvalidInput(_) => (StatusCode::BAD_REQUEST, self.0.to_string()),
            LeagueError::NotFound { .. } => (StatusCode::NOT_FOUND, self.0.to_string()),
            LeagueError::Storage(err) => {
                tracing::error!(error = %err, "storage failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "storage failure".to_string())
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/teams", get(list_teams))
        .route("/api/matches", get(list_matches))
        .route("/api/league", get(league_table))
        .route("/api/matches/simulate-all", post(simulate_all))
        .route("/api/matches/simulate/:week", post(simulate_week))
        .route("/api/matches/:id", put(update_match_result))
        .route("/api/reset", post(reset_league))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn list_teams(State(state): State<AppState>) -> Result<Json<Vec<Team>>, ApiError> {
    let service = state.service.lock().await;
    Ok(Json(service.teams()?))
}

async fn list_matches(State(state): State<AppState>) -> Result<Json<Vec<Match>>, ApiError> {
    let service = state.service.lock().await;
    Ok(Json(service.matches()?))
}

async fn league_table(State(state): State<AppState>) -> Result<Json<Vec<TeamStats>>, ApiError> {
    let service = state.service.lock().await;
    Ok(Json(service.standings()?))
}

async fn simulate_week(
    State(state): State<AppState>,
    Path(week): Path<u32>,
) -> Result<Json<Vec<Match>>, ApiError> {
    let mut service = state.service.lock().await;
    Ok(Json(service.simulate_week(week)?))
}

async fn simulate_all(State(state): State<AppState>) -> Result<Json<Vec<Match>>, ApiError> {
    let mut service = state.service.lock().await;
    Ok(Json(service.simulate_all()?))
}

async fn update_match_result(
    State(state): State<AppState>,
    Path(id): Path<MatchId>,
    Json(result): Json<MatchResult>,
) -> Result<Json<Match>, ApiError> {
    let mut service = state.service.lock().await;
    Ok(Json(service.update_result(id, result.home_goals, result.away_goals)?))
}

#[derive(Debug, Serialize)]
struct ResetResponse {
    stats: Vec<TeamStats>,
    matches: Vec<Match>,
}

async fn reset_league(State(state): State<AppState>) -> Result<Json<ResetResponse>, ApiError> {
    let mut service = state.service.lock().await;
    service.reset()?;
    Ok(Json(ResetResponse {
        stats: service.standings()?,
        matches: service.matches()?,
    }))
}
