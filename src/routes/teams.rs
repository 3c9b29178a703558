use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::TeamMatcher;
use crate::error::ServiceError;
use crate::models::{HealthResponse, MatchTeamsRequest, MatchTeamsResponse, ScoreTeamRequest};

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub matcher: TeamMatcher,
    pub max_candidates: usize,
}

/// Configure all team-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/teams/match", web::post().to(match_teams))
        .route("/teams/score", web::post().to(score_team));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Form draft teams endpoint
///
/// POST /api/v1/teams/match
///
/// Request body:
/// ```json
/// {
///   "eventId": "string",
///   "candidates": [
///     {
///       "id": "string",
///       "name": "string",
///       "primaryRole": "backend",
///       "skills": ["rust", "databases"],
///       "experienceLevel": "intermediate",
///       "school": "string",
///       "groupId": "string|null",
///       "groupSize": 1,
///       "membersRequested": 0
///     }
///   ]
/// }
/// ```
async fn match_teams(
    state: web::Data<AppState>,
    req: web::Json<MatchTeamsRequest>,
) -> Result<HttpResponse, ServiceError> {
    req.validate()?;
    req.check_candidates(state.max_candidates)?;

    let MatchTeamsRequest { event_id, candidates } = req.into_inner();
    let run_id = uuid::Uuid::new_v4();

    tracing::info!(
        "Forming teams for event {} (run {}) from {} candidates",
        event_id,
        run_id,
        candidates.len()
    );

    // Scoring is CPU-bound, keep it off the async workers
    let matcher = state.matcher.clone();
    let result = web::block(move || matcher.form_teams(candidates)).await?;

    tracing::info!(
        "Run {} produced {} teams, scores {:.2}..{:.2}",
        run_id,
        result.stats.total_teams,
        result.stats.min_score,
        result.stats.max_score
    );

    Ok(HttpResponse::Ok().json(MatchTeamsResponse {
        run_id,
        event_id,
        teams: result.teams,
        unmatched: result.unmatched,
        stats: result.stats,
        generated_at: chrono::Utc::now(),
    }))
}

/// Score a roster endpoint
///
/// POST /api/v1/teams/score
///
/// Request body:
/// ```json
/// { "members": [ { "id": "string", ... } ] }
/// ```
async fn score_team(
    state: web::Data<AppState>,
    req: web::Json<ScoreTeamRequest>,
) -> Result<HttpResponse, ServiceError> {
    req.validate()?;
    req.check_members()?;

    let breakdown = state.matcher.score_roster(&req.members);
    tracing::debug!("Scored roster of {} members: {:.2}", req.members.len(), breakdown.score);

    Ok(HttpResponse::Ok().json(breakdown))
}
