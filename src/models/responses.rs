use serde::{Deserialize, Serialize};

use crate::core::{DraftTeam, MatchStats};
use crate::models::domain::Candidate;

/// Response for the team matching endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchTeamsResponse {
    #[serde(rename = "runId")]
    pub run_id: uuid::Uuid,
    #[serde(rename = "eventId")]
    pub event_id: String,
    pub teams: Vec<DraftTeam>,
    pub unmatched: Vec<Candidate>,
    pub stats: MatchStats,
    #[serde(rename = "generatedAt")]
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
