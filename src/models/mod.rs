// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Candidate, ExperienceLevel, Role, ScoreBreakdown, ScoringWeights, Skill};
pub use requests::{MatchTeamsRequest, ScoreTeamRequest};
pub use responses::{ErrorResponse, HealthResponse, MatchTeamsResponse};
