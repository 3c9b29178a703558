//! Squad Algo - team-formation engine for event registrations
//!
//! This library partitions event participants into draft teams of five,
//! keeping registration groups together and maximizing a role, skill,
//! experience and school diversity score.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{is_draft_team_id, DraftTeam, MatchResult, MatchStats, TeamMatcher};
pub use crate::models::{Candidate, ExperienceLevel, Role, ScoreBreakdown, ScoringWeights, Skill};
