use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::TEAM_SIZE;
use crate::error::RequestError;
use crate::models::domain::Candidate;

/// Request to form teams for an event
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchTeamsRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "event_id", rename = "eventId")]
    pub event_id: String,
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl MatchTeamsRequest {
    /// Checks the validator derive cannot express
    ///
    /// The engine assumes unique candidate ids and a bounded pool.
    pub fn check_candidates(&self, max_candidates: usize) -> Result<(), RequestError> {
        if self.candidates.len() > max_candidates {
            return Err(RequestError::TooManyCandidates {
                count: self.candidates.len(),
                limit: max_candidates,
            });
        }

        let mut seen = HashSet::with_capacity(self.candidates.len());
        for candidate in &self.candidates {
            if !seen.insert(candidate.id.as_str()) {
                return Err(RequestError::DuplicateCandidate(candidate.id.clone()));
            }
        }

        Ok(())
    }
}

/// Request to score a single roster
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreTeamRequest {
    #[validate(length(min = 1, max = 5))]
    pub members: Vec<Candidate>,
}

impl ScoreTeamRequest {
    pub fn check_members(&self) -> Result<(), RequestError> {
        if self.members.len() > TEAM_SIZE {
            return Err(RequestError::RosterTooLarge(self.members.len()));
        }

        let mut seen = HashSet::with_capacity(self.members.len());
        for member in &self.members {
            if !seen.insert(member.id.as_str()) {
                return Err(RequestError::DuplicateCandidate(member.id.clone()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(ids: &[&str]) -> MatchTeamsRequest {
        let candidates = ids
            .iter()
            .map(|id| {
                serde_json::from_value(serde_json::json!({
                    "id": id,
                    "name": id,
                    "primaryRole": "frontend",
                    "experienceLevel": "beginner"
                }))
                .unwrap()
            })
            .collect();

        MatchTeamsRequest {
            event_id: "hack-2026".to_string(),
            candidates,
        }
    }

    #[test]
    fn test_accepts_unique_ids() {
        assert!(request(&["a", "b", "c"]).check_candidates(10).is_ok());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = request(&["a", "b", "a"]).check_candidates(10).unwrap_err();
        assert!(matches!(err, RequestError::DuplicateCandidate(id) if id == "a"));
    }

    #[test]
    fn test_rejects_oversized_pool() {
        let err = request(&["a", "b", "c"]).check_candidates(2).unwrap_err();
        assert!(matches!(err, RequestError::TooManyCandidates { count: 3, limit: 2 }));
    }

    #[test]
    fn test_event_id_required() {
        let mut req = request(&["a"]);
        req.event_id.clear();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_score_request_bounds() {
        let members = request(&["a", "b", "c", "d", "e", "f"]).candidates;
        let req = ScoreTeamRequest { members };
        assert!(req.validate().is_err());
        assert!(matches!(req.check_members(), Err(RequestError::RosterTooLarge(6))));
    }
}
