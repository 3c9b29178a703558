use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::core::scoring::calculate_team_score;
use crate::models::{Candidate, ScoringWeights};

/// Target team size
pub const TEAM_SIZE: usize = 5;

/// Prefix marking a team that has not been persisted yet
pub const DRAFT_TEAM_PREFIX: &str = "draft-";

/// Build the draft id for the `seq`-th team of a run (1-based)
pub fn draft_team_id(seq: usize) -> String {
    format!("{}{:04}", DRAFT_TEAM_PREFIX, seq)
}

/// Whether `id` was issued by the engine rather than by the persistence layer
///
/// Team confirmation creates a new team record for draft ids and reuses the
/// existing record otherwise.
pub fn is_draft_team_id(id: &str) -> bool {
    id.strip_prefix(DRAFT_TEAM_PREFIX)
        .is_some_and(|seq| !seq.is_empty() && seq.bytes().all(|b| b.is_ascii_digit()))
}

/// In-memory team produced by a matching run
///
/// Fields are only reachable through accessors so the cached score, group ids
/// and completeness flag can never drift from the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftTeam {
    id: String,
    members: Vec<Candidate>,
    score: f64,
    #[serde(rename = "groupIds")]
    group_ids: BTreeSet<String>,
    #[serde(rename = "isComplete")]
    is_complete: bool,
}

impl DraftTeam {
    pub(crate) fn new(id: String, members: Vec<Candidate>, weights: &ScoringWeights) -> Self {
        debug_assert!(members.len() <= TEAM_SIZE);

        let mut team = Self {
            id,
            members,
            score: 0.0,
            group_ids: BTreeSet::new(),
            is_complete: false,
        };
        team.refresh(weights);
        team
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn members(&self) -> &[Candidate] {
        &self.members
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    /// Registration groups represented on this team
    pub fn group_ids(&self) -> &BTreeSet<String> {
        &self.group_ids
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, candidate_id: &str) -> bool {
        self.members.iter().any(|m| m.id == candidate_id)
    }

    /// Put `incoming` in place of the member at `index`, returning the old member
    pub(crate) fn replace_member(
        &mut self,
        index: usize,
        incoming: Candidate,
        weights: &ScoringWeights,
    ) -> Candidate {
        let outgoing = std::mem::replace(&mut self.members[index], incoming);
        self.refresh(weights);
        outgoing
    }

    fn refresh(&mut self, weights: &ScoringWeights) {
        self.score = calculate_team_score(&self.members, weights);
        self.group_ids = self
            .members
            .iter()
            .filter_map(|m| m.registration_group())
            .map(str::to_string)
            .collect();
        self.is_complete = self.members.len() == TEAM_SIZE;
    }
}
