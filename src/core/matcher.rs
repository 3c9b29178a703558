use serde::{Deserialize, Serialize};

use crate::core::{
    builder::TeamBuilder,
    optimizer::{optimize_teams, SwapReport},
    partition::{bucket_groups, partition_candidates},
    scoring::{calculate_score_breakdown, round_score},
    team::DraftTeam,
};
use crate::models::{Candidate, ScoreBreakdown, ScoringWeights};

/// Aggregate statistics over the teams of one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchStats {
    #[serde(rename = "averageScore")]
    pub average_score: f64,
    #[serde(rename = "minScore")]
    pub min_score: f64,
    #[serde(rename = "maxScore")]
    pub max_score: f64,
    #[serde(rename = "totalTeams")]
    pub total_teams: usize,
    #[serde(rename = "completeTeams")]
    pub complete_teams: usize,
    #[serde(rename = "incompleteTeams")]
    pub incomplete_teams: usize,
    #[serde(rename = "groupsPreserved")]
    pub groups_preserved: usize,
    #[serde(rename = "swapsApplied")]
    pub swaps_applied: usize,
}

/// Result of a matching run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub teams: Vec<DraftTeam>,
    /// Only populated for the degenerate empty-input run, hence always empty
    pub unmatched: Vec<Candidate>,
    pub stats: MatchStats,
}

/// Team-formation orchestrator
///
/// # Pipeline Stages
/// 1. Canonical sort by candidate id
/// 2. Partition into registration groups and solos
/// 3. Greedy construction
/// 4. Swap optimization of the weakest team
/// 5. Aggregate statistics
#[derive(Debug, Clone)]
pub struct TeamMatcher {
    weights: ScoringWeights,
}

impl TeamMatcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Partition `candidates` into draft teams of five
    ///
    /// The output depends only on the set of candidates, not on the order
    /// they were supplied in. Teams that could not be filled are kept and
    /// flagged incomplete.
    pub fn form_teams(&self, mut candidates: Vec<Candidate>) -> MatchResult {
        if candidates.is_empty() {
            return MatchResult::default();
        }

        let total_candidates = candidates.len();
        candidates.sort_by(|a, b| a.id.cmp(&b.id));

        let buckets = bucket_groups(partition_candidates(candidates));
        tracing::debug!(
            "Bucketed groups: {} full, {} of four, {} of three, {} of two, {} solos",
            buckets.full.len(),
            buckets.fours.len(),
            buckets.threes.len(),
            buckets.twos.len(),
            buckets.solos.len()
        );

        let groups_preserved = buckets.group_count();
        let construction = TeamBuilder::new(&self.weights).build(buckets);
        let mut teams = construction.teams;
        let report = optimize_teams(&mut teams, &construction.swappable, &self.weights);

        let stats = compute_stats(&teams, groups_preserved, report);

        tracing::info!(
            "Formed {} teams ({} incomplete) from {} candidates, average score {:.2}, {} swaps",
            stats.total_teams,
            stats.incomplete_teams,
            total_candidates,
            stats.average_score,
            stats.swaps_applied
        );

        MatchResult {
            teams,
            unmatched: Vec::new(),
            stats,
        }
    }

    /// Score an arbitrary roster with this matcher's weights
    pub fn score_roster(&self, members: &[Candidate]) -> ScoreBreakdown {
        calculate_score_breakdown(members, &self.weights)
    }
}

impl Default for TeamMatcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

fn compute_stats(teams: &[DraftTeam], groups_preserved: usize, report: SwapReport) -> MatchStats {
    if teams.is_empty() {
        return MatchStats::default();
    }

    let scores = teams.iter().map(DraftTeam::score);
    let total: f64 = scores.clone().sum();
    let min_score = scores.clone().fold(f64::INFINITY, f64::min);
    let max_score = scores.fold(f64::NEG_INFINITY, f64::max);

    let complete_teams = teams.iter().filter(|t| t.is_complete()).count();
    MatchStats {
        average_score: round_score(total / teams.len() as f64),
        min_score,
        max_score,
        total_teams: teams.len(),
        complete_teams,
        incomplete_teams: teams.len() - complete_teams,
        groups_preserved,
        swaps_applied: report.swaps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExperienceLevel, Role, Skill};

    fn create_candidate(id: &str, role: Role, skills: &[Skill], group: Option<(&str, u8)>) -> Candidate {
        Candidate {
            id: id.to_string(),
            name: format!("User {}", id),
            primary_role: role,
            skills: skills.to_vec(),
            experience_level: ExperienceLevel::Intermediate,
            school: format!("School {}", id.len() % 3),
            group_id: group.map(|(g, _)| g.to_string()),
            group_size: group.map(|(_, size)| size).unwrap_or(1),
            members_requested: 0,
        }
    }

    #[test]
    fn test_empty_input() {
        let matcher = TeamMatcher::with_default_weights();
        let result = matcher.form_teams(vec![]);

        assert!(result.teams.is_empty());
        assert!(result.unmatched.is_empty());
        assert_eq!(result.stats.average_score, 0.0);
        assert_eq!(result.stats.min_score, 0.0);
        assert_eq!(result.stats.max_score, 0.0);
    }

    #[test]
    fn test_group_of_four_plus_solo() {
        let matcher = TeamMatcher::with_default_weights();
        let mut candidates: Vec<Candidate> = (1..=4)
            .map(|i| create_candidate(&format!("g{}", i), Role::Backend, &[Skill::Go], Some(("crew", 4))))
            .collect();
        candidates.push(create_candidate("solo", Role::Design, &[Skill::Figma], None));

        let result = matcher.form_teams(candidates);

        assert_eq!(result.teams.len(), 1);
        assert!(result.teams[0].is_complete());
        for id in ["g1", "g2", "g3", "g4", "solo"] {
            assert!(result.teams[0].contains(id));
        }
        assert_eq!(result.stats.groups_preserved, 1);
        assert_eq!(result.stats.complete_teams, 1);
    }

    #[test]
    fn test_stats_cover_all_teams() {
        let matcher = TeamMatcher::with_default_weights();
        let roles = [Role::Frontend, Role::Backend, Role::Design];
        let candidates: Vec<Candidate> = (0..8)
            .map(|i| create_candidate(&format!("c{}", i), roles[i % 3], &[], None))
            .collect();

        let result = matcher.form_teams(candidates);

        assert_eq!(result.stats.total_teams, 2);
        assert_eq!(result.stats.incomplete_teams, 1);
        let min = result.teams.iter().map(|t| t.score()).fold(f64::INFINITY, f64::min);
        let max = result.teams.iter().map(|t| t.score()).fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(result.stats.min_score, min);
        assert_eq!(result.stats.max_score, max);
        assert!(result.stats.average_score >= min && result.stats.average_score <= max);
    }

    #[test]
    fn test_score_roster_uses_weights() {
        let weights = ScoringWeights { role: 1.0, skill: 0.0, experience: 0.0, school: 0.0 };
        let matcher = TeamMatcher::new(weights);
        let members = vec![
            create_candidate("a", Role::Frontend, &[], None),
            create_candidate("b", Role::Backend, &[], None),
        ];

        let breakdown = matcher.score_roster(&members);

        assert!((breakdown.score - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_lone_group_member_not_counted_as_preserved() {
        let matcher = TeamMatcher::with_default_weights();
        let candidates = vec![
            create_candidate("a", Role::Frontend, &[], Some(("trio", 3))),
            create_candidate("b", Role::Backend, &[], None),
            create_candidate("c", Role::Design, &[], None),
        ];

        let result = matcher.form_teams(candidates);

        assert_eq!(result.stats.groups_preserved, 0);
    }

    #[test]
    fn test_earlier_group_gets_first_solo() {
        let matcher = TeamMatcher::with_default_weights();
        let mut candidates: Vec<Candidate> = (1..=4)
            .map(|i| create_candidate(&format!("m{}", i), Role::Backend, &[], Some(("alpha", 4))))
            .chain((1..=4).map(|i| create_candidate(&format!("a{}", i), Role::Backend, &[], Some(("zeta", 4)))))
            .collect();
        candidates.push(create_candidate("s1", Role::Design, &[], None));

        let result = matcher.form_teams(candidates);
        let rosters: Vec<Vec<&str>> = result
            .teams
            .iter()
            .map(|t| t.members().iter().map(|m| m.id.as_str()).collect())
            .collect();

        assert_eq!(
            rosters,
            vec![vec!["a1", "a2", "a3", "a4", "s1"], vec!["m1", "m2", "m3", "m4"]]
        );
        assert_eq!(result.stats.groups_preserved, 2);
    }
}
