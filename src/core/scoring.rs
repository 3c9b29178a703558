use std::collections::BTreeSet;

use crate::models::{Candidate, ExperienceLevel, Role, ScoreBreakdown, ScoringWeights, Skill};

/// Number of distinct primary roles that gives full role diversity
const ROLE_DIVERSITY_TARGET: f64 = 5.0;

/// Cap on the school-mix denominator
const SCHOOL_MIX_CAP: usize = 4;

/// Calculate a team score (0-100) for a set of members
///
/// Scoring formula:
/// score = round((
///     role_diversity * 0.40 +      # distinct primary roles out of 5
///     skill_coverage * 0.35 +      # distinct skills out of the vocabulary
///     experience_balance * 0.15 +  # spread + entropy of experience levels
///     school_mix * 0.10            # distinct schools
/// ) * 100, 2)
pub fn calculate_team_score<'a, I>(members: I, weights: &ScoringWeights) -> f64
where
    I: IntoIterator<Item = &'a Candidate>,
{
    calculate_score_breakdown(members, weights).score
}

/// Calculate the sub-scores and the final team score
///
/// An empty roster scores zero on every dimension. A blank school is treated
/// as unknown rather than as one more distinct school.
pub fn calculate_score_breakdown<'a, I>(members: I, weights: &ScoringWeights) -> ScoreBreakdown
where
    I: IntoIterator<Item = &'a Candidate>,
{
    let mut member_count = 0usize;
    let mut roles = [false; Role::COUNT];
    let mut skills = [false; Skill::COUNT];
    let mut levels = [0usize; ExperienceLevel::COUNT];
    let mut schools = BTreeSet::new();

    for member in members {
        member_count += 1;
        roles[member.primary_role.index()] = true;
        for skill in &member.skills {
            skills[skill.index()] = true;
        }
        levels[member.experience_level.index()] += 1;
        if !member.school.is_empty() {
            schools.insert(member.school.as_str());
        }
    }

    if member_count == 0 {
        return ScoreBreakdown::default();
    }

    let unique_roles = roles.iter().filter(|&&present| present).count() as f64;
    let unique_skills = skills.iter().filter(|&&present| present).count() as f64;

    let role_diversity = (unique_roles / ROLE_DIVERSITY_TARGET).min(1.0);
    let skill_coverage = (unique_skills / Skill::COUNT as f64).min(1.0);
    let experience_balance = calculate_experience_balance(&levels, member_count);
    let school_mix =
        (schools.len() as f64 / member_count.min(SCHOOL_MIX_CAP) as f64).min(1.0);

    let weighted = role_diversity * weights.role
        + skill_coverage * weights.skill
        + experience_balance * weights.experience
        + school_mix * weights.school;

    ScoreBreakdown {
        role_diversity,
        skill_coverage,
        experience_balance,
        school_mix,
        score: round_score(weighted * 100.0).clamp(0.0, 100.0),
    }
}

/// Calculate experience balance (0-1)
///
/// 60% distinct-level coverage (with a 0.1 floor bonus), 40% normalized
/// Shannon entropy of the level distribution.
#[inline]
fn calculate_experience_balance(levels: &[usize; ExperienceLevel::COUNT], member_count: usize) -> f64 {
    let total_levels = ExperienceLevel::COUNT as f64;
    let unique_levels = levels.iter().filter(|&&count| count > 0).count() as f64;
    let diversity_base = (unique_levels / total_levels + 0.1).min(1.0);

    let n = member_count as f64;
    let entropy: f64 = levels
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / n;
            -p * p.log2()
        })
        .sum();

    let max_entropy = (member_count.min(ExperienceLevel::COUNT) as f64).log2();
    let entropy_normalized = if max_entropy > 0.0 {
        entropy / max_entropy
    } else {
        0.0
    };

    0.6 * diversity_base + 0.4 * entropy_normalized
}

/// Round to two decimal places
#[inline]
pub(crate) fn round_score(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(
        id: &str,
        role: Role,
        skills: &[Skill],
        level: ExperienceLevel,
        school: &str,
    ) -> Candidate {
        Candidate {
            id: id.to_string(),
            name: format!("Member {}", id),
            primary_role: role,
            skills: skills.to_vec(),
            experience_level: level,
            school: school.to_string(),
            group_id: None,
            group_size: 1,
            members_requested: 0,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_empty_team_scores_zero() {
        let breakdown = calculate_score_breakdown(std::iter::empty(), &ScoringWeights::default());
        assert_eq!(breakdown, ScoreBreakdown::default());
    }

    #[test]
    fn test_diverse_team_score() {
        use ExperienceLevel::*;
        let members = vec![
            member("1", Role::Frontend, &[Skill::Python], Beginner, "S1"),
            member("2", Role::Backend, &[Skill::Javascript], Beginner, "S2"),
            member("3", Role::Design, &[Skill::Typescript], Intermediate, "S3"),
            member("4", Role::Data, &[Skill::Rust], Intermediate, "S4"),
            member("5", Role::Product, &[Skill::Go], Advanced, "S5"),
        ];

        let breakdown = calculate_score_breakdown(&members, &ScoringWeights::default());

        assert_close(breakdown.role_diversity, 1.0);
        assert_close(breakdown.skill_coverage, 0.25);
        assert_close(breakdown.school_mix, 1.0);
        assert!((breakdown.experience_balance - 0.984092).abs() < 1e-6);
        assert_close(breakdown.score, 73.51);
    }

    #[test]
    fn test_uniform_team_score() {
        let skills = [Skill::Python, Skill::React];
        let members: Vec<Candidate> = (0..5)
            .map(|i| {
                member(
                    &i.to_string(),
                    Role::Frontend,
                    &skills,
                    ExperienceLevel::Intermediate,
                    "MIT",
                )
            })
            .collect();

        let breakdown = calculate_score_breakdown(&members, &ScoringWeights::default());

        assert_close(breakdown.role_diversity, 0.2);
        assert_close(breakdown.skill_coverage, 0.1);
        assert_close(breakdown.experience_balance, 0.26);
        assert_close(breakdown.school_mix, 0.25);
        assert_close(breakdown.score, 17.9);
    }

    #[test]
    fn test_single_member_has_no_entropy() {
        let members = [member("1", Role::Frontend, &[Skill::Python], ExperienceLevel::Beginner, "S")];
        let breakdown = calculate_score_breakdown(&members, &ScoringWeights::default());

        assert_close(breakdown.experience_balance, 0.26);
        assert_close(breakdown.school_mix, 1.0);
        assert_close(breakdown.score, 23.65);
    }

    #[test]
    fn test_empty_school_is_not_counted() {
        let members = [
            member("1", Role::Frontend, &[], ExperienceLevel::Beginner, ""),
            member("2", Role::Backend, &[], ExperienceLevel::Beginner, ""),
        ];
        let breakdown = calculate_score_breakdown(&members, &ScoringWeights::default());
        assert_close(breakdown.school_mix, 0.0);
    }

    #[test]
    fn test_duplicate_skills_count_once() {
        let members = [
            member("1", Role::Frontend, &[Skill::Python, Skill::Python], ExperienceLevel::Beginner, "S"),
            member("2", Role::Backend, &[Skill::Python], ExperienceLevel::Beginner, "S"),
        ];
        let breakdown = calculate_score_breakdown(&members, &ScoringWeights::default());
        assert_close(breakdown.skill_coverage, 1.0 / 20.0);
    }

    #[test]
    fn test_score_is_clamped_for_oversized_weights() {
        let weights = ScoringWeights { role: 2.0, skill: 2.0, experience: 2.0, school: 2.0 };
        let members = [member("1", Role::Frontend, &[Skill::Python], ExperienceLevel::Beginner, "S")];
        let score = calculate_team_score(&members, &weights);
        assert!(score <= 100.0);
    }

    #[test]
    fn test_round_score() {
        assert_eq!(round_score(73.51137830716456), 73.51);
        assert_eq!(round_score(17.900000000000002), 17.9);
    }
}
