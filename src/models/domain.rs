use serde::{Deserialize, Serialize};

/// Primary role a participant plays on a team
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Frontend,
    Backend,
    Fullstack,
    Mobile,
    Design,
    Data,
    Devops,
    Product,
}

impl Role {
    pub const ALL: [Role; 8] = [
        Role::Frontend,
        Role::Backend,
        Role::Fullstack,
        Role::Mobile,
        Role::Design,
        Role::Data,
        Role::Devops,
        Role::Product,
    ];

    pub const COUNT: usize = Self::ALL.len();

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Specific skill from the fixed skill vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    Python,
    Javascript,
    Typescript,
    Rust,
    Go,
    Java,
    Cpp,
    Swift,
    Kotlin,
    React,
    Nodejs,
    MachineLearning,
    DataAnalysis,
    UiUx,
    Figma,
    Cloud,
    Devops,
    Databases,
    Embedded,
    Blockchain,
}

impl Skill {
    pub const ALL: [Skill; 20] = [
        Skill::Python,
        Skill::Javascript,
        Skill::Typescript,
        Skill::Rust,
        Skill::Go,
        Skill::Java,
        Skill::Cpp,
        Skill::Swift,
        Skill::Kotlin,
        Skill::React,
        Skill::Nodejs,
        Skill::MachineLearning,
        Skill::DataAnalysis,
        Skill::UiUx,
        Skill::Figma,
        Skill::Cloud,
        Skill::Devops,
        Skill::Databases,
        Skill::Embedded,
        Skill::Blockchain,
    ];

    /// Size of the skill vocabulary, the denominator of skill coverage
    pub const COUNT: usize = Self::ALL.len();

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Ordered experience level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 3] = [
        ExperienceLevel::Beginner,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Advanced,
    ];

    pub const COUNT: usize = Self::ALL.len();

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Event participant eligible for a matching run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    #[serde(rename = "primaryRole")]
    pub primary_role: Role,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(rename = "experienceLevel")]
    pub experience_level: ExperienceLevel,
    #[serde(default)]
    pub school: String,
    #[serde(rename = "groupId", default)]
    pub group_id: Option<String>,
    #[serde(rename = "groupSize", default = "default_group_size")]
    pub group_size: u8,
    #[serde(rename = "membersRequested", default)]
    pub members_requested: u8,
}

impl Candidate {
    /// Registration group this candidate must stay with, if any
    ///
    /// A group id with a declared size of 1 (or none) does not bind anyone.
    pub fn registration_group(&self) -> Option<&str> {
        match &self.group_id {
            Some(id) if self.group_size > 1 => Some(id.as_str()),
            _ => None,
        }
    }
}

fn default_group_size() -> u8 { 1 }

/// Scoring weights for the four team sub-scores
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub role: f64,
    pub skill: f64,
    pub experience: f64,
    pub school: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            role: 0.40,
            skill: 0.35,
            experience: 0.15,
            school: 0.10,
        }
    }
}

/// Per-dimension view of a team score
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    #[serde(rename = "roleDiversity")]
    pub role_diversity: f64,
    #[serde(rename = "skillCoverage")]
    pub skill_coverage: f64,
    #[serde(rename = "experienceBalance")]
    pub experience_balance: f64,
    #[serde(rename = "schoolMix")]
    pub school_mix: f64,
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_defaults() {
        let candidate: Candidate = serde_json::from_value(serde_json::json!({
            "id": "c1",
            "name": "Ada",
            "primaryRole": "backend",
            "experienceLevel": "advanced"
        }))
        .unwrap();

        assert_eq!(candidate.group_size, 1);
        assert_eq!(candidate.members_requested, 0);
        assert!(candidate.skills.is_empty());
        assert!(candidate.registration_group().is_none());
    }

    #[test]
    fn test_registration_group_requires_size() {
        let mut candidate: Candidate = serde_json::from_value(serde_json::json!({
            "id": "c1",
            "name": "Ada",
            "primaryRole": "design",
            "skills": ["ui_ux", "figma"],
            "experienceLevel": "beginner",
            "groupId": "g1",
            "groupSize": 1
        }))
        .unwrap();

        assert!(candidate.registration_group().is_none());

        candidate.group_size = 3;
        assert_eq!(candidate.registration_group(), Some("g1"));
    }

    #[test]
    fn test_vocabulary_sizes() {
        assert_eq!(Role::COUNT, 8);
        assert_eq!(Skill::COUNT, 20);
        assert_eq!(ExperienceLevel::COUNT, 3);
        assert_eq!(Skill::Blockchain.index(), Skill::COUNT - 1);
        assert!(ExperienceLevel::Beginner < ExperienceLevel::Advanced);
    }
}
