// Core algorithm exports
pub mod builder;
pub mod matcher;
pub mod optimizer;
pub mod partition;
pub mod scoring;
pub mod team;

pub use builder::{select_best_candidates, Construction, TeamBuilder};
pub use matcher::{MatchResult, MatchStats, TeamMatcher};
pub use optimizer::{optimize_teams, SwapReport, MAX_SWAP_ITERATIONS, MIN_SWAP_IMPROVEMENT};
pub use partition::{bucket_groups, partition_candidates, GroupBuckets, Partition, RegistrationGroup};
pub use scoring::{calculate_score_breakdown, calculate_team_score};
pub use team::{draft_team_id, is_draft_team_id, DraftTeam, DRAFT_TEAM_PREFIX, TEAM_SIZE};
