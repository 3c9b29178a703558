use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::core::scoring::calculate_team_score;
use crate::core::team::DraftTeam;
use crate::models::{Candidate, ScoringWeights};

/// Hard cap on optimizer iterations
pub const MAX_SWAP_ITERATIONS: usize = 1000;

/// Minimum combined score gain for a swap to be accepted
pub const MIN_SWAP_IMPROVEMENT: f64 = 0.01;

/// What the swap phase did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapReport {
    pub iterations: usize,
    pub swaps: usize,
}

/// Exchange of one member of the weakest team with a member of another team
#[derive(Debug, Clone, Copy)]
struct SwapMove {
    weakest_member: usize,
    other_team: usize,
    other_member: usize,
    improvement: f64,
}

/// Raise the weakest team's score by exchanging solo members between teams
///
/// Only candidates listed in `swappable` ever move, so registration groups
/// stay intact and team sizes never change. Each iteration applies the best
/// improving swap for the current weakest team and starts over; the loop ends
/// when no swap qualifies or after [`MAX_SWAP_ITERATIONS`].
pub fn optimize_teams(
    teams: &mut [DraftTeam],
    swappable: &BTreeSet<String>,
    weights: &ScoringWeights,
) -> SwapReport {
    let mut report = SwapReport::default();
    let mut converged = false;

    while report.iterations < MAX_SWAP_ITERATIONS {
        report.iterations += 1;

        let best = weakest_team_index(teams)
            .and_then(|weakest| find_best_swap(teams, weakest, swappable, weights).map(|mv| (weakest, mv)));
        let Some((weakest, best)) = best else {
            converged = true;
            break;
        };

        let outgoing = teams[weakest].members()[best.weakest_member].clone();
        let incoming = teams[best.other_team].members()[best.other_member].clone();

        tracing::trace!(
            "Swapping {} ({}) with {} ({}), gain {:.2}",
            outgoing.id,
            teams[weakest].id(),
            incoming.id,
            teams[best.other_team].id(),
            best.improvement
        );

        teams[weakest].replace_member(best.weakest_member, incoming, weights);
        teams[best.other_team].replace_member(best.other_member, outgoing, weights);
        report.swaps += 1;
    }

    if !converged {
        tracing::warn!("Swap optimizer stopped at the {} iteration cap", MAX_SWAP_ITERATIONS);
    }

    report
}

/// Index of the lowest-scoring team, first one on ties
fn weakest_team_index(teams: &[DraftTeam]) -> Option<usize> {
    let mut weakest: Option<(usize, f64)> = None;
    for (idx, team) in teams.iter().enumerate() {
        if weakest.map_or(true, |(_, score)| team.score() < score) {
            weakest = Some((idx, team.score()));
        }
    }
    weakest.map(|(idx, _)| idx)
}

/// Scan every swappable pairing with the weakest team and keep the largest gain
///
/// A swap qualifies only if the two teams together gain more than
/// [`MIN_SWAP_IMPROVEMENT`] and the weakest team itself scores higher.
fn find_best_swap(
    teams: &[DraftTeam],
    weakest: usize,
    swappable: &BTreeSet<String>,
    weights: &ScoringWeights,
) -> Option<SwapMove> {
    let weak_team = &teams[weakest];
    let mut best: Option<SwapMove> = None;

    for (weak_idx, weak_member) in weak_team.members().iter().enumerate() {
        if !swappable.contains(&weak_member.id) {
            continue;
        }

        for (other_team, other) in teams.iter().enumerate() {
            if other_team == weakest {
                continue;
            }

            for (other_idx, other_member) in other.members().iter().enumerate() {
                if !swappable.contains(&other_member.id) {
                    continue;
                }

                let new_weak = score_with_replacement(weak_team.members(), weak_idx, other_member, weights);
                if new_weak <= weak_team.score() {
                    continue;
                }
                let new_other = score_with_replacement(other.members(), other_idx, weak_member, weights);

                let improvement = (new_weak + new_other) - (weak_team.score() + other.score());
                if improvement <= MIN_SWAP_IMPROVEMENT {
                    continue;
                }

                if best.map_or(true, |current| improvement > current.improvement) {
                    best = Some(SwapMove {
                        weakest_member: weak_idx,
                        other_team,
                        other_member: other_idx,
                        improvement,
                    });
                }
            }
        }
    }

    best
}

/// Score `members` as if the member at `index` were `incoming`
#[inline]
fn score_with_replacement(
    members: &[Candidate],
    index: usize,
    incoming: &Candidate,
    weights: &ScoringWeights,
) -> f64 {
    calculate_team_score(
        members
            .iter()
            .enumerate()
            .map(|(idx, member)| if idx == index { incoming } else { member }),
        weights,
    )
}
