use std::collections::BTreeSet;

use crate::core::partition::{GroupBuckets, RegistrationGroup};
use crate::core::scoring::calculate_team_score;
use crate::core::team::{draft_team_id, DraftTeam, TEAM_SIZE};
use crate::models::{Candidate, ScoringWeights};

/// Output of greedy construction
#[derive(Debug, Default)]
pub struct Construction {
    pub teams: Vec<DraftTeam>,
    /// Ids of candidates that entered the solo pool and may be swapped later
    pub swappable: BTreeSet<String>,
}

/// Fill up to `slots` places on `base` from `pool`, one candidate at a time
///
/// Each slot takes the candidate that maximizes the score of the running
/// roster; the first candidate in pool order wins ties. Picks are never
/// revisited.
pub fn select_best_candidates(
    base: &mut Vec<Candidate>,
    pool: &mut Vec<Candidate>,
    slots: usize,
    weights: &ScoringWeights,
) {
    for _ in 0..slots {
        let mut best: Option<(usize, f64)> = None;

        for (idx, candidate) in pool.iter().enumerate() {
            let trial = calculate_team_score(base.iter().chain(std::iter::once(candidate)), weights);
            if best.map_or(true, |(_, best_score)| trial > best_score) {
                best = Some((idx, trial));
            }
        }

        let Some((idx, _)) = best else {
            break;
        };
        base.push(pool.remove(idx));
    }
}

/// Greedy team constructor
///
/// # Stages
/// 1. Full groups become teams as they are
/// 2. Groups of four take the best single solo
/// 3. Groups of three take either the best pair group or the best two solos
/// 4. Groups of two take the best three solos
/// 5. Remaining solos are seeded into teams of five, remainder last
pub struct TeamBuilder<'w> {
    weights: &'w ScoringWeights,
    teams: Vec<DraftTeam>,
    solos: Vec<Candidate>,
}

impl<'w> TeamBuilder<'w> {
    pub fn new(weights: &'w ScoringWeights) -> Self {
        Self {
            weights,
            teams: Vec::new(),
            solos: Vec::new(),
        }
    }

    /// Build draft teams from bucketed groups and solos
    pub fn build(mut self, buckets: GroupBuckets) -> Construction {
        let GroupBuckets {
            full,
            fours,
            threes,
            mut twos,
            solos,
        } = buckets;

        let swappable = solos.iter().map(|c| c.id.clone()).collect();
        self.solos = solos;

        for group in full {
            self.push_team(group.members);
        }

        for group in fours {
            self.complete_with_solos(group.members);
        }

        for group in threes {
            self.complete_three(group, &mut twos);
        }

        for group in twos {
            self.complete_with_solos(group.members);
        }

        self.place_remaining_solos();

        tracing::debug!("Greedy construction produced {} teams", self.teams.len());

        Construction {
            teams: self.teams,
            swappable,
        }
    }

    /// Pair a group of three with the better of a group of two or two solos
    fn complete_three(&mut self, group: RegistrationGroup, twos: &mut Vec<RegistrationGroup>) {
        let base = group.members;

        let mut best_pair: Option<(usize, f64)> = None;
        for (idx, pair) in twos.iter().enumerate() {
            let trial = calculate_team_score(base.iter().chain(pair.members.iter()), self.weights);
            if best_pair.map_or(true, |(_, best_score)| trial > best_score) {
                best_pair = Some((idx, trial));
            }
        }

        let solo_option = if self.solos.len() >= 2 {
            let mut trial_base = base.clone();
            let mut trial_pool = self.solos.clone();
            select_best_candidates(&mut trial_base, &mut trial_pool, 2, self.weights);
            let trial_score = calculate_team_score(&trial_base, self.weights);
            Some((trial_score, trial_base, trial_pool))
        } else {
            None
        };

        match (best_pair, solo_option) {
            (Some((idx, pair_score)), solo) if solo.as_ref().map_or(true, |(s, _, _)| pair_score >= *s) => {
                let pair = twos.remove(idx);
                tracing::debug!("Pairing group {} with group {}", group.id, pair.id);
                let mut members = base;
                members.extend(pair.members);
                self.push_team(members);
            }
            (_, Some((_, members, remaining))) => {
                self.solos = remaining;
                self.push_team(members);
            }
            _ => self.complete_with_solos(base),
        }
    }

    /// Top `base` up to a full team from the solo pool, or as far as it goes
    fn complete_with_solos(&mut self, mut base: Vec<Candidate>) {
        let slots = TEAM_SIZE.saturating_sub(base.len());
        select_best_candidates(&mut base, &mut self.solos, slots, self.weights);
        self.push_team(base);
    }

    fn place_remaining_solos(&mut self) {
        while self.solos.len() >= TEAM_SIZE {
            let seed = self.solos.remove(0);
            self.complete_with_solos(vec![seed]);
        }

        if !self.solos.is_empty() {
            let remainder = std::mem::take(&mut self.solos);
            tracing::debug!("{} solos left over, forming an incomplete team", remainder.len());
            self.push_team(remainder);
        }
    }

    fn push_team(&mut self, members: Vec<Candidate>) {
        let id = draft_team_id(self.teams.len() + 1);
        self.teams.push(DraftTeam::new(id, members, self.weights));
    }
}
