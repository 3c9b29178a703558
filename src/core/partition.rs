use std::collections::HashMap;

use crate::core::team::TEAM_SIZE;
use crate::models::Candidate;

/// Candidate pool split into registration groups and solos
#[derive(Debug, Default)]
pub struct Partition {
    /// Group id and members, groups ordered by first appearance in the input
    pub groups: Vec<(String, Vec<Candidate>)>,
    /// Solo candidates, sorted by id
    pub solos: Vec<Candidate>,
}

/// Registration group waiting to be completed
#[derive(Debug, Clone)]
pub struct RegistrationGroup {
    pub id: String,
    pub members: Vec<Candidate>,
    /// Largest "members requested" count declared by any member
    pub members_requested: u8,
}

impl RegistrationGroup {
    fn new(id: String, members: Vec<Candidate>) -> Self {
        let members_requested = members
            .iter()
            .map(|m| m.members_requested)
            .max()
            .unwrap_or(0);

        Self {
            id,
            members,
            members_requested,
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Groups bucketed by the number of members present in the pool
#[derive(Debug, Default)]
pub struct GroupBuckets {
    /// Groups with at least a full team, clipped to [`TEAM_SIZE`]
    pub full: Vec<RegistrationGroup>,
    pub fours: Vec<RegistrationGroup>,
    pub threes: Vec<RegistrationGroup>,
    pub twos: Vec<RegistrationGroup>,
    /// Solos plus overflow and single-member groups, sorted by id
    pub solos: Vec<Candidate>,
}

impl GroupBuckets {
    /// Number of registration groups kept together as a unit
    pub fn group_count(&self) -> usize {
        self.full.len() + self.fours.len() + self.threes.len() + self.twos.len()
    }
}

/// Split candidates into registration groups and solos
///
/// A candidate belongs to a group when it carries a group id and a declared
/// group size above 1. Everyone else is a solo. Groups keep the order in
/// which their first member appears, so an id-sorted input yields groups
/// ordered by their lowest member id.
pub fn partition_candidates(candidates: Vec<Candidate>) -> Partition {
    let mut partition = Partition::default();
    let mut index: HashMap<String, usize> = HashMap::new();

    for candidate in candidates {
        match candidate.registration_group() {
            Some(group_id) => {
                let slot = match index.get(group_id).copied() {
                    Some(slot) => slot,
                    None => {
                        index.insert(group_id.to_string(), partition.groups.len());
                        partition.groups.push((group_id.to_string(), Vec::new()));
                        partition.groups.len() - 1
                    }
                };
                partition.groups[slot].1.push(candidate);
            }
            None => partition.solos.push(candidate),
        }
    }

    sort_by_id(&mut partition.solos);
    partition
}

/// Bucket groups by present size
///
/// - 5 or more members: the first five form a full group, the rest become solos
/// - 4, 3, 2 members: their own buckets, groups that requested members first
/// - 1 member: folded back into the solo pool
pub fn bucket_groups(partition: Partition) -> GroupBuckets {
    let Partition { groups, solos } = partition;
    let mut buckets = GroupBuckets {
        solos,
        ..Default::default()
    };

    for (group_id, mut members) in groups {
        match members.len() {
            0 => {}
            1 => buckets.solos.append(&mut members),
            2 => buckets.twos.push(RegistrationGroup::new(group_id, members)),
            3 => buckets.threes.push(RegistrationGroup::new(group_id, members)),
            4 => buckets.fours.push(RegistrationGroup::new(group_id, members)),
            _ => {
                let overflow = members.split_off(TEAM_SIZE);
                if !overflow.is_empty() {
                    tracing::debug!(
                        "Group {} has {} members over capacity, releasing them as solos",
                        group_id,
                        overflow.len()
                    );
                }
                buckets.solos.extend(overflow);
                buckets.full.push(RegistrationGroup::new(group_id, members));
            }
        }
    }

    for bucket in [&mut buckets.fours, &mut buckets.threes, &mut buckets.twos] {
        prioritize_requests(bucket);
    }
    sort_by_id(&mut buckets.solos);

    buckets
}

/// Move groups that asked for more members to the front, keeping relative order
fn prioritize_requests(bucket: &mut [RegistrationGroup]) {
    bucket.sort_by_key(|group| group.members_requested == 0);
}

fn sort_by_id(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| a.id.cmp(&b.id));
}
