//! Mutable arena of candidate groups consumed by the resolver.
//!
//! Groups are addressed by [`GroupId`] (insertion index). A reverse index from
//! member uid to the groups containing it keeps member removal proportional to
//! the member's memberships instead of the number of groups.

use refgroup_core::types::collections::FxHashMap;

/// Stable index of a group in a [`WorkingSet`].
pub type GroupId = usize;

#[derive(Debug, Clone)]
struct Slot {
    key: String,
    members: Vec<String>,
}

/// A group taken out of the working set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub id: GroupId,
    pub key: String,
    pub members: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct WorkingSet {
    /// `None` once the group has been extracted or dropped.
    slots: Vec<Option<Slot>>,
    by_key: FxHashMap<String, GroupId>,
    memberships: FxHashMap<String, Vec<GroupId>>,
}

impl WorkingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a group. An existing key absorbs the new members instead.
    pub fn insert(&mut self, key: impl Into<String>, members: Vec<String>) -> GroupId {
        let key = key.into();
        let id = match self.id_of(&key) {
            Some(id) => id,
            None => {
                let id = self.push_slot(key.clone());
                self.by_key.insert(key, id);
                id
            }
        };
        self.add_members(id, members);
        id
    }

    /// Append a group that is never looked up by key, so it never merges
    /// with another group of the same name.
    pub fn insert_detached(&mut self, key: impl Into<String>, members: Vec<String>) -> GroupId {
        let id = self.push_slot(key.into());
        self.add_members(id, members);
        id
    }

    fn push_slot(&mut self, key: String) -> GroupId {
        let id = self.slots.len();
        self.slots.push(Some(Slot {
            key,
            members: Vec::new(),
        }));
        id
    }

    fn add_members(&mut self, id: GroupId, members: Vec<String>) {
        for uid in members {
            let Some(slot) = self.slots[id].as_mut() else {
                break;
            };
            if slot.members.contains(&uid) {
                continue;
            }
            self.memberships.entry(uid.clone()).or_default().push(id);
            slot.members.push(uid);
        }
    }

    pub fn id_of(&self, key: &str) -> Option<GroupId> {
        self.by_key
            .get(key)
            .copied()
            .filter(|&id| self.slots.get(id).is_some_and(Option::is_some))
    }

    pub fn key(&self, id: GroupId) -> Option<&str> {
        self.slot(id).map(|s| s.key.as_str())
    }

    pub fn members(&self, id: GroupId) -> Option<&[String]> {
        self.slot(id).map(|s| s.members.as_slice())
    }

    /// Current size. Extracted or dropped groups have size zero.
    pub fn size(&self, id: GroupId) -> usize {
        self.slot(id).map_or(0, |s| s.members.len())
    }

    /// Ids of groups still present, in insertion order.
    pub fn remaining_ids(&self) -> Vec<GroupId> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(id, slot)| slot.as_ref().map(|_| id))
            .collect()
    }

    /// Number of groups still present.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove and return group `id`, leaving its members in other groups.
    pub fn take(&mut self, id: GroupId) -> Option<Extracted> {
        let slot = self.slots.get_mut(id)?.take()?;
        if self.by_key.get(&slot.key) == Some(&id) {
            self.by_key.remove(&slot.key);
        }
        for uid in &slot.members {
            if let Some(ids) = self.memberships.get_mut(uid) {
                ids.retain(|&g| g != id);
            }
        }
        Some(Extracted {
            id,
            key: slot.key,
            members: slot.members,
        })
    }

    /// Drop every uid in `uids` from every group still present.
    pub fn remove_members_everywhere(&mut self, uids: &[String]) {
        for uid in uids {
            let Some(ids) = self.memberships.remove(uid) else {
                continue;
            };
            for id in ids {
                if let Some(slot) = self.slots[id].as_mut() {
                    slot.members.retain(|m| m != uid);
                }
            }
        }
    }

    /// Largest group among `candidates` with at least `min_size` members.
    ///
    /// Ties go to the group listed first in `candidates`. Empty groups are
    /// never chosen, whatever `min_size` is.
    pub fn largest_in(&self, candidates: &[GroupId], min_size: usize) -> Option<GroupId> {
        let mut best: Option<(GroupId, usize)> = None;
        for &id in candidates {
            let size = self.size(id);
            if size == 0 {
                continue;
            }
            if best.map_or(true, |(_, best_size)| size > best_size) {
                best = Some((id, size));
            }
        }
        best.filter(|&(_, size)| size >= min_size.max(1))
            .map(|(id, _)| id)
    }

    /// Take the largest qualifying group among `candidates` and remove its
    /// members from every other group.
    pub fn extract_largest_in(
        &mut self,
        candidates: &[GroupId],
        min_size: usize,
    ) -> Option<Extracted> {
        let id = self.largest_in(candidates, min_size)?;
        let extracted = self.take(id)?;
        self.remove_members_everywhere(&extracted.members);
        Some(extracted)
    }

    /// Drop groups that lost all their members. Returns how many were dropped.
    pub fn drop_empty(&mut self) -> usize {
        let empty: Vec<GroupId> = self
            .remaining_ids()
            .into_iter()
            .filter(|&id| self.size(id) == 0)
            .collect();
        for &id in &empty {
            self.take(id);
        }
        empty.len()
    }

    fn slot(&self, id: GroupId) -> Option<&Slot> {
        self.slots.get(id).and_then(Option::as_ref)
    }
}
