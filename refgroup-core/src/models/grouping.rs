use serde::{Deserialize, Serialize};

use super::ResolutionPass;
use crate::entity::Entity;

/// One extracted group: a reference key and its disjoint members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedGroup {
    /// Uid of the referenced entity, or the caller's fallback key.
    pub key: String,
    /// Pass that extracted this group.
    pub pass: ResolutionPass,
    pub members: Vec<Entity>,
}

impl ResolvedGroup {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn member_uids(&self) -> Vec<&str> {
        self.members.iter().map(|m| m.uid()).collect()
    }

    pub fn contains(&self, uid: &str) -> bool {
        self.members.iter().any(|m| m.uid() == uid)
    }
}

/// Ordered result of a grouping run. Order is extraction order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Grouping {
    groups: Vec<ResolvedGroup>,
}

impl Grouping {
    pub fn from_groups(groups: Vec<ResolvedGroup>) -> Self {
        Self { groups }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResolvedGroup> {
        self.groups.iter()
    }

    pub fn groups(&self) -> &[ResolvedGroup] {
        &self.groups
    }

    /// Look up a group by key.
    pub fn get(&self, key: &str) -> Option<&ResolvedGroup> {
        self.groups.iter().find(|g| g.key == key)
    }

    /// Keys in extraction order.
    pub fn keys(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.key.as_str()).collect()
    }

    /// The group an entity ended up in.
    pub fn group_of(&self, uid: &str) -> Option<&ResolvedGroup> {
        self.groups.iter().find(|g| g.contains(uid))
    }

    /// Total number of members across all groups.
    pub fn member_count(&self) -> usize {
        self.groups.iter().map(ResolvedGroup::len).sum()
    }

    pub fn into_groups(self) -> Vec<ResolvedGroup> {
        self.groups
    }

    /// Flatten into `(key, members)` pairs, keeping extraction order.
    pub fn into_pairs(self) -> Vec<(String, Vec<Entity>)> {
        self.groups.into_iter().map(|g| (g.key, g.members)).collect()
    }
}

impl<'a> IntoIterator for &'a Grouping {
    type Item = &'a ResolvedGroup;
    type IntoIter = std::slice::Iter<'a, ResolvedGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}
