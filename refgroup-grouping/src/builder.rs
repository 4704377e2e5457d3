//! Candidate group map: reference key → members, in first-seen order.

use refgroup_core::entity::Entity;
use refgroup_core::traits::IEntityGraph;
use refgroup_core::types::collections::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::expansion::ReferenceExpander;
use crate::working_set::{GroupId, WorkingSet};

/// Keys and member uids in insertion order, plus the entity table.
///
/// Key order is the order keys were first produced while walking the input
/// entities. Largest-first ties are broken by it. The fallback group is kept
/// apart from the reference keys, so a reference whose uid equals the
/// fallback key is still an ordinary group.
#[derive(Debug, Clone, Default)]
pub struct GroupMap {
    keys: Vec<String>,
    members: FxHashMap<String, Vec<String>>,
    entities: FxHashMap<String, Entity>,
    fallback: Option<FallbackGroup>,
}

#[derive(Debug, Clone)]
struct FallbackGroup {
    key: String,
    /// Number of reference keys created before the fallback group.
    position: usize,
    members: Vec<String>,
}

impl GroupMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `entity` to the group `key`. A member is added at most once.
    pub fn insert(&mut self, key: &str, entity: &Entity) {
        if !self.members.contains_key(key) {
            self.keys.push(key.to_string());
        }
        let members = self.members.entry(key.to_string()).or_default();
        if !members.iter().any(|uid| uid == entity.uid()) {
            members.push(entity.uid().to_string());
        }
        self.entities
            .entry(entity.uid().to_string())
            .or_insert_with(|| entity.clone());
    }

    /// Add `entity` to the fallback group named `key`.
    pub fn insert_fallback(&mut self, key: &str, entity: &Entity) {
        let position = self.keys.len();
        let fallback = self.fallback.get_or_insert_with(|| FallbackGroup {
            key: key.to_string(),
            position,
            members: Vec::new(),
        });
        if !fallback.members.iter().any(|uid| uid == entity.uid()) {
            fallback.members.push(entity.uid().to_string());
        }
        self.entities
            .entry(entity.uid().to_string())
            .or_insert_with(|| entity.clone());
    }

    /// Number of groups, the fallback group included.
    pub fn len(&self) -> usize {
        self.keys.len() + usize::from(self.fallback.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.members.contains_key(key)
    }

    pub fn members(&self, key: &str) -> Option<&[String]> {
        self.members.get(key).map(Vec::as_slice)
    }

    pub fn entity(&self, uid: &str) -> Option<&Entity> {
        self.entities.get(uid)
    }

    /// Key of the fallback group, if any entity landed in it.
    pub fn fallback_key(&self) -> Option<&str> {
        self.fallback.as_ref().map(|f| f.key.as_str())
    }

    pub fn fallback_members(&self) -> &[String] {
        self.fallback
            .as_ref()
            .map(|f| f.members.as_slice())
            .unwrap_or_default()
    }

    /// Number of distinct member entities.
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Reference groups in key order, without the fallback group.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.keys
            .iter()
            .map(|k| (k.as_str(), self.members.get(k).map(Vec::as_slice).unwrap_or(&[])))
    }

    /// Split into a working set (same group order), the entity table, and the
    /// id of the fallback group.
    pub fn into_working_set(self) -> (WorkingSet, FxHashMap<String, Entity>, Option<GroupId>) {
        let mut members = self.members;
        let mut fallback = self.fallback;
        let mut fallback_id = None;
        let mut working = WorkingSet::new();
        for (position, key) in self.keys.into_iter().enumerate() {
            if fallback.as_ref().is_some_and(|f| f.position == position) {
                fallback_id = fallback
                    .take()
                    .map(|f| working.insert_detached(f.key, f.members));
            }
            let m = members.remove(&key).unwrap_or_default();
            working.insert(key, m);
        }
        if let Some(f) = fallback {
            fallback_id = Some(working.insert_detached(f.key, f.members));
        }
        (working, self.entities, fallback_id)
    }
}

/// Build the candidate map for `entities`.
///
/// Every entity is inserted under the identity of each of its candidates.
/// Entities without a single candidate go to `fallback_key`, so every input
/// entity is a member of at least one group.
pub fn build_groups(
    graph: &dyn IEntityGraph,
    entities: &[Entity],
    expander: &ReferenceExpander<'_>,
    fallback_key: &str,
) -> GroupMap {
    let mut map = GroupMap::new();
    let mut unmatched = 0usize;
    for entity in entities {
        let candidates = expander.expand(graph, entity);
        if candidates.is_empty() {
            map.insert_fallback(fallback_key, entity);
            unmatched += 1;
            continue;
        }
        let mut keys: FxHashSet<&str> = FxHashSet::default();
        for candidate in &candidates {
            let key = graph.identity(candidate);
            if keys.insert(key) {
                map.insert(key, entity);
            }
        }
    }
    debug!(
        entities = entities.len(),
        keys = map.len(),
        unmatched,
        "built candidate groups"
    );
    map
}
