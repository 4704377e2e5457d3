//! Priority tiers for candidate group keys.

use refgroup_core::config::GroupingConfig;
use refgroup_core::errors::GroupingError;
use refgroup_core::models::Priority;
use refgroup_core::traits::IEntityGraph;

use crate::patterns::PatternList;
use crate::working_set::{GroupId, WorkingSet};

/// Classifies keys by the text of the entity they resolve to.
#[derive(Debug, Clone, Default)]
pub struct PriorityClassifier {
    high: PatternList,
    low: PatternList,
}

impl PriorityClassifier {
    pub fn new(high: PatternList, low: PatternList) -> Self {
        Self { high, low }
    }

    pub fn from_config(config: &GroupingConfig) -> Result<Self, GroupingError> {
        Ok(Self::new(
            PatternList::compile("high_priority", &config.high_priority)?,
            PatternList::compile("low_priority", &config.low_priority)?,
        ))
    }

    /// High patterns are checked first. Unresolvable keys are `Default`.
    pub fn classify(&self, graph: &dyn IEntityGraph, key: &str) -> Priority {
        let Some(entity) = graph.resolve(key) else {
            return Priority::Default;
        };
        let text = graph.text(&entity);
        if self.high.is_match(text) {
            Priority::High
        } else if self.low.is_match(text) {
            Priority::Low
        } else {
            Priority::Default
        }
    }

    /// Snapshot the tier of every group present in `working`.
    ///
    /// `skip` is a group left out of every tier; the resolver only reaches
    /// it in the cleanup pass.
    pub fn partition(
        &self,
        graph: &dyn IEntityGraph,
        working: &WorkingSet,
        skip: Option<GroupId>,
    ) -> TierBuckets {
        let mut buckets = TierBuckets::default();
        for id in working.remaining_ids() {
            if skip == Some(id) {
                continue;
            }
            let Some(key) = working.key(id) else {
                continue;
            };
            buckets.push(self.classify(graph, key), id);
        }
        buckets
    }
}

/// Group ids per priority, each in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TierBuckets {
    pub high: Vec<GroupId>,
    pub default: Vec<GroupId>,
    pub low: Vec<GroupId>,
}

impl TierBuckets {
    pub fn push(&mut self, priority: Priority, id: GroupId) {
        match priority {
            Priority::High => self.high.push(id),
            Priority::Default => self.default.push(id),
            Priority::Low => self.low.push(id),
        }
    }

    pub fn tier(&self, priority: Priority) -> &[GroupId] {
        match priority {
            Priority::High => &self.high,
            Priority::Default => &self.default,
            Priority::Low => &self.low,
        }
    }

    pub fn len(&self) -> usize {
        self.high.len() + self.default.len() + self.low.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
