//! Grouping entry point.

use refgroup_core::config::{GroupingConfig, RefgroupConfig};
use refgroup_core::entity::Entity;
use refgroup_core::errors::{GroupingError, RefgroupResult};
use refgroup_core::grouping_span;
use refgroup_core::models::Grouping;
use refgroup_core::traits::IEntityGraph;
use serde::Serialize;
use tracing::info;

use crate::builder::build_groups;
use crate::classifier::PriorityClassifier;
use crate::expansion::ReferenceExpander;
use crate::patterns::PatternList;
use crate::resolver::resolve;

/// Counters from one grouping run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GroupingStats {
    pub entities: usize,
    pub candidate_keys: usize,
    pub high_groups: usize,
    pub default_groups: usize,
    pub low_groups: usize,
    pub cleanup_groups: usize,
    pub dropped_empty: usize,
}

/// Groups entities by shared references.
///
/// Patterns are compiled once here; [`GroupingEngine::group`] never fails.
#[derive(Debug, Clone)]
pub struct GroupingEngine {
    config: GroupingConfig,
    exclusions: PatternList,
    classifier: PriorityClassifier,
}

impl GroupingEngine {
    pub fn new(config: GroupingConfig) -> RefgroupResult<Self> {
        let exclusions = PatternList::compile("exclusions", &config.exclusions)?;
        let classifier = PriorityClassifier::from_config(&config)?;
        Ok(Self {
            config,
            exclusions,
            classifier,
        })
    }

    pub fn from_config(config: &RefgroupConfig) -> RefgroupResult<Self> {
        Self::new(config.grouping.clone())
    }

    pub fn config(&self) -> &GroupingConfig {
        &self.config
    }

    pub fn classifier(&self) -> &PriorityClassifier {
        &self.classifier
    }

    pub fn expander(&self) -> ReferenceExpander<'_> {
        ReferenceExpander::new(
            &self.exclusions,
            &self.config.attributes,
            self.config.include_inherited_links,
        )
    }

    /// Partition `entities` into disjoint groups keyed by a shared reference.
    ///
    /// Entities with no usable reference end up under `fallback_key`.
    pub fn group(
        &self,
        graph: &dyn IEntityGraph,
        entities: &[Entity],
        fallback_key: &str,
    ) -> Grouping {
        self.group_with_stats(graph, entities, fallback_key).0
    }

    pub fn group_with_stats(
        &self,
        graph: &dyn IEntityGraph,
        entities: &[Entity],
        fallback_key: &str,
    ) -> (Grouping, GroupingStats) {
        let _span = grouping_span!(entities.len(), fallback_key).entered();

        let map = build_groups(graph, entities, &self.expander(), fallback_key);
        let candidate_keys = map.len();
        let (mut working, table, fallback) = map.into_working_set();
        let tiers = self.classifier.partition(graph, &working, fallback);
        let resolution = resolve(
            &mut working,
            &tiers,
            &table,
            self.config.default_min_group_size,
        );

        let [high_groups, default_groups, low_groups, cleanup_groups] = resolution.extracted;
        let stats = GroupingStats {
            entities: entities.len(),
            candidate_keys,
            high_groups,
            default_groups,
            low_groups,
            cleanup_groups,
            dropped_empty: resolution.dropped_empty,
        };
        info!(
            entities = stats.entities,
            candidate_keys,
            groups = resolution.groups.len(),
            cleanup_groups,
            dropped_empty = stats.dropped_empty,
            "grouping complete"
        );
        (Grouping::from_groups(resolution.groups), stats)
    }

    /// Check a single pattern the way the engine would compile it.
    pub fn validate_pattern(list: &str, pattern: &str) -> Result<(), GroupingError> {
        PatternList::compile(list, &[pattern.to_string()]).map(|_| ())
    }
}
