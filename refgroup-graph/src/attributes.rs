//! Aggregate values of one attribute across the graph.
//!
//! An attribute is a page (`isa`) referenced by blocks of the form `isa:: …`.

use std::collections::BTreeSet;

use refgroup_core::entity::Entity;
use refgroup_core::traits::IEntityGraph;
use refgroup_core::types::collections::{FxHashMap, FxHashSet};

/// Attribute analytics over any [`IEntityGraph`].
pub struct AttributeValues<'g> {
    graph: &'g dyn IEntityGraph,
    name: String,
}

impl<'g> AttributeValues<'g> {
    pub fn new(graph: &'g dyn IEntityGraph, name: impl Into<String>) -> Self {
        Self {
            graph,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Blocks that reference the attribute page and define this attribute.
    pub fn defining_blocks(&self) -> Vec<Entity> {
        let Some(page) = self.graph.page_by_name(&self.name) else {
            return Vec::new();
        };
        self.graph
            .backlinks(&page)
            .into_iter()
            .filter(|b| !b.is_page_like() && b.attribute_name() == Some(self.name.as_str()))
            .collect()
    }

    /// Every value of every defining block, in block order. May repeat.
    pub fn all_values(&self) -> Vec<String> {
        self.defining_blocks()
            .iter()
            .flat_map(|b| self.graph.list_attribute_values(b))
            .collect()
    }

    pub fn unique_values(&self) -> BTreeSet<String> {
        self.all_values().into_iter().collect()
    }

    /// Values with their occurrence counts, most frequent first, ties by value.
    pub fn values_by_count(&self) -> Vec<(String, usize)> {
        let mut counts: FxHashMap<String, usize> = FxHashMap::default();
        for value in self.all_values() {
            *counts.entry(value).or_insert(0) += 1;
        }
        let mut sorted: Vec<(String, usize)> = counts.into_iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        sorted
    }

    /// Blocks referencing both the attribute page and the page titled `value`.
    pub fn blocks_with_value(&self, value: &str) -> Vec<Entity> {
        let (Some(attribute), Some(value_page)) = (
            self.graph.page_by_name(&self.name),
            self.graph.page_by_name(value),
        ) else {
            return Vec::new();
        };
        let with_value: FxHashSet<String> = self
            .graph
            .referencing_uids(value_page.uid())
            .into_iter()
            .collect();
        self.graph
            .backlinks(&attribute)
            .into_iter()
            .filter(|b| with_value.contains(b.uid()))
            .collect()
    }
}
