//! petgraph::StableGraph wrapper holding entities as node weights.

use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::visit::EdgeRef;
use petgraph::{Directed, Direction};
use refgroup_core::entity::Entity;
use refgroup_core::traits::IEntityGraph;
use refgroup_core::types::collections::FxHashMap;

/// Edge between two entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// Parent → child, with the child's position among its siblings.
    Child { order: usize },
    /// Referencing entity → referenced entity.
    Reference,
}

/// The underlying directed graph type.
pub type EntityStableGraph = StableGraph<Entity, EdgeKind, Directed>;

/// Read-only in-memory knowledge graph.
///
/// Built once by [`GraphBuilder`](crate::GraphBuilder); entity records already carry
/// their resolved page, parent chain, children, and links.
#[derive(Debug)]
pub struct MemoryGraph {
    graph: EntityStableGraph,
    /// uid → NodeIndex for O(1) lookup.
    node_index: FxHashMap<String, NodeIndex>,
    /// Exact page title → NodeIndex.
    title_index: FxHashMap<String, NodeIndex>,
}

impl MemoryGraph {
    pub(crate) fn from_parts(entities: Vec<Entity>) -> Self {
        let mut graph = EntityStableGraph::with_capacity(entities.len(), 0);
        let mut node_index = FxHashMap::default();
        let mut title_index = FxHashMap::default();

        for entity in entities {
            let uid = entity.uid().to_string();
            let title = entity.is_page_like().then(|| entity.text().to_string());
            let idx = graph.add_node(entity);
            node_index.insert(uid, idx);
            if let Some(title) = title {
                title_index.insert(title, idx);
            }
        }

        let indices: Vec<NodeIndex> = graph.node_indices().collect();
        for idx in indices {
            let (children, links) = {
                let entity = &graph[idx];
                (entity.child_uids().to_vec(), entity.link_uids().to_vec())
            };
            for (order, child) in children.iter().enumerate() {
                if let Some(&child_idx) = node_index.get(child) {
                    graph.add_edge(idx, child_idx, EdgeKind::Child { order });
                }
            }
            for link in &links {
                if let Some(&target) = node_index.get(link) {
                    graph.add_edge(idx, target, EdgeKind::Reference);
                }
            }
        }

        Self {
            graph,
            node_index,
            title_index,
        }
    }

    /// Look up an entity without cloning it.
    pub fn get(&self, uid: &str) -> Option<&Entity> {
        self.node_index.get(uid).map(|&idx| &self.graph[idx])
    }

    /// All entities in insertion order: pages first, then blocks.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.graph.node_indices().map(move |idx| &self.graph[idx])
    }

    pub fn pages(&self) -> impl Iterator<Item = &Entity> {
        self.entities().filter(|e| e.is_page_like())
    }

    pub fn blocks(&self) -> impl Iterator<Item = &Entity> {
        self.entities().filter(|e| !e.is_page_like())
    }

    /// Number of entities.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Number of reference edges.
    pub fn reference_count(&self) -> usize {
        self.graph
            .edge_indices()
            .filter(|&e| self.graph[e] == EdgeKind::Reference)
            .count()
    }

    /// Number of parent → child edges.
    pub fn child_edge_count(&self) -> usize {
        self.graph.edge_count() - self.reference_count()
    }
}

impl IEntityGraph for MemoryGraph {
    fn resolve(&self, uid: &str) -> Option<Entity> {
        self.get(uid).cloned()
    }

    fn page_by_name(&self, name: &str) -> Option<Entity> {
        self.title_index
            .get(name)
            .map(|&idx| self.graph[idx].clone())
    }

    fn referencing_uids(&self, uid: &str) -> Vec<String> {
        let Some(&idx) = self.node_index.get(uid) else {
            return Vec::new();
        };
        let mut sources: Vec<NodeIndex> = self
            .graph
            .edges_directed(idx, Direction::Incoming)
            .filter(|e| *e.weight() == EdgeKind::Reference)
            .map(|e| e.source())
            .collect();
        // Insertion order, independent of petgraph's edge iteration order.
        sources.sort();
        sources.dedup();
        sources
            .into_iter()
            .map(|s| self.graph[s].uid().to_string())
            .collect()
    }
}
