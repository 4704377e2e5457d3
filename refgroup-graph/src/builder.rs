//! Assemble a [`MemoryGraph`] from pages, blocks, and references.

use refgroup_core::entity::{BlockNode, Entity, PageNode};
use refgroup_core::errors::GraphError;
use refgroup_core::models::ReferenceFilter;
use refgroup_core::types::collections::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::memory_graph::MemoryGraph;

#[derive(Debug, Clone)]
struct PendingBlock {
    uid: String,
    parent_uid: String,
    text: String,
}

/// Chainable graph builder. Validation happens in [`GraphBuilder::build`].
///
/// Blocks are ordered among their siblings by insertion order. Block page and
/// parent chains are derived from parent pointers.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    pages: Vec<PageNode>,
    blocks: Vec<PendingBlock>,
    references: Vec<(String, String)>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, uid: impl Into<String>, title: impl Into<String>) -> Self {
        self.pages.push(PageNode::new(uid, title));
        self
    }

    pub fn page_with_filter(
        mut self,
        uid: impl Into<String>,
        title: impl Into<String>,
        filter: ReferenceFilter,
    ) -> Self {
        let mut page = PageNode::new(uid, title);
        page.reference_filter = Some(filter);
        self.pages.push(page);
        self
    }

    /// Append a block as the last child of `parent_uid` (a page or a block).
    pub fn block(
        mut self,
        uid: impl Into<String>,
        parent_uid: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        self.blocks.push(PendingBlock {
            uid: uid.into(),
            parent_uid: parent_uid.into(),
            text: text.into(),
        });
        self
    }

    /// Record that `from_uid` references `to_uid`. Repeats collapse.
    pub fn reference(mut self, from_uid: impl Into<String>, to_uid: impl Into<String>) -> Self {
        self.references.push((from_uid.into(), to_uid.into()));
        self
    }

    pub fn build(self) -> Result<MemoryGraph, GraphError> {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut titles: FxHashSet<&str> = FxHashSet::default();
        for page in &self.pages {
            if !seen.insert(&page.uid) {
                return Err(GraphError::DuplicateUid {
                    uid: page.uid.clone(),
                });
            }
            if !titles.insert(&page.title) {
                return Err(GraphError::DuplicateTitle {
                    title: page.title.clone(),
                });
            }
        }
        for block in &self.blocks {
            if !seen.insert(&block.uid) {
                return Err(GraphError::DuplicateUid {
                    uid: block.uid.clone(),
                });
            }
        }

        let page_uids: FxHashSet<&str> = self.pages.iter().map(|p| p.uid.as_str()).collect();
        let parent_of: FxHashMap<&str, &str> = self
            .blocks
            .iter()
            .map(|b| (b.uid.as_str(), b.parent_uid.as_str()))
            .collect();
        for block in &self.blocks {
            if !seen.contains(block.parent_uid.as_str()) {
                return Err(GraphError::UnknownParent {
                    uid: block.uid.clone(),
                    parent_uid: block.parent_uid.clone(),
                });
            }
        }

        let mut children_of: FxHashMap<&str, Vec<String>> = FxHashMap::default();
        for block in &self.blocks {
            children_of
                .entry(block.parent_uid.as_str())
                .or_default()
                .push(block.uid.clone());
        }

        let mut links_of: FxHashMap<&str, Vec<String>> = FxHashMap::default();
        for (from, to) in &self.references {
            if !seen.contains(from.as_str()) || !seen.contains(to.as_str()) {
                return Err(GraphError::UnknownReference {
                    from_uid: from.clone(),
                    target: to.clone(),
                });
            }
            let links = links_of.entry(from.as_str()).or_default();
            if !links.contains(to) {
                links.push(to.clone());
            }
        }

        let mut order_of: FxHashMap<&str, usize> = FxHashMap::default();
        for siblings in children_of.values() {
            for (order, uid) in siblings.iter().enumerate() {
                order_of.insert(uid.as_str(), order);
            }
        }

        let mut entities = Vec::with_capacity(self.pages.len() + self.blocks.len());
        for page in &self.pages {
            let mut page = page.clone();
            page.children = children_of
                .get(page.uid.as_str())
                .cloned()
                .unwrap_or_default();
            page.links = links_of.remove(page.uid.as_str()).unwrap_or_default();
            entities.push(Entity::Page(page));
        }

        for block in &self.blocks {
            let parents = ancestry(&block.uid, &parent_of, &page_uids)?;
            let mut node = BlockNode::new(
                block.uid.clone(),
                block.text.clone(),
                parents[0].clone(),
                parents,
            );
            node.order = order_of.get(block.uid.as_str()).copied().unwrap_or(0);
            node.children = children_of
                .get(block.uid.as_str())
                .cloned()
                .unwrap_or_default();
            node.links = links_of.remove(block.uid.as_str()).unwrap_or_default();
            entities.push(Entity::Block(node));
        }

        debug!(
            pages = self.pages.len(),
            blocks = self.blocks.len(),
            references = self.references.len(),
            "built memory graph"
        );
        Ok(MemoryGraph::from_parts(entities))
    }
}

/// Ancestor uids of a block, page first, direct parent last.
fn ancestry(
    uid: &str,
    parent_of: &FxHashMap<&str, &str>,
    page_uids: &FxHashSet<&str>,
) -> Result<Vec<String>, GraphError> {
    let mut chain = Vec::new();
    let mut current = uid;
    while let Some(&parent) = parent_of.get(current) {
        chain.push(parent.to_string());
        if page_uids.contains(parent) {
            chain.reverse();
            return Ok(chain);
        }
        // A chain longer than the number of blocks must loop.
        if chain.len() > parent_of.len() {
            break;
        }
        current = parent;
    }
    Err(GraphError::ParentCycle {
        uid: uid.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use refgroup_core::traits::IEntityGraph;

    #[test]
    fn derives_page_parents_and_order() {
        let g = GraphBuilder::new()
            .page("p", "Page")
            .block("a", "p", "first")
            .block("b", "p", "second")
            .block("c", "b", "nested")
            .build()
            .unwrap();

        let c = g.get("c").unwrap().as_block().unwrap();
        assert_eq!(c.page, "p");
        assert_eq!(c.parents, vec!["p", "b"]);
        assert_eq!(g.get("b").unwrap().as_block().unwrap().order, 1);
        assert_eq!(g.get("p").unwrap().child_uids(), ["a", "b"]);
        assert_eq!(g.get("b").unwrap().child_uids(), ["c"]);
    }

    #[test]
    fn repeated_references_collapse() {
        let g = GraphBuilder::new()
            .page("p", "Page")
            .page("t", "Topic")
            .block("a", "p", "x")
            .reference("a", "t")
            .reference("a", "t")
            .build()
            .unwrap();
        assert_eq!(g.get("a").unwrap().link_uids(), ["t"]);
        assert_eq!(g.referencing_uids("t"), vec!["a"]);
    }

    #[test]
    fn rejects_duplicates() {
        let err = GraphBuilder::new().page("p", "A").page("p", "B").build().unwrap_err();
        assert!(matches!(err, GraphError::DuplicateUid { .. }));

        let err = GraphBuilder::new().page("p", "A").page("q", "A").build().unwrap_err();
        assert!(matches!(err, GraphError::DuplicateTitle { .. }));

        let err = GraphBuilder::new()
            .page("p", "A")
            .block("p", "p", "clash")
            .build()
            .unwrap_err();
        assert!(matches!(err, GraphError::DuplicateUid { .. }));
    }

    #[test]
    fn rejects_unknown_parent_and_reference() {
        let err = GraphBuilder::new().block("a", "nowhere", "x").build().unwrap_err();
        assert!(matches!(err, GraphError::UnknownParent { .. }));

        let err = GraphBuilder::new()
            .page("p", "A")
            .reference("p", "ghost")
            .build()
            .unwrap_err();
        match err {
            GraphError::UnknownReference { target, .. } => assert_eq!(target, "ghost"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_parent_cycles() {
        let err = GraphBuilder::new()
            .page("p", "A")
            .block("a", "b", "x")
            .block("b", "a", "y")
            .build()
            .unwrap_err();
        assert!(matches!(err, GraphError::ParentCycle { .. }));
    }
}
