//! Nested JSON snapshot of a graph, as exported by outliner tools.
//!
//! References are written by page title. A reference wrapped in `((…))` is a
//! block uid instead. Blocks without a uid get a generated one.

use refgroup_core::errors::GraphError;
use refgroup_core::models::ReferenceFilter;
use refgroup_core::types::collections::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::builder::GraphBuilder;
use crate::memory_graph::MemoryGraph;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphSnapshot {
    #[serde(default)]
    pub pages: Vec<PageRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRecord {
    pub uid: String,
    pub title: String,
    #[serde(default)]
    pub filter: Option<ReferenceFilter>,
    #[serde(default)]
    pub refs: Vec<String>,
    #[serde(default)]
    pub children: Vec<BlockRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockRecord {
    #[serde(default)]
    pub uid: Option<String>,
    pub text: String,
    #[serde(default)]
    pub refs: Vec<String>,
    #[serde(default)]
    pub children: Vec<BlockRecord>,
}

impl GraphSnapshot {
    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        serde_json::from_str(json).map_err(|e| GraphError::SnapshotParse {
            message: e.to_string(),
        })
    }

    /// Translate the nested records into builder calls.
    pub fn into_builder(self) -> Result<GraphBuilder, GraphError> {
        let titles: FxHashMap<String, String> = self
            .pages
            .iter()
            .map(|p| (p.title.clone(), p.uid.clone()))
            .collect();

        let mut builder = GraphBuilder::new();
        let mut references: Vec<(String, String)> = Vec::new();

        for page in &self.pages {
            builder = match &page.filter {
                Some(filter) => builder.page_with_filter(&page.uid, &page.title, filter.clone()),
                None => builder.page(&page.uid, &page.title),
            };
            for target in &page.refs {
                references.push((page.uid.clone(), resolve_target(&page.uid, target, &titles)?));
            }
        }

        for page in self.pages {
            let mut stack: Vec<(String, BlockRecord)> = page
                .children
                .into_iter()
                .rev()
                .map(|b| (page.uid.clone(), b))
                .collect();
            // Depth-first, preserving sibling order.
            while let Some((parent_uid, record)) = stack.pop() {
                let uid = record
                    .uid
                    .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
                builder = builder.block(&uid, &parent_uid, &record.text);
                for target in &record.refs {
                    references.push((uid.clone(), resolve_target(&uid, target, &titles)?));
                }
                stack.extend(record.children.into_iter().rev().map(|c| (uid.clone(), c)));
            }
        }

        for (from, to) in references {
            builder = builder.reference(from, to);
        }
        Ok(builder)
    }
}

fn resolve_target(
    from_uid: &str,
    target: &str,
    titles: &FxHashMap<String, String>,
) -> Result<String, GraphError> {
    if let Some(block_uid) = target
        .strip_prefix("((")
        .and_then(|t| t.strip_suffix("))"))
    {
        return Ok(block_uid.to_string());
    }
    titles
        .get(target)
        .cloned()
        .ok_or_else(|| GraphError::UnknownReference {
            from_uid: from_uid.to_string(),
            target: target.to_string(),
        })
}

impl MemoryGraph {
    pub fn from_snapshot(snapshot: GraphSnapshot) -> Result<Self, GraphError> {
        snapshot.into_builder()?.build()
    }

    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        Self::from_snapshot(GraphSnapshot::from_json(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use refgroup_core::traits::IEntityGraph;

    const JSON: &str = r#"{
        "pages": [
            {"uid": "rust", "title": "Rust", "children": [
                {"uid": "b1", "text": "ownership", "refs": ["Memory"], "children": [
                    {"uid": "b2", "text": "borrowing", "refs": ["((b3))"]}
                ]},
                {"uid": "b3", "text": "lifetimes"},
                {"text": "no uid"}
            ]},
            {"uid": "mem", "title": "Memory", "refs": ["Rust"]}
        ]
    }"#;

    #[test]
    fn loads_nested_blocks_in_order() {
        let g = MemoryGraph::from_json(JSON).unwrap();
        let rust = g.get("rust").unwrap();
        assert_eq!(rust.child_uids().len(), 3);
        assert_eq!(rust.child_uids()[..2], ["b1", "b3"]);
        assert_eq!(g.get("b2").unwrap().parent_uids(), ["rust", "b1"]);
    }

    #[test]
    fn resolves_title_and_block_refs() {
        let g = MemoryGraph::from_json(JSON).unwrap();
        assert_eq!(g.get("b1").unwrap().link_uids(), ["mem"]);
        assert_eq!(g.get("b2").unwrap().link_uids(), ["b3"]);
        assert_eq!(g.get("mem").unwrap().link_uids(), ["rust"]);
        assert_eq!(g.referencing_uids("rust"), vec!["mem"]);
    }

    #[test]
    fn generates_missing_uids() {
        let g = MemoryGraph::from_json(JSON).unwrap();
        let generated = &g.get("rust").unwrap().child_uids()[2];
        assert_eq!(g.get(generated).unwrap().text(), "no uid");
    }

    #[test]
    fn unknown_title_is_an_error() {
        let json = r#"{"pages": [{"uid": "p", "title": "P", "refs": ["Nope"]}]}"#;
        let err = MemoryGraph::from_json(json).unwrap_err();
        assert!(matches!(err, GraphError::UnknownReference { .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = MemoryGraph::from_json("{").unwrap_err();
        assert!(matches!(err, GraphError::SnapshotParse { .. }));
    }
}
