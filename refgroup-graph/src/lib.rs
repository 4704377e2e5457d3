//! # refgroup-graph
//!
//! In-memory implementation of `IEntityGraph` backed by a petgraph `StableGraph`.
//! Graphs are assembled with [`GraphBuilder`] or loaded from a JSON [`GraphSnapshot`].
//! [`AttributeValues`] aggregates attribute values across the whole graph.

pub mod attributes;
pub mod builder;
pub mod memory_graph;
pub mod snapshot;

pub use attributes::AttributeValues;
pub use builder::GraphBuilder;
pub use memory_graph::{EdgeKind, MemoryGraph};
pub use snapshot::{BlockRecord, GraphSnapshot, PageRecord};
