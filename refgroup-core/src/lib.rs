//! # refgroup-core
//!
//! Foundation crate for reference grouping.
//! Defines the entity model, the graph accessor trait, errors, config,
//! constants, and tracing setup. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod entity;
pub mod errors;
pub mod models;
pub mod tracing_setup;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::{GroupingConfig, RefgroupConfig};
pub use entity::{BlockNode, Entity, PageNode};
pub use errors::{RefgroupError, RefgroupResult};
pub use models::{Grouping, Priority, ReferenceFilter, ResolutionPass, ResolvedGroup};
pub use traits::IEntityGraph;
