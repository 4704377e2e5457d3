//! # refgroup-grouping
//!
//! Partition entities into named, disjoint groups by shared references.
//!
//! Pipeline: expansion (candidate keys per entity) → builder (key → members) →
//! classifier (high / default / low tiers) → resolver (largest-first extraction,
//! consumed members removed from every other group).
//! Post-processing: [`merge::merge_small_groups`]. Standalone predicate:
//! [`filter::matches_filter`].

pub mod builder;
pub mod classifier;
pub mod engine;
pub mod expansion;
pub mod filter;
pub mod merge;
pub mod patterns;
pub mod resolver;
pub mod working_set;

pub use builder::{build_groups, GroupMap};
pub use classifier::{PriorityClassifier, TierBuckets};
pub use engine::{GroupingEngine, GroupingStats};
pub use expansion::ReferenceExpander;
pub use filter::matches_filter;
pub use merge::merge_small_groups;
pub use patterns::PatternList;
pub use resolver::{resolve, Resolution};
pub use working_set::{GroupId, WorkingSet};
