//! Configuration system for refgroup.
//! TOML-based, layered resolution: env > project file > compiled defaults.

pub mod defaults;
pub mod grouping_config;
pub mod observability_config;
pub mod refgroup_config;

pub use grouping_config::GroupingConfig;
pub use observability_config::ObservabilityConfig;
pub use refgroup_config::RefgroupConfig;
