//! Error handling for refgroup.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod graph_error;
pub mod grouping_error;
pub mod refgroup_error;

pub use config_error::ConfigError;
pub use graph_error::GraphError;
pub use grouping_error::GroupingError;
pub use refgroup_error::{RefgroupError, RefgroupResult};
