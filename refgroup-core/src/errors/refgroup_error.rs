use super::{ConfigError, GraphError, GroupingError};

/// Top-level error aggregating every subsystem error via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum RefgroupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("grouping error: {0}")]
    Grouping(#[from] GroupingError),
}

/// Convenience alias used across the workspace.
pub type RefgroupResult<T> = Result<T, RefgroupError>;
