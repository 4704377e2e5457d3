/// Grouping subsystem errors.
///
/// Only raised while building an engine. A constructed engine never fails:
/// missing graph data degrades grouping quality instead.
#[derive(Debug, thiserror::Error)]
pub enum GroupingError {
    #[error("invalid {list} pattern `{pattern}`: {reason}")]
    InvalidPattern {
        list: String,
        pattern: String,
        reason: String,
    },
}
