//! Span definitions for grouping runs.

/// Span around one grouping run.
#[macro_export]
macro_rules! grouping_span {
    ($entity_count:expr, $fallback_key:expr) => {
        tracing::info_span!(
            "refgroup.grouping",
            entities = $entity_count,
            fallback_key = %$fallback_key
        )
    };
}

/// Span around one resolver pass.
#[macro_export]
macro_rules! resolution_pass_span {
    ($pass:expr, $candidates:expr) => {
        tracing::debug_span!("refgroup.resolution_pass", pass = %$pass, candidates = $candidates)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const GROUPING: &str = "refgroup.grouping";
    pub const RESOLUTION_PASS: &str = "refgroup.resolution_pass";
}
