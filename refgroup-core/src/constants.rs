/// Refgroup version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Separator between hierarchy levels in a page title (`topic/subtopic`).
pub const HIERARCHY_SEPARATOR: char = '/';

/// Separator between an attribute name and its value (`isa:: [[book]]`).
pub const ATTRIBUTE_SEPARATOR: &str = "::";

/// Project config file looked up in the root passed to `RefgroupConfig::load`.
pub const CONFIG_FILENAME: &str = "refgroup.toml";

/// Environment variable read by `tracing_setup::init_tracing`.
pub const LOG_ENV_VAR: &str = "REFGROUP_LOG";

/// Minimum member count for a group extracted in any pass other than `Default`.
pub const MIN_EXTRACTED_GROUP_SIZE: usize = 1;
