use serde::{Deserialize, Serialize};

use super::defaults;

/// Grouping subsystem configuration.
///
/// Pattern lists are regular expressions matched against entity text.
/// They are compiled when an engine is built, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupingConfig {
    /// Entities whose text matches any of these are never used as a key.
    pub exclusions: Vec<String>,
    /// Keys matching these are extracted last.
    pub low_priority: Vec<String>,
    /// Keys matching these are extracted first. Checked before `low_priority`.
    pub high_priority: Vec<String>,
    /// Attribute names expanded through (`isa:: [[book]]` makes `book` a candidate).
    pub attributes: Vec<String>,
    /// Fold the references of every ancestor block into a block's own references.
    pub include_inherited_links: bool,
    /// Groups smaller than this are deferred out of the default-priority pass.
    pub default_min_group_size: usize,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            exclusions: defaults::strings(defaults::DEFAULT_EXCLUSIONS),
            low_priority: defaults::strings(defaults::DEFAULT_LOW_PRIORITY),
            high_priority: defaults::strings(defaults::DEFAULT_HIGH_PRIORITY),
            attributes: defaults::strings(defaults::DEFAULT_ATTRIBUTES),
            include_inherited_links: defaults::DEFAULT_INCLUDE_INHERITED_LINKS,
            default_min_group_size: defaults::DEFAULT_MIN_GROUP_SIZE,
        }
    }
}

impl GroupingConfig {
    /// A config with no exclusions, no priorities, and no attribute expansion.
    /// Every reference becomes a default-priority candidate.
    pub fn unfiltered() -> Self {
        Self {
            exclusions: Vec::new(),
            low_priority: Vec::new(),
            high_priority: Vec::new(),
            attributes: Vec::new(),
            ..Self::default()
        }
    }
}
