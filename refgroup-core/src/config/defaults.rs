// Single source of truth for all default values.

// --- Grouping ---

/// References that are never used as a grouping key: housekeeping markers,
/// transcript sources, attribute-name pages, and daily-note titles.
pub const DEFAULT_EXCLUSIONS: &[&str] = &[
    r"^ptr$",
    r"^otter\.ai/transcript$",
    r"^TODO$",
    r"^DONE$",
    r"^factor$",
    r"^interval$",
    r"^\[\[factor]]:.+",
    r"^\[\[interval]]:.+",
    r"^isa$",
    r"^group with$",
    r"^(January|February|March|April|May|June|July|August|September|October|November|December) \d{1,2}(st|nd|rd|th), \d{4}$",
];

/// Broad categories extracted after everything else.
pub const DEFAULT_LOW_PRIORITY: &[&str] = &[r"^reflection$", r"^task$", r"^person$"];

/// Keys extracted before everything else, regardless of size.
pub const DEFAULT_HIGH_PRIORITY: &[&str] = &[r"^i$"];

/// Attributes whose values count as additional references of the defining entity.
pub const DEFAULT_ATTRIBUTES: &[&str] = &["isa", "group with"];

pub const DEFAULT_INCLUDE_INHERITED_LINKS: bool = true;
pub const DEFAULT_MIN_GROUP_SIZE: usize = 2;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;

pub(crate) fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
