//! Attribute blocks: `name:: value` entities whose values act as references.

use std::sync::LazyLock;

use regex::Regex;

use super::Entity;
use crate::constants::ATTRIBUTE_SEPARATOR;

/// Boundary between adjacent bracketed values: `[[a]] [[b]]`, `[[a]][[b]]`.
static RE_VALUE_BOUNDARY: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\]\s?\[").ok());

/// Build the text of an attribute block.
pub fn attribute_string(name: &str, value: &str) -> String {
    format!("{name}{ATTRIBUTE_SEPARATOR}{value}")
}

/// Pattern matching the text of a block that defines `name`.
pub fn attribute_pattern(name: &str) -> Option<Regex> {
    Regex::new(&format!("^{}{}", regex::escape(name), ATTRIBUTE_SEPARATOR)).ok()
}

impl Entity {
    pub fn defines_attribute(&self) -> bool {
        self.text().contains(ATTRIBUTE_SEPARATOR)
    }

    /// Text before the first `::`, trimmed.
    pub fn attribute_name(&self) -> Option<&str> {
        let (name, _) = self.text().split_once(ATTRIBUTE_SEPARATOR)?;
        Some(name.trim())
    }

    /// Text between the first and second `::`, trimmed. Values may also live
    /// in children.
    pub fn attribute_value(&self) -> Option<&str> {
        self.text().split(ATTRIBUTE_SEPARATOR).nth(1).map(str::trim)
    }

    /// Same-line values, split between adjacent bracketed tokens.
    pub fn in_place_attribute_values(&self) -> Vec<String> {
        let Some(value) = self.attribute_value() else {
            return Vec::new();
        };
        let Some(re) = RE_VALUE_BOUNDARY.as_ref() else {
            return non_empty(vec![value]);
        };

        let mut pieces = Vec::new();
        let mut start = 0;
        for m in re.find_iter(value) {
            // Keep the closing `]` on the left piece and the opening `[` on the right.
            pieces.push(&value[start..m.start() + 1]);
            start = m.end() - 1;
        }
        pieces.push(&value[start..]);
        non_empty(pieces)
    }

    /// Same-line values split on an arbitrary separator pattern.
    pub fn in_place_attribute_values_by(&self, separator: &Regex) -> Vec<String> {
        let Some(value) = self.attribute_value() else {
            return Vec::new();
        };
        non_empty(separator.split(value).collect())
    }
}

fn non_empty(pieces: Vec<&str>) -> Vec<String> {
    pieces
        .into_iter()
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}
