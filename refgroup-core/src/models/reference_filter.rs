use serde::{Deserialize, Serialize};

/// Linked-reference filter attached to a page: texts an entity must reference
/// (`includes`) and texts it must not reference (`removes`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceFilter {
    pub includes: Vec<String>,
    pub removes: Vec<String>,
}

impl ReferenceFilter {
    pub fn new(includes: Vec<String>, removes: Vec<String>) -> Self {
        Self { includes, removes }
    }

    /// A filter with no requirements accepts every entity.
    pub fn is_empty(&self) -> bool {
        self.includes.is_empty() && self.removes.is_empty()
    }
}
