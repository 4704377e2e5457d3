use serde::{Deserialize, Serialize};

use crate::models::ReferenceFilter;

/// A titled, top-level entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageNode {
    pub uid: String,
    pub title: String,
    /// Directly referenced entity uids.
    #[serde(default)]
    pub links: Vec<String>,
    /// Child block uids in block order.
    #[serde(default)]
    pub children: Vec<String>,
    #[serde(default)]
    pub reference_filter: Option<ReferenceFilter>,
}

impl PageNode {
    pub fn new(uid: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            title: title.into(),
            links: Vec::new(),
            children: Vec::new(),
            reference_filter: None,
        }
    }
}
