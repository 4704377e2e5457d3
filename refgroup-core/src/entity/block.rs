use serde::{Deserialize, Serialize};

/// A nested entity living on a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockNode {
    pub uid: String,
    pub string: String,
    /// Uid of the containing page.
    pub page: String,
    /// Ancestor uids, page first, direct parent last.
    pub parents: Vec<String>,
    /// Directly referenced entity uids.
    #[serde(default)]
    pub links: Vec<String>,
    /// Child block uids in block order.
    #[serde(default)]
    pub children: Vec<String>,
    /// Position among siblings.
    #[serde(default)]
    pub order: usize,
}

impl BlockNode {
    pub fn new(
        uid: impl Into<String>,
        string: impl Into<String>,
        page: impl Into<String>,
        parents: Vec<String>,
    ) -> Self {
        Self {
            uid: uid.into(),
            string: string.into(),
            page: page.into(),
            parents,
            links: Vec::new(),
            children: Vec::new(),
            order: 0,
        }
    }
}
