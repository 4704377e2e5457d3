//! Entity model: pages and blocks of a knowledge graph.
//!
//! Entities are plain snapshots. Relations are stored as uids and resolved
//! through an [`IEntityGraph`](crate::traits::IEntityGraph).

pub mod attribute;
pub mod block;
pub mod page;

use serde::{Deserialize, Serialize};

pub use block::BlockNode;
pub use page::PageNode;

use crate::constants::HIERARCHY_SEPARATOR;
use crate::models::ReferenceFilter;

/// A node in the knowledge graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Entity {
    /// Top-level, titled. Titles may contain a hierarchy separator.
    Page(PageNode),
    /// Nested under a page or another block.
    Block(BlockNode),
}

impl Entity {
    pub fn uid(&self) -> &str {
        match self {
            Self::Page(p) => &p.uid,
            Self::Block(b) => &b.uid,
        }
    }

    /// Page title or block string.
    pub fn text(&self) -> &str {
        match self {
            Self::Page(p) => &p.title,
            Self::Block(b) => &b.string,
        }
    }

    pub fn is_page_like(&self) -> bool {
        matches!(self, Self::Page(_))
    }

    pub fn as_page(&self) -> Option<&PageNode> {
        match self {
            Self::Page(p) => Some(p),
            Self::Block(_) => None,
        }
    }

    pub fn as_block(&self) -> Option<&BlockNode> {
        match self {
            Self::Block(b) => Some(b),
            Self::Page(_) => None,
        }
    }

    /// Uids of directly referenced entities, in reference order.
    pub fn link_uids(&self) -> &[String] {
        match self {
            Self::Page(p) => &p.links,
            Self::Block(b) => &b.links,
        }
    }

    /// Uids of child blocks, ordered by block order.
    pub fn child_uids(&self) -> &[String] {
        match self {
            Self::Page(p) => &p.children,
            Self::Block(b) => &b.children,
        }
    }

    /// Uids of ancestors, root (the page) first and the direct parent last.
    /// Empty for pages.
    pub fn parent_uids(&self) -> &[String] {
        match self {
            Self::Page(_) => &[],
            Self::Block(b) => &b.parents,
        }
    }

    /// Uid of the direct parent, if any.
    pub fn parent_uid(&self) -> Option<&str> {
        self.parent_uids().last().map(String::as_str)
    }

    /// Uid of the containing page. A page contains itself.
    pub fn page_uid(&self) -> &str {
        match self {
            Self::Page(p) => &p.uid,
            Self::Block(b) => &b.page,
        }
    }

    /// Linked-reference filter. Only pages carry one.
    pub fn reference_filter(&self) -> Option<&ReferenceFilter> {
        match self {
            Self::Page(p) => p.reference_filter.as_ref(),
            Self::Block(_) => None,
        }
    }

    /// A page whose title has a hierarchy separator (`topic/subtopic`).
    pub fn is_part_of_hierarchy(&self) -> bool {
        self.is_page_like() && self.text().contains(HIERARCHY_SEPARATOR)
    }

    /// Title before the first hierarchy separator. Only one level is unwound:
    /// `a/b/c` yields `a`.
    pub fn hierarchy_root(&self) -> Option<&str> {
        if !self.is_part_of_hierarchy() {
            return None;
        }
        self.text().split(HIERARCHY_SEPARATOR).next()
    }
}

impl From<PageNode> for Entity {
    fn from(page: PageNode) -> Self {
        Self::Page(page)
    }
}

impl From<BlockNode> for Entity {
    fn from(block: BlockNode) -> Self {
        Self::Block(block)
    }
}
