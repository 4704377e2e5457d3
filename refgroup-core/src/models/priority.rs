use std::fmt;

use serde::{Deserialize, Serialize};

/// Extraction priority of a candidate group key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    #[default]
    Default,
    Low,
}

impl Priority {
    /// The resolution pass that extracts keys of this priority.
    pub fn pass(self) -> ResolutionPass {
        match self {
            Self::High => ResolutionPass::High,
            Self::Default => ResolutionPass::Default,
            Self::Low => ResolutionPass::Low,
        }
    }
}

/// The pass of the resolver that extracted a group.
///
/// Passes run in declaration order; `Cleanup` drains whatever the tiered
/// passes left behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionPass {
    High,
    Default,
    Low,
    Cleanup,
}

impl ResolutionPass {
    /// All passes in execution order.
    pub const ORDER: [ResolutionPass; 4] = [Self::High, Self::Default, Self::Low, Self::Cleanup];

    /// Higher rank runs earlier. Emitted groups have non-increasing rank.
    pub fn rank(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Default => 2,
            Self::Low => 1,
            Self::Cleanup => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Default => "default",
            Self::Low => "low",
            Self::Cleanup => "cleanup",
        }
    }
}

impl fmt::Display for ResolutionPass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
