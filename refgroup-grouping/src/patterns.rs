//! Compiled regex lists used for exclusions and priority tiers.

use refgroup_core::errors::GroupingError;
use regex::{Regex, RegexSet};

/// An ordered list of patterns tested against entity text.
#[derive(Debug, Clone)]
pub struct PatternList {
    set: RegexSet,
}

impl PatternList {
    /// Compile `patterns`. `list` names the list in error messages.
    pub fn compile(list: &str, patterns: &[String]) -> Result<Self, GroupingError> {
        match RegexSet::new(patterns) {
            Ok(set) => Ok(Self { set }),
            Err(set_err) => {
                // Report the first offending pattern rather than the whole set.
                for pattern in patterns {
                    if let Err(e) = Regex::new(pattern) {
                        return Err(GroupingError::InvalidPattern {
                            list: list.to_string(),
                            pattern: pattern.clone(),
                            reason: e.to_string(),
                        });
                    }
                }
                Err(GroupingError::InvalidPattern {
                    list: list.to_string(),
                    pattern: patterns.join(" | "),
                    reason: set_err.to_string(),
                })
            }
        }
    }

    pub fn empty() -> Self {
        Self {
            set: RegexSet::empty(),
        }
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.set.is_match(text)
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn patterns(&self) -> &[String] {
        self.set.patterns()
    }
}

impl Default for PatternList {
    fn default() -> Self {
        Self::empty()
    }
}
