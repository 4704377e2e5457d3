//! Post-processing: fold undersized groups into one catch-all group.

use refgroup_core::models::{Grouping, ResolutionPass, ResolvedGroup};

/// Merge every group smaller than `min_size` into `target_key`.
///
/// Groups for which `never_merge` returns true stay as they are whatever
/// their size. The target group is always merged into itself, so its
/// existing members come first in group order. The merged group is
/// appended after the untouched groups and is omitted when it would be empty.
pub fn merge_small_groups<F>(
    grouping: Grouping,
    target_key: &str,
    min_size: usize,
    never_merge: F,
) -> Grouping
where
    F: Fn(&str) -> bool,
{
    let mut kept = Vec::new();
    let mut merged = Vec::new();
    for group in grouping.into_groups() {
        let is_small = group.key == target_key
            || (group.len() < min_size && !never_merge(&group.key));
        if is_small {
            merged.extend(group.members);
        } else {
            kept.push(group);
        }
    }
    if !merged.is_empty() {
        kept.push(ResolvedGroup {
            key: target_key.to_string(),
            pass: ResolutionPass::Cleanup,
            members: merged,
        });
    }
    Grouping::from_groups(kept)
}
