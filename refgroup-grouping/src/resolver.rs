//! Largest-first disjoint extraction over the priority tiers.

use refgroup_core::constants::MIN_EXTRACTED_GROUP_SIZE;
use refgroup_core::entity::Entity;
use refgroup_core::models::{Priority, ResolutionPass, ResolvedGroup};
use refgroup_core::resolution_pass_span;
use refgroup_core::types::collections::FxHashMap;
use tracing::debug;

use crate::classifier::TierBuckets;
use crate::working_set::{GroupId, WorkingSet};

/// Output of [`resolve`].
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    /// Groups in extraction order.
    pub groups: Vec<ResolvedGroup>,
    /// Groups extracted per pass, indexed like [`ResolutionPass::ORDER`].
    pub extracted: [usize; 4],
    /// Groups dropped after the tiered passes because they ran out of members.
    pub dropped_empty: usize,
}

/// Run the four passes over `working`.
///
/// High, default, and low tiers are drained in that order, each largest-first.
/// The default tier stops at `default_min_size`; the others take any non-empty
/// group. Every extraction removes its members from all remaining groups, so
/// no entity is placed twice. The cleanup pass then drains everything left,
/// including groups that were never classified.
pub fn resolve(
    working: &mut WorkingSet,
    tiers: &TierBuckets,
    entities: &FxHashMap<String, Entity>,
    default_min_size: usize,
) -> Resolution {
    let mut resolution = Resolution::default();

    for priority in [Priority::High, Priority::Default, Priority::Low] {
        let min_size = match priority {
            Priority::Default => default_min_size,
            Priority::High | Priority::Low => MIN_EXTRACTED_GROUP_SIZE,
        };
        drain(
            working,
            tiers.tier(priority),
            min_size,
            priority.pass(),
            entities,
            &mut resolution,
        );
    }

    resolution.dropped_empty = working.drop_empty();
    let remaining = working.remaining_ids();
    drain(
        working,
        &remaining,
        MIN_EXTRACTED_GROUP_SIZE,
        ResolutionPass::Cleanup,
        entities,
        &mut resolution,
    );
    resolution
}

fn drain(
    working: &mut WorkingSet,
    candidates: &[GroupId],
    min_size: usize,
    pass: ResolutionPass,
    entities: &FxHashMap<String, Entity>,
    resolution: &mut Resolution,
) {
    let _span = resolution_pass_span!(pass, candidates.len()).entered();
    let slot = pass_index(pass);
    while let Some(extracted) = working.extract_largest_in(candidates, min_size) {
        debug!(
            key = %extracted.key,
            size = extracted.members.len(),
            %pass,
            "extracted group"
        );
        let members = extracted
            .members
            .iter()
            .filter_map(|uid| entities.get(uid).cloned())
            .collect();
        resolution.groups.push(ResolvedGroup {
            key: extracted.key,
            pass,
            members,
        });
        resolution.extracted[slot] += 1;
    }
}

fn pass_index(pass: ResolutionPass) -> usize {
    ResolutionPass::ORDER
        .iter()
        .position(|p| *p == pass)
        .unwrap_or(ResolutionPass::ORDER.len() - 1)
}
