//! Property tests for refgroup-grouping over random reference graphs.

use proptest::prelude::*;

use refgroup_core::config::GroupingConfig;
use refgroup_core::models::ResolutionPass;
use refgroup_core::traits::IEntityGraph;
use refgroup_core::types::collections::FxHashMap;
use refgroup_core::Entity;
use refgroup_graph::{GraphBuilder, MemoryGraph};
use refgroup_grouping::{GroupingEngine, PriorityClassifier, WorkingSet};

const KEY_PAGES: usize = 8;

/// Key page titles. Index 0 is high priority, index 1 low priority under
/// the default config.
fn key_title(i: usize) -> String {
    match i {
        0 => "i".to_string(),
        1 => "task".to_string(),
        _ => format!("topic {i}"),
    }
}

/// One daily page (excluded by default) holding a block per entry of
/// `links`, each referencing the listed key pages.
fn build_graph(links: &[Vec<usize>]) -> (MemoryGraph, Vec<Entity>) {
    let mut builder = GraphBuilder::new().page("day", "October 19th, 2026");
    for i in 0..KEY_PAGES {
        builder = builder.page(format!("k{i}"), key_title(i));
    }
    for (e, targets) in links.iter().enumerate() {
        builder = builder.block(format!("e{e}"), "day", format!("entry {e}"));
        for &t in targets {
            builder = builder.reference(format!("e{e}"), format!("k{t}"));
        }
    }
    let graph = builder.build().unwrap();
    let entities = (0..links.len())
        .filter_map(|e| graph.resolve(&format!("e{e}")))
        .collect();
    (graph, entities)
}

fn links_strategy() -> impl Strategy<Value = Vec<Vec<usize>>> {
    prop::collection::vec(prop::collection::vec(0..KEY_PAGES, 0..4), 0..30)
}

fn engine(min_size: usize) -> GroupingEngine {
    GroupingEngine::new(GroupingConfig {
        default_min_group_size: min_size,
        ..GroupingConfig::default()
    })
    .unwrap()
}

proptest! {
    #[test]
    fn every_entity_placed_exactly_once(links in links_strategy()) {
        let (graph, entities) = build_graph(&links);
        let grouping = engine(2).group(&graph, &entities, "misc");

        let mut seen: FxHashMap<&str, usize> = FxHashMap::default();
        for group in &grouping {
            for uid in group.member_uids() {
                *seen.entry(uid).or_insert(0) += 1;
            }
        }
        prop_assert_eq!(seen.len(), entities.len());
        prop_assert!(seen.values().all(|&n| n == 1));
    }
}

proptest! {
    #[test]
    fn passes_never_go_back_up(links in links_strategy()) {
        let (graph, entities) = build_graph(&links);
        let grouping = engine(2).group(&graph, &entities, "misc");
        let ranks: Vec<u8> = grouping.iter().map(|g| g.pass.rank()).collect();
        prop_assert!(ranks.windows(2).all(|w| w[0] >= w[1]), "ranks {:?}", ranks);
    }
}

proptest! {
    #[test]
    fn no_empty_groups_and_default_threshold_holds(
        links in links_strategy(),
        min_size in 1_usize..5,
    ) {
        let (graph, entities) = build_graph(&links);
        let grouping = engine(min_size).group(&graph, &entities, "misc");
        for group in &grouping {
            prop_assert!(!group.is_empty(), "empty group {}", group.key);
            if group.pass == ResolutionPass::Default {
                prop_assert!(group.len() >= min_size);
            }
        }
    }
}

proptest! {
    #[test]
    fn sizes_shrink_within_a_pass(links in links_strategy()) {
        let (graph, entities) = build_graph(&links);
        let grouping = engine(2).group(&graph, &entities, "misc");
        for pass in ResolutionPass::ORDER {
            let sizes: Vec<usize> = grouping
                .iter()
                .filter(|g| g.pass == pass)
                .map(|g| g.len())
                .collect();
            prop_assert!(sizes.windows(2).all(|w| w[0] >= w[1]), "{} sizes {:?}", pass, sizes);
        }
    }
}

proptest! {
    #[test]
    fn grouping_is_deterministic(links in links_strategy()) {
        let (graph, entities) = build_graph(&links);
        let engine = engine(2);
        let first = engine.group(&graph, &entities, "misc");
        let second = engine.group(&graph, &entities, "misc");
        prop_assert_eq!(first, second);
    }
}

proptest! {
    #[test]
    fn classification_is_idempotent(links in links_strategy()) {
        let (graph, _) = build_graph(&links);
        let classifier = PriorityClassifier::from_config(&GroupingConfig::default()).unwrap();
        let mut working = WorkingSet::new();
        for i in 0..KEY_PAGES {
            working.insert(format!("k{i}"), vec![format!("m{i}")]);
            let key = format!("k{i}");
            prop_assert_eq!(classifier.classify(&graph, &key), classifier.classify(&graph, &key));
        }
        let first = classifier.partition(&graph, &working, None);
        let second = classifier.partition(&graph, &working, None);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.high, vec![0]);
        prop_assert_eq!(first.low, vec![1]);
        prop_assert_eq!(first.default.len(), KEY_PAGES - 2);
    }
}
