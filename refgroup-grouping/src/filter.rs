//! Include/remove reference filters.

use refgroup_core::entity::Entity;
use refgroup_core::models::ReferenceFilter;
use refgroup_core::traits::IEntityGraph;
use refgroup_core::types::collections::FxHashSet;

/// True when `entity` references every name in `filter.includes` and none in
/// `filter.removes`. Inherited references count.
pub fn matches_filter(graph: &dyn IEntityGraph, entity: &Entity, filter: &ReferenceFilter) -> bool {
    if filter.is_empty() {
        return true;
    }
    let linked = graph.linked_entities(entity, true);
    let names: FxHashSet<&str> = linked.iter().map(|e| graph.text(e)).collect();
    filter.includes.iter().all(|name| names.contains(name.as_str()))
        && !filter.removes.iter().any(|name| names.contains(name.as_str()))
}

/// Apply the reference filter stored on `page`, if any.
pub fn matches_page_filter(graph: &dyn IEntityGraph, entity: &Entity, page: &Entity) -> bool {
    page.reference_filter()
        .map_or(true, |filter| matches_filter(graph, entity, filter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use refgroup_graph::{GraphBuilder, MemoryGraph};

    fn graph() -> MemoryGraph {
        GraphBuilder::new()
            .page_with_filter(
                "view",
                "Reading view",
                ReferenceFilter::new(vec!["book".into()], vec!["abandoned".into()]),
            )
            .page("book", "book")
            .page("abandoned", "abandoned")
            .page("fiction", "fiction")
            .block("parent", "view", "[[book]]")
            .block("kept", "parent", "[[fiction]]")
            .block("dropped", "parent", "[[abandoned]]")
            .block("loose", "view", "[[fiction]]")
            .reference("parent", "book")
            .reference("kept", "fiction")
            .reference("dropped", "abandoned")
            .reference("loose", "fiction")
            .build()
            .unwrap()
    }

    #[test]
    fn includes_and_removes_use_inherited_links() {
        let g = graph();
        let view = g.resolve("view").unwrap();
        let check = |uid: &str| matches_page_filter(&g, &g.resolve(uid).unwrap(), &view);
        assert!(check("kept"));
        assert!(!check("dropped"));
        assert!(!check("loose"));
    }

    #[test]
    fn empty_filter_matches_everything() {
        let g = graph();
        let loose = g.resolve("loose").unwrap();
        assert!(matches_filter(&g, &loose, &ReferenceFilter::default()));
        let book = g.resolve("book").unwrap();
        assert!(matches_page_filter(&g, &loose, &book));
    }
}
