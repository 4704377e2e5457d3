//! Candidate reference expansion.
//!
//! For one entity, produce the ordered list of entities it could be grouped
//! under: its links (inherited ones included when configured), its containing
//! page, the hierarchy root of every page-like link, and the values of the
//! configured attributes defined on each link.

use refgroup_core::entity::Entity;
use refgroup_core::traits::IEntityGraph;
use tracing::trace;

use crate::patterns::PatternList;

/// Expands an entity into its candidate group keys.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceExpander<'a> {
    exclusions: &'a PatternList,
    attributes: &'a [String],
    include_inherited: bool,
}

impl<'a> ReferenceExpander<'a> {
    pub fn new(exclusions: &'a PatternList, attributes: &'a [String], include_inherited: bool) -> Self {
        Self {
            exclusions,
            attributes,
            include_inherited,
        }
    }

    /// Whether `entity` can never serve as a grouping key.
    pub fn is_excluded(&self, entity: &Entity) -> bool {
        self.exclusions.is_match(entity.text())
    }

    /// Candidate entities for `entity`, in emission order.
    ///
    /// The same entity may appear more than once; duplicates collapse when the
    /// candidates are inserted into the group map.
    pub fn expand(&self, graph: &dyn IEntityGraph, entity: &Entity) -> Vec<Entity> {
        let mut references = graph.linked_entities(entity, self.include_inherited);
        if let Some(page) = graph.containing_page(entity) {
            references.push(page);
        }

        let mut candidates = Vec::with_capacity(references.len());
        for reference in references.into_iter().filter(|r| !self.is_excluded(r)) {
            let root = reference
                .hierarchy_root()
                .and_then(|name| graph.page_by_name(name))
                .filter(|root| !self.is_excluded(root));
            let attribute_values = self.attribute_candidates(graph, &reference);

            candidates.push(reference);
            candidates.extend(root);
            candidates.extend(attribute_values);
        }

        trace!(uid = entity.uid(), candidates = candidates.len(), "expanded references");
        candidates
    }

    /// Entities referenced by the first `name::` child of `reference`, for
    /// every configured attribute `name`.
    fn attribute_candidates(&self, graph: &dyn IEntityGraph, reference: &Entity) -> Vec<Entity> {
        let mut values = Vec::new();
        for name in self.attributes {
            let Some(block) = graph.first_child_defining_attribute(reference, name) else {
                continue;
            };
            values.extend(
                graph
                    .linked_entities(&block, false)
                    .into_iter()
                    .filter(|value| value.text() != name.as_str() && !self.is_excluded(value)),
            );
        }
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use refgroup_graph::GraphBuilder;

    fn exclusions(patterns: &[&str]) -> PatternList {
        let owned: Vec<String> = patterns.iter().map(|p| p.to_string()).collect();
        PatternList::compile("exclusions", &owned).unwrap()
    }

    fn texts(candidates: &[Entity]) -> Vec<&str> {
        candidates.iter().map(|c| c.text()).collect()
    }

    #[test]
    fn links_then_containing_page() {
        let graph = GraphBuilder::new()
            .page("p", "Journal")
            .page("rust", "rust")
            .block("b", "p", "learning [[rust]]")
            .reference("b", "rust")
            .build()
            .unwrap();
        let ex = exclusions(&[]);
        let expander = ReferenceExpander::new(&ex, &[], true);
        let b = graph.resolve("b").unwrap();
        assert_eq!(texts(&expander.expand(&graph, &b)), vec!["rust", "Journal"]);
    }

    #[test]
    fn excluded_references_and_pages_are_dropped() {
        let graph = GraphBuilder::new()
            .page("d", "October 19th, 2026")
            .page("todo", "TODO")
            .block("b", "d", "{{[[TODO]]}} call")
            .reference("b", "todo")
            .build()
            .unwrap();
        let ex = exclusions(&["^TODO$", r"^October \d+th, \d{4}$"]);
        let expander = ReferenceExpander::new(&ex, &[], true);
        let b = graph.resolve("b").unwrap();
        assert!(expander.expand(&graph, &b).is_empty());
    }

    #[test]
    fn inherited_links_follow_direct_links() {
        let graph = GraphBuilder::new()
            .page("p", "Meeting")
            .page("x", "x")
            .page("y", "y")
            .block("parent", "p", "[[x]]")
            .block("child", "parent", "about [[y]]")
            .reference("parent", "x")
            .reference("child", "y")
            .build()
            .unwrap();
        let ex = exclusions(&["^Meeting$"]);
        let child = graph.resolve("child").unwrap();

        let inherited = ReferenceExpander::new(&ex, &[], true);
        assert_eq!(texts(&inherited.expand(&graph, &child)), vec!["y", "x"]);

        let direct = ReferenceExpander::new(&ex, &[], false);
        assert_eq!(texts(&direct.expand(&graph, &child)), vec!["y"]);
    }

    #[test]
    fn hierarchy_root_follows_its_page() {
        let graph = GraphBuilder::new()
            .page("inbox", "inbox")
            .page("wcs", "wcs")
            .page("wcs-a", "wcs/alpha")
            .block("b", "inbox", "[[wcs/alpha]]")
            .reference("b", "wcs-a")
            .build()
            .unwrap();
        let ex = exclusions(&["^inbox$"]);
        let expander = ReferenceExpander::new(&ex, &[], true);
        let b = graph.resolve("b").unwrap();
        assert_eq!(texts(&expander.expand(&graph, &b)), vec!["wcs/alpha", "wcs"]);
    }

    #[test]
    fn missing_or_excluded_hierarchy_root_is_skipped() {
        let graph = GraphBuilder::new()
            .page("inbox", "inbox")
            .page("a", "area/alpha")
            .page("t", "TODO/list")
            .page("todo", "TODO")
            .block("b", "inbox", "[[area/alpha]] [[TODO/list]]")
            .reference("b", "a")
            .reference("b", "t")
            .build()
            .unwrap();
        let ex = exclusions(&["^inbox$", "^TODO$"]);
        let expander = ReferenceExpander::new(&ex, &[], true);
        let b = graph.resolve("b").unwrap();
        assert_eq!(
            texts(&expander.expand(&graph, &b)),
            vec!["area/alpha", "TODO/list"]
        );
    }

    #[test]
    fn attribute_values_of_links_become_candidates() {
        let graph = GraphBuilder::new()
            .page("inbox", "inbox")
            .page("isa", "isa")
            .page("book", "book")
            .page("dune", "Dune")
            .block("attr", "dune", "isa:: [[book]]")
            .block("b", "inbox", "reading [[Dune]]")
            .reference("attr", "isa")
            .reference("attr", "book")
            .reference("b", "dune")
            .build()
            .unwrap();
        let ex = exclusions(&["^inbox$", "^isa$"]);
        let attributes = vec!["isa".to_string()];
        let expander = ReferenceExpander::new(&ex, &attributes, true);
        let b = graph.resolve("b").unwrap();
        assert_eq!(texts(&expander.expand(&graph, &b)), vec!["Dune", "book"]);
    }

    #[test]
    fn only_first_defining_child_counts() {
        let graph = GraphBuilder::new()
            .page("inbox", "inbox")
            .page("book", "book")
            .page("film", "film")
            .page("dune", "Dune")
            .block("first", "dune", "isa:: [[book]]")
            .block("second", "dune", "isa:: [[film]]")
            .block("b", "inbox", "[[Dune]]")
            .reference("first", "book")
            .reference("second", "film")
            .reference("b", "dune")
            .build()
            .unwrap();
        let ex = exclusions(&["^inbox$"]);
        let attributes = vec!["isa".to_string()];
        let expander = ReferenceExpander::new(&ex, &attributes, true);
        let b = graph.resolve("b").unwrap();
        assert_eq!(texts(&expander.expand(&graph, &b)), vec!["Dune", "book"]);
    }
}
