use regex::Regex;

use crate::entity::attribute::attribute_pattern;
use crate::entity::Entity;

/// Read access to a knowledge graph.
///
/// Implementors provide identity lookup, exact page-title lookup, and backlinks.
/// Everything else is derived. Lookups that miss are skipped, never fatal:
/// missing graph data degrades grouping quality, not correctness.
pub trait IEntityGraph: Send + Sync {
    /// Resolve an entity by uid.
    fn resolve(&self, uid: &str) -> Option<Entity>;

    /// Resolve a page by its exact title.
    fn page_by_name(&self, name: &str) -> Option<Entity>;

    /// Uids of entities that reference `uid`.
    fn referencing_uids(&self, uid: &str) -> Vec<String>;

    // --- Identity ---

    fn identity<'a>(&self, entity: &'a Entity) -> &'a str {
        entity.uid()
    }

    fn text<'a>(&self, entity: &'a Entity) -> &'a str {
        entity.text()
    }

    fn is_page_like(&self, entity: &Entity) -> bool {
        entity.is_page_like()
    }

    // --- Relations ---

    /// Ancestors, root first. Consistent with [`Entity::parent_uids`].
    fn ancestors(&self, entity: &Entity) -> Vec<Entity> {
        self.resolve_all(entity.parent_uids())
    }

    fn containing_page(&self, entity: &Entity) -> Option<Entity> {
        if entity.is_page_like() {
            return Some(entity.clone());
        }
        self.resolve(entity.page_uid())
    }

    /// Directly referenced entities. With `include_inherited`, the references of
    /// every ancestor (root first) are appended, so a nested block inherits the
    /// references of the blocks it sits under.
    fn linked_entities(&self, entity: &Entity, include_inherited: bool) -> Vec<Entity> {
        let mut linked = self.resolve_all(entity.link_uids());
        if include_inherited {
            for ancestor in self.ancestors(entity) {
                linked.extend(self.resolve_all(ancestor.link_uids()));
            }
        }
        linked
    }

    fn backlinks(&self, entity: &Entity) -> Vec<Entity> {
        let uids = self.referencing_uids(entity.uid());
        self.resolve_all(&uids)
    }

    // --- Children ---

    fn children(&self, entity: &Entity) -> Vec<Entity> {
        self.resolve_all(entity.child_uids())
    }

    fn child_at(&self, entity: &Entity, index: usize) -> Option<Entity> {
        entity
            .child_uids()
            .get(index)
            .and_then(|uid| self.resolve(uid))
    }

    /// First child whose text matches `pattern`.
    fn child_by_text(&self, entity: &Entity, pattern: &Regex) -> Option<Entity> {
        self.children(entity)
            .into_iter()
            .find(|c| pattern.is_match(c.text()))
    }

    /// First child whose text equals `text` exactly.
    fn child_with_value(&self, entity: &Entity, text: &str) -> Option<Entity> {
        self.children(entity).into_iter().find(|c| c.text() == text)
    }

    fn children_matching(&self, entity: &Entity, pattern: &Regex) -> Vec<Entity> {
        self.children(entity)
            .into_iter()
            .filter(|c| pattern.is_match(c.text()))
            .collect()
    }

    /// Walk down from `entity`. Each part is either a child index or an exact
    /// child text; numeric parts are tried as an index first.
    fn child_at_path(&self, entity: &Entity, path: &[&str]) -> Option<Entity> {
        let mut current = entity.clone();
        for part in path {
            let by_index = part
                .parse::<usize>()
                .ok()
                .and_then(|idx| self.child_at(&current, idx));
            current = match by_index {
                Some(child) => child,
                None => self.child_with_value(&current, part)?,
            };
        }
        Some(current)
    }

    // --- Attributes ---

    /// Children defining attribute `name` (`name::...`), in block order.
    fn attribute_blocks(&self, entity: &Entity, name: &str) -> Vec<Entity> {
        match attribute_pattern(name) {
            Some(re) => self.children_matching(entity, &re),
            None => Vec::new(),
        }
    }

    fn first_child_defining_attribute(&self, entity: &Entity, name: &str) -> Option<Entity> {
        let re = attribute_pattern(name)?;
        self.child_by_text(entity, &re)
    }

    /// In-place values followed by the texts of the attribute block's children.
    fn list_attribute_values(&self, block: &Entity) -> Vec<String> {
        if !block.defines_attribute() {
            return Vec::new();
        }
        let mut values = block.in_place_attribute_values();
        values.extend(self.children(block).iter().map(|c| c.text().to_string()));
        values
    }

    // --- Helpers ---

    /// Resolve each uid, silently dropping the ones that no longer exist.
    fn resolve_all(&self, uids: &[String]) -> Vec<Entity> {
        uids.iter().filter_map(|uid| self.resolve(uid)).collect()
    }
}
