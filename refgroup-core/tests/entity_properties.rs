//! Property tests for entity text helpers.

use proptest::prelude::*;

use refgroup_core::entity::attribute::attribute_string;
use refgroup_core::{BlockNode, Entity, PageNode};

fn block(text: &str) -> Entity {
    BlockNode::new("b", text, "p", vec!["p".to_string()]).into()
}

proptest! {
    #[test]
    fn bracketed_values_split_back_out(
        names in prop::collection::vec("[a-z][a-z ]{0,8}[a-z]", 1..6),
        tight in any::<bool>(),
    ) {
        let separator = if tight { "" } else { " " };
        let values: Vec<String> = names.iter().map(|n| format!("[[{n}]]")).collect();
        let entity = block(&attribute_string("isa", &values.join(separator)));

        prop_assert_eq!(entity.attribute_name(), Some("isa"));
        prop_assert_eq!(entity.in_place_attribute_values(), values);
    }
}

proptest! {
    #[test]
    fn hierarchy_root_is_first_segment(
        segments in prop::collection::vec("[a-z]{1,6}", 1..5),
    ) {
        let title = segments.join("/");
        let page: Entity = PageNode::new("p", title.as_str()).into();

        prop_assert_eq!(page.is_part_of_hierarchy(), segments.len() > 1);
        if segments.len() > 1 {
            prop_assert_eq!(page.hierarchy_root(), Some(segments[0].as_str()));
        }
    }
}
