use super::*;

fn tool(id: &str, category: &str) -> Tool {
    Tool { id: id.to_owned(), name: id.to_owned(), description: None, category: category.to_owned(), icon: None }
}

fn catalog() -> ToolCatalog {
    ToolCatalog {
        tools: vec![tool("affix-probability", "mod"), tool("strengthen-probability", "mod")],
        categories: vec!["mod".to_owned(), "weapon".to_owned(), "character".to_owned()],
        loading: false,
    }
}

#[test]
fn populated_categories_skip_empty_ones() {
    assert_eq!(catalog().populated_categories(), vec!["mod".to_owned()]);
}

#[test]
fn in_category_keeps_catalogue_order() {
    let ids: Vec<String> = catalog().in_category("mod").into_iter().map(|t| t.id).collect();
    assert_eq!(ids, vec!["affix-probability", "strengthen-probability"]);
    assert!(catalog().in_category("weapon").is_empty());
}

#[test]
fn category_label_translates_known_slugs() {
    assert_eq!(category_label("mod"), "模组");
    assert_eq!(category_label("vehicle"), "vehicle");
}
