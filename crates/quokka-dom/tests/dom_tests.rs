//! Tests for DOM tree construction, traversal links, and attribute lookup.

use quokka_dom::{Attribute, DomTree, ElementData, NodeId, NodeType};

/// Helper to create an element node and return its `NodeId`.
fn alloc_element(tree: &mut DomTree, tag: &str) -> NodeId {
    tree.alloc(NodeType::Element(ElementData::new(tag)))
}

// ========== tree construction ==========

#[test]
fn test_new_tree_has_document_root() {
    let tree = DomTree::new();
    assert_eq!(tree.root(), NodeId::ROOT);
    assert_eq!(tree.len(), 1);
    assert!(!tree.is_empty());
    assert!(matches!(
        tree.get(NodeId::ROOT).map(|n| &n.node_type),
        Some(NodeType::Document)
    ));
}

#[test]
fn test_append_child_sets_parent_and_sibling_links() {
    let mut tree = DomTree::new();
    let parent = alloc_element(&mut tree, "ul");
    tree.append_child(NodeId::ROOT, parent);

    let a = alloc_element(&mut tree, "li");
    let b = alloc_element(&mut tree, "li");
    let c = alloc_element(&mut tree, "li");
    tree.append_child(parent, a);
    tree.append_child(parent, b);
    tree.append_child(parent, c);

    assert_eq!(tree.children(parent), &[a, b, c]);
    assert_eq!(tree.parent(a), Some(parent));
    assert_eq!(tree.parent(c), Some(parent));

    assert_eq!(tree.prev_sibling(a), None);
    assert_eq!(tree.next_sibling(a), Some(b));
    assert_eq!(tree.prev_sibling(b), Some(a));
    assert_eq!(tree.next_sibling(b), Some(c));
    assert_eq!(tree.next_sibling(c), None);
}

#[test]
fn test_document_element_skips_non_elements() {
    let mut tree = DomTree::new();
    let comment = tree.alloc(NodeType::Comment("doctype-ish".to_string()));
    tree.append_child(NodeId::ROOT, comment);

    let html = alloc_element(&mut tree, "html");
    tree.append_child(NodeId::ROOT, html);

    assert_eq!(tree.document_element(), Some(html));
}

// ========== node access ==========

#[test]
fn test_as_element_and_as_text() {
    let mut tree = DomTree::new();
    let div = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, div);
    let text = tree.alloc(NodeType::Text("hello".to_string()));
    tree.append_child(div, text);

    assert_eq!(tree.as_element(div).map(|e| e.tag_name.as_str()), Some("div"));
    assert!(tree.as_element(text).is_none());
    assert_eq!(tree.as_text(text), Some("hello"));
    assert!(tree.as_text(div).is_none());
}

#[test]
fn test_get_out_of_range_is_none() {
    let tree = DomTree::new();
    assert!(tree.get(NodeId(42)).is_none());
    assert_eq!(tree.children(NodeId(42)), &[] as &[NodeId]);
}

// ========== attribute lookup ==========

#[test]
fn test_attr_lookup() {
    let data = ElementData {
        tag_name: "input".to_string(),
        attrs: vec![
            Attribute::new("type", "text"),
            Attribute::new("name", "q"),
        ],
    };
    assert_eq!(data.attr("type"), Some("text"));
    assert_eq!(data.attr("name"), Some("q"));
    assert_eq!(data.attr("value"), None);
    assert!(data.has_attr("type"));
    assert!(!data.has_attr("value"));
}

#[test]
fn test_attr_lookup_first_duplicate_wins() {
    let data = ElementData {
        tag_name: "div".to_string(),
        attrs: vec![
            Attribute::new("class", "first"),
            Attribute::new("class", "second"),
        ],
    };
    assert_eq!(data.attr("class"), Some("first"));
}

#[test]
fn test_attrs_preserve_document_order() {
    let data = ElementData {
        tag_name: "link".to_string(),
        attrs: vec![
            Attribute::new("rel", "stylesheet"),
            Attribute::new("href", "style.css"),
        ],
    };
    let names: Vec<&str> = data.attrs.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["rel", "href"]);
}
