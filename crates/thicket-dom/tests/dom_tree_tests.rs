//! Tests for element tree construction and traversal.

use thicket_dom::{DomTree, Element, ElementSummary, NodeId, ROOT_TAG};

/// Helper to append a bare element and return its NodeId.
fn append(tree: &mut DomTree, parent: NodeId, tag: &str) -> NodeId {
    tree.append_child(parent, Element::new(tag))
}

/// Builds:
/// ```text
/// root
/// ├── div
/// │   ├── p
/// │   │   └── span
/// │   └── ul
/// └── footer
/// ```
fn sample_tree() -> (DomTree, [NodeId; 5]) {
    let mut tree = DomTree::new();
    let div = append(&mut tree, NodeId::ROOT, "div");
    let p = append(&mut tree, div, "p");
    let ul = append(&mut tree, div, "ul");
    let footer = append(&mut tree, NodeId::ROOT, "footer");
    let span = append(&mut tree, p, "span");
    (tree, [div, p, ul, footer, span])
}

// ========== construction ==========

#[test]
fn test_new_tree_has_only_root() {
    let tree = DomTree::new();
    assert_eq!(tree.len(), 1);
    assert!(!tree.is_empty());
    let root = tree.element(tree.root()).unwrap();
    assert_eq!(root.tag(), ROOT_TAG);
    assert_eq!(tree.parent(NodeId::ROOT), None);
    assert!(tree.children(NodeId::ROOT).is_empty());
}

#[test]
fn test_append_child_links_both_directions() {
    let (tree, [div, p, ul, footer, span]) = sample_tree();

    assert_eq!(tree.children(NodeId::ROOT), &[div, footer]);
    assert_eq!(tree.children(div), &[p, ul]);
    assert_eq!(tree.children(p), &[span]);
    assert_eq!(tree.parent(div), Some(NodeId::ROOT));
    assert_eq!(tree.parent(span), Some(p));
    assert_eq!(tree.parent(footer), Some(NodeId::ROOT));
}

#[test]
fn test_every_non_root_node_listed_once_by_its_parent() {
    let (tree, _) = sample_tree();
    for id in tree.iter().skip(1) {
        let parent = tree.parent(id).expect("non-root node has a parent");
        let count = tree.children(parent).iter().filter(|&&c| c == id).count();
        assert_eq!(count, 1, "{id:?} listed {count} times");
    }
}

#[test]
fn test_append_text_accumulates() {
    let mut tree = DomTree::new();
    let p = append(&mut tree, NodeId::ROOT, "p");
    tree.append_text(p, "Hello");
    tree.append_text(p, "World");
    assert_eq!(tree.element(p).unwrap().text(), "HelloWorld");
    assert_eq!(tree.element(NodeId::ROOT).unwrap().text(), "");
}

#[test]
fn test_append_text_to_unknown_id_is_ignored() {
    let mut tree = DomTree::new();
    tree.append_text(NodeId(42), "lost");
    assert_eq!(tree.len(), 1);
}

#[test]
#[should_panic(expected = "unknown parent")]
fn test_append_child_to_unknown_parent_panics() {
    let mut tree = DomTree::new();
    let _ = tree.append_child(NodeId(7), Element::new("div"));
}

// ========== element fields ==========

#[test]
fn test_element_fields() {
    let mut element = Element::new("a");
    element.set_id("first");
    element.set_id("second");
    element.add_class("x");
    element.add_class("x");
    element.set_attribute("href", "/one");
    element.set_attribute("href", "/two");

    assert_eq!(element.id(), Some("second"));
    assert_eq!(element.classes(), &["x".to_string(), "x".to_string()]);
    assert!(element.has_class("x"));
    assert!(!element.has_class("y"));
    assert_eq!(element.attribute("href"), Some("/two"));
    assert_eq!(element.attributes().len(), 1);
}

// ========== traversal ==========

#[test]
fn test_descendants_is_breadth_first_and_inclusive() {
    let (tree, [div, p, ul, footer, span]) = sample_tree();

    let order: Vec<NodeId> = tree.descendants(NodeId::ROOT).collect();
    assert_eq!(order, vec![NodeId::ROOT, div, footer, p, ul, span]);

    let order: Vec<NodeId> = tree.descendants(div).collect();
    assert_eq!(order, vec![div, p, ul, span]);
}

#[test]
fn test_descendants_of_leaf_is_itself() {
    let (tree, [.., span]) = sample_tree();
    assert_eq!(tree.descendants(span).collect::<Vec<_>>(), vec![span]);
}

#[test]
fn test_descendants_of_unknown_id_is_empty() {
    let tree = DomTree::new();
    assert_eq!(tree.descendants(NodeId(3)).count(), 0);
}

#[test]
fn test_ancestors() {
    let (tree, [div, p, _, _, span]) = sample_tree();

    assert_eq!(
        tree.ancestors(span).collect::<Vec<_>>(),
        vec![p, div, NodeId::ROOT]
    );
    assert_eq!(
        tree.inclusive_ancestors(span).collect::<Vec<_>>(),
        vec![span, p, div, NodeId::ROOT]
    );
    assert_eq!(tree.ancestors(NodeId::ROOT).count(), 0);
}

#[test]
fn test_is_descendant_of() {
    let (tree, [div, p, ul, footer, span]) = sample_tree();

    assert!(tree.is_descendant_of(span, div));
    assert!(tree.is_descendant_of(ul, NodeId::ROOT));
    assert!(!tree.is_descendant_of(div, div));
    assert!(!tree.is_descendant_of(footer, div));
    assert!(!tree.is_descendant_of(p, span));
}

// ========== describe ==========

#[test]
fn test_describe_and_display() {
    let mut tree = DomTree::new();
    let mut div = Element::new("div");
    div.set_id("main");
    let div = tree.append_child(NodeId::ROOT, div);

    let mut p = Element::new("p");
    p.add_class("x");
    p.add_class("y");
    p.set_attribute("title", "greeting");
    let p = tree.append_child(div, p);
    tree.append_text(p, "hi");
    let _ = append(&mut tree, p, "br");

    let summary = tree.describe(p).unwrap();
    assert_eq!(
        summary,
        ElementSummary {
            name: "p".to_string(),
            id: None,
            classes: vec!["x".to_string(), "y".to_string()],
            attributes: [("title".to_string(), "greeting".to_string())]
                .into_iter()
                .collect(),
            inner_text: "hi".to_string(),
            parent: Some("div".to_string()),
            children: vec!["br".to_string()],
        }
    );

    let expected = "Name: p\n\
                    Classes:\n    - x\n    - y\n\
                    Attributes:\n    - title=greeting\n\
                    InnerHTML: hi\n\
                    Parent: div\n\
                    Children:\n    - br\n";
    assert_eq!(summary.to_string(), expected);

    let root = tree.describe(NodeId::ROOT).unwrap();
    assert_eq!(root.to_string(), "Name: root\nChildren:\n    - div\n");
    assert!(tree.describe(NodeId(99)).is_none());
}

#[test]
fn test_summary_serializes_without_absent_fields() {
    let mut tree = DomTree::new();
    let div = append(&mut tree, NodeId::ROOT, "div");

    let json = serde_json::to_value(tree.describe(div).unwrap()).unwrap();
    assert_eq!(json["name"], "div");
    assert_eq!(json["parent"], "root");
    assert!(json.get("id").is_none());

    let json = serde_json::to_value(tree.describe(NodeId::ROOT).unwrap()).unwrap();
    assert!(json.get("parent").is_none());
}
