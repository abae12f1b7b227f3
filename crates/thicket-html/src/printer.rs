//! Indented text dump of an element tree.

use std::fmt::Write;

use thicket_dom::{DomTree, Element, NodeId};

/// Render the subtree at `id`, one element per line, two spaces per level.
///
/// ```text
/// root
///   <div #a>
///     <p .x .y> "hi"
/// ```
#[must_use]
pub fn format_tree(tree: &DomTree, id: NodeId) -> String {
    let mut out = String::new();
    // Explicit stack: deep documents must not recurse.
    let mut stack = vec![(id, 0usize)];

    while let Some((id, depth)) = stack.pop() {
        let Some(element) = tree.element(id) else {
            continue;
        };
        let prefix = "  ".repeat(depth);
        if id == NodeId::ROOT {
            let _ = write!(out, "{prefix}{}", element.tag());
        } else {
            let _ = write!(out, "{prefix}{}", open_tag(element));
        }
        if !element.text().is_empty() {
            let _ = write!(out, " {:?}", element.text());
        }
        out.push('\n');

        stack.extend(tree.children(id).iter().rev().map(|&child| (child, depth + 1)));
    }
    out
}

/// Print the subtree at `id` to stdout.
pub fn print_tree(tree: &DomTree, id: NodeId) {
    print!("{}", format_tree(tree, id));
}

fn open_tag(element: &Element) -> String {
    let mut tag = format!("<{}", element.tag());
    if let Some(id) = element.id() {
        let _ = write!(tag, " #{id}");
    }
    for class in element.classes() {
        let _ = write!(tag, " .{class}");
    }
    for (key, value) in element.attributes() {
        let _ = write!(tag, " {key}=\"{value}\"");
    }
    tag.push('>');
    tag
}
