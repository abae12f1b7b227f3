//! Element tree implementation for Thicket.
//!
//! # Design
//!
//! The tree uses arena allocation with [`NodeId`] indices for all relationships.
//! A parent link is a plain index, not an owning pointer, so there are no
//! reference cycles and no borrow checker issues while walking up or down.
//!
//! The tree only grows: nodes are appended during construction and never
//! removed, so every [`NodeId`] handed out stays valid for the tree's lifetime.

mod element;
mod summary;

use std::collections::VecDeque;

use serde::Serialize;

pub use element::{AttributesMap, Element, ROOT_TAG};
pub use summary::ElementSummary;

/// A type-safe index into the element tree.
///
/// Identity, not structural equality: two elements with identical fields at
/// different tree positions have different `NodeId`s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The synthetic root is always at index 0.
    pub const ROOT: Self = Self(0);
}

/// An element together with its position in the tree.
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    /// The element's own data.
    pub element: Element,

    /// The enclosing element, or `None` for the root.
    pub parent: Option<NodeId>,

    /// Child elements in document order.
    pub children: Vec<NodeId>,
}

/// Arena-based element tree.
///
/// This structure stores all nodes in a contiguous vector, using indices
/// for all relationships. This provides:
/// - O(1) access to any node by `NodeId`
/// - O(1) parent traversal
/// - No borrowing issues (indices instead of references)
#[derive(Debug, Clone, Serialize)]
pub struct DomTree {
    /// All nodes in the tree, indexed by `NodeId`.
    /// The root is always at index 0 (`NodeId::ROOT`).
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a new tree containing only the synthetic root.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                element: Element::root(),
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// Get the root node ID.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get the element stored at `id`.
    #[must_use]
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        self.get(id).map(|n| &n.element)
    }

    /// Get the number of nodes in the tree, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a tree holds at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Attach `element` as the last child of `parent` and return its ID.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this tree.
    pub fn append_child(&mut self, parent: NodeId, element: Element) -> NodeId {
        assert!(parent.0 < self.nodes.len(), "unknown parent {parent:?}");

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            element,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Append `text` to the text buffer of the element at `id`.
    ///
    /// Unknown IDs are ignored.
    pub fn append_text(&mut self, id: NodeId, text: &str) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.element.push_text(text);
        }
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get all children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Check if `descendant` is a strict descendant of `ancestor`.
    #[must_use]
    pub fn is_descendant_of(&self, descendant: NodeId, ancestor: NodeId) -> bool {
        self.ancestors(descendant).any(|id| id == ancestor)
    }

    /// Iterate over the subtree rooted at `id` in breadth-first (level) order.
    ///
    /// The iteration starts with `id` itself.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let mut queue = VecDeque::new();
        if self.get(id).is_some() {
            queue.push_back(id);
        }
        Descendants { tree: self, queue }
    }

    /// Iterate over all ancestors of a node, from parent to root.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> AncestorIterator<'_> {
        AncestorIterator {
            tree: self,
            current: self.parent(id),
        }
    }

    /// Iterate from the node itself up to the root.
    #[must_use]
    pub fn inclusive_ancestors(&self, id: NodeId) -> AncestorIterator<'_> {
        AncestorIterator {
            tree: self,
            current: self.get(id).map(|_| id),
        }
    }

    /// Iterate over every node ID in creation order, which is document order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Snapshot of one element for display: its own fields plus the tag names
    /// of its parent and children.
    #[must_use]
    pub fn describe(&self, id: NodeId) -> Option<ElementSummary> {
        let node = self.get(id)?;
        let tag_of = |id: NodeId| self.element(id).map(|e| e.tag().to_string());

        Some(ElementSummary {
            name: node.element.tag().to_string(),
            id: node.element.id().map(str::to_string),
            classes: node.element.classes().to_vec(),
            attributes: node.element.attributes().clone(),
            inner_text: node.element.text().to_string(),
            parent: node.parent.and_then(tag_of),
            children: node.children.iter().filter_map(|&c| tag_of(c)).collect(),
        })
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Breadth-first iterator over a subtree, inclusive of its root.
pub struct Descendants<'a> {
    tree: &'a DomTree,
    queue: VecDeque<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.queue.pop_front()?;
        self.queue.extend(self.tree.children(id).iter().copied());
        Some(id)
    }
}

/// Iterator over ancestors of a node.
pub struct AncestorIterator<'a> {
    tree: &'a DomTree,
    current: Option<NodeId>,
}

impl Iterator for AncestorIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.parent(id);
        Some(id)
    }
}
