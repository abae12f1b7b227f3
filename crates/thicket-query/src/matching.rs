//! Selector matching against an element tree.
//!
//! A query walks the chain outermost level first. Each level searches a
//! subtree breadth-first, inclusive of the subtree's own root; every element
//! matching a non-final level becomes the root of a new search for the next
//! level, and every element matching the final level joins the result.
//!
//! Because each search includes its own root, one element that satisfies two
//! adjacent levels can play both parts: `div div` matches a lone `<div>`.
//! That is the established behavior of this engine and is kept as is.

use std::collections::{HashSet, VecDeque};

use thicket_dom::{DomTree, Element, NodeId};

use crate::selector::{Selector, SelectorChain};

/// Returns `true` if `element` satisfies every constraint `selector` sets.
///
/// An unset tag or id and an empty class list impose nothing, so a selector
/// with no required classes matches elements with any number of classes.
#[must_use]
pub fn matches(element: &Element, selector: &Selector) -> bool {
    if let Some(id) = &selector.id
        && element.id() != Some(id.as_str())
    {
        return false;
    }
    if let Some(tag) = &selector.tag
        && element.tag() != tag
    {
        return false;
    }
    selector.classes.iter().all(|class| element.has_class(class))
}

/// Elements matched by a query, each stored once, in the order first found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryResult {
    order: Vec<NodeId>,
    members: HashSet<NodeId>,
}

impl QueryResult {
    /// Add `id` unless it is already present.
    fn insert(&mut self, id: NodeId) {
        if self.members.insert(id) {
            self.order.push(id);
        }
    }

    /// Returns `true` if `id` was matched.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.members.contains(&id)
    }

    /// Number of distinct matched elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Matched elements in discovery order.
    #[must_use]
    pub fn as_slice(&self) -> &[NodeId] {
        &self.order
    }

    /// Iterate over matched elements in discovery order.
    pub fn iter(&self) -> std::slice::Iter<'_, NodeId> {
        self.order.iter()
    }
}

impl IntoIterator for QueryResult {
    type Item = NodeId;
    type IntoIter = std::vec::IntoIter<NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.into_iter()
    }
}

impl<'a> IntoIterator for &'a QueryResult {
    type Item = &'a NodeId;
    type IntoIter = std::slice::Iter<'a, NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}

/// One pending breadth-first search: the queue of candidates still to visit
/// for a single chain level.
struct Search {
    queue: VecDeque<NodeId>,
    level: usize,
}

impl Search {
    fn new(root: NodeId, level: usize) -> Self {
        Self {
            queue: VecDeque::from([root]),
            level,
        }
    }
}

/// Find every element under `root` (inclusive) that satisfies `chain` as a
/// sequence of nested descendant constraints.
///
/// Searches are kept on an explicit stack, so neither tree depth nor chain
/// length grows the call stack. A search for a given `(subtree root, level)`
/// pair runs at most once: a repeat could only rediscover the same matches.
#[must_use]
pub fn query(tree: &DomTree, root: NodeId, chain: &SelectorChain) -> QueryResult {
    let mut result = QueryResult::default();
    if tree.get(root).is_none() {
        return result;
    }

    let mut searched = HashSet::from([(root, 0)]);
    let mut stack = vec![Search::new(root, 0)];

    while let Some(search) = stack.last_mut() {
        let Some(candidate) = search.queue.pop_front() else {
            let _ = stack.pop();
            continue;
        };
        search.queue.extend(tree.children(candidate).iter().copied());
        let level = search.level;

        let (Some(element), Some(selector)) = (tree.element(candidate), chain.get(level)) else {
            continue;
        };
        if !matches(element, selector) {
            continue;
        }

        match chain.child(level) {
            None => result.insert(candidate),
            Some(next) => {
                if searched.insert((candidate, next)) {
                    stack.push(Search::new(candidate, next));
                }
            }
        }
    }

    result
}

/// Parse `query_str` and run it from the tree's root.
///
/// An empty or whitespace-only query has no chain and matches nothing.
#[must_use]
pub fn select(tree: &DomTree, query_str: &str) -> QueryResult {
    SelectorChain::parse(query_str)
        .map(|chain| query(tree, tree.root(), &chain))
        .unwrap_or_default()
}
