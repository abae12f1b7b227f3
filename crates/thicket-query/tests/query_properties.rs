//! Property tests: query results are duplicate-free and well-founded.

use std::collections::HashSet;

use quickcheck_macros::quickcheck;
use thicket_dom::DomTree;
use thicket_html::{TagVocabulary, parse};
use thicket_query::{SelectorChain, matches, select};

const FRAGMENTS: &[&str] = &[
    "<div>",
    "</div>",
    "<div class=\"x\">",
    "<p class=\"x y\">",
    "</p>",
    "<span id=\"a\">",
    "</span>",
    "<img class=\"x\">",
    "text",
];

const QUERIES: &[&str] = &[
    "div", "p", ".x", "div p", "div .x", "div div", "p.x.y", "#a", "div #a .x", "* p", "span div",
];

fn tree_from(picks: &[u8]) -> DomTree {
    let markup: String = picks
        .iter()
        .map(|&b| FRAGMENTS[usize::from(b) % FRAGMENTS.len()])
        .collect();
    parse(&markup, &TagVocabulary::html())
}

fn query_from(pick: u8) -> &'static str {
    QUERIES[usize::from(pick) % QUERIES.len()]
}

#[quickcheck]
fn prop_results_have_no_duplicates(picks: Vec<u8>, query_pick: u8) -> bool {
    let tree = tree_from(&picks);
    let result = select(&tree, query_from(query_pick));
    let distinct: HashSet<_> = result.iter().collect();
    distinct.len() == result.len()
}

#[quickcheck]
fn prop_results_match_last_level(picks: Vec<u8>, query_pick: u8) -> bool {
    let tree = tree_from(&picks);
    let query_str = query_from(query_pick);
    let Some(chain) = SelectorChain::parse(query_str) else {
        return false;
    };
    let last = &chain.levels()[chain.len() - 1];
    select(&tree, query_str)
        .iter()
        .all(|&id| tree.element(id).is_some_and(|e| matches(e, last)))
}

#[quickcheck]
fn prop_results_have_matching_inclusive_ancestors(picks: Vec<u8>, query_pick: u8) -> bool {
    let tree = tree_from(&picks);
    let query_str = query_from(query_pick);
    let Some(chain) = SelectorChain::parse(query_str) else {
        return false;
    };
    // Walking up from a result, the levels can be matched innermost first,
    // each by the same or an enclosing element.
    select(&tree, query_str).iter().all(|&id| {
        let mut levels = chain.levels().iter().rev().peekable();
        for ancestor in tree.inclusive_ancestors(id) {
            let Some(element) = tree.element(ancestor) else {
                return false;
            };
            while levels.peek().is_some_and(|level| matches(element, level)) {
                let _ = levels.next();
            }
        }
        levels.peek().is_none()
    })
}

#[quickcheck]
fn prop_single_level_equals_filter(picks: Vec<u8>, query_pick: u8) -> bool {
    let tree = tree_from(&picks);
    let query_str = query_from(query_pick);
    let Some(chain) = SelectorChain::parse(query_str) else {
        return false;
    };
    if chain.len() != 1 {
        return true;
    }
    let expected: HashSet<_> = tree
        .iter()
        .filter(|&id| tree.element(id).is_some_and(|e| matches(e, chain.head())))
        .collect();
    let actual: HashSet<_> = select(&tree, query_str).into_iter().collect();
    expected == actual
}
