//! Descendant-selector queries over Thicket element trees.
//!
//! # Scope
//!
//! - **Selector Parser** - `tag#id.class` compound selectors joined by
//!   whitespace into a descendant chain
//! - **Query Engine** - breadth-first, identity-deduplicated matching
//!
//! # Not Implemented
//!
//! - Child, next-sibling and subsequent-sibling combinators
//! - Attribute selectors and pseudo-classes
//! - Specificity

pub mod matching;
pub mod selector;

pub use matching::{QueryResult, matches, query, select};
pub use selector::{Selector, SelectorChain, parse_query};
