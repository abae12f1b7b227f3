//! Best-effort markup tree builder for Thicket.
//!
//! # Scope
//!
//! This crate implements:
//! - **Normalizer** - collapses whitespace so tag boundaries are regular
//! - **Segment Splitter** - cuts the text into tag and text segments
//! - **Attribute Extractor** - `key="value"` pairs, with `id` and `class`
//!   routed to dedicated element fields
//! - **Tag Vocabulary** - known and void tag names, built in or loaded from JSON
//! - **Tree Builder** - cursor-based construction of a [`DomTree`]
//!
//! # Not Implemented
//!
//! - Entity decoding
//! - Comment, script and style content handling
//! - Browser-style error recovery (implied end tags, adoption agency)

pub mod attributes;
pub mod builder;
pub mod normalize;
pub mod printer;
pub mod segment;
pub mod vocabulary;

pub use builder::{BuildIssue, IssueKind, TreeBuilder};
pub use printer::{format_tree, print_tree};
pub use segment::{Segment, SegmentKind, split_segments};
pub use vocabulary::{
    HTML_TAGS_JSON, HTML_VOID_TAGS_JSON, TagKind, TagVocabulary, VocabularyError,
};

use thicket_dom::DomTree;

/// Parse `markup` into an element tree using `vocabulary`.
///
/// Shorthand for `TreeBuilder::new(vocabulary).build(markup)`.
#[must_use]
pub fn parse(markup: &str, vocabulary: &TagVocabulary) -> DomTree {
    TreeBuilder::new(vocabulary).build(markup)
}
