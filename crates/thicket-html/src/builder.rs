//! Tree construction from markup segments.
//!
//! The builder keeps a single cursor, the current open element, and walks the
//! segments strictly in order:
//!
//! | segment                         | action                                     |
//! |---------------------------------|--------------------------------------------|
//! | tag `/html` (any case)          | stop, return the tree built so far         |
//! | tag `/anything`                 | cursor moves to its parent (root stays)    |
//! | tag with a known container name | append child, cursor descends into it      |
//! | tag with a known void name      | append child, cursor stays                 |
//! | anything else                   | trimmed content appended to cursor's text  |

use strum_macros::Display;
use thicket_common::warning::warn_once;
use thicket_dom::{DomTree, Element, NodeId};

use crate::attributes::extract_attributes;
use crate::normalize::normalize;
use crate::segment::{Segment, SegmentKind, split_segments};
use crate::vocabulary::{TagKind, TagVocabulary};

/// The closing tag that ends construction outright.
const END_OF_DOCUMENT: &str = "/html";

/// What kind of recoverable oddity the builder ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum IssueKind {
    /// A closing tag arrived while the cursor was already at the root.
    #[strum(serialize = "unmatched closing tag")]
    UnmatchedCloseTag,
    /// A tag name outside the vocabulary was kept as text.
    #[strum(serialize = "unknown tag")]
    UnknownTag,
    /// `</html>` ended construction before the input was exhausted.
    #[strum(serialize = "early end of document")]
    EarlyEnd,
}

impl IssueKind {
    /// Returns `true` if issues of this kind are also printed as warnings.
    ///
    /// Unknown tags (doctypes, comments, custom elements) are routine on real
    /// pages and are only returned, never printed.
    #[must_use]
    pub const fn is_warned(self) -> bool {
        matches!(self, Self::UnmatchedCloseTag | Self::EarlyEnd)
    }
}

/// A recoverable problem noticed while building the tree.
///
/// None of these abort construction; they are collected for callers that
/// want to report them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildIssue {
    /// Category of the issue.
    pub kind: IssueKind,
    /// Index into the segment sequence where the issue was encountered.
    pub segment_index: usize,
    /// Human-readable description.
    pub message: String,
}

/// Builds an element tree from raw markup.
///
/// # Example
/// ```
/// use thicket_html::{TagVocabulary, TreeBuilder};
///
/// let vocabulary = TagVocabulary::html();
/// let tree = TreeBuilder::new(&vocabulary).build("<p>hi</p>");
/// let p = tree.children(tree.root())[0];
/// assert_eq!(tree.element(p).unwrap().text(), "hi");
/// ```
pub struct TreeBuilder<'v> {
    /// Known and void tag names. Read-only for the builder's lifetime.
    vocabulary: &'v TagVocabulary,

    /// The tree under construction. `NodeId::ROOT` is the synthetic root.
    tree: DomTree,

    /// The current open element: new children attach here, text lands here.
    current: NodeId,

    /// Index of the segment being processed.
    segment_index: usize,

    /// Issues encountered during construction.
    issues: Vec<BuildIssue>,
}

impl<'v> TreeBuilder<'v> {
    /// Create a builder over `vocabulary`.
    #[must_use]
    pub fn new(vocabulary: &'v TagVocabulary) -> Self {
        Self {
            vocabulary,
            tree: DomTree::new(),
            current: NodeId::ROOT,
            segment_index: 0,
            issues: Vec::new(),
        }
    }

    /// Build the tree for `markup`.
    ///
    /// Never fails: malformed or empty input still yields a tree with a root.
    #[must_use]
    pub fn build(self, markup: &str) -> DomTree {
        self.build_with_issues(markup).0
    }

    /// Build the tree for `markup` and return the issues noticed on the way.
    #[must_use]
    pub fn build_with_issues(mut self, markup: &str) -> (DomTree, Vec<BuildIssue>) {
        let normalized = normalize(markup);
        let segments = split_segments(&normalized);

        for (index, segment) in segments.iter().enumerate() {
            self.segment_index = index;
            if !self.process(segment) {
                if index + 1 < segments.len() {
                    self.issue(
                        IssueKind::EarlyEnd,
                        format!("{} segment(s) after </html> ignored", segments.len() - index - 1),
                    );
                }
                break;
            }
        }

        (self.tree, self.issues)
    }

    /// Handle one segment. Returns `false` when construction must stop.
    fn process(&mut self, segment: &Segment<'_>) -> bool {
        let content = segment.content.trim();
        if content.is_empty() {
            return true;
        }

        if segment.kind == SegmentKind::Text {
            self.tree.append_text(self.current, content);
            return true;
        }

        let name = segment.first_token();
        if name.eq_ignore_ascii_case(END_OF_DOCUMENT) {
            return false;
        }

        if name.starts_with('/') {
            self.close_element(name);
            return true;
        }

        match self.vocabulary.classify(name) {
            TagKind::Container => {
                self.current = self.insert_element(name, segment.rest());
            }
            TagKind::Void => {
                let _ = self.insert_element(name, segment.rest());
            }
            TagKind::Unknown => {
                self.issue(IssueKind::UnknownTag, format!("<{name}> kept as text"));
                self.tree.append_text(self.current, content);
            }
        }
        true
    }

    /// Any closing tag pops the cursor one level, whatever its name.
    fn close_element(&mut self, name: &str) {
        match self.tree.parent(self.current) {
            Some(parent) => self.current = parent,
            None => {
                self.issue(
                    IssueKind::UnmatchedCloseTag,
                    format!("<{name}> with no open element"),
                );
                self.current = NodeId::ROOT;
            }
        }
    }

    /// Create an element with its attributes and attach it under the cursor.
    fn insert_element(&mut self, name: &str, attributes: &str) -> NodeId {
        let mut element = Element::new(name);
        extract_attributes(attributes, &mut element);
        self.tree.append_child(self.current, element)
    }

    /// Record an issue, warning once per distinct message for warned kinds.
    fn issue(&mut self, kind: IssueKind, detail: String) {
        let message = format!("{kind}: {detail}");
        if kind.is_warned() {
            warn_once("Tree Builder", &message);
        }
        self.issues.push(BuildIssue {
            kind,
            segment_index: self.segment_index,
            message,
        });
    }
}
