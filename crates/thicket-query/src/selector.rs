//! Selector parsing.
//!
//! The grammar is deliberately small:
//!
//! ```text
//! query    = level *( whitespace level )
//! level    = *( tag / "#" id / "." class )
//! tag      = 1*ALPHA
//! ```
//!
//! Whitespace between levels is a descendant combinator. There are no other
//! combinators, no attribute selectors and no pseudo-classes.

use std::fmt;

/// One compound selector: every constraint that is set must hold for the
/// same element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    /// Required tag name.
    pub tag: Option<String>,
    /// Required id.
    pub id: Option<String>,
    /// Required class names. Order is irrelevant; all must be present.
    pub classes: Vec<String>,
}

impl Selector {
    /// Parse a single compound selector such as `div#main.wide.dark`.
    ///
    /// The level is cut into parts at every `#` and `.`, keeping the markers:
    /// - a part right after `#` sets the id (a later `#` overwrites it)
    /// - a part right after `.` adds a class
    /// - any other purely alphabetic part sets the tag
    ///
    /// A marker with nothing after it still consumes that empty part: `p#`
    /// requires an empty id and `p.` requires an empty class, which no
    /// element has. Any other part (`*`, `h1`, `>`) adds no constraint.
    #[must_use]
    pub fn parse_level(level: &str) -> Self {
        let mut selector = Self::default();
        let mut parts = split_parts(level).into_iter();

        while let Some(part) = parts.next() {
            match part {
                Part::Marker(marker) => {
                    let Some(Part::Text(value)) = parts.next() else {
                        continue;
                    };
                    if marker == '#' {
                        selector.id = Some(value.to_string());
                    } else {
                        selector.classes.push(value.to_string());
                    }
                }
                Part::Text(text) => {
                    if !text.is_empty() && text.chars().all(|c| c.is_ascii_alphabetic()) {
                        selector.tag = Some(text.to_string());
                    }
                }
            }
        }
        selector
    }

    /// Returns `true` if the selector has no constraints and so matches
    /// every element.
    #[must_use]
    pub fn is_universal(&self) -> bool {
        self.tag.is_none() && self.id.is_none() && self.classes.is_empty()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_universal() {
            return f.write_str("*");
        }
        if let Some(tag) = &self.tag {
            f.write_str(tag)?;
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        Ok(())
    }
}

/// A piece of a level: a `#`/`.` marker or the text between markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Part<'a> {
    Marker(char),
    Text(&'a str),
}

/// Split `div#a.b` into `div`, `#`, `a`, `.`, `b`.
///
/// Text between two adjacent markers comes out as an empty `Text` part, so a
/// marker is always followed by its (possibly empty) value.
fn split_parts(level: &str) -> Vec<Part<'_>> {
    let mut parts = Vec::new();
    let mut start = 0;
    for (index, marker) in level.match_indices(['#', '.']) {
        parts.push(Part::Text(&level[start..index]));
        parts.push(Part::Marker(if marker == "#" { '#' } else { '.' }));
        start = index + marker.len();
    }
    parts.push(Part::Text(&level[start..]));
    parts
}

/// A descendant chain of compound selectors, outermost first.
///
/// Levels are linked by position: the child of level `i` is level `i + 1`
/// and its parent is level `i - 1`. A chain always has at least one level,
/// and the last level (the one with no child) is the selector whose matches
/// form the query result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorChain {
    levels: Vec<Selector>,
}

impl SelectorChain {
    /// Parse a whitespace-separated query such as `div.list li a`.
    ///
    /// Returns `None` for an empty or whitespace-only query.
    #[must_use]
    pub fn parse(query: &str) -> Option<Self> {
        let levels: Vec<Selector> = query.split_whitespace().map(Selector::parse_level).collect();
        if levels.is_empty() {
            None
        } else {
            Some(Self { levels })
        }
    }

    /// Build a chain from already-parsed levels, outermost first.
    ///
    /// Returns `None` if `levels` is empty.
    #[must_use]
    pub fn from_levels(levels: Vec<Selector>) -> Option<Self> {
        if levels.is_empty() {
            None
        } else {
            Some(Self { levels })
        }
    }

    /// The outermost level.
    #[must_use]
    pub fn head(&self) -> &Selector {
        &self.levels[0]
    }

    /// All levels, outermost first.
    #[must_use]
    pub fn levels(&self) -> &[Selector] {
        &self.levels
    }

    /// The selector at `level`.
    #[must_use]
    pub fn get(&self, level: usize) -> Option<&Selector> {
        self.levels.get(level)
    }

    /// Index of the level nested inside `level`, or `None` at the end of the chain.
    #[must_use]
    pub fn child(&self, level: usize) -> Option<usize> {
        let next = level + 1;
        (next < self.levels.len()).then_some(next)
    }

    /// Index of the level enclosing `level`, or `None` for the head.
    #[must_use]
    pub fn parent(&self, level: usize) -> Option<usize> {
        if level == 0 || level >= self.levels.len() {
            None
        } else {
            Some(level - 1)
        }
    }

    /// Number of levels. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always `false`: a chain has at least one level.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl fmt::Display for SelectorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, level) in self.levels.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{level}")?;
        }
        Ok(())
    }
}

/// Parse a query string into a chain. Shorthand for [`SelectorChain::parse`].
#[must_use]
pub fn parse_query(query: &str) -> Option<SelectorChain> {
    SelectorChain::parse(query)
}
