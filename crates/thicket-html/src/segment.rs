//! Splitting normalized markup into tag and text segments.
//!
//! This is a structural approximation of tokenization: a tag segment is
//! whatever sits between a `<` and the next `>`. A `>` inside a quoted
//! attribute value ends the tag early, comments and CDATA get no special
//! treatment, and entities are left as written.

use std::sync::LazyLock;

use regex::Regex;
use strum_macros::Display;

/// Matches one bracket-delimited tag, capturing its inner content.
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(.*?)>").expect("tag pattern is a valid regex"));

/// Which side of a tag delimiter a segment came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum SegmentKind {
    /// Content that was inside `<` and `>`, brackets excluded.
    Tag,
    /// Content outside any brackets.
    Text,
}

/// One non-empty piece of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Where the content came from.
    pub kind: SegmentKind,
    /// The raw content, untrimmed.
    pub content: &'a str,
}

impl<'a> Segment<'a> {
    /// A tag segment.
    #[must_use]
    pub const fn tag(content: &'a str) -> Self {
        Self {
            kind: SegmentKind::Tag,
            content,
        }
    }

    /// A text segment.
    #[must_use]
    pub const fn text(content: &'a str) -> Self {
        Self {
            kind: SegmentKind::Text,
            content,
        }
    }

    /// The first whitespace-delimited token, or `""` for blank content.
    #[must_use]
    pub fn first_token(&self) -> &'a str {
        self.content.split_whitespace().next().unwrap_or("")
    }

    /// Everything after the first token, trimmed.
    #[must_use]
    pub fn rest(&self) -> &'a str {
        let trimmed = self.content.trim_start();
        trimmed
            .find(char::is_whitespace)
            .map_or("", |i| trimmed[i..].trim())
    }
}

/// Split normalized markup into alternating tag and text segments, in order.
///
/// Empty segments (such as the gap between `</a><b>` or the inside of `<>`)
/// are dropped. A tag runs from a `<` to the next `>`, so a stray `<` swallows
/// everything up to that `>`; a `<` with no `>` after it stays text.
#[must_use]
pub fn split_segments(markup: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut last_end = 0;

    for captures in TAG_PATTERN.captures_iter(markup) {
        let (Some(whole), Some(inner)) = (captures.get(0), captures.get(1)) else {
            continue;
        };
        push_nonempty(&mut segments, Segment::text(&markup[last_end..whole.start()]));
        push_nonempty(&mut segments, Segment::tag(inner.as_str()));
        last_end = whole.end();
    }
    push_nonempty(&mut segments, Segment::text(&markup[last_end..]));

    segments
}

fn push_nonempty<'a>(segments: &mut Vec<Segment<'a>>, segment: Segment<'a>) {
    if !segment.content.is_empty() {
        segments.push(segment);
    }
}
