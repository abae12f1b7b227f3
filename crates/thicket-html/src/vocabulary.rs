//! Tag vocabulary: which tag names the tree builder recognizes.
//!
//! The vocabulary is an explicitly constructed, immutable value. It is built
//! once (from the built-in HTML tables or from JSON files) and then borrowed
//! by every [`TreeBuilder`](crate::TreeBuilder).

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use strum_macros::Display;
use thiserror::Error;

/// JSON array of the tag names recognized by [`TagVocabulary::html`].
pub const HTML_TAGS_JSON: &str = include_str!("../data/html_tags.json");

/// JSON array of the void tag names recognized by [`TagVocabulary::html`].
pub const HTML_VOID_TAGS_JSON: &str = include_str!("../data/html_void_tags.json");

/// The built-in vocabulary, parsed once from the embedded tag lists.
static HTML_VOCABULARY: LazyLock<TagVocabulary> = LazyLock::new(|| {
    TagVocabulary::from_json_str(HTML_TAGS_JSON, HTML_VOID_TAGS_JSON)
        .expect("embedded tag lists are valid JSON arrays of strings")
});

/// How the tree builder treats a tag name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum TagKind {
    /// A known tag that can hold children; the builder descends into it.
    Container,
    /// A known tag that never holds children.
    Void,
    /// Not in the vocabulary; the segment becomes text.
    Unknown,
}

/// Errors produced while loading a vocabulary from disk.
#[derive(Debug, Error)]
pub enum VocabularyError {
    /// A tag list file could not be read.
    #[error("failed to read tag list '{}': {source}", .path.display())]
    Io {
        /// The file that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A tag list was not a JSON array of strings.
    #[error("invalid tag list{}: {source}", path_suffix(.path.as_deref()))]
    Json {
        /// The offending file, if the list came from disk.
        path: Option<PathBuf>,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// The set of known tag names and, within it, the void tag names.
///
/// Lookups are exact and case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagVocabulary {
    tags: HashSet<String>,
    void_tags: HashSet<String>,
}

impl TagVocabulary {
    /// Build a vocabulary from tag names and void tag names.
    ///
    /// Every void tag is also a known tag, even if `tags` omits it.
    #[must_use]
    pub fn new<T, V>(tags: T, void_tags: V) -> Self
    where
        T: IntoIterator,
        T::Item: Into<String>,
        V: IntoIterator,
        V::Item: Into<String>,
    {
        let void_tags: HashSet<String> = void_tags.into_iter().map(Into::into).collect();
        let mut tags: HashSet<String> = tags.into_iter().map(Into::into).collect();
        tags.extend(void_tags.iter().cloned());
        Self { tags, void_tags }
    }

    /// The built-in HTML vocabulary ([`HTML_TAGS_JSON`] and
    /// [`HTML_VOID_TAGS_JSON`]).
    #[must_use]
    pub fn html() -> Self {
        HTML_VOCABULARY.clone()
    }

    /// Parse a vocabulary from two JSON arrays of strings.
    ///
    /// # Errors
    ///
    /// Returns [`VocabularyError::Json`] if either document is not a JSON
    /// array of strings.
    pub fn from_json_str(tags_json: &str, void_tags_json: &str) -> Result<Self, VocabularyError> {
        let tags = parse_tag_list(tags_json, None)?;
        let void_tags = parse_tag_list(void_tags_json, None)?;
        Ok(Self::new(tags, void_tags))
    }

    /// Load a vocabulary from two JSON files, each holding an array of strings.
    ///
    /// # Errors
    ///
    /// Returns [`VocabularyError::Io`] if a file cannot be read and
    /// [`VocabularyError::Json`] if its contents are not an array of strings.
    pub fn from_json_files(
        tags_path: impl AsRef<Path>,
        void_tags_path: impl AsRef<Path>,
    ) -> Result<Self, VocabularyError> {
        let tags = load_tag_list(tags_path.as_ref())?;
        let void_tags = load_tag_list(void_tags_path.as_ref())?;
        Ok(Self::new(tags, void_tags))
    }

    /// Returns `true` if `name` is a known tag (void or not).
    #[must_use]
    pub fn is_known(&self, name: &str) -> bool {
        self.tags.contains(name)
    }

    /// Returns `true` if `name` is a known void tag.
    #[must_use]
    pub fn is_void(&self, name: &str) -> bool {
        self.void_tags.contains(name)
    }

    /// Classify a tag name.
    #[must_use]
    pub fn classify(&self, name: &str) -> TagKind {
        if self.is_void(name) {
            TagKind::Void
        } else if self.is_known(name) {
            TagKind::Container
        } else {
            TagKind::Unknown
        }
    }

    /// Number of known tag names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns `true` if no tag names are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

fn path_suffix(path: Option<&Path>) -> String {
    path.map(|p| format!(" '{}'", p.display()))
        .unwrap_or_default()
}

fn parse_tag_list(json: &str, path: Option<&Path>) -> Result<Vec<String>, VocabularyError> {
    serde_json::from_str(json).map_err(|source| VocabularyError::Json {
        path: path.map(Path::to_path_buf),
        source,
    })
}

fn load_tag_list(path: &Path) -> Result<Vec<String>, VocabularyError> {
    let json = fs::read_to_string(path).map_err(|source| VocabularyError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_tag_list(&json, Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        let vocabulary = TagVocabulary::new(["div", "p"], ["br"]);
        assert_eq!(vocabulary.classify("div"), TagKind::Container);
        assert_eq!(vocabulary.classify("br"), TagKind::Void);
        assert_eq!(vocabulary.classify("span"), TagKind::Unknown);
        assert_eq!(TagKind::Void.to_string(), "void");
    }

    #[test]
    fn test_void_tags_are_known() {
        let vocabulary = TagVocabulary::new(Vec::<String>::new(), ["img"]);
        assert!(vocabulary.is_known("img"));
        assert_eq!(vocabulary.len(), 1);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let vocabulary = TagVocabulary::html();
        assert!(vocabulary.is_known("div"));
        assert!(!vocabulary.is_known("DIV"));
    }

    #[test]
    fn test_builtin_vocabulary_comes_from_embedded_lists() {
        let tags: Vec<String> = serde_json::from_str(HTML_TAGS_JSON).unwrap();
        let void_tags: Vec<String> = serde_json::from_str(HTML_VOID_TAGS_JSON).unwrap();
        let vocabulary = TagVocabulary::html();

        assert!(void_tags.iter().all(|t| vocabulary.is_void(t)));
        assert!(tags.iter().all(|t| vocabulary.is_known(t)));
        assert_eq!(vocabulary.len(), tags.len());
        assert_eq!(vocabulary.classify("div"), TagKind::Container);
        assert_eq!(vocabulary.classify("img"), TagKind::Void);
    }

    #[test]
    fn test_from_json_str() {
        let vocabulary = TagVocabulary::from_json_str(r#"["div", "p"]"#, r#"["hr"]"#).unwrap();
        assert_eq!(vocabulary.classify("p"), TagKind::Container);
        assert_eq!(vocabulary.classify("hr"), TagKind::Void);
    }

    #[test]
    fn test_from_json_str_rejects_non_string_arrays() {
        let err = TagVocabulary::from_json_str(r#"{"div": 1}"#, "[]").unwrap_err();
        assert!(matches!(err, VocabularyError::Json { path: None, .. }));
        assert!(err.to_string().starts_with("invalid tag list:"));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = TagVocabulary::from_json_files("/nonexistent/tags.json", "/nonexistent/void.json")
            .unwrap_err();
        assert!(matches!(err, VocabularyError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/tags.json"));
    }
}
