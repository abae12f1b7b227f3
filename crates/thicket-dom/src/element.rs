//! Element data stored in each tree node.

use std::collections::BTreeMap;

use serde::Serialize;

/// Map of attribute names to values for an element.
///
/// Never contains `id` or `class`; those are routed to dedicated fields.
pub type AttributesMap = BTreeMap<String, String>;

/// Tag name of the synthetic document root.
pub const ROOT_TAG: &str = "root";

/// One markup element.
///
/// Elements are created by the tree builder, filled with attributes, and then
/// handed to [`DomTree::append_child`](crate::DomTree::append_child). After
/// that the only mutation is appending to the text buffer during construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: AttributesMap,
    text: String,
}

impl Element {
    /// Create an element with the given tag name and no attributes.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            attributes: AttributesMap::new(),
            text: String::new(),
        }
    }

    /// The synthetic root element that every tree starts with.
    #[must_use]
    pub fn root() -> Self {
        Self::new(ROOT_TAG)
    }

    /// Tag name, or `"root"` for the synthetic root.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The element's id, if one was set.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Class names in source order. Duplicates are kept.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Returns `true` if `class` is one of the element's classes.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Attributes other than `id` and `class`.
    #[must_use]
    pub const fn attributes(&self) -> &AttributesMap {
        &self.attributes
    }

    /// Look up a single attribute value.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Text accumulated directly under this element.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the id. A later call overwrites an earlier one.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    /// Append a class name, keeping any existing duplicate.
    pub fn add_class(&mut self, class: impl Into<String>) {
        self.classes.push(class.into());
    }

    /// Set an attribute. A repeated name overwrites the previous value.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let _ = self.attributes.insert(name.into(), value.into());
    }

    /// Append to the text buffer. The buffer is never overwritten.
    pub(crate) fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
    }
}
