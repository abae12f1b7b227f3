//! Printable snapshot of a single element.

use std::fmt;

use serde::Serialize;

use crate::AttributesMap;

/// An element's fields plus the tag names of its neighbours, detached from
/// the tree so it can be printed or serialized on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementSummary {
    /// Tag name.
    pub name: String,
    /// The element's id, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Class names in source order.
    pub classes: Vec<String>,
    /// Attributes other than `id` and `class`.
    pub attributes: AttributesMap,
    /// Accumulated text content.
    pub inner_text: String,
    /// Tag name of the parent, `None` for the root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Tag names of the children in order.
    pub children: Vec<String>,
}

/// One block per element, omitting empty sections:
///
/// ```text
/// Name: p
/// Classes:
///     - x
/// InnerHTML: hi
/// Parent: div
/// ```
impl fmt::Display for ElementSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        if let Some(id) = &self.id {
            writeln!(f, "Id: {id}")?;
        }
        if !self.classes.is_empty() {
            writeln!(f, "Classes:")?;
            for class in &self.classes {
                writeln!(f, "    - {class}")?;
            }
        }
        if !self.attributes.is_empty() {
            writeln!(f, "Attributes:")?;
            for (key, value) in &self.attributes {
                writeln!(f, "    - {key}={value}")?;
            }
        }
        if !self.inner_text.is_empty() {
            writeln!(f, "InnerHTML: {}", self.inner_text)?;
        }
        if let Some(parent) = &self.parent {
            writeln!(f, "Parent: {parent}")?;
        }
        if !self.children.is_empty() {
            writeln!(f, "Children:")?;
            for child in &self.children {
                writeln!(f, "    - {child}")?;
            }
        }
        Ok(())
    }
}
