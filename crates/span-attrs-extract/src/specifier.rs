//! Attribute specifiers and their classification.

use span_attrs_core::{AttrsError, Result};

/// A request for one attribute: either a bare context name or a path
/// into a structured context entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeSpecifier {
    /// Direct lookup of a context entry.
    Flat(String),
    /// Ordered path: the first segment names a context entry, the rest
    /// index into its structure.
    Nested(Vec<String>),
}

impl AttributeSpecifier {
    pub fn flat(name: impl Into<String>) -> Self {
        AttributeSpecifier::Flat(name.into())
    }

    pub fn nested<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AttributeSpecifier::Nested(segments.into_iter().map(Into::into).collect())
    }

    /// Parse a dotted declaration string: `"id"` is flat, `"obj.id"` is
    /// nested. The only fallible surface of the crate.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() || raw.split('.').any(str::is_empty) {
            return Err(AttrsError::InvalidSpecifier(raw.to_string()));
        }
        let mut segments: Vec<String> = raw.split('.').map(str::to_string).collect();
        if segments.len() == 1 {
            Ok(AttributeSpecifier::Flat(segments.remove(0)))
        } else {
            Ok(AttributeSpecifier::Nested(segments))
        }
    }
}

impl From<&str> for AttributeSpecifier {
    fn from(name: &str) -> Self {
        AttributeSpecifier::flat(name)
    }
}

/// Partition specifiers into flat names and nested paths, preserving
/// relative order within each partition. Empty nested paths request
/// nothing and are dropped here.
pub(crate) fn classify(specifiers: &[AttributeSpecifier]) -> (Vec<&str>, Vec<&[String]>) {
    let mut flat = Vec::new();
    let mut nested = Vec::new();
    for spec in specifiers {
        match spec {
            AttributeSpecifier::Flat(name) => flat.push(name.as_str()),
            AttributeSpecifier::Nested(segments) if segments.is_empty() => {}
            AttributeSpecifier::Nested(segments) => nested.push(segments.as_slice()),
        }
    }
    (flat, nested)
}
