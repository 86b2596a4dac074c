//! Attribute name model and the naming transform.
//!
//! Final names come in two representations: a symbolic identifier when
//! the candidate string has identifier shape, and a plain string
//! otherwise (a prefix like `"my."` produces names no identifier system
//! accepts). Consumers must accept either.

use crate::settings::ExtractSettings;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A final attribute name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttrName {
    /// Identifier-shaped name.
    Symbolic(String),
    /// Fallback representation for names with illegal identifier
    /// characters.
    Textual(String),
}

impl AttrName {
    /// Classify a candidate string by the validity predicate.
    pub fn new(candidate: impl Into<String>) -> Self {
        let candidate = candidate.into();
        if is_valid_symbol(&candidate) {
            AttrName::Symbolic(candidate)
        } else {
            AttrName::Textual(candidate)
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            AttrName::Symbolic(s) | AttrName::Textual(s) => s,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            AttrName::Symbolic(s) | AttrName::Textual(s) => s,
        }
    }

    pub fn is_symbolic(&self) -> bool {
        matches!(self, AttrName::Symbolic(_))
    }
}

impl fmt::Display for AttrName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pure validity predicate for symbolic identifier shape: a leading
/// ASCII letter or underscore followed by letters, digits, or
/// underscores.
pub fn is_valid_symbol(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Apply the naming transform to a raw (possibly compound) name.
///
/// Exactly one leading underscore is stripped, then the configured
/// prefix is prepended verbatim. Classification into symbolic or
/// textual form happens on the combined string.
pub fn transform(raw: &str, settings: &ExtractSettings) -> AttrName {
    let stripped = raw.strip_prefix('_').unwrap_or(raw);
    if settings.prefix.is_empty() {
        AttrName::new(stripped)
    } else {
        AttrName::new(format!("{}{}", settings.prefix, stripped))
    }
}
