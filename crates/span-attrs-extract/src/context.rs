//! Bound context: the named values captured at a traced call site.
//!
//! One snapshot per extraction call, owned by the caller. The pipeline
//! only reads it. The designated `result` entry, when present, carries
//! the outcome of the traced operation.

use indexmap::IndexMap;
use serde_json::Value;

/// Name of the designated result entry.
pub const RESULT_KEY: &str = "result";

/// Ordered name → captured value mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundContext {
    entries: IndexMap<String, Value>,
}

impl BoundContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Bind the designated `result` entry.
    pub fn with_result(self, value: impl Into<Value>) -> Self {
        self.with(RESULT_KEY, value)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }
}

impl<N: Into<String>, V: Into<Value>> FromIterator<(N, V)> for BoundContext {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut ctx = Self::new();
        for (name, value) in iter {
            ctx.insert(name, value);
        }
        ctx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builder_preserves_insertion_order() {
        let ctx = BoundContext::new()
            .with("b", 2)
            .with("a", 1)
            .with_result(json!({"ok": true}));
        let names: Vec<_> = ctx.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "result"]);
        assert_eq!(ctx.get(RESULT_KEY), Some(&json!({"ok": true})));
    }
}
