//! Resolution of specifiers against the bound context.
//!
//! Every miss is a silent omission: a missing binding, a non-indexable
//! intermediate, or a null terminal value drops the specifier instead
//! of failing the call. Misses are logged at trace level so they remain
//! diagnosable.

use crate::context::BoundContext;
use serde_json::Value;
use tracing::trace;

/// Walk a nested path against the context. Returns the compound name
/// (segments joined with `joiner`) and the terminal value, or `None` if
/// any step misses or the terminal value is null.
pub(crate) fn resolve_nested<'a>(
    context: &'a BoundContext,
    segments: &[String],
    joiner: &str,
) -> Option<(String, &'a Value)> {
    let first = segments.first()?;
    let mut current = match context.get(first) {
        Some(value) => value,
        None => {
            trace!(name = %first, "nested specifier root not bound");
            return None;
        }
    };
    for segment in &segments[1..] {
        current = match current {
            Value::Object(map) => match map.get(segment) {
                Some(value) => value,
                None => {
                    trace!(segment = %segment, "nested segment not present");
                    return None;
                }
            },
            _ => {
                trace!(segment = %segment, "nested segment into non-indexable value");
                return None;
            }
        };
    }
    // A stored null is indistinguishable from a missing value.
    if current.is_null() {
        trace!(path = segments.join(joiner), "nested path resolved to null");
        return None;
    }
    Some((segments.join(joiner), current))
}

/// Direct lookups for flat specifiers, in specifier order. Absent names
/// produce nothing.
pub(crate) fn collect_flat<'a>(
    context: &'a BoundContext,
    names: &[&str],
) -> Vec<(String, &'a Value)> {
    names
        .iter()
        .filter_map(|name| match context.get(name) {
            Some(value) => Some((name.to_string(), value)),
            None => {
                trace!(name = %name, "flat specifier not bound");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ctx() -> BoundContext {
        BoundContext::new()
            .with("obj", json!({"id": 1, "inner": {"leaf": "x"}, "gone": null}))
            .with("flat", 7)
    }

    #[test]
    fn walks_multi_level_paths() {
        let ctx = ctx();
        let segments = vec!["obj".to_string(), "inner".to_string(), "leaf".to_string()];
        let (name, value) = resolve_nested(&ctx, &segments, "_").unwrap();
        assert_eq!(name, "obj_inner_leaf");
        assert_eq!(value, &json!("x"));
    }

    #[test]
    fn joiner_changes_only_the_name() {
        let ctx = ctx();
        let segments = vec!["obj".to_string(), "id".to_string()];
        let (name, value) = resolve_nested(&ctx, &segments, ".").unwrap();
        assert_eq!(name, "obj.id");
        assert_eq!(value, &json!(1));
    }

    #[test]
    fn missing_root_or_segment_yields_nothing() {
        let ctx = ctx();
        assert!(resolve_nested(&ctx, &["nope".into(), "id".into()], "_").is_none());
        assert!(resolve_nested(&ctx, &["obj".into(), "nope".into()], "_").is_none());
    }

    #[test]
    fn non_indexable_intermediate_yields_nothing() {
        let ctx = ctx();
        assert!(resolve_nested(&ctx, &["flat".into(), "id".into()], "_").is_none());
        assert!(resolve_nested(&ctx, &["obj".into(), "id".into(), "deeper".into()], "_").is_none());
    }

    #[test]
    fn stored_null_terminal_yields_nothing() {
        let ctx = ctx();
        assert!(resolve_nested(&ctx, &["obj".into(), "gone".into()], "_").is_none());
    }

    #[test]
    fn flat_collection_skips_absent_names() {
        let ctx = ctx();
        let collected = collect_flat(&ctx, &["flat", "missing", "obj"]);
        let names: Vec<_> = collected.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["flat", "obj"]);
    }
}
