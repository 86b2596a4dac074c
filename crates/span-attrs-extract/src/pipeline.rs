//! The five-stage extraction pipeline.
//!
//! classify → resolve nested / collect flat → inject result →
//! normalize values and transform names into the final attribute set.

use crate::context::{BoundContext, RESULT_KEY};
use crate::resolve::{collect_flat, resolve_nested};
use crate::specifier::{AttributeSpecifier, classify};
use serde_json::Value;
use span_attrs_core::{AttributeSet, ExtractSettings, key, settings, value};
use tracing::debug;

/// Extract attributes using a snapshot of the process-wide settings.
///
/// The snapshot is taken once, up front; a concurrent settings override
/// cannot produce a mixed view inside one call.
pub fn extract(
    context: &BoundContext,
    specifiers: &[AttributeSpecifier],
    default_result: Option<&Value>,
) -> AttributeSet {
    extract_with_settings(context, specifiers, default_result, &settings::snapshot())
}

/// Extract attributes with an explicit settings snapshot.
pub fn extract_with_settings(
    context: &BoundContext,
    specifiers: &[AttributeSpecifier],
    default_result: Option<&Value>,
    settings: &ExtractSettings,
) -> AttributeSet {
    let (flat_names, nested_paths) = classify(specifiers);

    // Raw (pre-transform) candidates, flat first, then nested.
    let mut candidates: Vec<(String, &Value)> = collect_flat(context, &flat_names);
    candidates.extend(
        nested_paths
            .into_iter()
            .filter_map(|segments| resolve_nested(context, segments, &settings.joiner)),
    );

    inject_result(context, &flat_names, default_result, &mut candidates);

    let set: AttributeSet = candidates
        .into_iter()
        .filter_map(|(raw_name, raw_value)| {
            value::normalize(raw_value)
                .map(|normalized| (key::transform(&raw_name, settings), normalized))
        })
        .collect();
    debug!(
        requested = specifiers.len(),
        emitted = set.len(),
        "extracted span attributes"
    );
    set
}

/// Insert-if-missing for the designated `result` entry: applies only
/// when `result` was requested as a flat specifier and no candidate
/// already carries that raw name. The context binding wins over the
/// caller-supplied default.
fn inject_result<'a>(
    context: &'a BoundContext,
    flat_names: &[&str],
    default_result: Option<&'a Value>,
    candidates: &mut Vec<(String, &'a Value)>,
) {
    if !flat_names.contains(&RESULT_KEY) {
        return;
    }
    if candidates.iter().any(|(name, _)| name == RESULT_KEY) {
        return;
    }
    if let Some(value) = context.get(RESULT_KEY).or(default_result) {
        candidates.push((RESULT_KEY.to_string(), value));
    }
}
