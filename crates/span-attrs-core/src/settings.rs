//! Process-wide extraction settings.
//!
//! Callers may override the nested-name joiner and the attribute name
//! prefix for the whole process. Each extraction call takes a single
//! snapshot up front, so a concurrent override never produces a
//! half-old, half-new view inside one call.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

pub const DEFAULT_JOINER: &str = "_";

/// Snapshot of the naming configuration consumed by one extraction call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractSettings {
    /// Separator used to join nested path segments into one compound name.
    pub joiner: String,
    /// Prepended verbatim to every final attribute name.
    pub prefix: String,
}

impl Default for ExtractSettings {
    fn default() -> Self {
        Self {
            joiner: DEFAULT_JOINER.to_string(),
            prefix: String::new(),
        }
    }
}

impl ExtractSettings {
    pub fn new(joiner: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            joiner: joiner.into(),
            prefix: prefix.into(),
        }
    }
}

static SETTINGS: Lazy<RwLock<ExtractSettings>> =
    Lazy::new(|| RwLock::new(ExtractSettings::default()));

/// Take a snapshot of the current process-wide settings.
pub fn snapshot() -> ExtractSettings {
    SETTINGS
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

/// Replace the process-wide settings wholesale.
pub fn replace(settings: ExtractSettings) {
    *SETTINGS
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner()) = settings;
}

/// Override only the nested-name joiner.
pub fn override_joiner(joiner: impl Into<String>) {
    SETTINGS
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .joiner = joiner.into();
}

/// Override only the attribute name prefix.
pub fn override_prefix(prefix: impl Into<String>) {
    SETTINGS
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .prefix = prefix.into();
}

/// Restore the defaults (`joiner = "_"`, empty prefix).
pub fn reset() {
    replace(ExtractSettings::default());
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the global store is only touched from one place.
    #[test]
    fn store_get_override_reset_roundtrip() {
        reset();
        let defaults = snapshot();
        assert_eq!(defaults.joiner, "_");
        assert_eq!(defaults.prefix, "");

        override_joiner(".");
        override_prefix("app_");
        let current = snapshot();
        assert_eq!(current.joiner, ".");
        assert_eq!(current.prefix, "app_");

        replace(ExtractSettings::new("-", ""));
        assert_eq!(snapshot().joiner, "-");

        reset();
        assert_eq!(snapshot(), ExtractSettings::default());
    }
}
