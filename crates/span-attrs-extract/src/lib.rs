//! Attribute extraction pipeline.
//!
//! Resolves declarative attribute specifiers against a bound context of
//! captured values and produces the wire-safe, renamed attribute set to
//! attach to a span when a traced operation completes.

pub mod context;
pub mod pipeline;
pub mod resolve;
pub mod specifier;

pub use context::{BoundContext, RESULT_KEY};
pub use pipeline::{extract, extract_with_settings};
pub use specifier::AttributeSpecifier;
