//! OpenTelemetry bridge for extracted attribute sets.

pub mod convert;
pub mod tracing_setup;

pub use convert::{record_on_span, to_key_values};
pub use tracing_setup::{init_tracing, init_tracing_with_otel};
