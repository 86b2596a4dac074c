//! Core types for span attribute extraction.
//!
//! Value and name models, the wire-safe scalar boundary, and the
//! process-wide extraction settings store. The pipeline itself lives in
//! `span-attrs-extract`.

pub mod error;
pub mod key;
pub mod set;
pub mod settings;
pub mod value;

pub use error::{AttrsError, Result};
pub use key::AttrName;
pub use set::{Attribute, AttributeSet};
pub use settings::ExtractSettings;
pub use value::AttrValue;
