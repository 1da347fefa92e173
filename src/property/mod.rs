//! Property model
//!
//! Typed property values, their type tags, declared property specs
//! and the OutputLevel message-level mapping.

mod level;
mod spec;
mod value;

pub use level::*;
pub use spec::*;
pub use value::*;
