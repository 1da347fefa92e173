//! Component descriptors and configurable instances
//!
//! A [`ComponentDescriptor`] is the static schema of a component. A
//! [`Configurable`] is a named instance of it carrying caller overrides.

mod configurable;
mod descriptor;

pub use configurable::*;
pub use descriptor::*;
