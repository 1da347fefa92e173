//! Configuration module
//!
//! CLI arguments for the schema inspector and job options that override
//! component properties.

mod job_options;
mod settings;

pub use job_options::*;
pub use settings::*;
