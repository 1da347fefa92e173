//! # filestager-conf - Configuration schema for the FileStager plugin
//!
//! Declares the components of the FileStager library (the stager service,
//! the staged I/O data manager, the stream tools and the chrono service),
//! their properties and default values, and the registry a host framework
//! uses to find them by name.
//!
//! ## Features
//!
//! - **Typed properties**: integer, boolean, string and list values with
//!   declared defaults and type-checked overrides
//! - **Component catalog**: the five FileStager declarations
//! - **Registry**: name to package/module/library lookup, filled once per
//!   process; population failures are logged, never raised
//! - **Job options**: JSON override documents applied to instances
//! - **Schema export**: deterministic JSON and text rendering
//!
//! ## Quick Start
//!
//! ```no_run
//! use filestager_conf::catalog;
//! use filestager_conf::property::PropertyValue;
//!
//! let stager = catalog::file_stager_svc(None)
//!     .with_overrides([("PipeLength", PropertyValue::Int(2))])
//!     .unwrap();
//!
//! assert_eq!(stager.dlls(), "FileStager");
//! assert_eq!(stager.get("InfilePrefix"), Some(&PropertyValue::from("gfal:")));
//! ```
//!
//! ## Registry Lookup
//!
//! ```no_run
//! use filestager_conf::registry;
//!
//! let entry = registry::global().get("Gaudi__StagedIODataManager").unwrap();
//! println!("{} lives in {}", entry.configurable, entry.lib);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod component;
pub mod config;
pub mod error;
pub mod property;
pub mod registry;
pub mod schema;

// Re-export commonly used types
pub use component::{ComponentDescriptor, ComponentKind, Configurable};
pub use error::{ConfError, Result};
pub use property::{PropertyKind, PropertySpec, PropertyValue};
pub use registry::{ConfigurableDb, RegistryEntry};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    //! Convenient re-exports for common usage
    //!
    //! ```no_run
    //! use filestager_conf::prelude::*;
    //! ```

    pub use crate::catalog;
    pub use crate::component::{ComponentDescriptor, ComponentKind, Configurable};
    pub use crate::config::JobOptions;
    pub use crate::error::{ConfError, Result};
    pub use crate::property::{MsgLevel, PropertyKind, PropertySpec, PropertyValue};
    pub use crate::registry::{ConfigurableDb, PopulateOutcome, RegistryEntry};
}
