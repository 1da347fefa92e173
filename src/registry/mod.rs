//! Configurable registry
//!
//! Maps each configurable name to the package, module and library that
//! define it, so a host framework can find components by name. The
//! process-wide registry is filled once on first access; a failure while
//! filling it is logged and swallowed.

mod db;

pub use db::*;
