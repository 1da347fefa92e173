//! OutputLevel message levels
//!
//! The framework encodes verbosity as an integer: lower is chattier.
//! `7` (ALWAYS) suppresses everything except unconditional output.

use crate::error::{ConfError, Result};
use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

/// Framework message level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MsgLevel {
    /// Unset
    Nil = 0,
    /// Everything
    Verbose = 1,
    /// Debug and above
    Debug = 2,
    /// Info and above
    Info = 3,
    /// Warnings and above
    Warning = 4,
    /// Errors and above
    Error = 5,
    /// Fatal only
    Fatal = 6,
    /// Unconditional output only
    Always = 7,
}

impl MsgLevel {
    /// Parse the integer OutputLevel
    pub fn from_level(level: i64) -> Result<Self> {
        Ok(match level {
            0 => Self::Nil,
            1 => Self::Verbose,
            2 => Self::Debug,
            3 => Self::Info,
            4 => Self::Warning,
            5 => Self::Error,
            6 => Self::Fatal,
            7 => Self::Always,
            other => return Err(ConfError::InvalidOutputLevel(other)),
        })
    }

    /// Integer encoding
    pub fn as_level(&self) -> i64 {
        *self as i64
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Nil => "NIL",
            Self::Verbose => "VERBOSE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
            Self::Always => "ALWAYS",
        }
    }

    /// Equivalent tracing filter
    pub fn level_filter(&self) -> LevelFilter {
        match self {
            Self::Nil | Self::Verbose => LevelFilter::TRACE,
            Self::Debug => LevelFilter::DEBUG,
            Self::Info => LevelFilter::INFO,
            Self::Warning => LevelFilter::WARN,
            Self::Error | Self::Fatal => LevelFilter::ERROR,
            Self::Always => LevelFilter::OFF,
        }
    }
}
