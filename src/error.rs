//! Error types for the FileStager configuration schema
//!
//! Every fallible operation in the crate returns [`ConfError`]. Registry
//! population is the one place where errors are caught and logged instead
//! of propagated (see [`crate::registry::populate`]).

use crate::property::PropertyKind;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for configuration operations
#[derive(Error, Debug)]
pub enum ConfError {
    /// I/O error while reading an options file
    #[error("I/O error at '{path}': {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// No component is declared under this name
    #[error("Unknown component: {0}")]
    UnknownComponent(String),

    /// The component does not declare this property
    #[error("Component '{component}' has no property '{property}'")]
    UnknownProperty {
        /// Instance name
        component: String,
        /// Requested property
        property: String,
    },

    /// Assigned value does not match the declared property type
    #[error("Property '{component}.{property}' expects {expected}, got {actual}")]
    TypeMismatch {
        /// Instance name
        component: String,
        /// Assigned property
        property: String,
        /// Declared type
        expected: PropertyKind,
        /// Type of the rejected value
        actual: PropertyKind,
    },

    /// A value that has no property representation (float, null, object)
    #[error("Invalid property value: {0}")]
    InvalidValue(String),

    /// OutputLevel outside the 0..=7 range
    #[error("Invalid output level: {0}")]
    InvalidOutputLevel(i64),

    /// Registry entry rejected
    #[error("Registry error: {0}")]
    RegistryError(String),

    /// Job options document could not be parsed
    #[error("Job options error: {0}")]
    OptionsError(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        /// What was being done
        context: String,
        /// Wrapped error
        #[source]
        source: Box<ConfError>,
    },
}

impl ConfError {
    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an unknown property error
    pub fn unknown_property(component: impl Into<String>, property: impl Into<String>) -> Self {
        Self::UnknownProperty {
            component: component.into(),
            property: property.into(),
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(
        component: impl Into<String>,
        property: impl Into<String>,
        expected: PropertyKind,
        actual: PropertyKind,
    ) -> Self {
        Self::TypeMismatch {
            component: component.into(),
            property: property.into(),
            expected,
            actual,
        }
    }

    /// Create a registry error
    pub fn registry(message: impl Into<String>) -> Self {
        Self::RegistryError(message.into())
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Check if the error was caused by a caller-supplied override
    pub fn is_override_error(&self) -> bool {
        match self {
            Self::UnknownProperty { .. } | Self::TypeMismatch { .. } | Self::InvalidValue(_) => true,
            Self::WithContext { source, .. } => source.is_override_error(),
            _ => false,
        }
    }
}

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfError>;

impl From<std::io::Error> for ConfError {
    fn from(err: std::io::Error) -> Self {
        ConfError::Io {
            path: PathBuf::new(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for ConfError {
    fn from(err: serde_json::Error) -> Self {
        ConfError::OptionsError(err.to_string())
    }
}

/// Extension trait for adding path context to std::io::Result
pub trait IoResultExt<T> {
    /// Add path context to an I/O error
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|e| ConfError::io(path, e))
    }
}
