//! Declared property specs

use super::{PropertyKind, PropertyValue};
use serde::Serialize;

/// A declared property: name, default value and optional documentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertySpec {
    /// Property name as seen by the framework
    pub name: String,
    /// Default value; also fixes the declared type
    pub default: PropertyValue,
    /// Free-form documentation string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

impl PropertySpec {
    /// Declare a property with a default
    pub fn new(name: impl Into<String>, default: impl Into<PropertyValue>) -> Self {
        Self {
            name: name.into(),
            default: default.into(),
            doc: None,
        }
    }

    /// Attach a documentation string
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Declared type, derived from the default
    pub fn kind(&self) -> PropertyKind {
        self.default.kind()
    }

    /// Check whether a value may be assigned to this property
    pub fn accepts(&self, value: &PropertyValue) -> bool {
        value.kind() == self.kind()
    }
}
