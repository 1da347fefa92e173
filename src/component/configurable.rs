//! Configurable instances
//!
//! A configurable starts at its descriptor's defaults. Overrides are
//! validated against the declared property list and type; a rejected
//! override leaves the instance untouched.

use super::ComponentDescriptor;
use crate::error::{ConfError, Result};
use crate::property::{MsgLevel, PropertyValue};
use std::collections::HashMap;

/// Name of the verbosity property shared by every component
pub const OUTPUT_LEVEL: &str = "OutputLevel";

/// A named, configured instance of a component
#[derive(Debug, Clone)]
pub struct Configurable<'a> {
    descriptor: &'a ComponentDescriptor,
    name: String,
    overrides: HashMap<String, PropertyValue>,
}

impl<'a> Configurable<'a> {
    /// Create an instance with all properties at their defaults
    pub fn new(descriptor: &'a ComponentDescriptor, name: impl Into<String>) -> Self {
        Self {
            descriptor,
            name: name.into(),
            overrides: HashMap::new(),
        }
    }

    /// Create an instance named after the component type
    pub fn with_default_name(descriptor: &'a ComponentDescriptor) -> Self {
        Self::new(descriptor, descriptor.type_name.clone())
    }

    /// Apply a set of overrides, failing on the first invalid one
    pub fn with_overrides<I, K, V>(mut self, overrides: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<PropertyValue>,
    {
        for (name, value) in overrides {
            self.set(name, value)?;
        }
        Ok(self)
    }

    /// Assign a property
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Result<()> {
        let name = name.into();
        let value = value.into();

        let spec = self
            .descriptor
            .property(&name)
            .ok_or_else(|| ConfError::unknown_property(&self.name, &name))?;

        if !spec.accepts(&value) {
            return Err(ConfError::type_mismatch(&self.name, &name, spec.kind(), value.kind()));
        }

        tracing::debug!("{}.{} = {}", self.name, name, value);
        self.overrides.insert(name, value);
        Ok(())
    }

    /// Effective value of a property
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.overrides
            .get(name)
            .or_else(|| self.descriptor.property(name).map(|p| &p.default))
    }

    /// Check whether a property was explicitly assigned
    pub fn is_overridden(&self, name: &str) -> bool {
        self.overrides.contains_key(name)
    }

    /// Drop an override, restoring the default
    pub fn reset(&mut self, name: &str) -> Option<PropertyValue> {
        self.overrides.remove(name)
    }

    /// Effective values, in declaration order
    pub fn values(&self) -> Vec<(&str, &PropertyValue)> {
        self.descriptor
            .properties
            .iter()
            .map(|p| {
                let value = self.overrides.get(&p.name).unwrap_or(&p.default);
                (p.name.as_str(), value)
            })
            .collect()
    }

    /// Only the explicitly assigned values, in declaration order
    pub fn overridden(&self) -> Vec<(&str, &PropertyValue)> {
        self.values()
            .into_iter()
            .filter(|(name, _)| self.overrides.contains_key(*name))
            .collect()
    }

    /// Instance name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Descriptor this instance was built from
    pub fn descriptor(&self) -> &'a ComponentDescriptor {
        self.descriptor
    }

    /// Library providing the component
    pub fn dlls(&self) -> &'a str {
        &self.descriptor.library
    }

    /// Registered type name
    pub fn type_name(&self) -> &'a str {
        &self.descriptor.type_name
    }

    /// Full `Type/Name` identifier
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.type_name(), self.name)
    }

    /// Effective OutputLevel as a message level
    pub fn output_level(&self) -> Result<Option<MsgLevel>> {
        match self.get(OUTPUT_LEVEL).and_then(PropertyValue::as_int) {
            Some(level) => MsgLevel::from_level(level).map(Some),
            None => Ok(None),
        }
    }
}
