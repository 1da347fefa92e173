//! Component descriptors

use crate::property::{PropertySpec, PropertyValue};
use serde::{Deserialize, Serialize};

/// Framework base class of a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    /// Process-wide service
    Service,
    /// Tool owned by another component
    AlgTool,
}

impl ComponentKind {
    /// Base class name used by the framework
    pub fn base_name(&self) -> &'static str {
        match self {
            Self::Service => "ConfigurableService",
            Self::AlgTool => "ConfigurableAlgTool",
        }
    }
}

/// Static schema of one component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDescriptor {
    /// Registered type name, possibly namespaced (`Gaudi::StagedIODataManager`)
    pub type_name: String,
    /// Library the component lives in
    pub library: String,
    /// Service or tool
    pub kind: ComponentKind,
    /// Declared properties, in declaration order
    pub properties: Vec<PropertySpec>,
}

impl ComponentDescriptor {
    /// Create a descriptor without properties
    pub fn new(type_name: impl Into<String>, library: impl Into<String>, kind: ComponentKind) -> Self {
        Self {
            type_name: type_name.into(),
            library: library.into(),
            kind,
            properties: Vec::new(),
        }
    }

    /// Append a property declaration
    pub fn with_property(mut self, spec: PropertySpec) -> Self {
        self.properties.push(spec);
        self
    }

    /// Append several property declarations
    pub fn with_properties(mut self, specs: impl IntoIterator<Item = PropertySpec>) -> Self {
        self.properties.extend(specs);
        self
    }

    /// Registry key: the type name with `::` mangled to `__`
    pub fn configurable_name(&self) -> String {
        mangle(&self.type_name)
    }

    /// Look up a declared property
    pub fn property(&self, name: &str) -> Option<&PropertySpec> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Check whether a property is declared
    pub fn has_property(&self, name: &str) -> bool {
        self.property(name).is_some()
    }

    /// Declared defaults, in declaration order
    pub fn defaults(&self) -> Vec<(&str, &PropertyValue)> {
        self.properties
            .iter()
            .map(|p| (p.name.as_str(), &p.default))
            .collect()
    }

    /// Properties that carry documentation
    pub fn documented(&self) -> impl Iterator<Item = &PropertySpec> {
        self.properties.iter().filter(|p| p.doc.is_some())
    }

    /// Check whether `name` refers to this component (type or configurable name)
    pub fn matches(&self, name: &str) -> bool {
        self.type_name == name || self.configurable_name() == name
    }
}

/// Mangle a namespaced type name into an identifier-safe configurable name
pub fn mangle(type_name: &str) -> String {
    type_name.replace("::", "__")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ComponentDescriptor {
        ComponentDescriptor::new("Gaudi::StagedIODataManager", "FileStager", ComponentKind::Service)
            .with_property(PropertySpec::new("AgeLimit", 2))
            .with_property(PropertySpec::new("StagerSvc", "FileStagerSvc").with_doc("stager"))
    }

    #[test]
    fn test_configurable_name_mangling() {
        let desc = sample();
        assert_eq!(desc.configurable_name(), "Gaudi__StagedIODataManager");
        assert!(desc.matches("Gaudi::StagedIODataManager"));
        assert!(desc.matches("Gaudi__StagedIODataManager"));
        assert!(!desc.matches("StagedIODataManager"));
    }

    #[test]
    fn test_defaults_keep_declaration_order() {
        let desc = sample();
        let names: Vec<&str> = desc.defaults().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["AgeLimit", "StagerSvc"]);
        assert_eq!(desc.documented().count(), 1);
        assert!(desc.has_property("AgeLimit"));
        assert!(!desc.has_property("PipeLength"));
    }
}
