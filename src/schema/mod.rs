//! Schema export
//!
//! Renders the published schema (components, properties, defaults and
//! registry entries) as JSON or text. Output is deterministic: components
//! keep declaration order and registry entries are sorted by name.

use crate::component::{ComponentDescriptor, ComponentKind, Configurable};
use crate::error::Result;
use crate::property::{PropertyKind, PropertyValue};
use crate::registry::{ConfigurableDb, RegistryEntry};
use serde::Serialize;
use std::fmt::Write;

/// One property in the exported schema
#[derive(Debug, Clone, Serialize)]
pub struct PropertySchema {
    /// Property name
    pub name: String,
    /// Declared type
    #[serde(rename = "type")]
    pub kind: PropertyKind,
    /// Default value
    pub default: PropertyValue,
    /// Documentation, if declared
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

/// One component in the exported schema
#[derive(Debug, Clone, Serialize)]
pub struct ComponentSchema {
    /// Registry key
    pub configurable: String,
    /// Registered type name
    #[serde(rename = "type")]
    pub type_name: String,
    /// Service or tool
    pub kind: ComponentKind,
    /// Owning library
    pub library: String,
    /// Declared properties
    pub properties: Vec<PropertySchema>,
}

impl From<&ComponentDescriptor> for ComponentSchema {
    fn from(descriptor: &ComponentDescriptor) -> Self {
        Self {
            configurable: descriptor.configurable_name(),
            type_name: descriptor.type_name.clone(),
            kind: descriptor.kind,
            library: descriptor.library.clone(),
            properties: descriptor
                .properties
                .iter()
                .map(|p| PropertySchema {
                    name: p.name.clone(),
                    kind: p.kind(),
                    default: p.default.clone(),
                    doc: p.doc.clone(),
                })
                .collect(),
        }
    }
}

/// Complete exported schema
#[derive(Debug, Clone, Serialize)]
pub struct SchemaDocument {
    /// Crate version that produced the document
    pub version: String,
    /// Declared components
    pub components: Vec<ComponentSchema>,
    /// Registry entries
    pub registry: Vec<RegistryEntry>,
}

impl SchemaDocument {
    /// Build a document from descriptors and a registry
    pub fn new(components: &[ComponentDescriptor], registry: &ConfigurableDb) -> Self {
        Self {
            version: crate::VERSION.to_string(),
            components: components.iter().map(ComponentSchema::from).collect(),
            registry: registry.iter().cloned().collect(),
        }
    }
}

/// Render the schema as pretty-printed JSON
pub fn render_json(components: &[ComponentDescriptor], registry: &ConfigurableDb) -> Result<String> {
    Ok(serde_json::to_string_pretty(&SchemaDocument::new(components, registry))?)
}

/// Render one component's declaration as text
pub fn render_component(descriptor: &ComponentDescriptor) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({}) [{}]",
        descriptor.configurable_name(),
        descriptor.kind.base_name(),
        descriptor.type_name
    );
    let _ = writeln!(out, "  library: {}", descriptor.library);

    let width = descriptor.properties.iter().map(|p| p.name.len()).max().unwrap_or(0);
    for p in &descriptor.properties {
        let _ = write!(out, "  {:<width$} = {}  # {}", p.name, p.default, p.kind(), width = width);
        if let Some(doc) = &p.doc {
            let _ = write!(out, " --{}", doc.trim_end());
        }
        out.push('\n');
    }
    out
}

/// Render the whole schema as text
pub fn render_text(components: &[ComponentDescriptor], registry: &ConfigurableDb) -> String {
    let mut out = String::new();
    for descriptor in components {
        out.push_str(&render_component(descriptor));
        out.push('\n');
    }
    out.push_str(&render_registry(registry));
    out
}

/// Render registry entries as a table
pub fn render_registry(registry: &ConfigurableDb) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Configurable Registry ({} entries) ===", registry.len());
    let width = registry.iter().map(|e| e.configurable.len()).max().unwrap_or(0);
    for entry in registry.iter() {
        let _ = writeln!(
            out,
            "{:<width$}  package={} module={} lib={}",
            entry.configurable,
            entry.package,
            entry.module,
            entry.lib,
            width = width
        );
    }
    out
}

/// Render a configured instance's effective values
pub fn render_configurable(conf: &Configurable<'_>, changed_only: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", conf.full_name());
    let values = if changed_only { conf.overridden() } else { conf.values() };
    for (name, value) in values {
        let marker = if conf.is_overridden(name) { "*" } else { " " };
        let _ = writeln!(out, " {}{} = {}", marker, name, value);
    }
    out
}
