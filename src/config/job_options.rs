//! Job options
//!
//! Host-supplied property overrides, keyed by instance name:
//!
//! ```json
//! {
//!   "FileStagerSvc": { "PipeLength": 2, "InputCollections": ["lfn:/a.root"] },
//!   "Gaudi::StagedIODataManager": { "AgeLimit": 5 }
//! }
//! ```

use crate::catalog;
use crate::component::{mangle, ComponentDescriptor, Configurable};
use crate::error::{ConfError, IoResultExt, Result};
use crate::property::PropertyValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Property assignments for one instance
pub type InstanceOptions = BTreeMap<String, serde_json::Value>;

/// Parsed job options document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobOptions {
    instances: BTreeMap<String, InstanceOptions>,
}

impl JobOptions {
    /// Empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load options from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).with_path(path)?;
        Self::from_json_str(&content)
            .map_err(|e| e.with_context(format!("parsing {}", path.display())))
    }

    /// Add a single assignment
    pub fn assign(&mut self, instance: impl Into<String>, property: impl Into<String>, value: serde_json::Value) {
        self.instances
            .entry(instance.into())
            .or_default()
            .insert(property.into(), value);
    }

    /// Instance names with assignments
    pub fn instances(&self) -> impl Iterator<Item = &str> {
        self.instances.keys().map(String::as_str)
    }

    /// Assignments for an instance; a mangled alias (`Gaudi__X`) also matches
    pub fn options_for(&self, instance: &str) -> Option<&InstanceOptions> {
        self.instances
            .get(instance)
            .or_else(|| self.instances.get(&mangle(instance)))
    }

    /// Build a configured instance of `descriptor` named `instance`
    pub fn configure<'a>(&self, descriptor: &'a ComponentDescriptor, instance: &str) -> Result<Configurable<'a>> {
        let mut conf = Configurable::new(descriptor, instance);

        if let Some(options) = self.options_for(instance) {
            for (property, raw) in options {
                PropertyValue::from_json(raw)
                    .and_then(|value| conf.set(property.as_str(), value))
                    .map_err(|e| e.with_context(format!("job options for {}.{}", instance, property)))?;
            }
        }

        Ok(conf)
    }

    /// One configured instance per catalog component, named after its type
    pub fn configure_all(&self) -> Result<Vec<Configurable<'static>>> {
        for name in self.unclaimed() {
            tracing::warn!("Job options for '{}' match no FileStager component", name);
        }

        catalog::all()
            .iter()
            .map(|descriptor| self.configure(descriptor, &descriptor.type_name))
            .collect()
    }

    /// Instance names that match no catalog component
    pub fn unclaimed(&self) -> Vec<&str> {
        self.instances()
            .filter(|name| catalog::find(name).is_none())
            .collect()
    }
}

impl TryFrom<serde_json::Value> for JobOptions {
    type Error = ConfError;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_configure_applies_assignments() {
        let opts = JobOptions::try_from(json!({
            "FileStagerSvc": { "PipeLength": 3, "InputCollections": ["lfn:/a.root", "lfn:/b.root"] }
        }))
        .unwrap();

        let svc = opts.configure(catalog::get("FileStagerSvc").unwrap(), "FileStagerSvc").unwrap();
        assert_eq!(svc.get("PipeLength"), Some(&PropertyValue::Int(3)));
        assert_eq!(svc.get("InputCollections").and_then(|v| v.as_list()).map(|l| l.len()), Some(2));
        assert_eq!(svc.overridden().len(), 2);
    }

    #[test]
    fn test_mangled_alias_matches() {
        let mut opts = JobOptions::new();
        opts.assign("Gaudi__StagedIODataManager", "AgeLimit", json!(5));

        let mgr = opts
            .configure(catalog::get("Gaudi::StagedIODataManager").unwrap(), "Gaudi::StagedIODataManager")
            .unwrap();
        assert_eq!(mgr.get("AgeLimit"), Some(&PropertyValue::Int(5)));
    }

    #[test]
    fn test_bad_assignments_fail_with_context() {
        let desc = catalog::get("FileStagerSvc").unwrap();

        let opts = JobOptions::from_json_str(r#"{"FileStagerSvc": {"PipeLength": "long"}}"#).unwrap();
        let err = opts.configure(desc, "FileStagerSvc").unwrap_err();
        assert!(err.is_override_error());
        assert!(err.to_string().contains("FileStagerSvc.PipeLength"));

        let opts = JobOptions::from_json_str(r#"{"FileStagerSvc": {"PipeLength": 1.5}}"#).unwrap();
        assert!(opts.configure(desc, "FileStagerSvc").is_err());

        let opts = JobOptions::from_json_str(r#"{"FileStagerSvc": {"NoSuch": 1}}"#).unwrap();
        assert!(opts.configure(desc, "FileStagerSvc").is_err());
    }

    #[test]
    fn test_configure_all_and_unclaimed() {
        let opts = JobOptions::try_from(json!({
            "InputStreamParser": { "OutputLevel": 2 },
            "SomeOtherSvc": { "Flag": true }
        }))
        .unwrap();

        assert_eq!(opts.unclaimed(), vec!["SomeOtherSvc"]);
        let all = opts.configure_all().unwrap();
        assert_eq!(all.len(), 5);
        let parser = all.iter().find(|c| c.type_name() == "InputStreamParser").unwrap();
        assert_eq!(parser.get("OutputLevel"), Some(&PropertyValue::Int(2)));
        assert!(all
            .iter()
            .filter(|c| c.type_name() != "InputStreamParser")
            .all(|c| c.overridden().is_empty()));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"FileStagerSvc": {{"KeepLogfiles": true}}}}"#).unwrap();

        let opts = JobOptions::load(file.path()).unwrap();
        assert_eq!(opts.instances().collect::<Vec<_>>(), vec!["FileStagerSvc"]);

        let missing = JobOptions::load(Path::new("/nonexistent/joboptions.json"));
        assert!(matches!(missing, Err(ConfError::Io { .. })));
    }

    #[test]
    fn test_malformed_document() {
        assert!(matches!(
            JobOptions::from_json_str("[1, 2]"),
            Err(ConfError::OptionsError(_))
        ));
    }
}
