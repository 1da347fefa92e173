//! FileStager component declarations
//!
//! The five components shipped by the FileStager library, with their
//! properties and defaults. Declarations are built once and shared for
//! the life of the process.

use crate::component::{ComponentDescriptor, ComponentKind, Configurable};
use crate::error::{ConfError, Result};
use crate::property::{PropertySpec, PropertyValue};
use std::sync::OnceLock;

/// Library providing every component in this catalog
pub const LIBRARY: &str = "FileStager";

/// Package the components are registered under
pub const PACKAGE: &str = "FileStager";

/// Module defining the configurables
pub const MODULE: &str = "FileStager.FileStagerConf";

/// Module that fills the registry, named in population diagnostics
pub const DB_MODULE: &str = "FileStager.FileStager_confDb";

/// Properties every service declares
fn service_properties() -> Vec<PropertySpec> {
    vec![
        PropertySpec::new("OutputLevel", 7),
        PropertySpec::new("AuditServices", false),
        PropertySpec::new("AuditInitialize", false),
        PropertySpec::new("AuditStart", false),
        PropertySpec::new("AuditStop", false),
        PropertySpec::new("AuditFinalize", false),
        PropertySpec::new("AuditReInitialize", false),
        PropertySpec::new("AuditReStart", false),
    ]
}

/// Properties every tool declares
fn tool_properties() -> Vec<PropertySpec> {
    vec![
        PropertySpec::new("MonitorService", "MonitorSvc"),
        PropertySpec::new("OutputLevel", 7),
        PropertySpec::new("AuditTools", false),
        PropertySpec::new("AuditInitialize", false),
        PropertySpec::new("AuditStart", false),
        PropertySpec::new("AuditStop", false),
        PropertySpec::new("AuditFinalize", false),
    ]
}

fn service(type_name: &str) -> ComponentDescriptor {
    ComponentDescriptor::new(type_name, LIBRARY, ComponentKind::Service)
        .with_properties(service_properties())
}

fn tool(type_name: &str) -> ComponentDescriptor {
    ComponentDescriptor::new(type_name, LIBRARY, ComponentKind::AlgTool)
        .with_properties(tool_properties())
}

fn declare() -> Vec<ComponentDescriptor> {
    vec![
        service("StagerChronoSvc"),
        service("Gaudi::StagedIODataManager").with_properties([
            PropertySpec::new("CatalogType", "Gaudi::MultiFileCatalog/FileCatalog"),
            PropertySpec::new("UseGFAL", true),
            PropertySpec::new("QuarantineFiles", true),
            PropertySpec::new("AgeLimit", 2),
            PropertySpec::new("StagerSvc", "FileStagerSvc"),
        ]),
        tool("StagedDataStreamTool"),
        tool("InputStreamParser"),
        service("FileStagerSvc").with_properties([
            PropertySpec::new("PipeLength", 1),
            PropertySpec::new("InfilePrefix", "gfal:"),
            PropertySpec::new("OutfilePrefix", "file:"),
            PropertySpec::new("BaseTmpdir", ""),
            PropertySpec::new("InputCollections", PropertyValue::empty_list())
                .with_doc(" vector of input files "),
            PropertySpec::new("OutputCollections", PropertyValue::empty_list())
                .with_doc(" vector of output files "),
            PropertySpec::new("LogfileDir", ""),
            PropertySpec::new("KeepLogfiles", false),
            PropertySpec::new("ReleaseFiles", true),
            PropertySpec::new("StreamManager", "StagedDataStreamTool"),
            PropertySpec::new("FallbackDir", ""),
            PropertySpec::new("ParallelStreams", 1),
        ]),
    ]
}

/// All declared components, in declaration order
pub fn all() -> &'static [ComponentDescriptor] {
    static CATALOG: OnceLock<Vec<ComponentDescriptor>> = OnceLock::new();
    CATALOG.get_or_init(declare)
}

/// Find a component by configurable name or type name
pub fn find(name: &str) -> Option<&'static ComponentDescriptor> {
    all().iter().find(|d| d.matches(name))
}

/// Find a component, failing if it is not declared
pub fn get(name: &str) -> Result<&'static ComponentDescriptor> {
    find(name).ok_or_else(|| ConfError::UnknownComponent(name.to_string()))
}

// Positions in `declare`.
const STAGER_CHRONO_SVC: usize = 0;
const STAGED_IO_DATA_MANAGER: usize = 1;
const STAGED_DATA_STREAM_TOOL: usize = 2;
const INPUT_STREAM_PARSER: usize = 3;
const FILE_STAGER_SVC: usize = 4;

fn instance(index: usize, name: Option<&str>) -> Configurable<'static> {
    let descriptor = &all()[index];
    match name {
        Some(name) => Configurable::new(descriptor, name),
        None => Configurable::with_default_name(descriptor),
    }
}

/// `StagerChronoSvc` instance
pub fn stager_chrono_svc(name: Option<&str>) -> Configurable<'static> {
    instance(STAGER_CHRONO_SVC, name)
}

/// `Gaudi::StagedIODataManager` instance
pub fn staged_io_data_manager(name: Option<&str>) -> Configurable<'static> {
    instance(STAGED_IO_DATA_MANAGER, name)
}

/// `StagedDataStreamTool` instance
pub fn staged_data_stream_tool(name: Option<&str>) -> Configurable<'static> {
    instance(STAGED_DATA_STREAM_TOOL, name)
}

/// `InputStreamParser` instance
pub fn input_stream_parser(name: Option<&str>) -> Configurable<'static> {
    instance(INPUT_STREAM_PARSER, name)
}

/// `FileStagerSvc` instance
pub fn file_stager_svc(name: Option<&str>) -> Configurable<'static> {
    instance(FILE_STAGER_SVC, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::PropertyKind;

    #[test]
    fn test_declared_components() {
        let names: Vec<String> = all().iter().map(|d| d.configurable_name()).collect();
        assert_eq!(
            names,
            vec![
                "StagerChronoSvc",
                "Gaudi__StagedIODataManager",
                "StagedDataStreamTool",
                "InputStreamParser",
                "FileStagerSvc",
            ]
        );
        assert!(all().iter().all(|d| d.library == LIBRARY));
    }

    #[test]
    fn test_kinds() {
        assert_eq!(get("StagerChronoSvc").unwrap().kind, ComponentKind::Service);
        assert_eq!(get("InputStreamParser").unwrap().kind, ComponentKind::AlgTool);
        assert!(matches!(get("NoSuchSvc"), Err(ConfError::UnknownComponent(_))));
    }

    #[test]
    fn test_file_stager_svc_defaults() {
        let svc = file_stager_svc(None);
        assert_eq!(svc.name(), "FileStagerSvc");
        assert_eq!(svc.dlls(), "FileStager");
        assert_eq!(svc.type_name(), "FileStagerSvc");
        assert_eq!(svc.get("OutputLevel"), Some(&PropertyValue::Int(7)));
        assert_eq!(svc.get("PipeLength"), Some(&PropertyValue::Int(1)));
        assert_eq!(svc.get("InfilePrefix"), Some(&PropertyValue::from("gfal:")));
        assert_eq!(svc.get("OutfilePrefix"), Some(&PropertyValue::from("file:")));
        assert_eq!(svc.get("BaseTmpdir"), Some(&PropertyValue::from("")));
        assert_eq!(svc.get("InputCollections"), Some(&PropertyValue::empty_list()));
        assert_eq!(svc.get("KeepLogfiles"), Some(&PropertyValue::Bool(false)));
        assert_eq!(svc.get("ReleaseFiles"), Some(&PropertyValue::Bool(true)));
        assert_eq!(svc.get("StreamManager"), Some(&PropertyValue::from("StagedDataStreamTool")));
        assert_eq!(svc.get("ParallelStreams"), Some(&PropertyValue::Int(1)));
        assert_eq!(svc.values().len(), 20);
    }

    #[test]
    fn test_file_stager_svc_docs() {
        let desc = get("FileStagerSvc").unwrap();
        let documented: Vec<&str> = desc.documented().map(|p| p.name.as_str()).collect();
        assert_eq!(documented, vec!["InputCollections", "OutputCollections"]);
        assert_eq!(
            desc.property("OutputCollections").and_then(|p| p.doc.as_deref()),
            Some(" vector of output files ")
        );
    }

    #[test]
    fn test_staged_io_data_manager_defaults() {
        let mgr = staged_io_data_manager(Some("IODataManager"));
        assert_eq!(mgr.name(), "IODataManager");
        assert_eq!(mgr.type_name(), "Gaudi::StagedIODataManager");
        assert_eq!(
            mgr.get("CatalogType"),
            Some(&PropertyValue::from("Gaudi::MultiFileCatalog/FileCatalog"))
        );
        assert_eq!(mgr.get("UseGFAL"), Some(&PropertyValue::Bool(true)));
        assert_eq!(mgr.get("QuarantineFiles"), Some(&PropertyValue::Bool(true)));
        assert_eq!(mgr.get("AgeLimit"), Some(&PropertyValue::Int(2)));
        assert_eq!(mgr.get("StagerSvc"), Some(&PropertyValue::from("FileStagerSvc")));
        assert_eq!(mgr.values().len(), 13);
    }

    #[test]
    fn test_tool_defaults() {
        for conf in [staged_data_stream_tool(None), input_stream_parser(None)] {
            assert_eq!(conf.get("MonitorService"), Some(&PropertyValue::from("MonitorSvc")));
            assert_eq!(conf.get("AuditTools"), Some(&PropertyValue::Bool(false)));
            assert!(conf.get("AuditServices").is_none());
            assert_eq!(conf.values().len(), 7);
        }
        let chrono = stager_chrono_svc(None);
        assert_eq!(chrono.values().len(), 8);
        assert_eq!(
            chrono.descriptor().property("AuditReStart").map(|p| p.kind()),
            Some(PropertyKind::Bool)
        );
    }

    #[test]
    fn test_override_file_stager_svc() {
        let svc = file_stager_svc(Some("Stager"))
            .with_overrides([("ParallelStreams", PropertyValue::Int(4))])
            .unwrap()
            .with_overrides([("InputCollections", vec!["lfn:/grid/a.root"])])
            .unwrap();

        assert_eq!(svc.get("ParallelStreams"), Some(&PropertyValue::Int(4)));
        assert_eq!(
            svc.get("InputCollections"),
            Some(&PropertyValue::from(vec!["lfn:/grid/a.root"]))
        );
        let untouched = svc
            .values()
            .into_iter()
            .filter(|(n, _)| !svc.is_overridden(n))
            .count();
        assert_eq!(untouched, 18);
    }

    proptest::proptest! {
        #[test]
        fn prop_int_override_leaves_others_default(streams in proptest::num::i64::ANY) {
            let svc = file_stager_svc(None)
                .with_overrides([("ParallelStreams", streams)])
                .unwrap();
            let defaults = get("FileStagerSvc").unwrap().defaults();
            for ((name, value), (_, default)) in svc.values().into_iter().zip(defaults) {
                if name == "ParallelStreams" {
                    proptest::prop_assert_eq!(value, &PropertyValue::Int(streams));
                } else {
                    proptest::prop_assert_eq!(value, default);
                }
            }
        }

        #[test]
        fn prop_accessors_ignore_instance_name(name in "[A-Za-z][A-Za-z0-9_]{0,16}") {
            let conf = staged_io_data_manager(Some(name.as_str()));
            proptest::prop_assert_eq!(conf.dlls(), "FileStager");
            proptest::prop_assert_eq!(conf.type_name(), "Gaudi::StagedIODataManager");
            proptest::prop_assert_eq!(conf.name(), name.as_str());
        }
    }
}
