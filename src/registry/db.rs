//! Registry storage and population

use crate::catalog;
use crate::error::{ConfError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::OnceLock;

/// One registry record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    /// Configurable name (registry key)
    pub configurable: String,
    /// Owning package
    pub package: String,
    /// Module defining the configurable
    pub module: String,
    /// Library to load
    pub lib: String,
}

impl RegistryEntry {
    /// Create an entry
    pub fn new(
        configurable: impl Into<String>,
        package: impl Into<String>,
        module: impl Into<String>,
        lib: impl Into<String>,
    ) -> Self {
        Self {
            configurable: configurable.into(),
            package: package.into(),
            module: module.into(),
            lib: lib.into(),
        }
    }
}

/// Lookup table of configurables, keyed by name
#[derive(Debug, Clone, Default)]
pub struct ConfigurableDb {
    entries: BTreeMap<String, RegistryEntry>,
}

impl ConfigurableDb {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an entry; an existing entry with the same name is replaced
    pub fn add(&mut self, entry: RegistryEntry) -> Result<()> {
        if entry.configurable.is_empty() {
            return Err(ConfError::registry(format!(
                "empty configurable name in package [{}]",
                entry.package
            )));
        }

        if let Some(previous) = self.entries.insert(entry.configurable.clone(), entry) {
            tracing::debug!(
                "Replaced registry entry for {} (was module {})",
                previous.configurable,
                previous.module
            );
        }
        Ok(())
    }

    /// Look up an entry by configurable name
    pub fn get(&self, configurable: &str) -> Option<&RegistryEntry> {
        self.entries.get(configurable)
    }

    /// Check whether a configurable is registered
    pub fn contains(&self, configurable: &str) -> bool {
        self.entries.contains_key(configurable)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by configurable name
    pub fn iter(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.values()
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Entries belonging to one package
    pub fn by_package<'a>(&'a self, package: &'a str) -> impl Iterator<Item = &'a RegistryEntry> + 'a {
        self.entries.values().filter(move |e| e.package == package)
    }
}

/// Result of a registry population attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopulateOutcome {
    /// Filler completed, recording this many entries
    Filled(usize),
    /// Filler failed; the message was logged
    Failed(String),
}

impl PopulateOutcome {
    /// Check if population succeeded
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Filled(_))
    }
}

/// Record every catalog component in `db`
pub fn fill(db: &mut ConfigurableDb) -> Result<usize> {
    let components = catalog::all();
    for descriptor in components {
        db.add(RegistryEntry::new(
            descriptor.configurable_name(),
            catalog::PACKAGE,
            catalog::MODULE,
            descriptor.library.as_str(),
        ))?;
    }
    Ok(components.len())
}

/// Run a registry filler, logging and suppressing any error or panic
///
/// Entries recorded before a failure are kept.
pub fn populate<F>(db: &mut ConfigurableDb, module: &str, package: &str, filler: F) -> PopulateOutcome
where
    F: FnOnce(&mut ConfigurableDb) -> Result<usize>,
{
    let result = panic::catch_unwind(AssertUnwindSafe(|| filler(db)));

    let message = match result {
        Ok(Ok(count)) => {
            tracing::debug!("Registered {} configurables from package [{}]", count, package);
            return PopulateOutcome::Filled(count);
        }
        Ok(Err(e)) => e.to_string(),
        Err(payload) => panic_message(payload.as_ref()),
    };

    tracing::error!("Problem with [{}] content!", module);
    tracing::error!("{}", message);
    tracing::error!("  ==> culprit is package [{}] !", package);
    PopulateOutcome::Failed(message)
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Run a filler on behalf of the FileStager package
pub fn populate_package<F>(db: &mut ConfigurableDb, filler: F) -> PopulateOutcome
where
    F: FnOnce(&mut ConfigurableDb) -> Result<usize>,
{
    populate(db, catalog::DB_MODULE, catalog::PACKAGE, filler)
}

/// Process-wide registry, filled with the FileStager components on first use
pub fn global() -> &'static ConfigurableDb {
    static REGISTRY: OnceLock<ConfigurableDb> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let mut db = ConfigurableDb::new();
        populate_package(&mut db, fill);
        db
    })
}
