//! In-memory map from logical keys to Linear-assigned ids for one run.

use std::collections::{btree_map, hash_map, BTreeMap, HashMap};
use std::fmt;

/// Logical handle for a remote object created during this run.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RegistryKey {
    /// Team label, by name
    Label(String),
    /// Module issue, by module number
    Module(u32),
}

impl RegistryKey {
    #[must_use]
    pub fn label(name: impl Into<String>) -> Self {
        Self::Label(name.into())
    }
}

impl fmt::Display for RegistryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Label(name) => write!(f, "label:{name}"),
            Self::Module(n) => write!(f, "module_{n}"),
        }
    }
}

/// Write-once id registry.
///
/// Labels and modules live in separate maps so a label can never shadow a
/// module. Empty ids are never stored and a registered key is never
/// overwritten.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    labels: HashMap<String, String>,
    modules: BTreeMap<u32, String>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `id` under `key`. Returns `true` if a new entry was written.
    pub fn register(&mut self, key: RegistryKey, id: &str) -> bool {
        if id.is_empty() {
            return false;
        }

        match key {
            RegistryKey::Label(name) => match self.labels.entry(name) {
                hash_map::Entry::Occupied(_) => false,
                hash_map::Entry::Vacant(slot) => {
                    slot.insert(id.to_string());
                    true
                }
            },
            RegistryKey::Module(n) => match self.modules.entry(n) {
                btree_map::Entry::Occupied(_) => false,
                btree_map::Entry::Vacant(slot) => {
                    slot.insert(id.to_string());
                    true
                }
            },
        }
    }

    /// Remote id registered under `key`.
    #[must_use]
    pub fn lookup(&self, key: &RegistryKey) -> Option<&str> {
        match key {
            RegistryKey::Label(name) => self.label_id(name),
            RegistryKey::Module(n) => self.module_id(*n),
        }
    }

    #[must_use]
    pub fn contains(&self, key: &RegistryKey) -> bool {
        self.lookup(key).is_some()
    }

    #[must_use]
    pub fn label_id(&self, name: &str) -> Option<&str> {
        self.labels.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn module_id(&self, number: u32) -> Option<&str> {
        self.modules.get(&number).map(String::as_str)
    }

    /// Label id list for an issue: one id if the label resolved, else empty.
    #[must_use]
    pub fn label_ids(&self, name: &str) -> Vec<String> {
        self.label_id(name).map(str::to_string).into_iter().collect()
    }

    #[must_use]
    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// Registered modules in ascending number.
    pub fn modules(&self) -> impl Iterator<Item = (u32, &str)> {
        self.modules.iter().map(|(n, id)| (*n, id.as_str()))
    }
}
