use std::fmt;

/// Id of the placeholder entry that can be put in front of the license list.
pub const UNKNOWN_ID: &str = "Unknown";
pub const UNKNOWN_NAME: &str = "Unknown license";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryKind {
    Licenses,
    Exceptions,
}

impl RegistryKind {
    pub const ALL: [RegistryKind; 2] = [RegistryKind::Licenses, RegistryKind::Exceptions];

    /// Child package name under the configured prefix (`SPDX.Licenses`).
    pub fn package(&self) -> &'static str {
        match self {
            RegistryKind::Licenses => "Licenses",
            RegistryKind::Exceptions => "Exceptions",
        }
    }

    pub fn default_url(&self) -> &'static str {
        match self {
            RegistryKind::Licenses => {
                "https://raw.githubusercontent.com/spdx/license-list-data/master/json/licenses.json"
            }
            RegistryKind::Exceptions => {
                "https://raw.githubusercontent.com/spdx/license-list-data/master/json/exceptions.json"
            }
        }
    }

    pub fn default_file_name(&self) -> &'static str {
        match self {
            RegistryKind::Licenses => "spdx-licenses.ads",
            RegistryKind::Exceptions => "spdx-exceptions.ads",
        }
    }
}

impl fmt::Display for RegistryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryKind::Licenses => write!(f, "licenses"),
            RegistryKind::Exceptions => write!(f, "exceptions"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegistryEntry {
    pub id: String,
    pub name: String,
}

impl RegistryEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Non-deprecated entries of one SPDX list, in upstream order.
#[derive(Debug, Clone, PartialEq)]
pub struct Registry {
    pub kind: RegistryKind,
    pub version: String,
    pub entries: Vec<RegistryEntry>,
    /// Number of deprecated entries that were filtered out.
    pub dropped: usize,
}

impl Registry {
    /// Put the `Unknown` placeholder at the head of the list, unless it is already there.
    pub fn with_unknown(mut self) -> Self {
        if !self.entries.iter().any(|e| e.id == UNKNOWN_ID) {
            self.entries
                .insert(0, RegistryEntry::new(UNKNOWN_ID, UNKNOWN_NAME));
        }
        self
    }
}
