use serde::Deserialize;
use serde_json::Value;

use crate::error::GenError;
use crate::models::{Registry, RegistryEntry, RegistryKind};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LicenseList {
    license_list_version: String,
    licenses: Vec<LicenseRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LicenseRecord {
    license_id: String,
    name: String,
    is_deprecated_license_id: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExceptionList {
    license_list_version: String,
    exceptions: Vec<ExceptionRecord>,
}

/// Exceptions reuse the `isDeprecatedLicenseId` flag name upstream.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExceptionRecord {
    license_exception_id: String,
    name: String,
    is_deprecated_license_id: bool,
}

/// Extract the non-deprecated `{id, name}` pairs of a registry document,
/// keeping upstream order.
pub fn normalize(kind: RegistryKind, doc: &Value) -> Result<Registry, GenError> {
    let malformed = |e: serde_json::Error| {
        GenError::fetch(kind.to_string(), format!("malformed JSON: {}", e))
    };

    let (version, records): (String, Vec<(String, String, bool)>) = match kind {
        RegistryKind::Licenses => {
            let list = LicenseList::deserialize(doc).map_err(malformed)?;
            let records = list
                .licenses
                .into_iter()
                .map(|r| (r.license_id, r.name, r.is_deprecated_license_id))
                .collect();
            (list.license_list_version, records)
        }
        RegistryKind::Exceptions => {
            let list = ExceptionList::deserialize(doc).map_err(malformed)?;
            let records = list
                .exceptions
                .into_iter()
                .map(|r| (r.license_exception_id, r.name, r.is_deprecated_license_id))
                .collect();
            (list.license_list_version, records)
        }
    };

    let total = records.len();
    let entries: Vec<RegistryEntry> = records
        .into_iter()
        .filter(|(_, _, deprecated)| !deprecated)
        .map(|(id, name, _)| RegistryEntry { id, name })
        .collect();

    Ok(Registry {
        kind,
        version,
        dropped: total - entries.len(),
        entries,
    })
}
