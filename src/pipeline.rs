use std::path::PathBuf;

use serde_json::Value;

use crate::ada::emit::emit;
use crate::ada::ident::IdentValidator;
use crate::error::GenError;
use crate::models::{Registry, RegistryKind};
use crate::registry::normalize::normalize;

/// Settings that shape one generated unit.
#[derive(Debug, Clone)]
pub struct GenOptions {
    pub package_prefix: String,
    pub output_path: PathBuf,
    pub with_unknown: bool,
}

/// A rendered Ada unit, ready to be written or checked.
#[derive(Debug)]
pub struct GeneratedUnit {
    pub registry: Registry,
    /// Enumeration literals, parallel to `registry.entries`.
    pub names: Vec<String>,
    pub path: PathBuf,
    pub contents: String,
}

/// Turn a parsed registry document into Ada source: filter, transform, validate, render.
pub fn generate(
    kind: RegistryKind,
    doc: &Value,
    options: &GenOptions,
    validator: &IdentValidator,
) -> Result<GeneratedUnit, GenError> {
    let mut registry = normalize(kind, doc)?;
    if options.with_unknown && kind == RegistryKind::Licenses {
        registry = registry.with_unknown();
    }

    let names = validator.validate(&registry)?;
    let contents = emit(&options.package_prefix, &registry, &names);

    Ok(GeneratedUnit {
        registry,
        names,
        path: options.output_path.clone(),
        contents,
    })
}
