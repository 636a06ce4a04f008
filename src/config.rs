use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::GenError;
use crate::models::RegistryKind;

/// Root configuration structure, deserialized from `.spdx-gen/config.toml`.
///
/// Every field has a default, so a file only needs to name what it changes.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub output: OutputConfig,
}

/// Where the registry documents come from.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SourceConfig {
    pub licenses_url: String,
    pub exceptions_url: String,
    /// HTTP timeout in seconds.
    pub timeout_secs: u64,
    /// Put the `Unknown` placeholder license first in the licenses enumeration.
    pub with_unknown: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            licenses_url: RegistryKind::Licenses.default_url().to_string(),
            exceptions_url: RegistryKind::Exceptions.default_url().to_string(),
            timeout_secs: 30,
            with_unknown: false,
        }
    }
}

/// Where and how the Ada files are written.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
    /// Parent package of the generated units (`SPDX` gives `SPDX.Licenses`).
    pub package_prefix: String,
    pub licenses_file: String,
    pub exceptions_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            dir: PathBuf::from("src"),
            package_prefix: "SPDX".to_string(),
            licenses_file: RegistryKind::Licenses.default_file_name().to_string(),
            exceptions_file: RegistryKind::Exceptions.default_file_name().to_string(),
        }
    }
}

impl Config {
    pub fn url(&self, kind: RegistryKind) -> &str {
        match kind {
            RegistryKind::Licenses => &self.source.licenses_url,
            RegistryKind::Exceptions => &self.source.exceptions_url,
        }
    }

    pub fn output_path(&self, kind: RegistryKind) -> PathBuf {
        let file = match kind {
            RegistryKind::Licenses => &self.output.licenses_file,
            RegistryKind::Exceptions => &self.output.exceptions_file,
        };
        self.output.dir.join(file)
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<work_dir>/.spdx-gen/config.toml`
/// 3. `~/.config/spdx-gen/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(work_dir: &Path, config_override: Option<&Path>) -> Result<Config, GenError> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let local_config = work_dir.join(".spdx-gen").join("config.toml");
    if local_config.exists() {
        return read_config(&local_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home.join(".config").join("spdx-gen").join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config, GenError> {
    let invalid = |reason: String| GenError::Config {
        path: path.to_path_buf(),
        reason,
    };
    let content = std::fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
    let config: Config = toml::from_str(&content).map_err(|e| invalid(e.to_string()))?;

    if config.source.timeout_secs == 0 {
        return Err(invalid("source.timeout_secs must be at least 1".to_string()));
    }
    Ok(config)
}
