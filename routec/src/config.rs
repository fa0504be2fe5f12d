//! Optional `routec.toml` project configuration.
//!
//! Everything here can also be given on the command line; flags win over the
//! file. The file is optional: a missing config is simply all defaults.

use std::fs;
use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use serde::Deserialize;

/// Contents of `routec.toml`.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub compile: CompileConfig,
}

/// The `[compile]` table.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct CompileConfig {
    /// Output directory for generated code.
    pub output: Option<PathBuf>,
    /// Extra `use` lines for generated files.
    pub imports: Vec<String>,
    /// Generate the forward router.
    pub forward: Option<bool>,
    /// Generate the reverse router.
    pub reverse: Option<bool>,
    /// Wrap the reverse router in a namespace module.
    pub namespace_reverse: Option<bool>,
    /// Text encoding label for all reads and writes.
    pub encoding: Option<String>,
}

impl Config {
    /// Load the config at `path`, or defaults when the file is absent.
    pub fn load_if_present(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read '{}'", path.display()))?;
        toml::from_str(&content)
            .wrap_err_with(|| format!("failed to parse '{}'", path.display()))
    }
}
