/// Config file loading and creation for the pairsort CLI.
///
/// Config lives at ~/.config/pairsort/config.toml.
/// All fields are optional; CLI args override config values.
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Which progress label to show next to the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ProgressMode {
    /// `67%`
    #[default]
    Percent,
    /// `2 / 3`
    Count,
    /// `67% (2 / 3)`
    Both,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct PairsortConfig {
    pub catalog: Option<String>,
    pub progress: Option<ProgressMode>,
    pub seed: Option<u64>,
}

const DEFAULT_CONFIG_TEMPLATE: &str = "\
# pairsort configuration
# All values here can be overridden by CLI flags.

# Character catalog: a JSON file path or an http(s) URL.
# Each record needs a \"name\"; \"gender\" and any other fields are optional.
# catalog = \"/path/to/characters.json\"

# Progress label: \"percent\", \"count\" or \"both\"
# progress = \"percent\"

# Fixed seed for the pair order (omit for a new order every session)
# seed = 42
";

/// Returns the default config path: ~/.config/pairsort/config.toml
pub fn config_path() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(".config").join("pairsort").join("config.toml"))
}

/// Load config from a file path. Returns default (all None) if file doesn't exist.
pub fn load_config(path: &Path) -> Result<PairsortConfig> {
    match std::fs::read_to_string(path) {
        Ok(content) => toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(PairsortConfig::default()),
        Err(e) => Err(e).with_context(|| format!("Failed to read config at {}", path.display())),
    }
}

/// Create the default config file at `path`. Errors if it already exists.
pub fn create_default_config(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("Config file already exists at {}", path.display());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(path, DEFAULT_CONFIG_TEMPLATE)
        .with_context(|| format!("Failed to write config to {}", path.display()))
}
