//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it — services receive
//! the already-resolved pieces (root path, capability set, stub source).
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--root`, handled at the call-site)
//! 2. `--config <FILE>` (missing file is an error)
//! 3. `./modgen.toml` in the current directory
//! 4. `directories::ProjectDirs` config location
//! 5. Built-in defaults (always present)
//!
//! # File format
//!
//! ```toml
//! root = "modules"
//! stubs_dir = "stubs"
//!
//! [capabilities]
//! api_auth = true
//! livewire = false
//!
//! [output]
//! no_color = false
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use modgen_core::domain::{Capability, CapabilitySet};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Modules root directory, relative to the working directory unless
    /// absolute.
    pub root: PathBuf,
    /// Stub override directory (`<dir>/<stub-name>.stub`).
    pub stubs_dir: Option<PathBuf>,
    /// Cache file location; defaults to `<root>/.modgen/cache.json`.
    pub cache_file: Option<PathBuf>,
    /// Host add-ons resolved for this installation.
    pub capabilities: CapabilitiesConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CapabilitiesConfig {
    /// An API authentication package is installed; unlocks `--api`.
    pub api_auth: bool,
    /// Livewire is installed; unlocks component scaffolding.
    pub livewire: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("modules"),
            stubs_dir: None,
            cache_file: None,
            capabilities: CapabilitiesConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for CapabilitiesConfig {
    fn default() -> Self {
        Self {
            api_auth: true,
            livewire: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { no_color: false }
    }
}

impl AppConfig {
    /// Load configuration.
    ///
    /// `config_file` is the `--config` override; pointing it at a missing
    /// file is an error, while an absent discovered file just means
    /// defaults.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        match config_file {
            Some(path) => Self::from_file(path),
            None => match Self::discover() {
                Some(path) => Self::from_file(&path),
                None => Ok(Self::default()),
            },
        }
    }

    /// Parse one TOML config file. Missing keys fall back to defaults.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file '{}'", path.display()))
    }

    /// First config file the default resolution order would use, if any.
    pub fn discover() -> Option<PathBuf> {
        let local = PathBuf::from("modgen.toml");
        if local.is_file() {
            return Some(local);
        }
        directories::ProjectDirs::from("com", "modgen", "modgen")
            .map(|d| d.config_dir().join("config.toml"))
            .filter(|p| p.is_file())
    }

    /// Path reported by `modgen config path`: the discovered file, or the
    /// local default location when nothing exists yet.
    pub fn config_path() -> PathBuf {
        Self::discover().unwrap_or_else(|| PathBuf::from("modgen.toml"))
    }

    /// Modules root after applying the CLI/env override.
    pub fn resolved_root(&self, cli_root: Option<&Path>) -> PathBuf {
        cli_root
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.root.clone())
    }

    /// Cache file after applying the conventional default.
    pub fn cache_file_for(&self, root: &Path) -> PathBuf {
        self.cache_file
            .clone()
            .unwrap_or_else(|| root.join(".modgen").join("cache.json"))
    }

    /// The capability toggles as a core [`CapabilitySet`].
    pub fn capability_set(&self) -> CapabilitySet {
        let mut caps = CapabilitySet::empty();
        if self.capabilities.api_auth {
            caps = caps.with(Capability::ApiAuth);
        }
        if self.capabilities.livewire {
            caps = caps.with(Capability::Livewire);
        }
        caps
    }
}
