// File: src/config.rs
// Purpose: Resolver configuration parsing from rhtmx.toml

use crate::category::ROUTES_ROOT;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Resolver configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ResolverConfig {
    #[serde(default)]
    pub routing: RoutingConfig,
}

/// Routing configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoutingConfig {
    /// Project directory routes are discovered under (default: current directory)
    #[serde(default)]
    pub project_root: Option<PathBuf>,

    /// Virtual route root handed to the assembler (default: "/app/routes")
    #[serde(default = "default_root")]
    pub root: String,

    /// Trailing slash handling, left to the assembler when unset
    #[serde(default)]
    pub trailing_slash: Option<bool>,
}

fn default_root() -> String {
    ROUTES_ROOT.to_string()
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            project_root: None,
            root: default_root(),
            trailing_slash: None,
        }
    }
}

impl ResolverConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: ResolverConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./rhtmx.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("rhtmx.toml")
    }
}
