//! Configuration management.
//!
//! One TOML file holds every environment plus the tree of URL suffixes:
//!
//! ```toml
//! [environments.development]
//! api_root_url = "https://netbox.dev.example.net"
//! api_token = "0123456789abcdef"
//! tls_check = "warn"
//!
//! [cmd.dcim.dcim_api_url]
//! sites = "/api/dcim/sites/"
//! ```

use anyhow::{Context as _, Result};
use directories::ProjectDirs;
use netbox_client::tls::TlsCheck;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Name of the environment used when `--env` is not given.
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Deployments by name.
    #[serde(default)]
    pub environments: BTreeMap<String, Environment>,

    /// URL suffix tree, addressed by dotted keys starting with `cmd.`.
    #[serde(default)]
    pub cmd: toml::Table,
}

/// One NetBox deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Environment {
    /// API root, e.g. `https://netbox.example.net`.
    pub api_root_url: String,

    /// API token (may be overridden with `NETBOX_API_TOKEN`).
    #[serde(default)]
    pub api_token: String,

    /// What to do when the certificate pre-check fails.
    #[serde(default)]
    pub tls_check: TlsCheck,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Config {
    /// Get the default config file path.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("net", "netbox", "netbox-cli")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file. A missing file is an error: nothing can
    /// be requested without a root URL and token.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!(
                "Config file not found: {}\n\n\
                 Create it with an [environments.<name>] table and the [cmd.*] URL suffixes,\n\
                 or point to one with --config / NETBOX_CLI_CONFIG.",
                path.display()
            );
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("parsing config file {}", path.display()))
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Settings of the named environment.
    pub fn environment(&self, name: &str) -> Result<&Environment> {
        self.environments.get(name).ok_or_else(|| {
            let known: Vec<&str> = self.environments.keys().map(String::as_str).collect();
            anyhow::anyhow!(
                "Unknown environment: {name}\n\nConfigured environments: {}",
                if known.is_empty() {
                    "(none)".to_string()
                } else {
                    known.join(", ")
                }
            )
        })
    }

    /// Resolve a dotted suffix key such as `cmd.dcim.dcim_api_url.sites`.
    pub fn suffix(&self, key: &str) -> Result<&str> {
        let missing = || anyhow::anyhow!("Missing config key: {key}");

        let mut segments = key.split('.');
        if segments.next() != Some("cmd") {
            anyhow::bail!("Suffix keys must start with 'cmd.': {key}");
        }

        let segments: Vec<&str> = segments.collect();
        let (last, parents) = segments.split_last().ok_or_else(missing)?;

        let mut table = &self.cmd;
        for segment in parents {
            table = table
                .get(*segment)
                .and_then(toml::Value::as_table)
                .ok_or_else(missing)?;
        }

        match table.get(*last) {
            Some(toml::Value::String(suffix)) if !suffix.trim().is_empty() => Ok(suffix.as_str()),
            Some(_) => anyhow::bail!("Config key {key} must be a non-empty string"),
            None => Err(missing()),
        }
    }
}

impl Environment {
    /// Token with a masked middle, for display.
    #[must_use]
    pub fn masked_token(&self) -> String {
        mask(&self.api_token)
    }
}

/// Mask all but the first and last four characters.
#[must_use]
pub fn mask(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.is_empty() {
        String::from("(not set)")
    } else if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    } else {
        String::from("****")
    }
}
