//! Command implementations.

pub mod config;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod resources;
pub mod update;

use anyhow::Context as _;
use colored::Colorize;
use netbox_client::tls::{self, TlsVerdict};
use netbox_client::{Endpoint, NetboxClient};
use serde_json::Value;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use crate::config::{Config, Environment};
use crate::output::OutputFormat;
use crate::resources::Resource;

/// Shared context for all commands, built once from the parsed arguments.
#[derive(Debug, Clone)]
pub struct Context {
    /// Config file to read
    pub config_path: PathBuf,

    /// Selected environment name
    pub env: String,

    /// Token given on the command line or through `NETBOX_API_TOKEN`
    pub token: Option<String>,

    /// Output format
    pub output_format: OutputFormat,
}

/// Everything a resource command needs to issue requests.
pub struct Target {
    /// Client bound to the selected environment
    pub client: NetboxClient,
    /// Resolved list endpoint of the resource
    pub endpoint: Endpoint,
}

impl Context {
    /// Load the config file.
    pub fn config(&self) -> anyhow::Result<Config> {
        Config::load(&self.config_path)
    }

    /// Resolve environment, suffix and token into a client and endpoint.
    ///
    /// Pure configuration work: no request is sent here.
    pub fn resolve(&self, resource: &Resource) -> anyhow::Result<(Target, Environment)> {
        let config = self.config()?;
        let environment = config.environment(&self.env)?.clone();
        let suffix = config.suffix(resource.suffix_key)?;

        let endpoint = Endpoint::new(&environment.api_root_url, suffix)
            .with_context(|| format!("building URL for {}", resource.plural))?;

        let token = self
            .token
            .clone()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| environment.api_token.clone());
        if token.trim().is_empty() {
            anyhow::bail!(
                "API token required for environment '{}'.\n\n\
                 Set api_token in the config file or export NETBOX_API_TOKEN.",
                self.env
            );
        }

        let client = NetboxClient::builder(&environment.api_root_url, token)
            .timeout(Duration::from_secs(environment.timeout_secs))
            .build()?;

        Ok((Target { client, endpoint }, environment))
    }

    /// Resolve everything, then run the certificate pre-check per the
    /// environment's policy.
    pub async fn connect(&self, resource: &Resource) -> anyhow::Result<Target> {
        let (target, environment) = self.resolve(resource)?;

        info!(env = %self.env, endpoint = %target.endpoint, "targeting NetBox");

        let verdict = tls::check(
            target.client.root_url(),
            environment.tls_check,
            Duration::from_secs(environment.timeout_secs),
        )
        .await?;

        if let TlsVerdict::Warned(err) = verdict {
            eprintln!("{} {err}", "Warning:".yellow().bold());
            eprintln!(
                "{}",
                "Continuing anyway (tls_check = \"warn\"). Set tls_check = \"enforce\" to abort instead."
                    .dimmed()
            );
        }

        Ok(target)
    }
}

/// Parse a `--data` payload. Must be a JSON object (or an array of objects
/// for bulk operations).
pub fn parse_data(raw: &str) -> anyhow::Result<Value> {
    let value: Value = serde_json::from_str(raw).context("--data is not valid JSON")?;
    match &value {
        Value::Object(_) => Ok(value),
        Value::Array(items) if !items.is_empty() && items.iter().all(Value::is_object) => Ok(value),
        _ => anyhow::bail!("--data must be a JSON object or a non-empty array of objects"),
    }
}

/// Pretty-print a JSON value to stdout.
pub fn print_json(value: &impl serde::Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::find;
    use std::io::Write;

    fn context_with(config: &str, token: Option<&str>) -> (Context, tempfile::NamedTempFile) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(config.as_bytes()).unwrap();
        let ctx = Context {
            config_path: file.path().to_path_buf(),
            env: "development".into(),
            token: token.map(String::from),
            output_format: OutputFormat::Pretty,
        };
        (ctx, file)
    }

    const CONFIG: &str = r#"
        [environments.development]
        api_root_url = "https://netbox.dev.example.net/"
        api_token = "0123456789abcdef"
        tls_check = "skip"

        [cmd.dcim.dcim_api_url]
        sites = "/api/dcim/sites/"
    "#;

    #[test]
    fn test_resolve_builds_endpoint() {
        let (ctx, _file) = context_with(CONFIG, None);
        let (target, env) = ctx.resolve(find("sites").unwrap()).unwrap();
        assert_eq!(target.endpoint.to_string(), "https://netbox.dev.example.net/api/dcim/sites/");
        assert_eq!(env.tls_check, netbox_client::tls::TlsCheck::Skip);
    }

    #[test]
    fn test_resolve_missing_suffix_key() {
        let (ctx, _file) = context_with(CONFIG, None);
        let err = ctx.resolve(find("devices").unwrap()).err().unwrap();
        assert!(err.to_string().contains("cmd.dcim.dcim_api_url.devices"));
    }

    #[test]
    fn test_resolve_requires_token() {
        let config = CONFIG.replace("api_token = \"0123456789abcdef\"", "");
        let (ctx, _file) = context_with(&config, None);
        assert!(ctx.resolve(find("sites").unwrap()).is_err());

        let (ctx, _file) = context_with(&config, Some("from-env-token"));
        assert!(ctx.resolve(find("sites").unwrap()).is_ok());
    }

    #[test]
    fn test_resolve_unknown_environment() {
        let (mut ctx, _file) = context_with(CONFIG, None);
        ctx.env = "production".into();
        let err = ctx.resolve(find("sites").unwrap()).err().unwrap();
        assert!(err.to_string().contains("Unknown environment: production"));
    }

    #[test]
    fn test_parse_data() {
        assert!(parse_data(r#"{"name": "ams1"}"#).is_ok());
        assert!(parse_data(r#"[{"name": "ams1"}, {"name": "fra1"}]"#).is_ok());
        assert!(parse_data("[]").is_err());
        assert!(parse_data("42").is_err());
        assert!(parse_data("{name: ams1}").is_err());
    }
}
