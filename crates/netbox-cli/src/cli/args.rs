//! Command-line argument definitions using clap.

use clap::builder::PossibleValuesParser;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_ENVIRONMENT;
use crate::output::OutputFormat;
use crate::resources;

/// Command-line client for the NetBox inventory API
///
/// Read, create, update and delete NetBox objects in a configured
/// environment. Legacy command names such as `getSites` or `getSiteById`
/// are accepted too.
#[derive(Parser, Debug)]
#[command(name = "netbox")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Environment to target, as named in the config file
    #[arg(short, long, env = "NETBOX_ENV", global = true, default_value = DEFAULT_ENVIRONMENT)]
    pub env: String,

    /// Config file (default: platform config dir)
    #[arg(short, long, env = "NETBOX_CLI_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// API token, overriding the environment's configured token
    #[arg(long, env = "NETBOX_API_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List objects of a resource, page by page
    List(ListArgs),

    /// Show one object by ID
    Get(IdArgs),

    /// Create an object from a JSON payload
    Create(CreateArgs),

    /// Partially update an object from a JSON payload
    Update(UpdateArgs),

    /// Delete an object by ID
    Delete(IdArgs),

    /// Show the resources this client knows about
    Resources,

    /// Inspect the CLI configuration
    Config(ConfigArgs),
}

fn resource_parser() -> PossibleValuesParser {
    PossibleValuesParser::new(resources::slugs())
}

// ============================================================================
// Read commands
// ============================================================================

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Resource to list (see `netbox resources`)
    #[arg(value_parser = resource_parser())]
    pub resource: String,

    /// Filter query string, e.g. "site=ams1&status=active"
    #[arg(short, long)]
    pub query: Option<String>,
}

#[derive(Args, Debug)]
pub struct IdArgs {
    /// Resource the object belongs to
    #[arg(value_parser = resource_parser())]
    pub resource: String,

    /// Object ID
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    pub id: u64,
}

// ============================================================================
// Write commands
// ============================================================================

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Resource to create
    #[arg(value_parser = resource_parser())]
    pub resource: String,

    /// JSON payload, e.g. '{"name": "ams1", "slug": "ams1"}'
    #[arg(short, long)]
    pub data: String,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Resource the object belongs to
    #[arg(value_parser = resource_parser())]
    pub resource: String,

    /// Object ID
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    pub id: u64,

    /// JSON payload with the fields to change
    #[arg(short, long)]
    pub data: String,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show configured environments (tokens masked)
    Show,

    /// Show config file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["netbox", "list", "sites"]).unwrap();
        assert_eq!(cli.env, "development");
        assert_eq!(cli.verbose, 0);
        match cli.command {
            Commands::List(args) => {
                assert_eq!(args.resource, "sites");
                assert!(args.query.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["netbox", "get", "devices", "--id", "7", "--env", "production", "-vv"]).unwrap();
        assert_eq!(cli.env, "production");
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Get(IdArgs { id: 7, .. })));
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(Cli::try_parse_from(["netbox", "list", "widgets"]).is_err());
        assert!(Cli::try_parse_from(["netbox", "get", "sites", "--id", "0"]).is_err());
        assert!(Cli::try_parse_from(["netbox", "get", "sites"]).is_err());
        assert!(Cli::try_parse_from(["netbox", "create", "sites"]).is_err());
    }
}
