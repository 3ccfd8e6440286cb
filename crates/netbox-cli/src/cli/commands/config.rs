//! `netbox config` - CLI configuration inspection.

use anyhow::Result;
use colored::Colorize;

use super::{print_json, Context};
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::mask;
use crate::output::OutputFormat;

pub fn execute(ctx: Context, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(&ctx),
        ConfigCommands::Path => show_path(&ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let config = ctx.config()?;

    match ctx.output_format {
        OutputFormat::Json => {
            let mut masked = config.clone();
            for env in masked.environments.values_mut() {
                env.api_token = env.masked_token();
            }
            print_json(&masked)?;
        }
        OutputFormat::Pretty => {
            println!("{} {}", "Config file:".bold(), ctx.config_path.display());
            println!();

            if config.environments.is_empty() {
                println!("  {}", "No environments configured.".yellow());
            }

            for (name, env) in &config.environments {
                let marker = if *name == ctx.env { " (selected)".green().to_string() } else { String::new() };
                println!("{}{marker}", name.cyan().bold());
                println!("  {} {}", "api_root_url:".bold(), env.api_root_url);
                println!("  {} {}", "api_token:".bold(), env.masked_token());
                println!("  {} {}", "tls_check:".bold(), env.tls_check);
                println!("  {} {}s", "timeout:".bold(), env.timeout_secs);
                println!();
            }

            if let Some(token) = &ctx.token {
                println!("{} {}", "Token override:".bold(), mask(token));
            }

            println!("{} {}", "Suffix keys:".bold(), count_suffixes(&config.cmd));
        }
    }

    Ok(())
}

fn count_suffixes(table: &toml::Table) -> usize {
    table
        .values()
        .map(|value| match value {
            toml::Value::Table(nested) => count_suffixes(nested),
            toml::Value::String(_) => 1,
            _ => 0,
        })
        .sum()
}

fn show_path(ctx: &Context) -> Result<()> {
    println!("{}", ctx.config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_suffixes() {
        let table: toml::Table = toml::from_str(
            r#"
            [dcim.dcim_api_url]
            sites = "/api/dcim/sites/"
            racks = "/api/dcim/racks/"

            [ipam.ipam_api_url]
            prefixes = "/api/ipam/prefixes/"
            "#,
        )
        .unwrap();
        assert_eq!(count_suffixes(&table), 3);
    }
}
