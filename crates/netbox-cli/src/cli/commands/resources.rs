//! `netbox resources` - Show the resources this client knows about.

use anyhow::Result;
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};
use tracing::debug;

use super::{print_json, Context};
use crate::output::OutputFormat;
use crate::resources::RESOURCES;

#[derive(Tabled)]
struct ResourceRow {
    #[tabled(rename = "Resource")]
    slug: &'static str,
    #[tabled(rename = "Config Key")]
    suffix_key: &'static str,
    #[tabled(rename = "Path")]
    path: String,
}

pub fn execute(ctx: Context) -> Result<()> {
    // The listing is useful before any config exists, so a broken or missing
    // file only hides the resolved paths.
    let config = match ctx.config() {
        Ok(config) => Some(config),
        Err(err) => {
            debug!(error = %err, "no usable config, showing keys only");
            None
        }
    };

    let rows: Vec<ResourceRow> = RESOURCES
        .iter()
        .map(|r| ResourceRow {
            slug: r.slug,
            suffix_key: r.suffix_key,
            path: config
                .as_ref()
                .and_then(|c| c.suffix(r.suffix_key).ok())
                .map_or_else(|| "(not configured)".to_string(), String::from),
        })
        .collect();

    match ctx.output_format {
        OutputFormat::Json => {
            let listing: Vec<_> = RESOURCES
                .iter()
                .zip(&rows)
                .map(|(r, row)| {
                    serde_json::json!({
                        "resource": r.slug,
                        "suffix_key": r.suffix_key,
                        "path": row.path,
                        "fields": r.fields.iter().map(|f| f.path).collect::<Vec<_>>(),
                    })
                })
                .collect();
            print_json(&listing)?;
        }
        OutputFormat::Pretty => {
            println!("{}", "Known Resources:".bold());
            println!();
            println!("{}", Table::new(&rows).with(Style::rounded()));
            println!();
            println!(
                "{}",
                "Legacy names work too: getSites, getSiteById, createSite, updateSite, deleteSite".dimmed()
            );
        }
    }

    Ok(())
}
