//! `netbox create` - Create objects from a JSON payload.

use anyhow::Result;
use colored::Colorize;
use serde_json::Value;

use super::{parse_data, print_json, Context};
use crate::cli::args::CreateArgs;
use crate::output::{render, OutputFormat};
use crate::resources::{self, Resource};

pub async fn execute(ctx: Context, args: CreateArgs) -> Result<()> {
    let resource = resources::require(&args.resource)?;
    let payload = parse_data(&args.data)?;

    let target = ctx.connect(resource).await?;
    let created: Value = target.client.post(target.endpoint.list_url(None), &payload).await?;

    match ctx.output_format {
        OutputFormat::Json => print_json(&created)?,
        OutputFormat::Pretty => print_written(resource, "Created", &created),
    }

    Ok(())
}

/// Print the object(s) a write returned. Bulk writes return an array.
pub(super) fn print_written(resource: &Resource, verb: &str, written: &Value) {
    let objects: Vec<&Value> = match written {
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    };

    let noun = if objects.len() == 1 {
        resource.singular
    } else {
        resource.plural
    };
    println!("{} {} {noun}.", format!("{verb}:").green().bold(), objects.len());
    println!();

    for object in objects {
        println!("{}", render::object(resource, object));
    }
}
