//! `netbox get` - Show one object by ID.

use anyhow::Result;
use netbox_core::Page;
use serde_json::Value;

use super::{print_json, Context};
use crate::cli::args::IdArgs;
use crate::output::{render, OutputFormat};
use crate::resources;

pub async fn execute(ctx: Context, args: IdArgs) -> Result<()> {
    let resource = resources::require(&args.resource)?;
    let target = ctx.connect(resource).await?;

    // Filtering the list endpoint keeps an unknown ID a normal, empty answer.
    let page: Page<Value> = target.client.list(target.endpoint.filter_by_id(args.id)).await?;

    let Some(object) = page.results.first() else {
        match ctx.output_format {
            OutputFormat::Json => print_json(&Value::Null)?,
            OutputFormat::Pretty => println!("{}", render::not_found_id(resource, args.id)),
        }
        return Ok(());
    };

    match ctx.output_format {
        OutputFormat::Json => print_json(object)?,
        OutputFormat::Pretty => print!("{}", render::object(resource, object)),
    }

    Ok(())
}
