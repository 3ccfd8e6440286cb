//! `netbox update` - Partially update an object.

use anyhow::Result;
use serde_json::Value;

use super::create::print_written;
use super::{parse_data, print_json, Context};
use crate::cli::args::UpdateArgs;
use crate::output::OutputFormat;
use crate::resources;

pub async fn execute(ctx: Context, args: UpdateArgs) -> Result<()> {
    let resource = resources::require(&args.resource)?;
    let payload = parse_data(&args.data)?;
    if payload.is_array() {
        anyhow::bail!("--data for update must be a single JSON object");
    }

    let target = ctx.connect(resource).await?;
    let updated: Value = target
        .client
        .patch(target.endpoint.object_url(args.id), &payload)
        .await?;

    match ctx.output_format {
        OutputFormat::Json => print_json(&updated)?,
        OutputFormat::Pretty => print_written(resource, "Updated", &updated),
    }

    Ok(())
}
