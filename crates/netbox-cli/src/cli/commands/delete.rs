//! `netbox delete` - Delete an object by ID.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::IdArgs;
use crate::output::OutputFormat;
use crate::resources;

pub async fn execute(ctx: Context, args: IdArgs) -> Result<()> {
    let resource = resources::require(&args.resource)?;
    let target = ctx.connect(resource).await?;

    target.client.delete(target.endpoint.object_url(args.id)).await?;

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "deleted": args.id, "resource": resource.slug }));
        }
        OutputFormat::Pretty => {
            println!(
                "{} {} {} deleted.",
                "Success:".green().bold(),
                resource.singular,
                format!("#{}", args.id).cyan()
            );
        }
    }

    Ok(())
}
