//! `netbox list` - List objects of a resource, page by page.

use anyhow::Result;
use netbox_client::paginate::{PaginationOutcome, Paginator};
use netbox_core::Page;
use serde_json::Value;
use tracing::info;

use super::Context;
use crate::cli::args::ListArgs;
use crate::exit_codes;
use crate::interactive::LinePrompt;
use crate::output::{render, OutputFormat};
use crate::resources;

pub async fn execute(ctx: Context, args: ListArgs) -> Result<()> {
    let resource = resources::require(&args.resource)?;
    let target = ctx.connect(resource).await?;
    let url = target.endpoint.list_url(args.query.as_deref());

    let mut total = 0;
    let mut paginator = Paginator::new(&target.client, LinePrompt::stdio());

    let outcome = paginator
        .run(url, |page: &Page<Value>| {
            total = page.count;
            match ctx.output_format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(page)?),
                OutputFormat::Pretty => println!("{}", render::page(resource, page)),
            }
            Ok(())
        })
        .await?;

    info!(pages = outcome.pages(), total, "pagination finished");

    match outcome {
        PaginationOutcome::Done { .. } => {
            if ctx.output_format == OutputFormat::Pretty && total > 0 {
                println!();
                println!("{}", render::done_banner(resource, total));
            }
            Ok(())
        }
        PaginationOutcome::Declined { .. } => std::process::exit(exit_codes::SUCCESS),
    }
}
