//! netbox - command-line client for the NetBox inventory API.

use colored::Colorize;
use netbox_cli::exit_codes;

#[tokio::main]
async fn main() {
    if let Err(err) = netbox_cli::run().await {
        tracing::debug!(error = ?err, "command failed");
        eprintln!("{} {err:#}", "Error:".red().bold());
        std::process::exit(exit_codes::ERROR);
    }
}
