//! # netbox-cli
//!
//! Command-line client for the NetBox network-inventory API.
//!
//! ## Features
//!
//! - **CRUD on any registered resource**: `list`, `get`, `create`, `update`, `delete`
//! - **Environments**: root URL, token and TLS policy per named deployment
//! - **Interactive pagination**: confirm before each further page is fetched
//! - **Legacy command names**: `getSites`, `getSiteById`, `createSite`, ...
//! - **Output**: colorized tables and field listings, or raw JSON

pub mod cli;
pub mod config;
pub mod exit_codes;
pub mod interactive;
pub mod output;
pub mod resources;

pub use cli::run;
