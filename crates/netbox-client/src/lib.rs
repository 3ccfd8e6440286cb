//! HTTP client for the NetBox inventory API.
//!
//! This crate provides the generic pieces every resource command reuses:
//!
//! - [`NetboxClient`]: one authenticated request, decoded into any `DeserializeOwned` target
//! - [`Endpoint`]: API root plus a resource path suffix
//! - [`tls`]: certificate pre-check of the configured host
//! - [`paginate`]: operator-confirmed walk over `next` links

#![doc(html_root_url = "https://docs.rs/netbox-client/0.3.0")]

mod client;
mod endpoint;
pub mod paginate;
pub mod tls;

pub use client::{NetboxClient, NetboxClientBuilder};
pub use endpoint::Endpoint;
pub use netbox_core::{NetboxError, Page, Result};
pub use reqwest::Method;
