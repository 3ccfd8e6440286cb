//! Core types and errors for the NetBox inventory API client.
//!
//! This crate provides the foundational types shared by the client and the CLI:
//!
//! - **Types**: the paginated list envelope [`Page`] returned by every list endpoint
//! - **Errors**: error handling with [`NetboxError`]
//!
//! Resource objects themselves are opaque here. Callers pick the decode target
//! (a typed struct or `serde_json::Value`) through the generic parameter of [`Page`].
//!
//! # Example
//!
//! ```rust
//! use netbox_core::Page;
//! use serde_json::Value;
//!
//! let body = r#"{"count":1,"next":null,"previous":null,"results":[{"id":7}]}"#;
//! let page: Page<Value> = serde_json::from_str(body).unwrap();
//! assert!(!page.has_next());
//! assert_eq!(page.results[0]["id"], 7);
//! ```

mod error;
pub mod types;

pub use error::{NetboxError, Result};
pub use types::*;
