//! Certificate pre-check of the configured NetBox host.
//!
//! Before the first request of a command the CLI probes the API root over a
//! certificate-verifying connection. What happens on failure is decided by
//! [`TlsCheck`], configured per environment.

use crate::client::describe_error;
use netbox_core::{NetboxError, Result};
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// What to do when the certificate probe fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TlsCheck {
    /// Report the failure and continue with the request
    #[default]
    Warn,
    /// Abort the command before any request is sent
    Enforce,
    /// Do not probe at all
    Skip,
}

impl std::fmt::Display for TlsCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warn => write!(f, "warn"),
            Self::Enforce => write!(f, "enforce"),
            Self::Skip => write!(f, "skip"),
        }
    }
}

/// Result of applying a [`TlsCheck`] policy.
#[derive(Debug)]
pub enum TlsVerdict {
    /// Certificate verified
    Valid,
    /// Probe not run
    Skipped,
    /// Probe failed but the policy lets the command continue
    Warned(NetboxError),
}

/// Confirm that `root` presents a certificate the TLS stack accepts.
///
/// Any HTTP response, whatever its status, proves the handshake succeeded.
pub async fn verify_certificate(root: &Url, timeout: Duration) -> Result<()> {
    let host = root.host_str().unwrap_or_default().to_string();

    if root.scheme() != "https" {
        return Err(NetboxError::Tls {
            host,
            reason: format!("{root} is not served over https"),
        });
    }

    let http = HttpClient::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| NetboxError::Http(describe_error(&e)))?;

    debug!(url = %root, "probing TLS certificate");

    match http.head(root.clone()).send().await {
        Ok(response) => {
            debug!(status = %response.status(), "certificate accepted");
            Ok(())
        }
        Err(e) => Err(NetboxError::Tls {
            host,
            reason: describe_error(&e),
        }),
    }
}

/// Run the probe according to `policy`.
///
/// Only [`TlsCheck::Enforce`] turns a failed probe into an error.
pub async fn check(root: &Url, policy: TlsCheck, timeout: Duration) -> Result<TlsVerdict> {
    if policy == TlsCheck::Skip {
        debug!(url = %root, "TLS certificate check skipped by policy");
        return Ok(TlsVerdict::Skipped);
    }

    match verify_certificate(root, timeout).await {
        Ok(()) => Ok(TlsVerdict::Valid),
        Err(err) if policy == TlsCheck::Warn => {
            warn!(error = %err, "continuing despite failed certificate check");
            Ok(TlsVerdict::Warned(err))
        }
        Err(err) => Err(err),
    }
}
