//! Authenticated request executor for the NetBox API.

use netbox_core::{NetboxError, Page, Result};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client as HttpClient, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// User-Agent sent with every request
const USER_AGENT: &str = concat!("netbox-cli/", env!("CARGO_PKG_VERSION"));

/// NetBox API client bound to one environment (root URL + token)
#[derive(Clone)]
pub struct NetboxClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    token: String,
    root_url: Url,
}

impl NetboxClient {
    /// Create a builder for the given API root and token
    #[must_use]
    pub fn builder(root_url: impl Into<String>, token: impl Into<String>) -> NetboxClientBuilder {
        NetboxClientBuilder::new(root_url, token)
    }

    /// API root this client was configured with
    #[must_use]
    pub fn root_url(&self) -> &Url {
        &self.inner.root_url
    }

    /// Perform exactly one request and decode the JSON response into `T`.
    ///
    /// Every request carries `Authorization: Token <token>`. A body, when
    /// present, is sent as `application/json`. Non-2xx responses become
    /// errors carrying the status and the server's detail message.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Option<&Value>,
    ) -> Result<T> {
        let response = self.send(method, url, body).await?;
        Self::handle_response(response).await
    }

    /// Like [`execute`](Self::execute), for responses without a body (e.g. `204 No Content`)
    pub async fn execute_empty(&self, method: Method, url: Url, body: Option<&Value>) -> Result<()> {
        let response = self.send(method, url, body).await?;
        Self::handle_empty_response(response).await
    }

    /// Perform a GET request
    pub async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        self.execute(Method::GET, url, None).await
    }

    /// Fetch one page of a list endpoint
    pub async fn list<T: DeserializeOwned>(&self, url: Url) -> Result<Page<T>> {
        self.execute(Method::GET, url, None).await
    }

    /// Perform a POST request with JSON body
    pub async fn post<T: DeserializeOwned>(&self, url: Url, body: &Value) -> Result<T> {
        self.execute(Method::POST, url, Some(body)).await
    }

    /// Perform a PATCH request with JSON body
    pub async fn patch<T: DeserializeOwned>(&self, url: Url, body: &Value) -> Result<T> {
        self.execute(Method::PATCH, url, Some(body)).await
    }

    /// Perform a DELETE request
    pub async fn delete(&self, url: Url) -> Result<()> {
        self.execute_empty(Method::DELETE, url, None).await
    }

    async fn send(&self, method: Method, url: Url, body: Option<&Value>) -> Result<reqwest::Response> {
        debug!(method = %method, url = %url, "sending request");

        let mut request = self
            .inner
            .http
            .request(method, url)
            .header(AUTHORIZATION, format!("Token {}", self.inner.token))
            .header(ACCEPT, "application/json");

        if let Some(body) = body {
            request = request.json(body);
        }

        request
            .send()
            .await
            .map_err(|e| NetboxError::Http(describe_error(&e)))
    }

    /// Handle an API response that returns JSON
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            let body = response
                .bytes()
                .await
                .map_err(|e| NetboxError::Http(describe_error(&e)))?;
            serde_json::from_slice(&body).map_err(NetboxError::Json)
        } else {
            Self::handle_error(status.as_u16(), response).await
        }
    }

    /// Handle an API response that returns no body
    async fn handle_empty_response(response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            Self::handle_error(status.as_u16(), response).await
        }
    }

    /// Convert an error response to a NetboxError
    async fn handle_error<T>(status: u16, response: reqwest::Response) -> Result<T> {
        let url = response.url().to_string();
        let body = response.text().await.unwrap_or_default();
        let message = error_detail(&body);

        match status {
            401 | 403 => Err(NetboxError::Unauthorized {
                code: status,
                message,
            }),
            404 => Err(NetboxError::NotFound {
                resource: format!("{url} ({message})"),
            }),
            _ => {
                if status >= 500 {
                    warn!(status, url = %url, "server error from NetBox");
                }
                Err(NetboxError::Api {
                    code: status,
                    message,
                })
            }
        }
    }
}

/// NetBox reports failures as `{"detail": "..."}`, and validation failures
/// as a map of field name to messages. Fall back to the raw body.
fn error_detail(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return body.trim().to_string();
    };

    if let Some(detail) = value.get("detail").and_then(Value::as_str) {
        return detail.to_string();
    }

    match value {
        Value::Object(fields) if !fields.is_empty() => fields
            .iter()
            .map(|(field, problems)| match problems {
                Value::Array(items) => {
                    let joined: Vec<String> = items
                        .iter()
                        .map(|p| p.as_str().map_or_else(|| p.to_string(), String::from))
                        .collect();
                    format!("{field}: {}", joined.join("; "))
                }
                other => format!("{field}: {other}"),
            })
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

/// Flatten an error and its sources into one line.
pub(crate) fn describe_error(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// Builder for configuring a [`NetboxClient`]
pub struct NetboxClientBuilder {
    root_url: String,
    token: String,
    timeout: Duration,
}

impl NetboxClientBuilder {
    /// Create a new builder for the given API root and token
    #[must_use]
    pub fn new(root_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            root_url: root_url.into(),
            token: token.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client
    pub fn build(self) -> Result<NetboxClient> {
        let root_url = Url::parse(&self.root_url)
            .map_err(|e| NetboxError::InvalidUrl(format!("{}: {e}", self.root_url)))?;

        if self.token.trim().is_empty() {
            return Err(NetboxError::Config("API token is empty".into()));
        }

        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .gzip(true)
            .build()
            .map_err(|e| NetboxError::Http(describe_error(&e)))?;

        Ok(NetboxClient {
            inner: Arc::new(ClientInner {
                http,
                token: self.token,
                root_url,
            }),
        })
    }
}
