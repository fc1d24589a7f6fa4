//! Client layer: orchestrates transport calls and maps transport ↔ domain.

mod campaign;
mod ecomm;
mod folder;
mod gmonkey;
mod helper;
mod list;
mod stats;
#[cfg(test)]
mod testing;

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, trace, warn};
use url::Url;

use crate::domain::{ApiKey, ErrorCode, JsonDocument, Method, Params, Scheme, ValidationError};
use crate::transport::DecodeError;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: Value,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: Value,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            // `json` sets `Content-Type: application/json`.
            let response = self.client.post(url).json(&body).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`MailChimpClient`].
///
/// Nothing is retried; every failure reaches the caller as one of these.
pub enum MailChimpError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, body read).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code without a MailChimp error envelope.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// MailChimp answered with an `{"error": ..., "code": ...}` envelope.
    #[error("API error {code}: {message}")]
    Remote { code: ErrorCode, message: String },

    /// Response body could not be decoded into the method's result type.
    #[error("malformed response: {0}")]
    MalformedResponse(#[source] Box<dyn StdError + Send + Sync>),

    /// The method needs parameters and none were given; nothing was sent.
    #[error("missing required parameters for {method}")]
    MissingParameters { method: Method },

    /// The configured endpoint is not a valid absolute URL.
    #[error("invalid endpoint URL '{0}'")]
    InvalidEndpoint(String),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl MailChimpError {
    /// API error code, for [`MailChimpError::Remote`].
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Remote { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl From<DecodeError> for MailChimpError {
    fn from(err: DecodeError) -> Self {
        Self::MalformedResponse(Box::new(err))
    }
}

#[derive(Debug, Clone)]
/// Builder for [`MailChimpClient`].
///
/// Use this when you need to change the scheme, endpoint, timeout, or user-agent.
pub struct MailChimpClientBuilder {
    api_key: ApiKey,
    scheme: Scheme,
    endpoint: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl MailChimpClientBuilder {
    /// Create a builder for `https` on the key's datacenter with a 30 second timeout.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            scheme: Scheme::Https,
            endpoint: None,
            timeout: Some(DEFAULT_TIMEOUT),
            user_agent: None,
        }
    }

    /// Choose `https` (default) or plain `http` for the datacenter URL.
    pub fn scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Replace the datacenter URL (`https://us1.api.mailchimp.com/1.3/`), e.g.
    /// with a proxy or a local test server. The method selector is still
    /// appended as `?method=<name>`.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Let requests wait indefinitely.
    pub fn no_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`MailChimpClient`].
    pub fn build(self) -> Result<MailChimpClient, MailChimpError> {
        let base_url = self.resolve_base_url()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| MailChimpError::Transport(Box::new(err)))?;

        debug!(%base_url, "created MailChimp client");
        Ok(MailChimpClient {
            api_key: self.api_key,
            base_url,
            http: Arc::new(ReqwestTransport { client }),
        })
    }

    fn resolve_base_url(&self) -> Result<Url, MailChimpError> {
        match &self.endpoint {
            Some(endpoint) => Url::parse(endpoint)
                .map_err(|_| MailChimpError::InvalidEndpoint(endpoint.clone())),
            None => crate::transport::base_url(self.scheme, self.api_key.datacenter()).map_err(
                |_| MailChimpError::InvalidEndpoint(self.api_key.datacenter().to_owned()),
            ),
        }
    }
}

#[derive(Clone)]
/// High-level MailChimp 1.3 client.
///
/// Holds the API key and the datacenter URL; both are fixed at construction.
/// Every method is one POST to `https://<dc>.api.mailchimp.com/1.3/?method=<name>`
/// with the parameters plus `apikey` as a JSON body.
///
/// Parameters are taken by reference and copied, so a single [`Params`] value
/// can be shared by concurrent calls.
///
/// Errors (every operation method):
/// - Returns [`MailChimpError::Transport`] when the request cannot complete,
/// - [`MailChimpError::Remote`] when MailChimp answers with an error envelope,
/// - [`MailChimpError::HttpStatus`] for other non-2xx HTTP responses,
/// - [`MailChimpError::MalformedResponse`] when the body does not match the result type.
pub struct MailChimpClient {
    api_key: ApiKey,
    base_url: Url,
    http: Arc<dyn HttpTransport>,
}

impl MailChimpClient {
    /// Create a client for the key's datacenter.
    ///
    /// For more customization, use [`MailChimpClient::builder`].
    pub fn new(api_key: ApiKey, scheme: Scheme) -> Result<Self, MailChimpError> {
        Self::builder(api_key).scheme(scheme).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: ApiKey) -> MailChimpClientBuilder {
        MailChimpClientBuilder::new(api_key)
    }

    /// Key sent as `apikey` with every request.
    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Base URL requests are sent to (without the method selector).
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Call any method and return the raw response after the error check.
    ///
    /// Useful for methods whose documented schema is known to be wrong.
    pub async fn call_raw(
        &self,
        method: Method,
        params: Option<&Params>,
    ) -> Result<JsonDocument, MailChimpError> {
        self.call_json(method, params).await
    }

    async fn execute(
        &self,
        method: Method,
        params: Option<&Params>,
    ) -> Result<String, MailChimpError> {
        let url = crate::transport::method_url(&self.base_url, method);
        let body = crate::transport::encode_request(method, &self.api_key, params);

        debug!(%method, %url, "calling MailChimp");
        let response = self
            .http
            .post_json(url.as_str(), body)
            .await
            .map_err(MailChimpError::Transport)?;
        trace!(%method, status = response.status, body = %response.body, "MailChimp response");

        if let Some(envelope) = crate::transport::probe_error(&response.body) {
            warn!(%method, code = envelope.code, message = %envelope.message, "MailChimp returned an error");
            return Err(MailChimpError::Remote {
                code: ErrorCode::new(envelope.code),
                message: envelope.message,
            });
        }

        if !(200..=299).contains(&response.status) {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(MailChimpError::HttpStatus {
                status: response.status,
                body,
            });
        }

        Ok(response.body)
    }

    async fn call_json<T: DeserializeOwned>(
        &self,
        method: Method,
        params: Option<&Params>,
    ) -> Result<T, MailChimpError> {
        let body = self.execute(method, params).await?;
        Ok(crate::transport::decode_json(method, &body)?)
    }

    async fn call_bool(
        &self,
        method: Method,
        params: Option<&Params>,
    ) -> Result<bool, MailChimpError> {
        let body = self.execute(method, params).await?;
        Ok(crate::transport::decode_bool(&body)?)
    }

    async fn call_int(&self, method: Method, params: Option<&Params>) -> Result<i64, MailChimpError> {
        let body = self.execute(method, params).await?;
        Ok(crate::transport::decode_int(&body)?)
    }

    async fn call_string(
        &self,
        method: Method,
        params: Option<&Params>,
    ) -> Result<String, MailChimpError> {
        let body = self.execute(method, params).await?;
        Ok(crate::transport::decode_string(&body)?)
    }
}
