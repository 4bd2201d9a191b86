//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use url::Url;

use crate::domain::{ApiKey, ValidationError};
use crate::transport::routes::Route;

mod contacts;
mod domains;
mod emails;

pub use contacts::ContactsClient;
pub use domains::DomainsClient;
pub use emails::EmailsClient;

/// Default Unsend API base URL.
pub const DEFAULT_BASE_URL: &str = "https://app.unsend.dev/";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
pub(crate) struct HttpResponse {
    pub(crate) status: u16,
    pub(crate) body: String,
}

pub(crate) trait HttpTransport: Send + Sync {
    fn send<'a>(
        &'a self,
        method: Method,
        path: &'a str,
        body: Option<String>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
    base_url: Url,
    api_key: ApiKey,
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(
        &'a self,
        method: Method,
        path: &'a str,
        body: Option<String>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let url = self.base_url.join(path)?;
            let mut request = self
                .client
                .request(method, url)
                .bearer_auth(self.api_key.as_str());
            if let Some(body) = body {
                request = request
                    .header(reqwest::header::CONTENT_TYPE, "application/json")
                    .body(body);
            }
            let response = request.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// How non-success HTTP statuses are handled.
pub enum ResponseMode {
    /// Non-2xx responses become [`UnsendError::HttpStatus`], preserving the
    /// status code and raw body.
    #[default]
    Strict,
    /// Compatibility with older Unsend SDKs: email and listing operations
    /// decode the body regardless of status, and contact mutations return
    /// `None`/`false` on anything but exact 200, discarding the error body.
    Lenient,
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`UnsendClient`] operations.
pub enum UnsendError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc). Timeouts
    /// are not distinguished from other transport failures.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status returned by the server (strict mode only).
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body could not be decoded; the raw body is kept for
    /// diagnostics.
    #[error("decode error: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// Request body could not be serialized.
    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// The configured base URL is not a valid URL.
    #[error("invalid base URL: {0}")]
    BaseUrl(#[source] url::ParseError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

pub(crate) fn decode_error(source: serde_json::Error, body: &str) -> UnsendError {
    UnsendError::Decode {
        source,
        body: body.to_owned(),
    }
}

fn non_empty_body(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        None
    } else {
        Some(body.to_owned())
    }
}

/// Immutable configuration shared by all three resource clients.
pub(crate) struct Shared {
    pub(crate) http: Arc<dyn HttpTransport>,
    pub(crate) mode: ResponseMode,
}

impl Shared {
    pub(crate) async fn dispatch(
        &self,
        route: Route,
        body: Option<String>,
    ) -> Result<HttpResponse, UnsendError> {
        self.http
            .send(route.method, &route.path, body)
            .await
            .map_err(UnsendError::Transport)
    }

    /// In strict mode, reject non-2xx responses; lenient mode decodes
    /// whatever came back.
    pub(crate) fn check_status(&self, response: &HttpResponse) -> Result<(), UnsendError> {
        if self.mode == ResponseMode::Strict && !(200..=299).contains(&response.status) {
            return Err(UnsendError::HttpStatus {
                status: response.status,
                body: non_empty_body(&response.body),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
/// Builder for [`UnsendClient`].
///
/// Use this when you need to customize the base URL, timeout, user-agent, or
/// response mode.
pub struct UnsendClientBuilder {
    api_key: ApiKey,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    response_mode: ResponseMode,
}

impl UnsendClientBuilder {
    /// Create a builder with the default base URL and strict response mode.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
            response_mode: ResponseMode::default(),
        }
    }

    /// Override the API base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Select how non-success HTTP statuses are handled.
    pub fn response_mode(mut self, mode: ResponseMode) -> Self {
        self.response_mode = mode;
        self
    }

    /// Build an [`UnsendClient`].
    pub fn build(self) -> Result<UnsendClient, UnsendError> {
        let base_url = Url::parse(&self.base_url).map_err(UnsendError::BaseUrl)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }
        let client = builder
            .build()
            .map_err(|err| UnsendError::Transport(Box::new(err)))?;

        let shared = Arc::new(Shared {
            http: Arc::new(ReqwestTransport {
                client,
                base_url,
                api_key: self.api_key,
            }),
            mode: self.response_mode,
        });
        Ok(UnsendClient::from_shared(shared))
    }
}

#[derive(Clone)]
/// High-level Unsend client.
///
/// Owns one transport configuration (API key + base URL) and exposes the
/// three resource clients. All operations are single-attempt and stateless;
/// concurrent calls need no synchronization.
pub struct UnsendClient {
    emails: EmailsClient,
    contacts: ContactsClient,
    domains: DomainsClient,
}

impl std::fmt::Debug for UnsendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnsendClient").finish_non_exhaustive()
    }
}

impl UnsendClient {
    /// Create a client against the default base URL in strict mode.
    ///
    /// For more customization, use [`UnsendClient::builder`].
    pub fn new(api_key: ApiKey) -> Result<Self, UnsendError> {
        Self::builder(api_key).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: ApiKey) -> UnsendClientBuilder {
        UnsendClientBuilder::new(api_key)
    }

    pub(crate) fn from_shared(shared: Arc<Shared>) -> Self {
        Self {
            emails: EmailsClient::new(Arc::clone(&shared)),
            contacts: ContactsClient::new(Arc::clone(&shared)),
            domains: DomainsClient::new(shared),
        }
    }

    /// Operations on the email resource.
    pub fn emails(&self) -> &EmailsClient {
        &self.emails
    }

    /// Operations on contacts, scoped by contact book.
    pub fn contacts(&self) -> &ContactsClient {
        &self.contacts
    }

    /// Operations on sending domains.
    pub fn domains(&self) -> &DomainsClient {
        &self.domains
    }
}
