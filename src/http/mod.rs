//! Basic HTTP Protocol abstraction for the XING API.
//!
//! Call specifications never talk to the network themselves. They hand a finished
//! [`RequestData`] to an execution engine implementing [`ClientSync`] or [`ClientAsync`] and
//! receive back a raw [`Response`]. Every HTTP status is a valid [`Response`]; only failures to
//! talk to the server at all are reported as [`Error`].

use crate::domain::SecretString;
use secrecy::ExposeSecret;
use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;
use thiserror::Error;

#[cfg(feature = "http-ureq")]
pub mod ureq_client;

#[cfg(feature = "http-reqwest")]
pub mod reqwest_client;

#[cfg(all(test, any(feature = "http-ureq", feature = "http-reqwest")))]
mod test_server;

pub(crate) const DEFAULT_HOST_URL: &str = "https://api.xing.com";
pub(crate) const DEFAULT_USER_AGENT: &str = "xing-api-rs/0.1.0";

/// HTTP method.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Method {
    Delete,
    Get,
    Put,
    Post,
    Patch,
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::Delete => "DELETE".fmt(f),
            Method::Get => "GET".fmt(f),
            Method::Put => "PUT".fmt(f),
            Method::Post => "POST".fmt(f),
            Method::Patch => "PATCH".fmt(f),
        }
    }
}

/// HTTP Request representation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RequestData {
    pub(crate) method: Method,
    pub(crate) url: String,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) body: Option<Vec<u8>>,
}

impl RequestData {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Set a header, replacing any previous value stored under the same (case-insensitive) key.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        self.headers.retain(|(k, _)| !k.eq_ignore_ascii_case(&key));
        self.headers.push((key, value.into()));
        self
    }

    pub fn bearer_token(self, token: &str) -> Self {
        self.header("authorization", format!("Bearer {token}"))
    }

    pub fn json_bytes(mut self, bytes: Vec<u8>) -> Self {
        self.body = Some(bytes);
        self.header("Content-Type", "application/json")
    }

    pub fn method(&self) -> Method {
        self.method
    }

    /// Path and query of the request, relative to the engine's base url.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn header_value(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }
}

/// HTTP Response Object
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Response {
    pub(crate) status: u16,
    pub(crate) body: Option<Vec<u8>>,
}

impl Response {
    pub fn new(status: u16, body: Option<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.filter(|b| !b.is_empty()),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Parse the body as a generic json document. A missing body is treated as `null`.
    pub fn as_json_value(&self) -> std::result::Result<serde_json::Value, serde_json::Error> {
        match &self.body {
            Some(b) => serde_json::from_slice(b),
            None => Ok(serde_json::Value::Null),
        }
    }
}

/// Errors that may occur during an HTTP request, mostly related to network.
#[derive(Debug, Error)]
pub enum Error {
    #[error("A redirect error occurred at '{0}: {1}")]
    Redirect(String, #[source] anyhow::Error),
    #[error("Connection timed out")]
    Timeout(#[source] anyhow::Error),
    #[error("Connection error: {0}")]
    Connection(#[source] anyhow::Error),
    #[error("Request/Response body error: {0}")]
    Request(#[source] anyhow::Error),
    #[error("Unexpected error occurred: {0}")]
    Other(#[source] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ProxyProtocol {
    Https,
    Socks5,
}

#[derive(Debug, Clone)]
pub struct ProxyAuth {
    pub username: String,
    pub password: SecretString,
}

#[derive(Debug, Clone)]
pub struct Proxy {
    pub protocol: ProxyProtocol,
    pub auth: Option<ProxyAuth>,
    pub url: String,
    pub port: u16,
}

impl Proxy {
    pub fn as_url(&self) -> String {
        let protocol = match self.protocol {
            ProxyProtocol::Https => "https",
            ProxyProtocol::Socks5 => "socks5",
        };

        match &self.auth {
            Some(auth) => format!(
                "{protocol}://{}:{}@{}:{}",
                auth.username,
                auth.password.expose_secret(),
                self.url,
                self.port
            ),
            None => format!("{protocol}://{}:{}", self.url, self.port),
        }
    }
}

/// Builder for an http client
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    request_timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: String,
    proxy_url: Option<Proxy>,
    allow_http: bool,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            base_url: DEFAULT_HOST_URL.to_string(),
            request_timeout: None,
            connect_timeout: None,
            proxy_url: None,
            allow_http: false,
        }
    }

    /// Set the user agent to be submitted with every request.
    pub fn user_agent(mut self, agent: &str) -> Self {
        self.user_agent = agent.to_string();
        self
    }

    /// Set server's base url. By default the XING API server url is used.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Set the full request timeout. By default there is no timeout.
    pub fn request_timeout(mut self, duration: Duration) -> Self {
        self.request_timeout = Some(duration);
        self
    }

    /// Set the connection timeout. By default there is no timeout.
    pub fn connect_timeout(mut self, duration: Duration) -> Self {
        self.connect_timeout = Some(duration);
        self
    }

    /// Specify proxy URL for the builder.
    pub fn with_proxy(mut self, proxy: Proxy) -> Self {
        self.proxy_url = Some(proxy);
        self
    }

    /// Allow plain http connections. Only meant for local test servers.
    pub fn allow_http(mut self) -> Self {
        self.allow_http = true;
        self
    }

    pub fn build<T: TryFrom<ClientBuilder, Error = anyhow::Error>>(
        self,
    ) -> std::result::Result<T, anyhow::Error> {
        T::try_from(self)
    }
}

/// Join the engine base url with a request url, collapsing the `/` at the seam.
#[allow(unused)] // it is used by the http implementations
pub(crate) fn join_url(base_url: &str, url: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        url.trim_start_matches('/')
    )
}

/// Abstraction for request creation, this can enable wrapping of request creations to add
/// signatures, tokens or other headers.
pub trait RequestFactory {
    fn new_request(&self, method: Method, url: &str) -> RequestData;
}

/// Default request factory, creates basic requests.
#[derive(Debug, Copy, Clone, Default)]
pub struct DefaultRequestFactory {}

impl RequestFactory for DefaultRequestFactory {
    fn new_request(&self, method: Method, url: &str) -> RequestData {
        RequestData::new(method, url)
    }
}

/// HTTP Client abstraction Sync.
pub trait ClientSync {
    fn execute(&self, request: &RequestData) -> Result<Response>;
}

/// HTTP Client abstraction Async.
///
/// Dropping the returned future must abort the pending request.
pub trait ClientAsync {
    fn execute_async(
        &self,
        request: &RequestData,
    ) -> Pin<Box<dyn Future<Output = Result<Response>> + Send>>;
}
