//! UReq HTTP client implementation.

use crate::http::{join_url, ClientBuilder, ClientSync, Error, Method, RequestData, Response};
use std::io;
use std::io::Read;
use ureq;

/// Largest response body we are willing to buffer.
const MAX_BODY_SIZE: u64 = 10_000_000;

pub struct UReqClient {
    agent: ureq::Agent,
    base_url: String,
}

impl TryFrom<ClientBuilder> for UReqClient {
    type Error = anyhow::Error;

    fn try_from(value: ClientBuilder) -> Result<Self, Self::Error> {
        let mut builder = ureq::AgentBuilder::new();

        if let Some(d) = value.request_timeout {
            builder = builder.timeout(d);
        }

        if let Some(d) = value.connect_timeout {
            builder = builder.timeout_connect(d)
        }

        if let Some(proxy) = value.proxy_url {
            let proxy = ureq::Proxy::new(proxy.as_url())?;
            builder = builder.proxy(proxy);
        }

        let agent = builder
            .https_only(!value.allow_http)
            .user_agent(&value.user_agent)
            .build();

        Ok(Self {
            agent,
            base_url: value.base_url,
        })
    }
}

impl From<ureq::Transport> for Error {
    fn from(t: ureq::Transport) -> Self {
        match t.kind() {
            ureq::ErrorKind::InvalidUrl => Error::Request(t.into()),
            ureq::ErrorKind::UnknownScheme => Error::Request(t.into()),
            ureq::ErrorKind::Dns => Error::Connection(t.into()),
            ureq::ErrorKind::InsecureRequestHttpsOnly => Error::Request(t.into()),
            ureq::ErrorKind::ConnectionFailed => Error::Connection(t.into()),
            ureq::ErrorKind::TooManyRedirects => Error::Redirect(
                t.url()
                    .map(|u| u.to_string())
                    .unwrap_or("Unknown url".to_string()),
                t.into(),
            ),
            ureq::ErrorKind::BadStatus => Error::Request(t.into()),
            ureq::ErrorKind::BadHeader => Error::Request(t.into()),
            ureq::ErrorKind::Io => {
                if is_timeout(&t) {
                    Error::Timeout(t.into())
                } else {
                    Error::Connection(t.into())
                }
            }
            ureq::ErrorKind::InvalidProxyUrl => Error::Connection(t.into()),
            ureq::ErrorKind::ProxyConnect => Error::Connection(t.into()),
            ureq::ErrorKind::ProxyUnauthorized => Error::Connection(t.into()),
            ureq::ErrorKind::HTTP => Error::Request(t.into()),
        }
    }
}

fn is_timeout(t: &ureq::Transport) -> bool {
    use std::error::Error as _;
    t.source()
        .and_then(|s| s.downcast_ref::<io::Error>())
        .map(|e| matches!(e.kind(), io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock))
        .unwrap_or(false)
}

impl ClientSync for UReqClient {
    fn execute(&self, request: &RequestData) -> Result<Response, Error> {
        let final_url = join_url(&self.base_url, &request.url);
        let mut ureq_request = match request.method {
            Method::Delete => self.agent.delete(&final_url),
            Method::Get => self.agent.get(&final_url),
            Method::Put => self.agent.put(&final_url),
            Method::Post => self.agent.post(&final_url),
            Method::Patch => self.agent.patch(&final_url),
        };

        for (header, value) in &request.headers {
            ureq_request = ureq_request.set(header, value);
        }

        let result = if let Some(body) = &request.body {
            ureq_request.send_bytes(body)
        } else {
            ureq_request.call()
        };

        // Error statuses are regular responses for the call specification to decode.
        let ureq_response = match result {
            Ok(r) => r,
            Err(ureq::Error::Status(_, r)) => r,
            Err(ureq::Error::Transport(t)) => return Err(t.into()),
        };

        let status = ureq_response.status();
        let body = safe_read_body(ureq_response)
            .map_err(|e| Error::Request(anyhow::anyhow!("Failed to read response body {e}")))?;

        Ok(Response::new(status, Some(body)))
    }
}

fn safe_read_body(response: ureq::Response) -> Result<Vec<u8>, io::Error> {
    let mut vec = vec![];

    if let Some(length) = response.header("Content-Length") {
        if let Ok(len) = length.parse::<usize>() {
            if len == 0 {
                return Ok(vec![]);
            }
            vec.reserve(len.min(MAX_BODY_SIZE as usize));
        }
    }

    let _ = response
        .into_reader()
        .take(MAX_BODY_SIZE)
        .read_to_end(&mut vec)?;

    Ok(vec)
}
