//! Minimal HTTP seam for the remote store.
//!
//! [`RemoteStore`](super::remote::RemoteStore) builds plain [`HttpRequest`] values and
//! interprets plain [`HttpResponse`] values; only [`ReqwestTransport`] touches the
//! network. Tests substitute [`StubTransport`].

use crate::error::{FolioError, Result};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Put,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub trait HttpTransport {
    /// Performs the request. Any response, including 4xx/5xx, is `Ok`; `Err` means no
    /// response was obtained.
    fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// Blocking reqwest client. No timeout is configured beyond reqwest's defaults.
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FolioError::Transport(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut builder = match request.method {
            Method::Get => self.client.get(request.url.as_str()),
            Method::Put => self.client.put(request.url.as_str()),
        };
        for (name, value) in &request.headers {
            builder = builder.header(*name, value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .map_err(|e| FolioError::Transport(format!("Request to {} failed: {}", request.url, e)))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| FolioError::Transport(format!("Failed to read response: {}", e)))?;
        debug!(method = ?request.method, url = %request.url, status, "remote store responded");

        Ok(HttpResponse { status, body })
    }
}

/// Canned-response transport that records every request it receives.
#[cfg(any(test, feature = "test_utils"))]
pub struct StubTransport {
    responses: std::cell::RefCell<std::collections::VecDeque<Result<HttpResponse>>>,
    requests: std::cell::RefCell<Vec<HttpRequest>>,
}

#[cfg(any(test, feature = "test_utils"))]
impl Default for StubTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "test_utils"))]
impl StubTransport {
    pub fn new() -> Self {
        Self {
            responses: std::cell::RefCell::new(std::collections::VecDeque::new()),
            requests: std::cell::RefCell::new(Vec::new()),
        }
    }

    /// Queues a response; responses are returned in queue order.
    pub fn respond(self, status: u16, body: &str) -> Self {
        self.responses.borrow_mut().push_back(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
        self
    }

    /// Queues a connection-level failure.
    pub fn fail(self, message: &str) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Err(FolioError::Transport(message.to_string())));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }
}

#[cfg(any(test, feature = "test_utils"))]
impl HttpTransport for StubTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(FolioError::Transport("no stubbed response".to_string())))
    }
}
