use super::http::{HttpRequest, HttpResponse, HttpTransport, Method};
use super::Backend;
use crate::error::{FolioError, Result};
use crate::model::Item;
use crate::secret::Secret;
use serde::Deserialize;
use tracing::{debug, warn};

/// Response bodies the document endpoint may return.
///
/// With `X-Bin-Meta: false` JSONBin answers with the bare array; without it (or from
/// other compatible hosts) the array sits under `record` next to a metadata object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RemotePayload {
    Bare(Vec<Item>),
    Enveloped { record: Vec<Item> },
}

impl RemotePayload {
    pub fn parse(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|e| {
            debug!(error = %e, "remote body did not match any payload shape");
            FolioError::Transport("Unexpected JSON from remote store".to_string())
        })
    }

    pub fn into_items(self) -> Vec<Item> {
        match self {
            RemotePayload::Bare(items) => items,
            RemotePayload::Enveloped { record } => record,
        }
    }
}

/// The collection as a hosted JSON document.
///
/// `read` is `GET <endpoint>/latest`, `write` is `PUT <endpoint>` with the whole array.
/// Every write replaces the document; the last writer wins.
pub struct RemoteStore<T: HttpTransport> {
    transport: T,
    endpoint: String,
    secret: Option<Secret>,
}

impl<T: HttpTransport> RemoteStore<T> {
    pub fn new(transport: T, endpoint: &str, secret: Option<Secret>) -> Self {
        Self {
            transport,
            endpoint: endpoint.trim().trim_end_matches('/').to_string(),
            secret,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn has_secret(&self) -> bool {
        self.secret.is_some()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn read_url(&self) -> String {
        format!("{}/latest", self.endpoint)
    }

    fn base_headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![("Accept", "application/json".to_string())];
        if let Some(secret) = &self.secret {
            headers.push(("X-Master-Key", secret.expose().to_string()));
        }
        headers
    }

    fn check(&self, response: HttpResponse) -> Result<HttpResponse> {
        if response.is_success() {
            return Ok(response);
        }
        let err = FolioError::from_status(response.status);
        if matches!(err, FolioError::Unauthorized) {
            warn!(
                status = response.status,
                has_secret = self.has_secret(),
                "remote store rejected credentials"
            );
        }
        Err(err)
    }
}

impl<T: HttpTransport> Backend for RemoteStore<T> {
    fn read(&self) -> Result<Vec<Item>> {
        let mut headers = self.base_headers();
        headers.push(("X-Bin-Meta", "false".to_string()));
        let request = HttpRequest {
            method: Method::Get,
            url: self.read_url(),
            headers,
            body: None,
        };

        let response = self.check(self.transport.send(request)?)?;
        let items = RemotePayload::parse(&response.body)?.into_items();
        debug!(count = items.len(), "read remote collection");
        Ok(items)
    }

    fn write(&self, items: &[Item]) -> Result<()> {
        let mut headers = self.base_headers();
        headers.push(("Content-Type", "application/json".to_string()));
        let body = serde_json::to_string(items).map_err(FolioError::Serialization)?;
        let request = HttpRequest {
            method: Method::Put,
            url: self.endpoint.clone(),
            headers,
            body: Some(body),
        };

        self.check(self.transport.send(request)?)?;
        debug!(count = items.len(), "wrote remote collection");
        Ok(())
    }
}
