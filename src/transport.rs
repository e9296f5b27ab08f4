use super::constants::DEFAULT_TIMEOUT;
use super::{Error, Result};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use std::fmt::{self, Debug};
use std::time::Duration;

/// HTTP method of an ECP request. Queries are `Get`, everything that changes
/// device state is `Post`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestType {
    Get,
    Post,
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
        }
    }
}

/// Sends a single ECP request
///
/// A successful call means the device answered `200 OK`; the body is returned as is.
/// Implementations map `401` to [`Error::Unauthorized`], any other status to
/// [`Error::Status`], and must not retry.
#[async_trait]
pub trait Transport: Debug + Send + Sync {
    async fn send(&self, request: RequestType, url: &str) -> Result<Vec<u8>>;
}

/// [`Transport`] backed by reqwest. Every request gets its own client so no
/// connection outlives the call that opened it.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    timeout: Duration,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT))
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: RequestType, url: &str) -> Result<Vec<u8>> {
        log::trace!(target: "rokuecp::transport", "{} {}", request, url);

        let client = Client::builder()
            .timeout(self.timeout)
            .pool_max_idle_per_host(0)
            .build()?;

        let res = match request {
            RequestType::Get => client.get(url).send().await?,
            RequestType::Post => client.post(url).body("").send().await?,
        };

        match res.status() {
            StatusCode::OK => Ok(res.bytes().await?.to_vec()),
            StatusCode::UNAUTHORIZED => Err(Error::Unauthorized),
            status => {
                log::debug!(target: "rokuecp::transport", "{} {} -> {}", request, url, status);
                Err(Error::Status(status.as_u16()))
            }
        }
    }
}
