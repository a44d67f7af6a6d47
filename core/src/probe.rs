//! # Version Prober
//!
//! Asks a single instance for its running version with one `GET <base>/version`.
//!
//! A probe never fails its caller. Every outcome is reduced to a display string:
//! * a body is reported verbatim, whatever the status code,
//! * `404` means the instance predates the endpoint and maps to [`LEGACY_VERSION`],
//! * anything else becomes `fetch failed: <error>`.
//!
//! There are no retries. Without a configured timeout the transport default is the
//! only bound on a hung instance.

use std::error::Error as StdError;
use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Reported for instances that answer `404` on `/version`.
pub const LEGACY_VERSION: &str = "0.3.1-";

const VERSION_SEGMENT: &str = "version";

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("{0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("{}", error_chain(.0))]
    Transport(#[from] reqwest::Error),
    #[error("timed out after {0:?}")]
    TimedOut(Duration),
    #[error("task aborted: {0}")]
    Aborted(String),
}

/// Tagged result of one probe, flattened to text only when displayed.
#[derive(Debug)]
pub enum VersionOutcome {
    Reported(String),
    Legacy,
    Failed(ProbeError),
}

impl fmt::Display for VersionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionOutcome::Reported(version) => f.write_str(version),
            VersionOutcome::Legacy => f.write_str(LEGACY_VERSION),
            VersionOutcome::Failed(err) => write!(f, "fetch failed: {err}"),
        }
    }
}

/// Anything able to report an instance version for a base URL.
#[async_trait]
pub trait VersionProbe: Send + Sync {
    async fn fetch_version(&self, base_url: &str) -> String;
}

/// Probes instances over HTTP.
#[derive(Debug, Clone)]
pub struct HttpVersionProbe {
    client: Client,
    timeout: Option<Duration>,
}

impl HttpVersionProbe {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self::with_client(Client::new(), timeout)
    }

    pub fn with_client(client: Client, timeout: Option<Duration>) -> Self {
        Self { client, timeout }
    }

    pub async fn probe(&self, base_url: &str) -> VersionOutcome {
        let url: Url = match version_url(base_url) {
            Ok(url) => url,
            Err(e) => return VersionOutcome::Failed(e.into()),
        };
        debug!(host = url.host_str().unwrap_or_default(), "probing instance version");

        match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, self.request(url)).await {
                Ok(outcome) => outcome,
                Err(_elapsed) => VersionOutcome::Failed(ProbeError::TimedOut(limit)),
            },
            None => self.request(url).await,
        }
    }

    async fn request(&self, url: Url) -> VersionOutcome {
        // Credentials in the URL are moved into a basic-auth header by reqwest.
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => return VersionOutcome::Failed(e.into()),
        };

        if response.status() == StatusCode::NOT_FOUND {
            return VersionOutcome::Legacy;
        }

        match response.bytes().await {
            Ok(body) => VersionOutcome::Reported(String::from_utf8_lossy(&body).into_owned()),
            Err(e) => VersionOutcome::Failed(e.into()),
        }
    }
}

impl Default for HttpVersionProbe {
    fn default() -> Self {
        Self::new(None)
    }
}

#[async_trait]
impl VersionProbe for HttpVersionProbe {
    async fn fetch_version(&self, base_url: &str) -> String {
        self.probe(base_url).await.to_string()
    }
}

/// Joins `/version` onto the base URL path without doubling or dropping slashes.
pub fn version_url(base_url: &str) -> Result<Url, url::ParseError> {
    let mut url: Url = Url::parse(base_url)?;
    let path: String = format!("{}/{VERSION_SEGMENT}", url.path().trim_end_matches('/'));
    url.set_path(&path);
    Ok(url)
}

fn error_chain(err: &reqwest::Error) -> String {
    let mut rendered: String = err.to_string();
    let mut source: Option<&dyn StdError> = err.source();
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
