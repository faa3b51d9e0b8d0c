//! HTTP reference catalog backed by `ureq`.

use async_trait::async_trait;
use std::fmt;
use std::time::Duration;

use crate::task::{
    domain::ReferenceRecord,
    ports::{ReferenceCatalog, ReferenceError, ReferenceResult},
};

/// Catalog endpoint used when none is configured.
pub const DEFAULT_REFERENCE_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// Request timeout used when none is configured.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Reference catalog fetched from a JSON endpoint.
///
/// Every call issues a fresh `GET` with no parameters and expects a JSON
/// array of objects carrying a `title` string. The blocking request runs on
/// the runtime's blocking pool.
#[derive(Clone)]
pub struct HttpReferenceCatalog {
    agent: ureq::Agent,
    url: String,
}

impl HttpReferenceCatalog {
    /// Creates a catalog reading from `url` with the given request timeout.
    #[must_use]
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            agent,
            url: url.into(),
        }
    }

    /// Returns the endpoint URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpReferenceCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_REFERENCE_URL, DEFAULT_REQUEST_TIMEOUT)
    }
}

impl fmt::Debug for HttpReferenceCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpReferenceCatalog")
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ReferenceCatalog for HttpReferenceCatalog {
    async fn fetch_records(&self) -> ReferenceResult<Vec<ReferenceRecord>> {
        let agent = self.agent.clone();
        let url = self.url.clone();
        run_blocking(move || fetch_blocking(&agent, &url)).await
    }
}

fn fetch_blocking(agent: &ureq::Agent, url: &str) -> ReferenceResult<Vec<ReferenceRecord>> {
    let response = agent.get(url).call().map_err(|err| match err {
        ureq::Error::Status(code, _) => ReferenceError::Status(code),
        ureq::Error::Transport(transport) => ReferenceError::transport(transport),
    })?;
    response
        .into_json::<Vec<ReferenceRecord>>()
        .map_err(ReferenceError::decode)
}

/// Runs a blocking request without stalling the async executor's workers.
async fn run_blocking<F, T>(f: F) -> ReferenceResult<T>
where
    F: FnOnce() -> ReferenceResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(ReferenceError::transport)?
}
