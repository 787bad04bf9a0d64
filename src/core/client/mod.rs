//! Public client surface + builder.
//! Defaults (UA, endpoints, timeout, pacing) live in `constants`; the
//! pre-request delay policy lives in `pacing`.

mod constants;
mod pacing;

pub use pacing::Pacing;

use crate::core::ChError;
use crate::profile::ExtractionConfig;
use constants::{ACCEPT, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, SEARCH_PATH, USER_AGENT};
use reqwest::Client;
use reqwest::header::{self, HeaderMap, HeaderValue};
use std::time::Duration;
use url::Url;

pub(crate) use constants::SEARCH_TERM_PARAM;

/// Handle to the company registry.
///
/// Cloning is cheap; clones share the connection pool but nothing else, so
/// concurrent lookups never observe each other's state.
#[derive(Debug, Clone)]
pub struct ChClient {
    http: Client,
    base_url: Url,
    search_url: Url,
    pacing: Pacing,
    extraction: ExtractionConfig,
}

impl Default for ChClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl ChClient {
    /// Create a new builder.
    pub fn builder() -> ChClientBuilder {
        ChClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Origin that relative detail links are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Search endpoint, without the query parameter.
    pub fn search_url(&self) -> &Url {
        &self.search_url
    }

    pub fn pacing(&self) -> &Pacing {
        &self.pacing
    }

    pub fn extraction(&self) -> &ExtractionConfig {
        &self.extraction
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct ChClientBuilder {
    user_agent: Option<String>,
    accept: Option<String>,
    base_url: Option<Url>,
    search_url: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    pacing: Option<Pacing>,
    extraction: Option<ExtractionConfig>,
}

impl ChClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the `Accept` header (default `text/html`).
    #[must_use]
    pub fn accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = Some(accept.into());
        self
    }

    /// Override the registry origin (e.g., `https://companieshouse.id/`).
    ///
    /// Unless [`search_url`](Self::search_url) is also set, the search endpoint
    /// becomes `<base>/search`.
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the search endpoint.
    #[must_use]
    pub fn search_url(mut self, url: Url) -> Self {
        self.search_url = Some(url);
        self
    }

    /// Per-request timeout. Default: 10 seconds.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Delay policy before each upstream request. Default: fixed 1 second.
    #[must_use]
    pub fn pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = Some(pacing);
        self
    }

    /// Labels and element kinds used when reading detail pages.
    #[must_use]
    pub fn extraction(mut self, cfg: ExtractionConfig) -> Self {
        self.extraction = Some(cfg);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns `ChError::Url` if a default URL fails to parse, `ChError::Config`
    /// for an invalid header value and `ChError::Http` if the HTTP client cannot
    /// be constructed.
    pub fn build(self) -> Result<ChClient, ChError> {
        let base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        let search_url = match self.search_url {
            Some(u) => u,
            None => base_url.join(SEARCH_PATH)?,
        };

        let accept = self.accept.as_deref().unwrap_or(ACCEPT);
        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_str(accept)
                .map_err(|e| ChError::Config(format!("accept header `{accept}`: {e}")))?,
        );

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .default_headers(headers)
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT));

        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(ChClient {
            http,
            base_url,
            search_url,
            pacing: self.pacing.unwrap_or_default(),
            extraction: self.extraction.unwrap_or_default(),
        })
    }
}
