//! Centralized constants for default endpoints, headers and pacing.

use std::time::Duration;

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/100.0.4896.127 Safari/537.36"
);

/// Only HTML is ever parsed.
pub(crate) const ACCEPT: &str = "text/html";

/// Registry origin; detail links are resolved against it.
pub(crate) const DEFAULT_BASE_URL: &str = "https://companieshouse.id/";

/// Search endpoint, relative to the base URL. The query goes into `term`.
pub(crate) const SEARCH_PATH: &str = "search";

/// Name of the search query parameter.
pub(crate) const SEARCH_TERM_PARAM: &str = "term";

/// Per-request timeout.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Courtesy delay before each upstream request.
pub(crate) const DEFAULT_PACING: Duration = Duration::from_secs(1);
