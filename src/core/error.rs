use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum ChError {
    /// The company name was missing or blank.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A transport-level failure (connect, TLS, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The registry returned an unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// No search result matched the query by normalized name.
    #[error("no search result matches '{query}'")]
    NotFound {
        /// The query as supplied by the caller.
        query: String,
    },

    /// A matching search result was found but its link is unusable.
    #[error("search result '{text}' has no usable link")]
    MalformedLink {
        /// Display text of the matched anchor.
        text: String,
    },

    /// The detail page was fetched but none of the target fields could be read.
    #[error("no fields could be extracted from {url}")]
    ExtractionFailed {
        /// The detail page URL.
        url: String,
    },

    /// A configured URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Any other invalid client setting (e.g. a header value).
    #[error("invalid client configuration: {0}")]
    Config(String),
}

/// Coarse failure category, used for logging and boundary mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    InvalidInput,
    Network,
    NotFound,
    MalformedLink,
    ExtractionFailed,
    Config,
}

impl ChError {
    /// Collapses the variant into its failure category.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::InvalidInput(_) => FailureKind::InvalidInput,
            Self::Http(_) | Self::Status { .. } => FailureKind::Network,
            Self::NotFound { .. } => FailureKind::NotFound,
            Self::MalformedLink { .. } => FailureKind::MalformedLink,
            Self::ExtractionFailed { .. } => FailureKind::ExtractionFailed,
            Self::Url(_) | Self::Config(_) => FailureKind::Config,
        }
    }

    /// True for transport failures, timeouts and non-2xx responses.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self.kind(), FailureKind::Network)
    }
}
