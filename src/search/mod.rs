//! Registry search: locate the detail page for a company name.

use scraper::{ElementRef, Html};
use url::Url;

use crate::core::client::SEARCH_TERM_PARAM;
use crate::core::{ChClient, ChError, net};
use crate::normalize::NormalizedName;

/// One anchor from the search results page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCandidate {
    /// Visible text of the anchor.
    pub text: String,
    /// Raw `href`, if present.
    pub href: Option<String>,
}

/// Every anchor in the document, in document order.
pub fn search_candidates(document: &Html) -> Vec<SearchCandidate> {
    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "a")
        .map(|el| SearchCandidate {
            text: el.text().collect(),
            href: el.value().attr("href").map(str::to_string),
        })
        .collect()
}

/// The search URL for `company_name`, with the name form-encoded into `term`.
#[must_use]
pub fn search_url_for(search: &Url, company_name: &str) -> Url {
    let mut url = search.clone();
    url.query_pairs_mut()
        .append_pair(SEARCH_TERM_PARAM, company_name);
    url
}

/// Find the first anchor whose normalized text equals the normalized query
/// and resolve its link against `base`.
///
/// # Errors
///
/// `ChError::NotFound` if no anchor matches; `ChError::MalformedLink` if the
/// matching anchor has no usable `href`.
pub fn match_detail_link(body: &str, company_name: &str, base: &Url) -> Result<Url, ChError> {
    let wanted = NormalizedName::new(company_name);
    let document = Html::parse_document(body);
    let candidates = search_candidates(&document);

    // A name that normalizes to nothing would match every anchor without text.
    let hit = if wanted.is_empty() {
        None
    } else {
        candidates
            .iter()
            .filter(|c| !c.text.trim().is_empty())
            .find(|c| wanted.matches(&c.text))
    };
    let Some(hit) = hit else {
        tracing::debug!(
            query = %company_name,
            normalized = %wanted,
            candidates = candidates.len(),
            "no search result matched"
        );
        return Err(ChError::NotFound {
            query: company_name.to_string(),
        });
    };

    let malformed = || ChError::MalformedLink {
        text: hit.text.trim().to_string(),
    };
    let href = hit
        .href
        .as_deref()
        .filter(|h| !h.trim().is_empty())
        .ok_or_else(malformed)?;

    base.join(href).map_err(|e| {
        tracing::debug!(href, error = %e, "cannot resolve search result link");
        malformed()
    })
}

/// Run the search request and return the absolute detail page URL.
///
/// # Errors
///
/// Network failures surface as `ChError::Http`/`ChError::Status`; matching
/// failures as documented on [`match_detail_link`].
#[tracing::instrument(skip_all, err, fields(query = %company_name))]
pub async fn resolve_detail_url(client: &ChClient, company_name: &str) -> Result<Url, ChError> {
    let url = search_url_for(client.search_url(), company_name);
    tracing::debug!(%url, "fetching search results");
    let body = net::get_html(client, &url, "search").await?;
    let detail = match_detail_link(&body, company_name, client.base_url())?;
    tracing::debug!(%detail, "search result matched");
    Ok(detail)
}
