use scraper::Html;
use url::Url;

use crate::core::{ChClient, ChError, net};

use super::extract::{ExtractionConfig, extract_fields};
use super::model::CompanyProfile;

/// Fetch a detail page and read the configured fields from it.
///
/// # Errors
///
/// Returns `ChError::Http`/`ChError::Status` when the page cannot be fetched
/// and `ChError::ExtractionFailed` when not a single field resolves.
#[tracing::instrument(skip_all, err, fields(url = %url))]
pub async fn fetch_detail(client: &ChClient, url: &Url) -> Result<CompanyProfile, ChError> {
    let body = net::get_html(client, url, "detail").await?;
    profile_from_html(&body, url, client.extraction())
}

/// Parse a detail page body into a profile. Exposed for offline use.
///
/// # Errors
///
/// Returns `ChError::ExtractionFailed` if every field is a not-found marker.
pub fn profile_from_html(
    body: &str,
    url: &Url,
    cfg: &ExtractionConfig,
) -> Result<CompanyProfile, ChError> {
    let document = Html::parse_document(body);
    let fields = extract_fields(&document, cfg);

    if !fields.has_resolved() {
        tracing::warn!(%url, "detail page has none of the expected fields");
        return Err(ChError::ExtractionFailed {
            url: url.to_string(),
        });
    }

    tracing::debug!(
        %url,
        resolved = fields.resolved_count(),
        total = fields.len(),
        "detail page extracted"
    );
    Ok(CompanyProfile::new(url.clone(), fields))
}
