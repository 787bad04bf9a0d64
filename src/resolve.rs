//! End-to-end lookup: search → match → detail page → fields.

use crate::core::{ChClient, ChError};
use crate::profile::{CompanyProfile, fetch_detail};
use crate::search::resolve_detail_url;

/// Resolve a company name to its registry profile.
///
/// Issues exactly two sequential requests (search, then detail), each preceded
/// by the client's [`Pacing`](crate::Pacing) delay. Nothing is retried; a
/// failing stage ends the lookup.
///
/// # Errors
///
/// `ChError::InvalidInput` for a blank name, otherwise whatever the failing
/// stage reported (see [`ChError::kind`]).
#[tracing::instrument(skip_all, err, fields(name = %name))]
pub async fn resolve_company(client: &ChClient, name: &str) -> Result<CompanyProfile, ChError> {
    if name.trim().is_empty() {
        return Err(ChError::InvalidInput(
            "company name must not be empty".into(),
        ));
    }

    client.pacing().pause().await;
    let detail_url = resolve_detail_url(client, name).await.inspect_err(|e| {
        tracing::warn!(kind = ?e.kind(), error = %e, "search stage failed");
    })?;

    client.pacing().pause().await;
    fetch_detail(client, &detail_url).await.inspect_err(|e| {
        tracing::warn!(kind = ?e.kind(), url = %detail_url, error = %e, "detail stage failed");
    })
}
