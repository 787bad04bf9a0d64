use url::Url;

use crate::core::{ChClient, ChError};

/// GET `url` and return the body as text.
///
/// Transport failures and timeouts surface as `ChError::Http`; any non-2xx
/// status as `ChError::Status`. With the `debug-dumps` feature and
/// `CH_DEBUG=1`, the body is also written to the temp directory.
pub(crate) async fn get_html(
    client: &ChClient,
    url: &Url,
    _endpoint: &str,
) -> Result<String, ChError> {
    let resp = client.http().get(url.clone()).send().await?;

    if !resp.status().is_success() {
        return Err(ChError::Status {
            status: resp.status().as_u16(),
            url: url.to_string(),
        });
    }

    let text = resp.text().await?;
    tracing::debug!(%url, bytes = text.len(), "fetched upstream page");

    #[cfg(feature = "debug-dumps")]
    {
        if std::env::var("CH_DEBUG").ok().as_deref() == Some("1")
            && let Err(e) = crate::core::debug::dump_html(_endpoint, url, &text)
        {
            tracing::warn!(error = %e, "CH_DEBUG: failed to write html dump");
        }
    }

    Ok(text)
}
