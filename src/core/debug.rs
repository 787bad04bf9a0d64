//! Debug dump helpers for development / troubleshooting.

use std::io::Write;
use url::Url;

/// Write a fetched page to `<tmp>/companieshouse_rs-<endpoint>-<slug>.html`.
pub(crate) fn dump_html(endpoint: &str, url: &Url, html: &str) -> std::io::Result<()> {
    let path = std::env::temp_dir().join(format!(
        "companieshouse_rs-{endpoint}-{}.html",
        slug(url)
    ));
    let mut f = std::fs::File::create(&path)?;
    f.write_all(html.as_bytes())?;
    tracing::debug!(path = %path.display(), "CH_DEBUG: wrote html dump");
    Ok(())
}

fn slug(url: &Url) -> String {
    let raw = match url.query() {
        Some(q) => format!("{}?{q}", url.path()),
        None => url.path().to_string(),
    };
    let mut out: String = raw
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    out.truncate(80);
    out
}
