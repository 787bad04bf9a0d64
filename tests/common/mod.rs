#![allow(dead_code)]

use companieshouse_rs::{ChClient, Pacing};
use httpmock::{Method::GET, Mock, MockServer};
use std::{fs, path::Path, time::Duration};
use url::Url;

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(format!("{name}.html"));
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn base_url(server: &MockServer) -> Url {
    Url::parse(&format!("{}/", server.base_url())).unwrap()
}

/// Client pointed at the mock server, without pacing.
pub fn client_for(server: &MockServer) -> ChClient {
    ChClient::builder()
        .base_url(base_url(server))
        .pacing(Pacing::Disabled)
        .build()
        .unwrap()
}

pub fn client_with_timeout(server: &MockServer, timeout: Duration) -> ChClient {
    ChClient::builder()
        .base_url(base_url(server))
        .pacing(Pacing::Disabled)
        .timeout(timeout)
        .build()
        .unwrap()
}

pub fn mock_search<'a>(server: &'a MockServer, term: &'a str, fixture_name: &str) -> Mock<'a> {
    let body = fixture(fixture_name);
    server.mock(|when, then| {
        when.method(GET).path("/search").query_param("term", term);
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(body);
    })
}

pub fn mock_detail<'a>(server: &'a MockServer, path: &'a str, fixture_name: &str) -> Mock<'a> {
    let body = fixture(fixture_name);
    server.mock(|when, then| {
        when.method(GET).path(path);
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(body);
    })
}
