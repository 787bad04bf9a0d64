use crate::common::{client_with_timeout, fixture, mock_detail, mock_search, setup_server};
use companieshouse_rs::{ChError, FailureKind, resolve_company};
use httpmock::Method::GET;
use std::time::Duration;

#[tokio::test]
async fn search_timeout_is_network_error_and_skips_detail() {
    let server = setup_server();
    let body = fixture("search_results");
    let search = server.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(200)
            .header("content-type", "text/html")
            .delay(Duration::from_millis(1500))
            .body(body);
    });
    let detail = mock_detail(&server, "/c/1", "detail_full");
    let client = client_with_timeout(&server, Duration::from_millis(200));

    let err = resolve_company(&client, "acme inc").await.unwrap_err();

    assert!(matches!(err, ChError::Http(ref e) if e.is_timeout()), "got {err:?}");
    assert_eq!(err.kind(), FailureKind::Network);
    assert!(search.calls() <= 1);
    detail.assert_calls(0);
}

#[tokio::test]
async fn search_non_2xx_is_status_error() {
    let server = setup_server();
    let search = server.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(503).body("upstream down");
    });
    let client = client_with_timeout(&server, Duration::from_secs(5));

    let err = resolve_company(&client, "acme inc").await.unwrap_err();
    search.assert();

    match err {
        ChError::Status { status, url } => {
            assert_eq!(status, 503);
            assert!(url.contains("/search?term=acme+inc"), "{url}");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn detail_non_2xx_is_network_error() {
    let server = setup_server();
    let search = mock_search(&server, "acme inc", "search_results");
    let detail = server.mock(|when, then| {
        when.method(GET).path("/c/1");
        then.status(404).body("gone");
    });
    let client = client_with_timeout(&server, Duration::from_secs(5));

    let err = resolve_company(&client, "acme inc").await.unwrap_err();
    search.assert();
    detail.assert();

    assert!(err.is_network(), "got {err:?}");
}

#[tokio::test]
async fn headers_identify_as_browser_html_client() {
    let server = setup_server();
    let body = fixture("search_results");
    let search = server.mock(|when, then| {
        when.method(GET)
            .path("/search")
            .header("accept", "text/html")
            .header_exists("user-agent");
        then.status(200).body(body);
    });
    let detail = mock_detail(&server, "/c/2", "detail_full");
    let client = client_with_timeout(&server, Duration::from_secs(5));

    resolve_company(&client, "Other Co").await.unwrap();
    search.assert();
    detail.assert();
}
