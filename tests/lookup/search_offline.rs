use crate::common::{base_url, client_for, mock_search, setup_server};
use companieshouse_rs::{ChError, resolve_detail_url};

#[tokio::test]
async fn search_matches_by_normalized_name() {
    let server = setup_server();
    let mock = mock_search(&server, "acme inc", "search_results");
    let client = client_for(&server);

    let url = resolve_detail_url(&client, "acme inc").await.unwrap();
    mock.assert();

    assert_eq!(url, base_url(&server).join("/c/1").unwrap());
}

#[tokio::test]
async fn first_match_in_document_order_wins() {
    let server = setup_server();
    let mock = mock_search(&server, "PT. Buka Bumi Konstruksi", "search_results");
    let client = client_for(&server);

    let url = resolve_detail_url(&client, "PT. Buka Bumi Konstruksi")
        .await
        .unwrap();
    mock.assert();

    assert_eq!(url.path(), "/company/pt-buka-bumi-konstruksi");
}

#[tokio::test]
async fn prefix_is_not_a_match() {
    let server = setup_server();
    let mock = mock_search(&server, "PT Buka", "search_results");
    let client = client_for(&server);

    let err = resolve_detail_url(&client, "PT Buka").await.unwrap_err();
    mock.assert();

    match err {
        ChError::NotFound { query } => assert_eq!(query, "PT Buka"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn matched_anchor_without_href_is_malformed() {
    let server = setup_server();
    let mock = mock_search(&server, "cv tanpa tautan", "search_results");
    let client = client_for(&server);

    let err = resolve_detail_url(&client, "cv tanpa tautan")
        .await
        .unwrap_err();
    mock.assert();

    assert!(
        matches!(err, ChError::MalformedLink { ref text } if text == "CV. Tanpa Tautan"),
        "got {err:?}"
    );
}
