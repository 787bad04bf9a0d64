use crate::common::{base_url, client_for, mock_detail, setup_server};
use companieshouse_rs::profile::{
    BUSINESS_NUMBER, CITY, LEGAL_ENTITY_TYPE, REGISTERED_ADDRESS, REGISTERED_NAME,
};
use companieshouse_rs::{ChError, FieldValue, TARGET_FIELDS, fetch_detail};

#[tokio::test]
async fn all_five_fields_resolve() {
    let server = setup_server();
    let mock = mock_detail(&server, "/company/pt-buka-bumi-konstruksi", "detail_full");
    let client = client_for(&server);
    let url = base_url(&server)
        .join("/company/pt-buka-bumi-konstruksi")
        .unwrap();

    let profile = fetch_detail(&client, &url).await.unwrap();
    mock.assert();

    assert_eq!(profile.url(), &url);
    assert_eq!(profile.fields().resolved_count(), 5);
    assert_eq!(
        profile.get(REGISTERED_NAME).as_deref(),
        Some("PT BUKA BUMI KONSTRUKSI")
    );
    assert_eq!(
        profile.get(LEGAL_ENTITY_TYPE).as_deref(),
        Some("Perseroan Terbatas")
    );
    assert_eq!(
        profile.get(BUSINESS_NUMBER).as_deref(),
        Some("AHU-0012345.AH.01.01")
    );
    assert_eq!(
        profile.get(REGISTERED_ADDRESS).as_deref(),
        Some("Jl. Jend. Sudirman Kav. 52-53Senayan, Kebayoran Baru")
    );
    assert_eq!(profile.get(CITY).as_deref(), Some("Jakarta Selatan"));

    let labels: Vec<_> = profile.fields().iter().map(|f| f.label.as_str()).collect();
    assert_eq!(labels, TARGET_FIELDS);
}

#[tokio::test]
async fn missing_value_container_is_partial_success() {
    let server = setup_server();
    let mock = mock_detail(&server, "/company/pt-buka-bumi", "detail_missing_address");
    let client = client_for(&server);
    let url = base_url(&server).join("/company/pt-buka-bumi").unwrap();

    let profile = fetch_detail(&client, &url).await.unwrap();
    mock.assert();

    assert_eq!(
        profile.get(REGISTERED_ADDRESS).as_deref(),
        Some("Value container not found using sibling traversal for Registered address")
    );
    assert_eq!(
        profile.fields().field(REGISTERED_ADDRESS).map(|f| &f.value),
        Some(&FieldValue::ValueContainerNotFound)
    );
    assert_eq!(profile.fields().resolved_count(), 4);
    assert_eq!(profile.get(REGISTERED_NAME).as_deref(), Some("PT BUKA BUMI"));
    assert_eq!(profile.get(CITY).as_deref(), Some("Surabaya"));
}

#[tokio::test]
async fn page_without_labels_fails_extraction() {
    let server = setup_server();
    let mock = mock_detail(&server, "/company/gone", "detail_no_labels");
    let client = client_for(&server);
    let url = base_url(&server).join("/company/gone").unwrap();

    let err = fetch_detail(&client, &url).await.unwrap_err();
    mock.assert();

    match err {
        ChError::ExtractionFailed { url: failed } => assert!(failed.ends_with("/company/gone")),
        other => panic!("expected ExtractionFailed, got {other:?}"),
    }
}
