//! Integration tests for single-call conversions using mocked HTTP responses
//!
//! These tests use wiremock to simulate the NCBI PMC ID Converter API.

mod common;

use common::{create_mock_converter, query_param};
use pmc_idconv_client::{ConversionRequest, ConversionResult, IdType};
use tracing_test::traced_test;
use wiremock::matchers::{method, query_param as query_param_matcher};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
#[traced_test]
async fn test_convert_end_to_end() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param_matcher("ids", "16923184,28913292"))
        .and(query_param_matcher("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "records": [
                {"pmid": "16923184", "pmcid": "PMC1325230", "doi": "10.1/x"},
                {"pmid": "28913292"}
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let converter = create_mock_converter(&mock_server);
    let request = ConversionRequest::new(["16923184", "28913292"]);

    let results = converter
        .convert(&request)
        .await
        .expect("Conversion should succeed");

    assert_eq!(
        results,
        vec![
            ConversionResult {
                requested_id: Some("16923184".to_string()),
                pmid: Some("16923184".to_string()),
                pmcid: Some("PMC1325230".to_string()),
                doi: Some("10.1/x".to_string()),
            },
            ConversionResult {
                requested_id: Some("28913292".to_string()),
                pmid: Some("28913292".to_string()),
                pmcid: None,
                doi: None,
            },
        ]
    );
}

#[tokio::test]
async fn test_convert_sends_expected_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"records": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let converter = create_mock_converter(&mock_server);
    let request = ConversionRequest::new(["7611378", "PMC1325230"]).with_id_type(IdType::Pmcid);

    converter.convert(&request).await.unwrap();

    let received = mock_server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);

    let sent = &received[0];
    assert_eq!(query_param(sent, "ids").as_deref(), Some("7611378,PMC1325230"));
    assert_eq!(query_param(sent, "format").as_deref(), Some("json"));
    assert_eq!(query_param(sent, "versions").as_deref(), Some("no"));
    assert_eq!(query_param(sent, "idtype").as_deref(), Some("pmcid"));
    assert_eq!(query_param(sent, "tool").as_deref(), Some("pmc-idconv-client-tests"));
    assert_eq!(query_param(sent, "email").as_deref(), Some("test@example.com"));
}

#[tokio::test]
async fn test_convert_with_versions_omits_flag() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"records": []})))
        .mount(&mock_server)
        .await;

    let converter = create_mock_converter(&mock_server);
    let request = ConversionRequest::new(["16923184"]).with_versions(true);

    converter.convert(&request).await.unwrap();

    let received = mock_server.received_requests().await.unwrap();
    assert_eq!(query_param(&received[0], "versions"), None);
    assert_eq!(query_param(&received[0], "idtype"), None);
}

#[tokio::test]
async fn test_pmcid_hint_resolves_to_prefixed_form() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param_matcher("idtype", "pmcid"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "records": [{"pmcid": "PMC7611378", "pmid": "33125423"}]
        })))
        .mount(&mock_server)
        .await;

    let converter = create_mock_converter(&mock_server);
    let request = ConversionRequest::new(["7611378"]).with_id_type(IdType::Pmcid);

    let results = converter.convert(&request).await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].requested_id.as_deref(), Some("PMC7611378"));
    assert_eq!(results[0].pmid.as_deref(), Some("33125423"));
}

#[tokio::test]
async fn test_missing_records_yields_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "error",
            "message": "invalid article id"
        })))
        .mount(&mock_server)
        .await;

    let converter = create_mock_converter(&mock_server);
    let results = converter
        .convert(&ConversionRequest::new(["not-an-id"]))
        .await
        .expect("Missing records should not be an error");

    assert!(results.is_empty());
}

#[tokio::test]
async fn test_unresolved_identifiers_are_omitted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "records": [{"pmid": "2794350", "pmcid": "PMC2794350"}]
        })))
        .mount(&mock_server)
        .await;

    let converter = create_mock_converter(&mock_server);
    let request = ConversionRequest::new(["2794350", "3676833", "33125423"]);

    let results = converter.convert(&request).await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].requested_id.as_deref(), Some("2794350"));
}

#[tokio::test]
#[traced_test]
async fn test_not_found_yields_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "status": "error",
            "message": "no records found"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let converter = create_mock_converter(&mock_server);
    let results = converter
        .convert(&ConversionRequest::new(["16923184"]))
        .await
        .expect("404 should not be an error");

    assert!(results.is_empty());
}

#[tokio::test]
async fn test_empty_request_makes_one_call() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param_matcher("ids", ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "error",
            "message": "no ids given"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let converter = create_mock_converter(&mock_server);
    let results = converter
        .convert(&ConversionRequest::new(Vec::<String>::new()))
        .await
        .expect("Empty request should not be an error");

    assert!(results.is_empty());

    let received = mock_server.received_requests().await.unwrap();
    assert_eq!(query_param(&received[0], "ids").as_deref(), Some(""));
}
