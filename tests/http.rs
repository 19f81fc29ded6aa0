//! Request pipeline tests against a local mock service.

use std::time::Duration;

use mockito::Matcher;
use serde_json::json;

use sccop::client::models::ControlLibraryItem;
use sccop::client::options::{
    CreateScanOptions, DeleteRuleOptions, GetProfileOptions, GetReportEvaluationOptions,
    GetRuleOptions, ListControlLibrariesOptions, ListProfilesOptions,
};
use sccop::client::{
    AttachmentApi, ControlLibraryApi, HeaderOptions, NoAuthAuthenticator, ProfileApi, ReportApi,
    RuleApi,
};
use sccop::error::{ApiError, ConfigError, Error};
use sccop::{ClientOptions, SecurityComplianceClient};

const CONTROL_LIBRARIES: &str = r#"{
    "limit": 50,
    "total_count": 1,
    "first": {"href": "https://example/control_libraries?limit=50"},
    "control_libraries": [
        {"id": "lib-1", "control_library_name": "IBM Cloud Framework", "control_library_type": "predefined"}
    ]
}"#;

fn client_for(url: &str) -> SecurityComplianceClient {
    SecurityComplianceClient::new(
        ClientOptions::new()
            .service_url(url)
            .authenticator(NoAuthAuthenticator),
    )
    .unwrap()
}

#[tokio::test]
async fn list_control_libraries_sends_query_and_tracing_headers() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/control_libraries")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".into(), "50".into()),
            Matcher::UrlEncoded("control_library_type".into(), "testString".into()),
        ]))
        .match_header("accept", "application/json")
        .match_header("X-Correlation-ID", "corr-1")
        .match_header("X-Request-ID", "req-1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(CONTROL_LIBRARIES)
        .create_async()
        .await;

    let client = client_for(&server.url());
    let options = ListControlLibrariesOptions::new()
        .limit(50)
        .control_library_type("testString")
        .x_correlation_id("corr-1")
        .x_request_id("req-1");

    let response = client.list_control_libraries(&options).await.unwrap();
    mock.assert_async().await;

    assert_eq!(response.status_code, 200);
    let collection = response.into_result().unwrap();
    assert_eq!(collection.total_count, 1);
    assert_eq!(collection.control_libraries.len(), 1);
    assert_eq!(collection.control_libraries[0].id.as_deref(), Some("lib-1"));
}

#[tokio::test]
async fn custom_headers_are_sent() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/profiles")
        .match_query(Matcher::Any)
        .match_header("x-tenant", "acme")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"total_count": 0, "profiles": []}"#)
        .create_async()
        .await;

    let client = client_for(&server.url());
    let options = ListProfilesOptions::new().header("X-Tenant", "acme");
    let page = client
        .list_profiles(&options)
        .await
        .unwrap()
        .into_result()
        .unwrap();

    mock.assert_async().await;
    assert!(page.profiles.is_empty());
}

#[tokio::test]
async fn create_scan_posts_attachment_id() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/scans")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"attachment_id": "testString"})))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "scan-1", "attachment_id": "testString", "status": "in_progress"}"#)
        .create_async()
        .await;

    let client = client_for(&server.url());
    let response = client
        .create_scan(&CreateScanOptions::new("testString"))
        .await
        .unwrap();
    mock.assert_async().await;

    assert_eq!(response.status_code, 201);
    let scan = response.into_result().unwrap();
    assert_eq!(scan.id.as_deref(), Some("scan-1"));
    assert_eq!(scan.status.as_deref(), Some("in_progress"));
}

#[tokio::test]
async fn empty_body_yields_no_result() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/profiles/prof-1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .create_async()
        .await;

    let client = client_for(&server.url());
    let response = client
        .get_profile(&GetProfileOptions::new("prof-1"))
        .await
        .unwrap();

    assert_eq!(response.status_code, 200);
    assert!(response.result.is_none());
}

#[tokio::test]
async fn delete_rule_returns_no_content() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/rules/rule-1")
        .with_status(204)
        .create_async()
        .await;

    let client = client_for(&server.url());
    let response = client
        .delete_rule(&DeleteRuleOptions::new("rule-1"))
        .await
        .unwrap();
    mock.assert_async().await;

    assert_eq!(response.status_code, 204);
    assert!(response.into_result().is_none());
}

#[tokio::test]
async fn invalid_json_is_a_decode_error_with_response() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/rules/rule-1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{not json")
        .expect(2)
        .create_async()
        .await;

    let mut client = client_for(&server.url());
    for retries in [false, true] {
        if retries {
            client.enable_retries(2, Duration::from_millis(10));
        } else {
            client.disable_retries();
        }

        let err = client
            .get_rule(&GetRuleOptions::new("rule-1"))
            .await
            .unwrap_err();
        match &err {
            Error::Api(ApiError::InvalidResponse { .. }) => (),
            other => panic!("Expected InvalidResponse, got {:?}", other),
        }
        assert_eq!(err.status_code(), Some(200));
        assert_eq!(err.response().unwrap().body, b"{not json".to_vec());
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn service_error_carries_status_and_payload() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/profiles/missing")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"status_code": 404, "trace": "t-1", "errors": [{"code": "not_found", "message": "Profile not found"}]}"#,
        )
        .create_async()
        .await;

    let client = client_for(&server.url());
    let err = client
        .get_profile(&GetProfileOptions::new("missing"))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(404));
    match err {
        Error::Api(ApiError::Service(service)) => {
            assert!(service.is_not_found());
            assert_eq!(service.message, "Profile not found");
            assert_eq!(service.code.as_deref(), Some("not_found"));
        }
        other => panic!("Expected ApiError::Service, got {:?}", other),
    }
}

#[tokio::test]
async fn validation_fails_before_sending() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server.url());
    let err = client
        .get_profile(&GetProfileOptions::new(""))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Validation(_)));
    assert!(err.response().is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn empty_service_url_is_rejected_at_call_time() {
    let mut client = client_for("http://localhost:1");
    client.set_service_url("");

    let err = client
        .list_control_libraries(&ListControlLibrariesOptions::new())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::MissingServiceUrl)));
}

#[tokio::test]
async fn report_download_returns_csv_bytes() {
    let csv = "Control,Status\nAC-1,compliant\n";
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/reports/rep-1/download")
        .match_query(Matcher::UrlEncoded("exclude_summary".into(), "true".into()))
        .match_header("accept", "application/csv")
        .with_status(200)
        .with_header("content-type", "application/csv")
        .with_body(csv)
        .create_async()
        .await;

    let client = client_for(&server.url());
    let response = client
        .get_report_evaluation(&GetReportEvaluationOptions::new("rep-1").exclude_summary(true))
        .await
        .unwrap();
    mock.assert_async().await;

    assert_eq!(response.header("content-type"), Some("application/csv"));
    assert_eq!(response.into_result().unwrap(), csv.as_bytes().to_vec());
}

#[tokio::test]
async fn pager_follows_start_tokens() {
    let mut server = mockito::Server::new_async().await;
    let first = server
        .mock("GET", "/control_libraries")
        .match_query(Matcher::Exact("limit=1".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "limit": 1,
                "total_count": 2,
                "next": {"href": "https://example/control_libraries?limit=1&start=tok-2", "start": "tok-2"},
                "control_libraries": [{"id": "lib-1"}]
            }"#,
        )
        .create_async()
        .await;
    let second = server
        .mock("GET", "/control_libraries")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".into(), "1".into()),
            Matcher::UrlEncoded("start".into(), "tok-2".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "limit": 1,
                "total_count": 2,
                "control_libraries": [{"id": "lib-2"}]
            }"#,
        )
        .create_async()
        .await;

    let client = client_for(&server.url());
    let mut pager = client.control_libraries_pager(ListControlLibrariesOptions::new().limit(1));
    let items: Vec<ControlLibraryItem> = pager.get_all().await.unwrap();

    first.assert_async().await;
    second.assert_async().await;
    assert!(!pager.has_next());
    let ids: Vec<_> = items.iter().filter_map(|i| i.id.as_deref()).collect();
    assert_eq!(ids, vec!["lib-1", "lib-2"]);
}

#[tokio::test]
async fn pager_stops_when_start_token_repeats() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/control_libraries")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "limit": 1,
                "total_count": 5,
                "next": {"href": "https://example/control_libraries?limit=1&start=tok-1", "start": "tok-1"},
                "control_libraries": [{"id": "lib-1"}]
            }"#,
        )
        .expect(2)
        .create_async()
        .await;

    let client = client_for(&server.url());
    let mut pager = client.control_libraries_pager(ListControlLibrariesOptions::new().limit(1));
    let items: Vec<ControlLibraryItem> = pager.get_all().await.unwrap();

    mock.assert_async().await;
    assert!(!pager.has_next());
    assert_eq!(items.len(), 2);
}
