//! Behavior every operation shares, checked against each one in turn.
//!
//! Path parameters are filled with their own names, so the expected request
//! path is the operation's template with the braces removed.

use std::time::Duration;

use mockito::Matcher;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sccop::client::models::{RequiredConfig, Target};
use sccop::client::operation::{ALL_OPERATIONS, CSV, Operation};
use sccop::client::options::*;
use sccop::client::{
    AttachmentApi, ControlLibraryApi, DetailedResponse, NoAuthAuthenticator, ProfileApi,
    ProviderTypeApi, ReportApi, RetryPolicy, RuleApi, SettingsApi, Transport,
};
use sccop::error::{ApiError, ConfigError, Error, Result};
use sccop::{ClientOptions, SecurityComplianceClient};

fn client_for(url: &str, retry: RetryPolicy) -> SecurityComplianceClient {
    SecurityComplianceClient::new(
        ClientOptions::new()
            .service_url(url)
            .authenticator(NoAuthAuthenticator)
            .retry(retry),
    )
    .unwrap()
}

fn retry_policies() -> [RetryPolicy; 2] {
    [
        RetryPolicy::disabled(),
        RetryPolicy::new(2, Duration::from_millis(10)),
    ]
}

fn request_path(op: &Operation) -> String {
    op.path.replace(['{', '}'], "")
}

fn returns_bytes(op: &Operation) -> bool {
    op.accept == CSV
}

fn present<R>(response: Result<DetailedResponse<R>>) -> Result<bool> {
    response.map(|r| r.result.is_some())
}

/// Calls the operation named `id` with minimal valid options and reports
/// whether the response carried a result.
async fn call<T: Transport + ?Sized>(id: &str, t: &T) -> Result<bool> {
    match id {
        "get_settings" => present(t.get_settings(&GetSettingsOptions::new()).await),
        "update_settings" => present(t.update_settings(&UpdateSettingsOptions::new()).await),
        "post_test_event" => present(t.post_test_event(&PostTestEventOptions::new()).await),

        "list_control_libraries" => present(
            t.list_control_libraries(&ListControlLibrariesOptions::new())
                .await,
        ),
        "create_custom_control_library" => present(
            t.create_custom_control_library(&CreateCustomControlLibraryOptions::new(
                "name",
                "description",
                "custom",
                Vec::new(),
            ))
            .await,
        ),
        "delete_custom_control_library" => present(
            t.delete_custom_control_library(&DeleteCustomControlLibraryOptions::new(
                "control_libraries_id",
            ))
            .await,
        ),
        "get_control_library" => present(
            t.get_control_library(&GetControlLibraryOptions::new("control_libraries_id"))
                .await,
        ),
        "replace_custom_control_library" => present(
            t.replace_custom_control_library(&ReplaceCustomControlLibraryOptions::new(
                "control_libraries_id",
            ))
            .await,
        ),

        "list_profiles" => present(t.list_profiles(&ListProfilesOptions::new()).await),
        "create_profile" => present(
            t.create_profile(&CreateProfileOptions::new(
                "name",
                "description",
                "custom",
                Vec::new(),
                Vec::new(),
            ))
            .await,
        ),
        "delete_custom_profile" => present(
            t.delete_custom_profile(&DeleteCustomProfileOptions::new("profile_id"))
                .await,
        ),
        "get_profile" => present(t.get_profile(&GetProfileOptions::new("profile_id")).await),
        "replace_profile" => present(
            t.replace_profile(&ReplaceProfileOptions::new(
                "profile_id",
                "name",
                "description",
                "custom",
                Vec::new(),
                Vec::new(),
            ))
            .await,
        ),

        "list_rules" => present(t.list_rules(&ListRulesOptions::new()).await),
        "create_rule" => present(
            t.create_rule(&CreateRuleOptions::new(
                "description",
                bucket_target(),
                RequiredConfig::default(),
            ))
            .await,
        ),
        "delete_rule" => present(t.delete_rule(&DeleteRuleOptions::new("rule_id")).await),
        "get_rule" => present(t.get_rule(&GetRuleOptions::new("rule_id")).await),
        "replace_rule" => present(
            t.replace_rule(&ReplaceRuleOptions::new(
                "rule_id",
                "etag-1",
                "description",
                bucket_target(),
                RequiredConfig::default(),
            ))
            .await,
        ),

        "list_attachments" => present(
            t.list_attachments(&ListAttachmentsOptions::new("profile_id"))
                .await,
        ),
        "create_attachment" => present(
            t.create_attachment(&CreateAttachmentOptions::new("profile_id", Vec::new()))
                .await,
        ),
        "delete_profile_attachment" => present(
            t.delete_profile_attachment(&DeleteProfileAttachmentOptions::new(
                "profile_id",
                "attachment_id",
            ))
            .await,
        ),
        "get_profile_attachment" => present(
            t.get_profile_attachment(&GetProfileAttachmentOptions::new(
                "profile_id",
                "attachment_id",
            ))
            .await,
        ),
        "replace_profile_attachment" => present(
            t.replace_profile_attachment(&ReplaceProfileAttachmentOptions::new(
                "profile_id",
                "attachment_id",
            ))
            .await,
        ),
        "create_scan" => present(t.create_scan(&CreateScanOptions::new("attachment_id")).await),
        "list_attachments_account" => present(
            t.list_attachments_account(&ListAttachmentsAccountOptions::new())
                .await,
        ),

        "get_latest_reports" => {
            present(t.get_latest_reports(&GetLatestReportsOptions::new()).await)
        }
        "list_reports" => present(t.list_reports(&ListReportsOptions::new()).await),
        "get_report" => present(t.get_report(&GetReportOptions::new("report_id")).await),
        "get_report_summary" => present(
            t.get_report_summary(&GetReportSummaryOptions::new("report_id"))
                .await,
        ),
        "get_report_evaluation" => present(
            t.get_report_evaluation(&GetReportEvaluationOptions::new("report_id"))
                .await,
        ),
        "get_report_controls" => present(
            t.get_report_controls(&GetReportControlsOptions::new("report_id"))
                .await,
        ),
        "get_report_rule" => present(
            t.get_report_rule(&GetReportRuleOptions::new("report_id", "rule_id"))
                .await,
        ),
        "list_report_evaluations" => present(
            t.list_report_evaluations(&ListReportEvaluationsOptions::new("report_id"))
                .await,
        ),
        "list_report_resources" => present(
            t.list_report_resources(&ListReportResourcesOptions::new("report_id"))
                .await,
        ),
        "get_report_tags" => present(
            t.get_report_tags(&GetReportTagsOptions::new("report_id"))
                .await,
        ),
        "get_report_violations_drift" => present(
            t.get_report_violations_drift(&GetReportViolationsDriftOptions::new("report_id"))
                .await,
        ),

        "list_provider_types" => {
            present(t.list_provider_types(&ListProviderTypesOptions::new()).await)
        }
        "get_provider_type_by_id" => present(
            t.get_provider_type_by_id(&GetProviderTypeByIdOptions::new("provider_type_id"))
                .await,
        ),
        "list_provider_type_instances" => present(
            t.list_provider_type_instances(&ListProviderTypeInstancesOptions::new(
                "provider_type_id",
            ))
            .await,
        ),
        "create_provider_type_instance" => present(
            t.create_provider_type_instance(&CreateProviderTypeInstanceOptions::new(
                "provider_type_id",
            ))
            .await,
        ),
        "delete_provider_type_instance" => present(
            t.delete_provider_type_instance(&DeleteProviderTypeInstanceOptions::new(
                "provider_type_id",
                "provider_type_instance_id",
            ))
            .await,
        ),
        "get_provider_type_instance" => present(
            t.get_provider_type_instance(&GetProviderTypeInstanceOptions::new(
                "provider_type_id",
                "provider_type_instance_id",
            ))
            .await,
        ),
        "update_provider_type_instance" => present(
            t.update_provider_type_instance(&UpdateProviderTypeInstanceOptions::new(
                "provider_type_id",
                "provider_type_instance_id",
            ))
            .await,
        ),
        "get_provider_types_instances" => present(
            t.get_provider_types_instances(&GetProviderTypesInstancesOptions::new())
                .await,
        ),

        other => panic!("No call wired for operation {}", other),
    }
}

fn bucket_target() -> Target {
    Target {
        service_name: "cloud-object-storage".into(),
        resource_kind: "bucket".into(),
        ..Default::default()
    }
}

#[tokio::test]
async fn empty_body_yields_no_result() {
    let mut server = mockito::Server::new_async().await;
    let client = client_for(&server.url(), RetryPolicy::disabled());

    for op in ALL_OPERATIONS.iter() {
        let mock = server
            .mock(&op.method.to_string(), request_path(op).as_str())
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", op.accept)
            .create_async()
            .await;

        let has_result = call(op.id, &client)
            .await
            .unwrap_or_else(|e| panic!("{}: {:?}", op.id, e));
        assert!(!has_result, "{} returned a result for an empty body", op.id);
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn invalid_json_is_a_decode_error() {
    let mut server = mockito::Server::new_async().await;

    for op in ALL_OPERATIONS.iter() {
        let mock = server
            .mock(&op.method.to_string(), request_path(op).as_str())
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", op.accept)
            .with_body("{not json")
            .expect(2)
            .create_async()
            .await;

        for retry in retry_policies() {
            let client = client_for(&server.url(), retry);
            let outcome = call(op.id, &client).await;

            if returns_bytes(op) {
                // Raw downloads are handed back undecoded.
                assert!(outcome.unwrap(), "{} dropped its body", op.id);
                continue;
            }
            let err = outcome.expect_err(op.id);
            match &err {
                Error::Api(ApiError::InvalidResponse { .. }) => (),
                other => panic!("{}: expected InvalidResponse, got {:?}", op.id, other),
            }
            assert_eq!(err.status_code(), Some(200), "{}", op.id);
            assert_eq!(
                err.response().unwrap().body,
                b"{not json".to_vec(),
                "{}",
                op.id
            );
        }
        // Decode failures are never retried: one request per policy.
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn empty_service_url_fails_before_sending() {
    let mut server = mockito::Server::new_async().await;
    let mut mocks = Vec::new();
    for verb in ["GET", "POST", "PUT", "PATCH", "DELETE"] {
        mocks.push(
            server
                .mock(verb, Matcher::Any)
                .expect(0)
                .create_async()
                .await,
        );
    }

    let mut client = client_for(&server.url(), RetryPolicy::disabled());
    client.set_service_url("");

    for op in ALL_OPERATIONS.iter() {
        let err = call(op.id, &client).await.expect_err(op.id);
        assert!(
            matches!(err, Error::Config(ConfigError::MissingServiceUrl)),
            "{}: unexpected error {:?}",
            op.id,
            err
        );
        assert!(err.response().is_none(), "{}", op.id);
    }
    for mock in mocks {
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn deadline_applies_to_every_operation() {
    let server = MockServer::start().await;
    for op in ALL_OPERATIONS.iter() {
        Mock::given(method(op.method.to_string().as_str()))
            .and(path(request_path(op)))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", op.accept)
                    .set_body_string("{}")
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;
    }

    for retry in retry_policies() {
        let client = client_for(&server.uri(), retry);
        let bounded = client.with_deadline(Duration::from_millis(100));

        for op in ALL_OPERATIONS.iter() {
            let err = call(op.id, &bounded).await.expect_err(op.id);
            assert!(
                matches!(err, Error::Api(ApiError::DeadlineExceeded(_))),
                "{}: unexpected error {:?}",
                op.id,
                err
            );
            assert!(err.to_string().contains("deadline exceeded"), "{}", op.id);
        }
    }
}
