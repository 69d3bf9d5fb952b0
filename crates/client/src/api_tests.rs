// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ForgeGuard, Inc.

use super::*;
use crate::error::ApiError;

fn client(base: &str) -> ApiClient {
    ApiClient::new(ApiConfig::new(base, "secret")).unwrap()
}

#[test]
fn url_joins_project_and_path() {
    let api = client("https://forge.example.com/api");
    assert_eq!(
        api.url(&"p-1".into(), "/status"),
        "https://forge.example.com/api/projects/p-1/build/status"
    );
}

#[test]
fn url_trims_trailing_slash() {
    let api = client("https://forge.example.com/api/");
    assert_eq!(
        api.url(&"p-1".into(), ""),
        "https://forge.example.com/api/projects/p-1/build"
    );
}

#[test]
fn start_options_omit_unset_fields() {
    let body = serde_json::to_value(StartOptions::default()).unwrap();
    assert_eq!(body, serde_json::json!({}));

    let body = serde_json::to_value(StartOptions {
        target_type: Some("release".into()),
        ..StartOptions::default()
    })
    .unwrap();
    assert_eq!(body, serde_json::json!({ "target_type": "release" }));
}

#[test]
fn interject_ack_tolerates_missing_message() {
    let ack: InterjectAck = serde_json::from_str(r#"{"status":"queued"}"#).unwrap();
    assert_eq!(ack.status, "queued");
    assert!(ack.message.is_none());
}

#[test]
fn status_code_only_for_server_rejections() {
    let err = ApiError::Status { code: 503, body: "overloaded".into() };
    assert_eq!(err.status_code(), Some(503));
}
