//! Integration tests for destination endpoints

#![allow(dead_code)]

#[path = "support.rs"]
mod support;

use segment_config_client::domain::{Destination, UpdateMask};
use serde_json::json;
use support::{api_path, setup};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

fn google_analytics(enabled: bool) -> Destination {
    Destination {
        name: "workspaces/myworkspace/sources/js/destinations/google-analytics".into(),
        parent: "workspaces/myworkspace/sources/js".into(),
        display_name: "Google Analytics".into(),
        enabled,
        connection_mode: "CLOUD".into(),
        ..Default::default()
    }
}

fn google_analytics_json(enabled: bool) -> serde_json::Value {
    json!({
        "name": "workspaces/myworkspace/sources/js/destinations/google-analytics",
        "parent": "workspaces/myworkspace/sources/js",
        "display_name": "Google Analytics",
        "enabled": enabled,
        "connection_mode": "CLOUD"
    })
}

#[tokio::test]
async fn test_list_destinations() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("workspaces/test-workspace/sources/test-source/destinations")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "destinations": [{
                "name": "workspaces/myworkspace/sources/js/destinations/google-analytics",
                "parent": "workspaces/myworkspace/sources/js",
                "display_name": "Google Analytics",
                "enabled": false,
                "connection_mode": "CLOUD",
                "config": [{
                    "name": "workspaces/myworkspace/sources/js/destinations/google-analytics/config/anonymizeIp",
                    "display_name": "Anonymize IP Addresses",
                    "value": false,
                    "type": "boolean"
                }],
                "create_time": "2018-08-08T13:24:02.651Z",
                "update_time": "2018-08-08T13:24:02.651Z"
            }],
            "next_page_token": ""
        })))
        .mount(&server)
        .await;

    let list = client.list_destinations("test-source").await.unwrap();

    assert_eq!(list.destinations.len(), 1);
    let destination = &list.destinations[0];
    assert_eq!(destination.configs[0].value, json!(false));
    assert_eq!(destination.configs[0].kind, "boolean");
    assert!(destination.update_time.is_some());
}

#[tokio::test]
async fn test_get_destination() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("workspaces/test-workspace/sources/test-source/destinations/test-dest")))
        .respond_with(ResponseTemplate::new(200).set_body_json(google_analytics_json(true)))
        .mount(&server)
        .await;

    let destination = client.get_destination("test-source", "test-dest").await.unwrap();
    assert_eq!(destination, google_analytics(true));
}

#[tokio::test]
async fn test_create_destination_wraps_payload() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(api_path("workspaces/test-workspace/sources/test-source/destinations")))
        .and(body_json(json!({ "destination": google_analytics_json(true) })))
        .respond_with(ResponseTemplate::new(201).set_body_json(google_analytics_json(true)))
        .expect(1)
        .mount(&server)
        .await;

    let created =
        client.create_destination("test-source", &google_analytics(true)).await.unwrap();
    assert_eq!(created, google_analytics(true));
}

#[tokio::test]
async fn test_update_destination_sends_caller_mask() {
    let (server, client) = setup().await;

    Mock::given(method("PATCH"))
        .and(path(api_path("workspaces/test-workspace/sources/test-source/destinations/test-dest")))
        .and(body_json(json!({
            "destination": google_analytics_json(true),
            "update_mask": {"paths": ["destination.enabled"]}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(google_analytics_json(false)))
        .expect(1)
        .mount(&server)
        .await;

    let updated = client
        .update_destination(
            "test-source",
            "test-dest",
            &google_analytics(true),
            UpdateMask::new(["destination.enabled"]),
        )
        .await
        .unwrap();

    assert_eq!(updated, google_analytics(false));
}

#[tokio::test]
async fn test_delete_destination() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path(api_path("workspaces/test-workspace/sources/test-source/destinations/test-dest")))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client.delete_destination("test-source", "test-dest").await.unwrap();
}
