//! Model management against a mock service.

mod common;

use common::{authed, authenticated_server, connect};
use integrations_word_embeddings::{from_record, EmbeddingsError, Model, ModelVersionFilter};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use wiremock::matchers::body_json;
use wiremock::ResponseTemplate;

#[tokio::test]
async fn test_create_model_returns_body_unchanged() {
    let server = authenticated_server().await;
    authed("POST", "/model")
        .and(body_json(json!({"model_name": "food"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "m1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = connect(&server).await;
    let created = client.models().create("food").await.unwrap();

    assert_eq!(created, json!({"id": "m1"}));
    let model: Model = from_record(&created).unwrap();
    assert_eq!(model.id, "m1");
}

#[tokio::test]
async fn test_create_model_server_error() {
    let server = authenticated_server().await;
    authed("POST", "/model")
        .respond_with(ResponseTemplate::new(500).set_body_string("database unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let client = connect(&server).await;
    let err = client.models().create("food").await.unwrap_err();

    match &err {
        EmbeddingsError::Remote { status, body, .. } => {
            assert_eq!(*status, 500);
            assert_eq!(body, "database unavailable");
        }
        other => panic!("Expected remote error, got {:?}", other),
    }
    assert_eq!(
        err.to_string(),
        "Error creating model: 500 database unavailable"
    );
}

#[tokio::test]
async fn test_list_models() {
    let server = authenticated_server().await;
    let listing = json!([{"id": "m1", "name": "food"}, {"id": "m2", "name": "drinks"}]);
    authed("GET", "/models")
        .respond_with(ResponseTemplate::new(200).set_body_json(listing.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let client = connect(&server).await;

    assert_eq!(client.models().list().await.unwrap(), listing);
}

#[tokio::test]
async fn test_list_versions_omits_unset_version() {
    let server = authenticated_server().await;
    authed("POST", "/model_versions")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "v1"}])))
        .expect(1)
        .mount(&server)
        .await;

    let client = connect(&server).await;
    let versions = client
        .models()
        .list_versions(ModelVersionFilter::new().model_id("m1"))
        .await
        .unwrap();
    assert_eq!(versions, json!([{"id": "v1"}]));

    let requests = server.received_requests().await.unwrap();
    let request = requests
        .iter()
        .find(|r| r.url.path() == "/model_versions")
        .unwrap();
    let body: Value = request.body_json().unwrap();
    assert_eq!(body, json!({"model_id": "m1"}));
}

#[tokio::test]
async fn test_delete_model_and_version() {
    let server = authenticated_server().await;
    authed("DELETE", "/model/m1")
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    authed("DELETE", "/model/m1/model_version/v1")
        .respond_with(ResponseTemplate::new(404).set_body_string("no such version"))
        .expect(1)
        .mount(&server)
        .await;

    let client = connect(&server).await;

    assert!(client.models().delete("m1").await.unwrap());

    let err = client.models().delete_version("m1", "v1").await.unwrap_err();
    assert_eq!(err.status_code(), Some(404));
    assert_eq!(err.response_body(), Some("no such version"));
}
