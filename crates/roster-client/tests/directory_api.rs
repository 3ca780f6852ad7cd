//! Integration tests for the directory client against a mock server.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use roster_client::{DirectoryClient, Error, UpdateUserRequest};

fn sample_page() -> serde_json::Value {
    json!({
        "page": 2,
        "per_page": 6,
        "total": 12,
        "total_pages": 2,
        "data": [
            {
                "id": 7,
                "email": "michael.lawson@reqres.in",
                "first_name": "Michael",
                "last_name": "Lawson",
                "avatar": "https://reqres.in/img/faces/7-image.jpg"
            },
            {
                "id": 8,
                "email": "lindsay.ferguson@reqres.in",
                "first_name": "Lindsay",
                "last_name": "Ferguson",
                "avatar": "https://reqres.in/img/faces/8-image.jpg"
            }
        ]
    })
}

async fn client_for(server: &MockServer) -> DirectoryClient {
    DirectoryClient::builder()
        .base_url(server.uri())
        .bearer_token("QpwL5tke4Pnpja7X4")
        .build()
        .unwrap()
}

#[tokio::test]
async fn list_returns_page_and_total_pages() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .and(query_param("page", "2"))
        .and(header("authorization", "Bearer QpwL5tke4Pnpja7X4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_page()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let page = client.users().list(2).await.unwrap();

    assert_eq!(page.page, 2);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.data[0].full_name(), "Michael Lawson");
}

#[tokio::test]
async fn list_maps_401_to_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "error": "Missing API key" })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.users().list(1).await.unwrap_err();

    assert!(err.is_unauthorized());
    assert!(matches!(err, Error::Unauthorized(msg) if msg == "Missing API key"));
}

#[tokio::test]
async fn update_echoes_submitted_fields() {
    let server = MockServer::start().await;

    let fields = UpdateUserRequest {
        first_name: Some("Janet".to_string()),
        last_name: Some("Weaver".to_string()),
        email: Some("janet.weaver@reqres.in".to_string()),
    };

    Mock::given(method("PUT"))
        .and(path("/api/users/2"))
        .and(body_json(&fields))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "first_name": "Janet",
            "last_name": "Weaver",
            "email": "janet.weaver@reqres.in",
            "updatedAt": "2024-01-01T12:00:00.000Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let echoed = client.users().update(2, &fields).await.unwrap();

    assert_eq!(echoed.first_name.as_deref(), Some("Janet"));
    assert_eq!(echoed.updated_at, "2024-01-01T12:00:00.000Z");
}

#[tokio::test]
async fn update_maps_404_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/users/999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .users()
        .update(999, &UpdateUserRequest::default())
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn remove_accepts_empty_204() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/users/7"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client.users().remove(7).await.unwrap();
}

#[tokio::test]
async fn login_returns_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_json(json!({
            "email": "eve.holt@reqres.in",
            "password": "cityslicka"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "token": "QpwL5tke4Pnpja7X4" })),
        )
        .mount(&server)
        .await;

    let client = DirectoryClient::builder()
        .base_url(server.uri())
        .build()
        .unwrap();

    let resp = client
        .auth()
        .login("eve.holt@reqres.in", "cityslicka")
        .await
        .unwrap();
    assert_eq!(resp.token, "QpwL5tke4Pnpja7X4");
}

#[tokio::test]
async fn register_returns_id_and_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/register"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "id": 4, "token": "QpwL5tke4Pnpja7X4" })),
        )
        .mount(&server)
        .await;

    let client = DirectoryClient::builder()
        .base_url(server.uri())
        .build()
        .unwrap();

    let resp = client
        .auth()
        .register("eve.holt@reqres.in", "pistol")
        .await
        .unwrap();
    assert_eq!(resp.id, 4);
    assert_eq!(resp.token, "QpwL5tke4Pnpja7X4");
}

#[tokio::test]
async fn server_error_is_classified() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.users().list(1).await.unwrap_err();

    assert!(err.is_server_error());
}
