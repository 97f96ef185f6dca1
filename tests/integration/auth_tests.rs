use crate::common::{LOGIN_PATH, login_body, mock_login, test_config};
use maestro_client::prelude::*;
use mockito::Server;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::net::TcpListener;

#[tokio::test]
async fn test_eager_client_logs_in_on_construction() {
    let mut server = Server::new_async().await;
    let login = mock_login(&mut server, "abc", "org1", 1).await;

    let client = Client::new(test_config(&server)).await.unwrap();

    assert!(client.is_authenticated().await);
    assert_eq!(client.token().await.as_deref(), Some("abc"));
    assert_eq!(client.organization().await.as_deref(), Some("org1"));
    login.assert_async().await;
}

#[tokio::test]
async fn test_lazy_client_logs_in_on_first_request() {
    let mut server = Server::new_async().await;
    let login = mock_login(&mut server, "abc", "org1", 1).await;
    let tasks = server
        .mock("GET", "/api/v2/task")
        .match_header("authorization", "Bearer abc")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .expect(2)
        .create_async()
        .await;

    let client = Client::new_lazy(test_config(&server)).unwrap();
    assert!(!client.is_authenticated().await);
    assert!(client.session().await.is_none());

    client.get("/task").await.unwrap();
    client.get("task").await.unwrap();

    login.assert_async().await;
    tasks.assert_async().await;
}

#[tokio::test]
async fn test_login_rejected_is_authentication_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", LOGIN_PATH)
        .with_status(403)
        .with_body("invalid key")
        .create_async()
        .await;

    let err = match Client::new(test_config(&server)).await {
        Ok(_) => panic!("login should have failed"),
        Err(e) => e,
    };
    assert!(err.is_authentication());
    match err {
        AppError::Authentication(AuthError::Rejected { status, body }) => {
            assert_eq!(status, 403);
            assert_eq!(body, "invalid key");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_login_without_organization_is_malformed() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", LOGIN_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"accessToken":"abc"}"#)
        .create_async()
        .await;

    let client = Client::new_lazy(test_config(&server)).unwrap();
    let err = client.authenticate().await.unwrap_err();
    assert!(matches!(
        err,
        AppError::Authentication(AuthError::MalformedPayload { .. })
    ));
    assert!(client.session().await.is_none());
}

#[tokio::test]
async fn test_failed_login_keeps_previous_session() {
    let mut server = Server::new_async().await;
    let ok = mock_login(&mut server, "abc", "org1", 1).await;

    let client = Client::new(test_config(&server)).await.unwrap();
    ok.remove_async().await;

    server
        .mock("POST", LOGIN_PATH)
        .with_status(403)
        .with_body("locked")
        .create_async()
        .await;

    let err = client.authenticate().await.unwrap_err();
    assert_eq!(
        match err {
            AppError::Authentication(e) => e.status(),
            _ => None,
        },
        Some(403)
    );
    assert_eq!(client.token().await.as_deref(), Some("abc"));
    assert_eq!(client.organization().await.as_deref(), Some("org1"));
}

#[tokio::test]
async fn test_server_expiry_drives_relogin() {
    let mut server = Server::new_async().await;
    // Five seconds of lifetime is inside the default ten second skew.
    let login = server
        .mock("POST", LOGIN_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"accessToken":"short","organizationLabel":"org1","expiresIn":5}"#)
        .expect(3)
        .create_async()
        .await;
    server
        .mock("GET", "/api/v2/bot")
        .with_status(200)
        .create_async()
        .await;

    let client = Client::new(test_config(&server)).await.unwrap();
    assert!(!client.is_authenticated().await);

    client.get("/bot").await.unwrap();
    client.get("/bot").await.unwrap();

    login.assert_async().await;
}

#[tokio::test]
async fn test_string_expiry_still_logs_in() {
    let mut server = Server::new_async().await;
    let login = server
        .mock("POST", LOGIN_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"accessToken":"abc","organizationLabel":"org1","expiresIn":"3600"}"#)
        .expect(1)
        .create_async()
        .await;

    let client = Client::new(test_config(&server)).await.unwrap();

    assert!(client.is_authenticated().await);
    assert_eq!(client.token().await.as_deref(), Some("abc"));
    login.assert_async().await;
}

#[tokio::test]
async fn test_organization_override_and_clear() {
    let mut server = Server::new_async().await;
    mock_login(&mut server, "abc", "org1", 1).await;
    let overridden = server
        .mock("GET", "/maestro/api/runners")
        .match_header("x-organization", "org2")
        .with_status(200)
        .expect(1)
        .create_async()
        .await;
    let original = server
        .mock("GET", "/maestro/api/runners")
        .match_header("x-organization", "org1")
        .with_status(200)
        .expect(1)
        .create_async()
        .await;

    let client = Client::new(test_config(&server)).await.unwrap();

    client.set_organization("org2").await;
    assert_eq!(client.organization().await.as_deref(), Some("org2"));
    client.get("/maestro/api/runners").await.unwrap();

    client.clear_organization_override().await;
    assert_eq!(client.organization().await.as_deref(), Some("org1"));
    client.get("/maestro/api/runners").await.unwrap();

    overridden.assert_async().await;
    original.assert_async().await;
}

#[tokio::test]
async fn test_custom_organization_header() {
    let mut server = Server::new_async().await;
    mock_login(&mut server, "abc", "org1", 1).await;
    let mock = server
        .mock("GET", "/api/v2/task/1")
        .match_header("x-workspace", "org1")
        .with_status(200)
        .create_async()
        .await;

    let config = test_config(&server).with_organization_header("X-Workspace");
    let client = Client::new(config).await.unwrap();
    client.tasks().get(1).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_logout_forces_new_login() {
    let mut server = Server::new_async().await;
    let login = mock_login(&mut server, "abc", "org1", 2).await;
    server
        .mock("GET", "/api/v2/task")
        .with_status(200)
        .create_async()
        .await;

    let client = Client::new(test_config(&server)).await.unwrap();
    client.logout().await;
    assert!(!client.is_authenticated().await);
    assert!(client.token().await.is_none());

    client.get("/task").await.unwrap();
    assert!(client.is_authenticated().await);
    login.assert_async().await;
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Nothing listens on port 1.
    let config = Config::with_credentials("robot", "robot-key")
        .with_base_url("http://127.0.0.1:1")
        .with_timeout(2);
    let client = Client::new_lazy(config).unwrap();

    let err = client.get("/task").await.unwrap_err();
    assert!(err.is_transport());
    assert!(!err.is_authentication());
}

#[tokio::test]
async fn test_stalled_server_times_out_without_retry() {
    let mut server = Server::new_async().await;
    let login = mock_login(&mut server, "abc", "org1", 1).await;

    // Accepts connections and never answers.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let accepted = Arc::new(AtomicUsize::new(0));
    let seen = accepted.clone();
    tokio::spawn(async move {
        let mut open = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            seen.fetch_add(1, Ordering::SeqCst);
            open.push(stream);
        }
    });

    let client = Client::new(test_config(&server).with_timeout(1)).await.unwrap();
    let err = client
        .get(&format!("http://{addr}/api/v2/task"))
        .await
        .unwrap_err();

    assert!(err.is_timeout());
    assert!(err.is_transport());
    assert!(!err.is_authentication());
    assert_eq!(accepted.load(Ordering::SeqCst), 1);
    login.assert_async().await;
}

#[tokio::test]
async fn test_login_body_helper_matches_wire_format() {
    let body: serde_json::Value = serde_json::from_str(&login_body("t", "o")).unwrap();
    assert_eq!(body["accessToken"], "t");
    assert_eq!(body["organizationLabel"], "o");
}
