use crate::common::{mock_login, mock_rotating_login, test_config};
use maestro_client::prelude::*;
use mockito::{Matcher, Server};
use std::sync::atomic::Ordering;

#[tokio::test]
async fn test_default_headers_and_versioned_prefix() {
    let mut server = Server::new_async().await;
    mock_login(&mut server, "abc", "org1", 1).await;
    let mock = server
        .mock("POST", "/api/v2/task")
        .match_header("authorization", "Bearer abc")
        .match_header("x-organization", "org1")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(
            json!({"automationLabel": "bot", "data": {"x": 1}}),
        ))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": 99, "state": "START"}"#)
        .create_async()
        .await;

    let client = Client::new(test_config(&server)).await.unwrap();
    let response = client
        .tasks()
        .create(&NewTask::new("bot", json!({"x": 1})))
        .await
        .unwrap();

    assert!(response.ok);
    assert_eq!(response.status_code, 201);
    assert_eq!(response.json().unwrap()["id"], 99);
    assert!(response.url.ends_with("/api/v2/task"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_secondary_prefix_is_not_rewritten() {
    let mut server = Server::new_async().await;
    mock_login(&mut server, "abc", "org1", 1).await;
    let mock = server
        .mock("GET", "/maestro/api/logs/7")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": 7}"#)
        .create_async()
        .await;

    let client = Client::new(test_config(&server)).await.unwrap();
    let response = client.logs().get(7).await.unwrap();

    assert!(response.ok);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_paged_list_sends_defaults() {
    let mut server = Server::new_async().await;
    mock_login(&mut server, "abc", "org1", 1).await;
    let mock = server
        .mock("GET", "/maestro/api/datapools/orders/items")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("size".into(), "100".into()),
            Matcher::UrlEncoded("state".into(), "PENDING".into()),
        ]))
        .with_status(200)
        .create_async()
        .await;

    let client = Client::new(test_config(&server)).await.unwrap();
    client
        .datapools()
        .items("orders", &ListOptions::new().filter("state", "PENDING"))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_http_errors_come_back_as_envelopes() {
    let mut server = Server::new_async().await;
    mock_login(&mut server, "abc", "org1", 1).await;
    server
        .mock("GET", "/api/v2/task/404")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "Task not found"}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/api/v2/task/500")
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body("<html>boom</html>")
        .create_async()
        .await;

    let client = Client::new(test_config(&server)).await.unwrap();

    let not_found = client.tasks().get(404).await.unwrap();
    assert!(!not_found.ok);
    assert_eq!(not_found.status_code, 404);
    assert_eq!(not_found.json().unwrap()["message"], "Task not found");

    let broken = client.tasks().get(500).await.unwrap();
    assert!(!broken.ok);
    assert_eq!(broken.status_code, 500);
    assert_eq!(broken.json(), Some(&json!({})));
}

#[tokio::test]
async fn test_text_and_binary_bodies() {
    let mut server = Server::new_async().await;
    mock_login(&mut server, "abc", "org1", 1).await;
    server
        .mock("GET", "/maestro/api/errors/1")
        .with_status(200)
        .with_header("content-type", "text/plain; charset=utf-8")
        .with_body("plain report")
        .create_async()
        .await;
    server
        .mock("GET", "/maestro/api/artifacts/1")
        .with_status(200)
        .with_header("content-type", "application/octet-stream")
        .with_body(vec![0u8, 159, 146, 150])
        .create_async()
        .await;

    let client = Client::new(test_config(&server)).await.unwrap();

    let text = client.errors().get(1).await.unwrap();
    assert_eq!(text.text(), Some("plain report"));
    assert_eq!(text.header("Content-Type"), Some("text/plain; charset=utf-8"));

    let binary = client.result_files().get(1).await.unwrap();
    assert_eq!(binary.bytes(), Some(&[0u8, 159, 146, 150][..]));
}

#[tokio::test]
async fn test_unauthorized_retries_once_with_new_token() {
    let mut server = Server::new_async().await;
    let (login, issued) = mock_rotating_login(&mut server, 2).await;
    let rejected = server
        .mock("GET", "/api/v2/bot")
        .match_header("authorization", "Bearer tok-1")
        .with_status(401)
        .expect(1)
        .create_async()
        .await;
    let accepted = server
        .mock("GET", "/api/v2/bot")
        .match_header("authorization", "Bearer tok-2")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .expect(1)
        .create_async()
        .await;

    let client = Client::new(test_config(&server)).await.unwrap();
    let response = client.get("/bot").await.unwrap();

    assert!(response.ok);
    assert_eq!(client.token().await.as_deref(), Some("tok-2"));
    assert_eq!(issued.load(Ordering::SeqCst), 2);
    login.assert_async().await;
    rejected.assert_async().await;
    accepted.assert_async().await;
}

#[tokio::test]
async fn test_second_unauthorized_is_returned() {
    let mut server = Server::new_async().await;
    let (login, _) = mock_rotating_login(&mut server, 2).await;
    let endpoint = server
        .mock("GET", "/maestro/api/workspaces")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "Unauthorized"}"#)
        .expect(2)
        .create_async()
        .await;

    let client = Client::new(test_config(&server)).await.unwrap();
    let response = client.workspaces().list(&ListOptions::new()).await.unwrap();

    assert!(!response.ok);
    assert_eq!(response.status_code, 401);
    login.assert_async().await;
    endpoint.assert_async().await;
}

#[tokio::test]
async fn test_retry_can_be_disabled() {
    let mut server = Server::new_async().await;
    let (login, _) = mock_rotating_login(&mut server, 1).await;
    let endpoint = server
        .mock("GET", "/api/v2/task/1")
        .with_status(401)
        .expect(1)
        .create_async()
        .await;

    let client = Client::new(test_config(&server)).await.unwrap();
    let response = client
        .execute(RequestSpec::get("/task/1").retry_on_401(false))
        .await
        .unwrap();

    assert_eq!(response.status_code, 401);
    login.assert_async().await;
    endpoint.assert_async().await;
}

#[tokio::test]
async fn test_forbidden_is_not_retried() {
    let mut server = Server::new_async().await;
    let (login, _) = mock_rotating_login(&mut server, 1).await;
    let endpoint = server
        .mock("DELETE", "/maestro/api/credentials/erp")
        .with_status(403)
        .expect(1)
        .create_async()
        .await;

    let client = Client::new(test_config(&server)).await.unwrap();
    let response = client.credentials().delete("erp").await.unwrap();

    assert_eq!(response.status_code, 403);
    login.assert_async().await;
    endpoint.assert_async().await;
}

#[tokio::test]
async fn test_multipart_upload_survives_retry() {
    let mut server = Server::new_async().await;
    let (login, _) = mock_rotating_login(&mut server, 2).await;
    let multipart = Matcher::Regex("^multipart/form-data; boundary=.+".to_string());
    let rejected = server
        .mock("POST", "/maestro/api/artifacts")
        .match_header("authorization", "Bearer tok-1")
        .match_header("content-type", multipart.clone())
        .with_status(401)
        .create_async()
        .await;
    let accepted = server
        .mock("POST", "/maestro/api/artifacts")
        .match_header("authorization", "Bearer tok-2")
        .match_header("content-type", multipart)
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("name=\"taskId\"".to_string()),
            Matcher::Regex("filename=\"out.csv\"".to_string()),
            Matcher::Regex("a,b".to_string()),
        ]))
        .with_status(201)
        .create_async()
        .await;

    let client = Client::new(test_config(&server)).await.unwrap();
    let upload = ArtifactUpload::new("out.csv", b"a,b\n1,2".to_vec())
        .content_type("text/csv")
        .meta("taskId", "7");
    let response = client.result_files().upload(upload).await.unwrap();

    assert_eq!(response.status_code, 201);
    login.assert_async().await;
    rejected.assert_async().await;
    accepted.assert_async().await;
}

#[tokio::test]
async fn test_streaming_download_leaves_body_unread() {
    let mut server = Server::new_async().await;
    mock_login(&mut server, "abc", "org1", 1).await;
    server
        .mock("GET", "/maestro/api/logs/3/download")
        .with_status(200)
        .with_header("content-type", "text/csv")
        .with_body("date,message\n2026-10-19,done\n")
        .create_async()
        .await;

    let client = Client::new(test_config(&server)).await.unwrap();
    let response = client.logs().download(3).await.unwrap();

    assert!(response.ok);
    assert_eq!(response.data, ResponseData::Empty);
    let mut raw = response.into_raw().expect("streaming response keeps the raw body");
    let mut body = Vec::new();
    while let Some(chunk) = raw.chunk().await.unwrap() {
        body.extend_from_slice(&chunk);
    }
    assert_eq!(body, b"date,message\n2026-10-19,done\n");
}

#[tokio::test]
async fn test_caller_headers_override_defaults() {
    let mut server = Server::new_async().await;
    mock_login(&mut server, "abc", "org1", 1).await;
    let mock = server
        .mock("PUT", "/api/v2/bot/b1")
        .match_header("content-type", "application/merge-patch+json")
        .match_header("x-trace", "t-1")
        .with_status(200)
        .create_async()
        .await;

    let client = Client::new(test_config(&server)).await.unwrap();
    let spec = RequestSpec::put("/bot/b1")
        .json(json!({"label": "b1"}))
        .header("Content-Type", "application/merge-patch+json")
        .header("X-Trace", "t-1");
    client.execute(spec).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_absolute_url_bypasses_base() {
    let mut server = Server::new_async().await;
    mock_login(&mut server, "abc", "org1", 1).await;
    let mock = server
        .mock("GET", "/custom/health")
        .match_header("authorization", "Bearer abc")
        .with_status(204)
        .create_async()
        .await;

    let client = Client::new(test_config(&server)).await.unwrap();
    let response = client
        .get(&format!("{}/custom/health", server.url()))
        .await
        .unwrap();

    assert!(response.ok);
    assert_eq!(response.status_code, 204);
    mock.assert_async().await;
}
