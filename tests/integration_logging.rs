mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{CHECK_TIMEOUT, CapturedLogs, setup_test_app, unreachable_config};
use estoque::bootstrap::check_database;
use estoque_config::StartupPolicy;
use estoque_db::Database;
use tower::ServiceExt;

async fn send(app: axum::Router, uri: &str) -> StatusCode {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    app.oneshot(request).await.unwrap().status()
}

#[tokio::test]
async fn test_startup_failure_logged_once_without_password() {
    let logs = CapturedLogs::default();
    let _guard = logs.install();

    let db = Database::initialize(&unreachable_config());
    let result = check_database(&db, StartupPolicy::Degrade, CHECK_TIMEOUT).await;

    assert!(result.is_ok());
    assert_eq!(logs.count("Unable to connect to database"), 1);
    assert_eq!(logs.count("Continuing without database connectivity"), 1);
    assert_eq!(logs.count("Connected to database"), 0);
    assert!(logs.contents().contains("root@nonexistent.invalid:3306/inventory"));
    assert!(!logs.contents().contains("secret"));
}

#[tokio::test]
async fn test_failed_health_request_is_logged_as_server_error() {
    let logs = CapturedLogs::default();
    let _guard = logs.install();

    let app = setup_test_app(Database::initialize(&unreachable_config()));
    let status = send(app, "/health").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(logs.count("Request failed"), 1);
    assert_eq!(logs.count("status=503"), 1);
    assert!(logs.contents().contains("path=/health"));
    assert!(!logs.contents().contains("secret"));
}

#[tokio::test]
async fn test_unknown_route_is_logged_as_rejected() {
    let logs = CapturedLogs::default();
    let _guard = logs.install();

    let app = setup_test_app(Database::initialize(&unreachable_config()));
    let status = send(app, "/api/items").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(logs.count("Request rejected"), 1);
    assert!(logs.contents().contains("status=404"));
    assert!(logs.contents().contains("path=/api/items"));
}

#[tokio::test]
#[ignore = "requires a running MySQL server configured through TEST_DB_* variables"]
async fn test_success_logged_once_without_password() {
    let logs = CapturedLogs::default();
    let _guard = logs.install();
    let config = common::live_config();

    let db = Database::initialize(&config);
    db.verify_connectivity().await.unwrap();

    assert_eq!(logs.count("Connected to database"), 1);
    assert_eq!(logs.count("Unable to connect to database"), 0);
    if !config.password.expose().is_empty() {
        assert!(!logs.contents().contains(config.password.expose()));
    }
}
