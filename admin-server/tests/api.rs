//! End-to-end API tests
//!
//! Drive the fully assembled router (middleware included) against the
//! in-memory database engine.

use admin_server::auth::JwtConfig;
use admin_server::{Config, ServerState, routes};
use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

const ADMIN_EMAIL: &str = "admin@example.com";
const ADMIN_PASSWORD: &str = "s3cret-password";

fn test_config() -> Config {
    Config {
        http_port: 0,
        data_dir: ".".into(),
        environment: "test".into(),
        jwt: JwtConfig {
            secret: "0123456789abcdef0123456789abcdef".into(),
            expiration_minutes: 60,
            issuer: "hr-admin-api".into(),
        },
        // Minimum bcrypt cost keeps the suite fast; runtime cost is enforced
        // by Config::validate, which tests do not opt into.
        bcrypt_cost: 4,
        admin_email: Some(ADMIN_EMAIL.into()),
        admin_password: Some(ADMIN_PASSWORD.into()),
        log_level: "info".into(),
        log_dir: None,
    }
}

async fn test_app() -> Router {
    let db = admin_server::db::connect_memory().await.unwrap();
    let state = ServerState::with_db(test_config(), db).await.unwrap();
    routes::build_app(&state).with_state(state)
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn login(app: &Router) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({"email": ADMIN_EMAIL, "password": ADMIN_PASSWORD})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_initialize_with_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = test_config();
    config.data_dir = dir.path().to_string_lossy().to_string();

    let state = ServerState::initialize(&config).await.unwrap();
    let app = routes::build_app(&state).with_state(state);

    let (status, _) = send(&app, "GET", "/api/health", None, None).await;
    assert_eq!(status, StatusCode::OK);

    // Seeded admin can log in against the on-disk database too
    login(&app).await;
}

#[tokio::test]
async fn test_health_is_public() {
    let app = test_app().await;
    let (status, body) = send(&app, "GET", "/api/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_login_and_me() {
    let app = test_app().await;
    let token = login(&app).await;

    let (status, body) = send(&app, "GET", "/api/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], ADMIN_EMAIL);
    assert_eq!(body["role"], "ADMIN");
}

#[tokio::test]
async fn test_login_failures_do_not_leak_account_existence() {
    let app = test_app().await;

    let (status_a, body_a) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({"email": "unknown@x.com", "password": "anything"})),
    )
    .await;
    let (status_b, body_b) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({"email": ADMIN_EMAIL, "password": "wrongpassword"})),
    )
    .await;

    assert_eq!(status_a, StatusCode::UNAUTHORIZED);
    assert_eq!(status_b, StatusCode::UNAUTHORIZED);
    assert_eq!(body_a["code"], body_b["code"]);
    assert_eq!(body_a["message"], body_b["message"]);
}

#[tokio::test]
async fn test_protected_routes_require_valid_token() {
    let app = test_app().await;

    let (status, _) = send(&app, "GET", "/api/departments", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        &app,
        "GET",
        "/api/departments",
        Some("not-a-real-token"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_department_crud() {
    let app = test_app().await;
    let token = login(&app).await;

    // Create
    let (status, created) = send(
        &app,
        "POST",
        "/api/departments",
        Some(&token),
        Some(json!({"name": "Engineering", "description": "Builds things"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());

    // Duplicate name conflicts
    let (status, body) = send(
        &app,
        "POST",
        "/api/departments",
        Some(&token),
        Some(json!({"name": "Engineering"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 3002);

    // Read back
    let (status, fetched) = send(
        &app,
        "GET",
        &format!("/api/departments/{id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Engineering");

    // Update
    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/api/departments/{id}"),
        Some(&token),
        Some(json!({"description": "Builds better things"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["description"], "Builds better things");
    assert_eq!(updated["name"], "Engineering");

    // Delete
    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/departments/{id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // Gone
    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/departments/{id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 3001);
}

#[tokio::test]
async fn test_validation_errors_report_every_field() {
    let app = test_app().await;
    let token = login(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/departments",
        Some(&token),
        Some(json!({"name": "", "description": "d".repeat(501)})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2);
    assert!(body["details"]["fields"]["name"].is_array());
    assert!(body["details"]["fields"]["description"].is_array());
}

#[tokio::test]
async fn test_employee_lifecycle() {
    let app = test_app().await;
    let token = login(&app).await;

    let (_, department) = send(
        &app,
        "POST",
        "/api/departments",
        Some(&token),
        Some(json!({"name": "Engineering"})),
    )
    .await;
    let department_id = department["id"].as_str().unwrap().to_string();

    // Create with string salary/date; stored as numeric + defaulted status
    let (status, employee) = send(
        &app,
        "POST",
        "/api/employees",
        Some(&token),
        Some(json!({
            "firstName": "John",
            "lastName": "Doe",
            "email": "john@x.com",
            "position": "Engineer",
            "salary": "100000",
            "hireDate": "2023-01-15",
            "departmentId": department_id,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(employee["salary"].as_f64(), Some(100000.0));
    assert_eq!(employee["status"], "ACTIVE");
    assert_eq!(employee["hireDate"], "2023-01-15");
    assert_eq!(employee["departmentId"], department_id);
    let employee_id = employee["id"].as_str().unwrap().to_string();

    // Department roster contains the new employee
    let (status, roster) = send(
        &app,
        "GET",
        &format!("/api/departments/{department_id}/employees"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(roster.as_array().unwrap().len(), 1);

    // Unknown department reference is rejected, nothing persisted
    let (status, body) = send(
        &app,
        "POST",
        "/api/employees",
        Some(&token),
        Some(json!({
            "firstName": "Jane",
            "lastName": "Doe",
            "email": "jane@x.com",
            "position": "Engineer",
            "salary": "90000",
            "hireDate": "2023-02-01",
            "departmentId": "department:missing",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 3001);

    let (_, all) = send(&app, "GET", "/api/employees", Some(&token), None).await;
    assert_eq!(all.as_array().unwrap().len(), 1);

    // Clearing the department reference with an explicit null
    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/api/employees/{employee_id}"),
        Some(&token),
        Some(json!({"departmentId": null})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(updated["departmentId"].is_null());

    // Deleted department no longer lists a roster
    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/departments/{department_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/departments/{department_id}/employees"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 3001);
}
