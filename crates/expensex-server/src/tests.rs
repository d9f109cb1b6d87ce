//! Server API tests

use super::*;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use expensex_core::db::Database;
use http_body_util::BodyExt;
use tower::ServiceExt;

fn setup_test_app() -> Router {
    create_router(Database::in_memory().unwrap(), ServerConfig::default())
}

async fn get_body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body();
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn send_json(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

async fn create_user(app: &Router, email: &str) -> i64 {
    let response = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/user",
            serde_json::json!({ "name": "Test User", "email": email }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    get_body_json(response).await["id"].as_i64().unwrap()
}

async fn set_budget(app: &Router, user_id: i64, budget: f64, savings_goal: f64) -> StatusCode {
    app.clone()
        .oneshot(send_json(
            "PUT",
            &format!("/api/user/{}/budget", user_id),
            serde_json::json!({ "budget": budget, "savingsGoal": savings_goal }),
        ))
        .await
        .unwrap()
        .status()
}

async fn add_expense(app: &Router, user_id: i64, body: serde_json::Value) -> serde_json::Value {
    let response = app
        .clone()
        .oneshot(send_json(
            "POST",
            &format!("/api/user/{}/expenses", user_id),
            body,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    get_body_json(response).await
}

// ========== System Tests ==========

#[tokio::test]
async fn test_root() {
    let app = setup_test_app();
    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert!(json["message"].as_str().unwrap().contains("Expense X"));
    assert!(!json["endpoints"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_health() {
    let app = setup_test_app();
    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "expensex");
}

#[tokio::test]
async fn test_security_headers() {
    let app = setup_test_app();
    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(
        response.headers().get("x-content-type-options").unwrap(),
        "nosniff"
    );
    assert_eq!(response.headers().get("x-frame-options").unwrap(), "DENY");
}

// ========== User API Tests ==========

#[tokio::test]
async fn test_create_and_get_user() {
    let app = setup_test_app();
    let id = create_user(&app, "new@example.com").await;

    let response = app
        .oneshot(get(&format!("/api/user/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["email"], "new@example.com");
    assert_eq!(json["budget"], 0.0);
    assert_eq!(json["savingsGoal"], 0.0);
}

#[tokio::test]
async fn test_duplicate_email_conflict() {
    let app = setup_test_app();
    create_user(&app, "dup@example.com").await;

    let response = app
        .oneshot(send_json(
            "POST",
            "/api/user",
            serde_json::json!({ "name": "Again", "email": "dup@example.com" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_invalid_json_is_bad_request() {
    let app = setup_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/user")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = get_body_json(response).await;
    assert!(json["error"].as_str().unwrap().starts_with("Invalid JSON"));
}

#[tokio::test]
async fn test_get_unknown_user() {
    let app = setup_test_app();
    let response = app.oneshot(get("/api/user/999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = get_body_json(response).await;
    assert_eq!(json["error"], "User 999 not found");
}

#[tokio::test]
async fn test_update_budget_validation() {
    let app = setup_test_app();
    let id = create_user(&app, "budget@example.com").await;

    assert_eq!(set_budget(&app, id, 5000.0, 500.0).await, StatusCode::OK);
    assert_eq!(
        set_budget(&app, id, 0.0, 0.0).await,
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        set_budget(&app, id, 100.0, -1.0).await,
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        set_budget(&app, 999, 100.0, 0.0).await,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_delete_user() {
    let app = setup_test_app();
    let id = create_user(&app, "gone@example.com").await;

    let delete = || {
        Request::builder()
            .method("DELETE")
            .uri(format!("/api/user/{}", id))
            .body(Body::empty())
            .unwrap()
    };

    let response = app.clone().oneshot(delete()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(delete()).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ========== Expense API Tests ==========

#[tokio::test]
async fn test_create_expense_defaults() {
    let app = setup_test_app();
    let id = create_user(&app, "exp@example.com").await;

    let json = add_expense(&app, id, serde_json::json!({ "name": "Snack" })).await;
    assert_eq!(json["amount"], 0.0);
    assert_eq!(json["category"], "other");
    assert_eq!(json["userId"], id);
    assert_eq!(json["date"], today().format("%Y-%m-%d").to_string());
}

#[tokio::test]
async fn test_create_expense_rejects_negative_amount() {
    let app = setup_test_app();
    let id = create_user(&app, "neg@example.com").await;

    let response = app
        .oneshot(send_json(
            "POST",
            &format!("/api/user/{}/expenses", id),
            serde_json::json!({ "name": "Refund", "amount": -10 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_expense_unknown_user() {
    let app = setup_test_app();
    let response = app
        .oneshot(send_json(
            "POST",
            "/api/user/42/expenses",
            serde_json::json!({ "name": "Ghost", "amount": 1 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_expenses_category_filter() {
    let app = setup_test_app();
    let id = create_user(&app, "list@example.com").await;

    add_expense(&app, id, serde_json::json!({ "name": "Bus", "amount": 20, "category": "transport" })).await;
    add_expense(&app, id, serde_json::json!({ "name": "Rice", "amount": 80, "category": "Food" })).await;

    let response = app
        .clone()
        .oneshot(get(&format!("/api/user/{}/expenses", id)))
        .await
        .unwrap();
    assert_eq!(get_body_json(response).await.as_array().unwrap().len(), 2);

    let response = app
        .oneshot(get(&format!("/api/user/{}/expenses?category=food", id)))
        .await
        .unwrap();
    let json = get_body_json(response).await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Rice");
}

#[tokio::test]
async fn test_list_expenses_search() {
    let app = setup_test_app();
    let id = create_user(&app, "search@example.com").await;

    add_expense(&app, id, serde_json::json!({ "name": "Movie", "amount": 250, "category": "entertainment", "notes": "Weekend show" })).await;
    add_expense(&app, id, serde_json::json!({ "name": "Weekend trip", "amount": 900, "category": "travel" })).await;
    add_expense(&app, id, serde_json::json!({ "name": "Notebook", "amount": 60, "category": "education" })).await;

    let response = app
        .clone()
        .oneshot(get(&format!("/api/user/{}/expenses?search=weekend", id)))
        .await
        .unwrap();
    let json = get_body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);

    let response = app
        .oneshot(get(&format!(
            "/api/user/{}/expenses?search=weekend&category=travel",
            id
        )))
        .await
        .unwrap();
    let json = get_body_json(response).await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Weekend trip");
}

#[tokio::test]
async fn test_get_and_delete_expense() {
    let app = setup_test_app();
    let id = create_user(&app, "del@example.com").await;
    let expense = add_expense(&app, id, serde_json::json!({ "name": "Book", "amount": 300 })).await;
    let expense_id = expense["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(get(&format!("/api/expenses/{}", expense_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let delete = Request::builder()
        .method("DELETE")
        .uri(format!("/api/expenses/{}", expense_id))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(delete).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(get(&format!("/api/expenses/{}", expense_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ========== Analytics API Tests ==========

#[tokio::test]
async fn test_analytics_current_month() {
    let app = setup_test_app();
    let id = create_user(&app, "stats@example.com").await;
    assert_eq!(set_budget(&app, id, 1000.0, 0.0).await, StatusCode::OK);

    add_expense(&app, id, serde_json::json!({ "name": "Groceries", "amount": 300, "category": "food" })).await;
    add_expense(&app, id, serde_json::json!({ "name": "Taxi", "amount": 100, "category": "transport" })).await;

    let response = app
        .oneshot(get(&format!("/api/user/{}/analytics", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["totalSpent"], 400.0);
    assert_eq!(json["remaining"], 600.0);
    assert_eq!(json["percentUsed"], 40.0);
    assert_eq!(json["topCategories"][0]["category"], "food");
    assert_eq!(json["categoryBreakdown"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_recommendations_all_good_without_budget() {
    let app = setup_test_app();
    let id = create_user(&app, "calm@example.com").await;

    let response = app
        .oneshot(get(&format!("/api/user/{}/recommendations", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    let recs = json.as_array().unwrap();
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0]["type"], "all_good");
    assert_eq!(recs[0]["severity"], "success");
    assert!(recs[0]["category"].is_null());
}

#[tokio::test]
async fn test_recommendations_budget_warning_first() {
    let app = setup_test_app();
    let id = create_user(&app, "tight@example.com").await;
    assert_eq!(set_budget(&app, id, 1000.0, 0.0).await, StatusCode::OK);
    add_expense(&app, id, serde_json::json!({ "name": "Rent", "amount": 950, "category": "housing" })).await;

    let response = app
        .oneshot(get(&format!("/api/user/{}/recommendations", id)))
        .await
        .unwrap();
    let json = get_body_json(response).await;
    let recs = json.as_array().unwrap();

    assert_eq!(recs[0]["type"], "budget_warning");
    assert_eq!(recs[0]["severity"], "warning");
    assert!(recs.iter().any(|r| r["type"] == "category_alert" && r["category"] == "housing"));
    assert!(!recs.iter().any(|r| r["type"] == "all_good"));
}

#[tokio::test]
async fn test_analytics_unknown_user() {
    let app = setup_test_app();
    let response = app.oneshot(get("/api/user/7/analytics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ========== Audit API Tests ==========

#[tokio::test]
async fn test_audit_log_records_access() {
    let app = setup_test_app();
    let id = create_user(&app, "audit@example.com").await;
    app.clone()
        .oneshot(get(&format!("/api/user/{}", id)))
        .await
        .unwrap();

    let response = app.oneshot(get("/api/audit?limit=10")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| e["actor"] == "api"));
    assert!(entries.iter().any(|e| e["action"] == "create"));
}

// ========== Config Tests ==========

#[tokio::test]
async fn test_cors_restricted_origins() {
    let config = ServerConfig {
        allowed_origins: vec!["http://app.test".to_string()],
    };
    let app = create_router(Database::in_memory().unwrap(), config);

    let with_origin = |origin: &str| {
        Request::builder()
            .uri("/health")
            .header("origin", origin)
            .body(Body::empty())
            .unwrap()
    };

    let response = app.clone().oneshot(with_origin("http://app.test")).await.unwrap();
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "http://app.test"
    );

    let response = app.oneshot(with_origin("http://evil.test")).await.unwrap();
    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_none());
}

#[tokio::test]
async fn test_cors_any_origin_by_default() {
    let app = setup_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("origin", "http://anywhere.test")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );
}

#[test]
fn test_parse_origins() {
    assert!(parse_origins("").is_empty());
    assert_eq!(
        parse_origins("http://a.test, ,http://b.test"),
        vec!["http://a.test".to_string(), "http://b.test".to_string()]
    );
}
