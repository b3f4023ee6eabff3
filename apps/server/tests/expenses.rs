mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn recording_expenses_moves_through_thresholds() {
    let app = common::spawn_app().await;
    let token = app.register("asha@example.com").await;

    let (status, receipt) = app
        .request(
            Method::POST,
            "/api/v1/expenses",
            Some(&token),
            Some(json!({ "amount": 450, "category": " Food ", "note": "lunch" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(receipt["expense"]["amount"], 450);
    assert_eq!(receipt["expense"]["category"], "Food");
    assert_eq!(receipt["status"]["todayTotal"], 450);
    assert_eq!(receipt["status"]["classification"], "NEARING");
    assert_eq!(
        receipt["status"]["alert"],
        "You are nearing your daily limit. Spent ₹450 / ₹500."
    );
    // Mail is not configured in tests
    assert_eq!(receipt["alertSent"], false);

    let (status, receipt) = app
        .request(
            Method::POST,
            "/api/v1/expenses",
            Some(&token),
            Some(json!({ "amount": 100, "category": "Travel" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(receipt["status"]["todayTotal"], 550);
    assert_eq!(receipt["status"]["classification"], "EXCEEDED");

    let (status, dashboard) = app
        .request(Method::GET, "/api/v1/dashboard", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dashboard["todayTotal"], 550);
    assert_eq!(dashboard["dailyLimit"], 500);
    assert_eq!(
        dashboard["alert"],
        "You have exceeded your daily budget of ₹500! (Spent ₹550)"
    );
    let recent = dashboard["recentExpenses"].as_array().unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0]["category"], "Travel");
    assert_eq!(recent[1]["note"], "lunch");
}

#[tokio::test]
async fn invalid_expenses_are_rejected_without_writing() {
    let app = common::spawn_app().await;
    let token = app.register("asha@example.com").await;

    for body in [
        json!({ "amount": 0, "category": "Food" }),
        json!({ "amount": -20, "category": "Food" }),
        json!({ "amount": 12.5, "category": "Food" }),
        json!({ "amount": "ten", "category": "Food" }),
        json!({ "amount": 10, "category": "   " }),
        json!({ "category": "Food" }),
    ] {
        let (status, error) = app
            .request(Method::POST, "/api/v1/expenses", Some(&token), Some(body))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error["code"], 400);
    }

    let (_, budget) = app
        .request(Method::GET, "/api/v1/budget", Some(&token), None)
        .await;
    assert_eq!(budget["todayTotal"], 0);

    let (_, listed) = app
        .request(Method::GET, "/api/v1/expenses", Some(&token), None)
        .await;
    assert!(listed.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn expenses_are_private_to_their_owner() {
    let app = common::spawn_app().await;
    let asha = app.register("asha@example.com").await;
    let ravi = app.register("ravi@example.com").await;

    app.request(
        Method::POST,
        "/api/v1/expenses",
        Some(&asha),
        Some(json!({ "amount": 300, "category": "Rent" })),
    )
    .await;

    let (_, budget) = app
        .request(Method::GET, "/api/v1/budget", Some(&ravi), None)
        .await;
    assert_eq!(budget["todayTotal"], 0);
    assert_eq!(budget["classification"], "NORMAL");

    let (_, listed) = app
        .request(Method::GET, "/api/v1/expenses", Some(&ravi), None)
        .await;
    assert!(listed.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn list_respects_limit() {
    let app = common::spawn_app().await;
    let token = app.register("asha@example.com").await;
    for amount in 1..=12 {
        app.request(
            Method::POST,
            "/api/v1/expenses",
            Some(&token),
            Some(json!({ "amount": amount, "category": "Snacks" })),
        )
        .await;
    }

    let (_, default_list) = app
        .request(Method::GET, "/api/v1/expenses", Some(&token), None)
        .await;
    let default_list = default_list.as_array().unwrap();
    assert_eq!(default_list.len(), 10);
    assert_eq!(default_list[0]["amount"], 12);

    let (_, short_list) = app
        .request(Method::GET, "/api/v1/expenses?limit=3", Some(&token), None)
        .await;
    assert_eq!(short_list.as_array().unwrap().len(), 3);

    let (status, _) = app
        .request(Method::GET, "/api/v1/expenses?limit=abc", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn daily_limit_updates_apply_immediately() {
    let app = common::spawn_app().await;
    let token = app.register("asha@example.com").await;

    let (status, _) = app
        .request(
            Method::PUT,
            "/api/v1/budget",
            Some(&token),
            Some(json!({ "dailyLimit": -5 })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, user) = app
        .request(
            Method::PUT,
            "/api/v1/budget",
            Some(&token),
            Some(json!({ "dailyLimit": 0 })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["dailyLimit"], 0);

    let (_, receipt) = app
        .request(
            Method::POST,
            "/api/v1/expenses",
            Some(&token),
            Some(json!({ "amount": 10000, "category": "Rent" })),
        )
        .await;
    assert_eq!(receipt["status"]["classification"], "NORMAL");
    assert_eq!(receipt["alertSent"], false);

    let (_, user) = app
        .request(
            Method::PUT,
            "/api/v1/budget",
            Some(&token),
            Some(json!({ "dailyLimit": 8000 })),
        )
        .await;
    assert_eq!(user["dailyLimit"], 8000);

    let (_, budget) = app
        .request(Method::GET, "/api/v1/budget", Some(&token), None)
        .await;
    assert_eq!(budget["classification"], "EXCEEDED");
    assert_eq!(budget["dailyLimit"], 8000);
}
