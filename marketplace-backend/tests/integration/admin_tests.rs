// tests/integration/admin_tests.rs

use axum::http::StatusCode;

use crate::common::{
    app_helper::setup_app,
    request::{create_empty_request, create_request, send_json},
    test_data::{admin_users, booking_json},
};

#[tokio::test]
async fn test_admin_lists_all_requests_newest_first() {
    let app = setup_app().await;

    send_json(
        &app.router,
        create_request("POST", "/book_service", &booking_json(1, "Plumber")),
    )
    .await;
    send_json(
        &app.router,
        create_request("POST", "/book_service", &booking_json(2, "Electrician")),
    )
    .await;

    let (status, json) =
        send_json(&app.router, create_empty_request("GET", "/admin/requests")).await;

    assert_eq!(status, StatusCode::OK);
    let requests = json.as_array().unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0]["user_id"], 2);
    assert_eq!(requests[1]["user_id"], 1);
}

#[tokio::test]
async fn test_update_status_accepts_any_string() {
    let app = setup_app().await;

    send_json(
        &app.router,
        create_request("POST", "/book_service", &booking_json(3, "Plumber")),
    )
    .await;
    let (_, list) = send_json(&app.router, create_empty_request("GET", "/admin/requests")).await;
    let id = list[0]["id"].as_i64().unwrap();

    for new_status in ["Accepted", "Completed", "On%20Hold"] {
        let (status, json) = send_json(
            &app.router,
            create_empty_request("PUT", &format!("/admin/requests/{}?status={}", id, new_status)),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Status updated successfully");
    }

    let (_, json) = send_json(&app.router, create_empty_request("GET", "/my_requests/3")).await;
    assert_eq!(json[0]["status"], "On Hold");
}

#[tokio::test]
async fn test_update_status_missing_request_is_not_found() {
    let app = setup_app().await;

    send_json(
        &app.router,
        create_request("POST", "/book_service", &booking_json(5, "Plumber")),
    )
    .await;
    let (_, before) = send_json(&app.router, create_empty_request("GET", "/admin/requests")).await;

    let (status, json) = send_json(
        &app.router,
        create_empty_request("PUT", "/admin/requests/999999?status=Completed"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["detail"], "Request not found");

    // 既存の予約は変わらない
    let (_, after) = send_json(&app.router, create_empty_request("GET", "/admin/requests")).await;
    assert_eq!(before, after);
    assert_eq!(after[0]["status"], "Pending");
}

#[tokio::test]
async fn test_setup_admin_is_idempotent() {
    let app = setup_app().await;

    let (status, first) = send_json(&app.router, create_empty_request("GET", "/setup_admin")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["message"], "Admin created: admin@hussboss.com");

    let (status, second) =
        send_json(&app.router, create_empty_request("GET", "/setup_admin")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["message"], "Admin already exists");

    let admins = admin_users(&app.db.connection).await;
    assert_eq!(admins.len(), 1);
    assert_eq!(admins[0].email, "admin@hussboss.com");
    assert_eq!(admins[0].full_name, "Super Admin");
}

#[tokio::test]
async fn test_default_admin_can_log_in() {
    let app = setup_app().await;

    send_json(&app.router, create_empty_request("GET", "/setup_admin")).await;

    let (status, json) = send_json(
        &app.router,
        create_request(
            "POST",
            "/auth/login",
            &serde_json::json!({ "email": "admin@hussboss.com", "password": "adminhoni" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["is_admin"], true);
    assert_eq!(json["full_name"], "Super Admin");
}

#[tokio::test]
async fn test_update_status_accepts_long_free_text() {
    let app = setup_app().await;

    send_json(
        &app.router,
        create_request("POST", "/book_service", &booking_json(8, "Plumber")),
    )
    .await;
    let (_, list) = send_json(&app.router, create_empty_request("GET", "/admin/requests")).await;
    let id = list[0]["id"].as_i64().unwrap();

    let long_status = "Rescheduled".repeat(8);
    let (status, _) = send_json(
        &app.router,
        create_empty_request("PUT", &format!("/admin/requests/{}?status={}", id, long_status)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, json) = send_json(&app.router, create_empty_request("GET", "/my_requests/8")).await;
    assert_eq!(json[0]["status"], long_status.as_str());
}
