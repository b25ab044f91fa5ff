// src/api/handlers/admin_handler.rs
use crate::api::dto::booking_dto::UpdateStatusQuery;
use crate::api::dto::common::MessageResponse;
use crate::api::AppState;
use crate::error::AppResult;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};
use tracing::info;

/// 全予約リクエスト（新しい順）
pub async fn list_requests_handler(
    State(app_state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let requests = app_state.booking_service.list_all_bookings().await?;
    Ok(Json(requests))
}

pub async fn update_request_status_handler(
    State(app_state): State<AppState>,
    Path(request_id): Path<i32>,
    Query(query): Query<UpdateStatusQuery>,
) -> AppResult<impl IntoResponse> {
    app_state
        .booking_service
        .update_booking_status(request_id, &query.status)
        .await?;

    Ok(Json(MessageResponse::new("Status updated successfully")))
}

/// 初期管理者を作成（既に存在すれば何もしない）
pub async fn setup_admin_handler(State(app_state): State<AppState>) -> AppResult<impl IntoResponse> {
    let outcome = app_state.account_service.ensure_default_admin().await?;

    info!(outcome = ?outcome, "Admin setup requested");

    Ok(Json(MessageResponse::new(outcome.message())))
}

// --- ルーター ---

// TODO: 管理者ルートに認証を付ける（現状フロントエンドの表示制御のみ）
pub fn admin_router(app_state: AppState) -> Router {
    Router::new()
        .route("/admin/requests", get(list_requests_handler))
        .route("/admin/requests/{id}", put(update_request_status_handler))
        .route("/setup_admin", get(setup_admin_handler))
        .with_state(app_state)
}
