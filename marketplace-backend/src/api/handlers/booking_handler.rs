// src/api/handlers/booking_handler.rs
use crate::api::dto::booking_dto::CreateBookingRequest;
use crate::api::dto::common::MessageResponse;
use crate::api::AppState;
use crate::error::AppResult;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

pub async fn create_booking_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateBookingRequest>,
) -> AppResult<impl IntoResponse> {
    app_state.booking_service.create_booking(payload).await?;

    Ok(Json(MessageResponse::new(
        "Request submitted! We will contact you shortly.",
    )))
}

/// 利用者自身の予約履歴
pub async fn my_requests_handler(
    State(app_state): State<AppState>,
    Path(user_id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let requests = app_state
        .booking_service
        .list_bookings_for_user(user_id)
        .await?;
    Ok(Json(requests))
}

pub fn booking_router(app_state: AppState) -> Router {
    Router::new()
        .route("/book_service", post(create_booking_handler))
        .route("/my_requests/{user_id}", get(my_requests_handler))
        .with_state(app_state)
}
