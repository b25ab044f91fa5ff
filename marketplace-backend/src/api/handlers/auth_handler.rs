// src/api/handlers/auth_handler.rs
use crate::api::dto::auth_dto::{LoginRequest, SignupRequest};
use crate::api::AppState;
use crate::error::AppResult;
use axum::{extract::State, response::IntoResponse, routing::post, Json, Router};
use validator::Validate;

// --- ハンドラー ---

/// 利用者登録。ログインと同じ形のユーザー情報を返す
pub async fn signup_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> AppResult<impl IntoResponse> {
    let user = app_state.account_service.signup(payload).await?;
    Ok(Json(user))
}

pub async fn login_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    let user = app_state.account_service.login(payload).await?;
    Ok(Json(user))
}

// --- ルーター ---

/// 認証ルーターを作成
pub fn auth_router(app_state: AppState) -> Router {
    Router::new()
        .route("/auth/signup", post(signup_handler))
        .route("/auth/login", post(login_handler))
        .with_state(app_state)
}
