// src/api/handlers/directory_handler.rs
use crate::api::dto::common::{HealthResponse, MessageResponse};
use crate::api::dto::provider_dto::{ProviderSearchQuery, RegisterProviderForm, UploadedImage};
use crate::api::AppState;
use crate::error::{AppError, AppResult};
use axum::{
    extract::{Multipart, Query, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tracing::info;

// --- 参照系 ---

pub async fn list_locations_handler(State(app_state): State<AppState>) -> impl IntoResponse {
    Json(app_state.directory_service.list_locations())
}

pub async fn list_services_handler(
    State(app_state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let services = app_state.directory_service.list_services().await?;
    Ok(Json(services))
}

pub async fn search_providers_handler(
    State(app_state): State<AppState>,
    Query(query): Query<ProviderSearchQuery>,
) -> AppResult<impl IntoResponse> {
    let providers = app_state.directory_service.search_providers(&query).await?;

    info!(
        service_name = ?query.service_name,
        location = ?query.location,
        count = providers.len(),
        "Provider search"
    );

    Ok(Json(providers))
}

// --- プロバイダー登録 ---

/// multipart/form-data で送られたプロバイダー登録
pub async fn register_provider_handler(
    State(app_state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let mut form = RegisterProviderForm::default();
    let mut service_id_seen = false;
    let mut image: Option<UploadedImage> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read multipart data: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        if name == "profile_image" {
            let file_name = field.file_name().unwrap_or("").to_string();
            let content_type = field.content_type().map(|ct| ct.to_string());
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("Failed to read file data: {}", e)))?;

            // 空のファイルパートは画像なしとして扱う
            if !file_name.is_empty() && !data.is_empty() {
                image = Some(UploadedImage {
                    file_name,
                    content_type,
                    data: data.to_vec(),
                });
            }
            continue;
        }

        let value = field
            .text()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read field '{}': {}", name, e)))?;

        match name.as_str() {
            "name" => form.name = value,
            "email" => form.email = value,
            "password" => form.password = value,
            "phone" => form.phone = value,
            "location" => form.location = value,
            "description" => form.description = value,
            "service_id" => {
                form.service_id = value.trim().parse().map_err(|_| {
                    AppError::BadRequest(format!("Invalid service_id: '{}'", value))
                })?;
                service_id_seen = true;
            }
            _ => {}
        }
    }

    if !service_id_seen {
        return Err(AppError::BadRequest("service_id is required".to_string()));
    }

    app_state
        .directory_service
        .register_provider(form, image)
        .await?;

    Ok(Json(MessageResponse::new("Account created successfully!")))
}

// --- ヘルスチェック ---

pub async fn health_check_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

// --- ルーター ---

/// サービス・プロバイダー関連のルーター
pub fn directory_router(app_state: AppState) -> Router {
    Router::new()
        .route("/locations", get(list_locations_handler))
        .route("/services", get(list_services_handler))
        .route("/search", get(search_providers_handler))
        .route("/register", post(register_provider_handler))
        .route("/health", get(health_check_handler))
        .with_state(app_state)
}
