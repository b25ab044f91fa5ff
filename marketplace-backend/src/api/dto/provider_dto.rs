// src/api/dto/provider_dto.rs
use crate::domain::location::is_known_location;
use crate::domain::{provider_model, service_model};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

// --- サービス ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceDto {
    pub id: i32,
    pub name: String,
    pub image_url: String,
}

impl From<service_model::Model> for ServiceDto {
    fn from(model: service_model::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            image_url: model.image_url,
        }
    }
}

// --- 検索 ---

/// GET /search のクエリ
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderSearchQuery {
    pub service_name: Option<String>,
    pub location: Option<String>,
}

/// 検索結果のプロバイダー（パスワードハッシュは含めない）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProviderDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub service_id: i32,
    pub service_name: String,
    pub description: String,
    pub rating: String,
    /// 表示用に絶対URLへ変換済み
    pub profile_image: Option<String>,
}

impl ProviderDto {
    pub fn from_models(
        provider: provider_model::Model,
        service: service_model::Model,
        public_base_url: &str,
    ) -> Self {
        Self {
            id: provider.id,
            name: provider.name,
            email: provider.email,
            phone: provider.phone,
            location: provider.location,
            service_id: provider.service_id,
            service_name: service.name,
            description: provider.description,
            rating: provider.rating,
            profile_image: provider
                .profile_image
                .map(|path| absolute_image_url(public_base_url, &path)),
        }
    }
}

/// 保存済みの相対パスを公開URLに変換する（保存値は変更しない）
pub fn absolute_image_url(public_base_url: &str, relative_path: &str) -> String {
    format!(
        "{}/{}",
        public_base_url.trim_end_matches('/'),
        relative_path.trim_start_matches('/')
    )
}

// --- 登録 ---

fn validate_location(location: &str) -> Result<(), ValidationError> {
    if is_known_location(location) {
        Ok(())
    } else {
        let mut error = ValidationError::new("unknown_location");
        error.message = Some("Location must be one of the supported locations".into());
        Err(error)
    }
}

/// POST /register のフォーム項目（multipart から組み立てる）
#[derive(Debug, Clone, Default, Validate)]
pub struct RegisterProviderForm {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    #[validate(length(min = 1, max = 50, message = "Phone is required"))]
    pub phone: String,

    #[validate(custom(function = validate_location))]
    pub location: String,

    pub service_id: i32,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
}

/// アップロードされたプロフィール画像
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}
