// src/service/directory_service.rs

use crate::api::dto::provider_dto::{
    ProviderDto, ProviderSearchQuery, RegisterProviderForm, ServiceDto, UploadedImage,
};
use crate::db::DbPool;
use crate::domain::location::LOCATIONS;
use crate::error::{map_unique_violation, AppError, AppResult};
use crate::repository::provider_repository::{CreateProvider, ProviderRepository};
use crate::repository::service_repository::ServiceRepository;
use crate::service::storage_service::ImageStorage;
use crate::utils::password::PasswordManager;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

const DUPLICATE_EMAIL: &str = "Email already registered";

/// サービス一覧・プロバイダー検索・プロバイダー登録
pub struct DirectoryService {
    service_repo: Arc<ServiceRepository>,
    provider_repo: Arc<ProviderRepository>,
    password_manager: Arc<PasswordManager>,
    storage: Arc<dyn ImageStorage>,
    public_base_url: String,
}

impl DirectoryService {
    pub fn new(
        db_pool: DbPool,
        password_manager: Arc<PasswordManager>,
        storage: Arc<dyn ImageStorage>,
        public_base_url: String,
    ) -> Self {
        Self {
            service_repo: Arc::new(ServiceRepository::new(db_pool.clone())),
            provider_repo: Arc::new(ProviderRepository::new(db_pool)),
            password_manager,
            storage,
            public_base_url,
        }
    }

    pub fn list_locations(&self) -> Vec<String> {
        LOCATIONS.iter().map(|l| l.to_string()).collect()
    }

    pub async fn list_services(&self) -> AppResult<Vec<ServiceDto>> {
        let services = self.service_repo.find_all().await?;
        Ok(services.into_iter().map(Into::into).collect())
    }

    /// サービス名（部分一致）と地域でプロバイダーを検索
    pub async fn search_providers(&self, query: &ProviderSearchQuery) -> AppResult<Vec<ProviderDto>> {
        let rows = self.provider_repo.find_with_filter(query).await?;

        Ok(rows
            .into_iter()
            .map(|(provider, service)| {
                ProviderDto::from_models(provider, service, &self.public_base_url)
            })
            .collect())
    }

    /// プロバイダーを登録
    ///
    /// 画像保存と DB 登録は同一トランザクションではない。登録失敗時に画像が残ることがある
    pub async fn register_provider(
        &self,
        form: RegisterProviderForm,
        image: Option<UploadedImage>,
    ) -> AppResult<()> {
        form.validate()?;

        if self.provider_repo.find_by_email(&form.email).await?.is_some() {
            return Err(AppError::Conflict(DUPLICATE_EMAIL.to_string()));
        }

        let profile_image = match image {
            Some(image) => {
                ensure_image_upload(&image.file_name, image.content_type.as_deref())?;
                Some(self.storage.store(&image.file_name, &image.data).await?)
            }
            None => None,
        };

        let password_hash = self
            .password_manager
            .hash_password_async(&form.password)
            .await?;

        let provider = self
            .provider_repo
            .create(CreateProvider {
                name: form.name,
                email: form.email,
                password_hash,
                phone: form.phone,
                location: form.location,
                service_id: form.service_id,
                description: form.description,
                profile_image,
            })
            .await
            .map_err(|e| map_unique_violation(e, DUPLICATE_EMAIL))?;

        info!(
            provider_id = %provider.id,
            service_id = %provider.service_id,
            location = %provider.location,
            has_image = provider.profile_image.is_some(),
            "Provider registered"
        );

        Ok(())
    }
}

/// 画像として受け付けるアップロードか
///
/// 保存ファイル名は元の拡張子を引き継ぎ、/static ではその拡張子から Content-Type が決まる。
/// そのため拡張子も画像（SVG を除く）であることを要求する
fn ensure_image_upload(file_name: &str, content_type: Option<&str>) -> AppResult<()> {
    if !is_servable_image(mime_guess::from_path(file_name).first()) {
        return Err(AppError::BadRequest(format!(
            "Profile image must have an image file extension, got '{}'",
            file_name
        )));
    }

    // Content-Type は指定されている場合のみ確認する
    let Some(content_type) = content_type else {
        return Ok(());
    };

    if is_servable_image(content_type.parse::<mime::Mime>().ok()) {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "Profile image must be an image file, got '{}'",
            content_type
        )))
    }
}

fn is_servable_image(mime: Option<mime::Mime>) -> bool {
    matches!(mime, Some(m) if m.type_() == mime::IMAGE && m.subtype() != mime::SVG)
}
