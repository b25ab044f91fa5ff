// src/api/mod.rs
use crate::api::handlers::{
    admin_handler::admin_router, auth_handler::auth_router, booking_handler::booking_router,
    directory_handler::directory_router,
};
use crate::config::AppConfig;
use crate::db::DbPool;
use crate::error::AppResult;
use crate::logging::{inject_request_context, logging_middleware};
use crate::service::{
    account_service::AccountService, booking_service::BookingService,
    directory_service::DirectoryService,
    storage_service::{ImageStorage, LocalImageStorage},
};
use crate::utils::password::PasswordManager;
use axum::{extract::DefaultBodyLimit, middleware, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

pub mod dto;
pub mod handlers;

/// 統一されたアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub directory_service: Arc<DirectoryService>,
    pub booking_service: Arc<BookingService>,
    pub account_service: Arc<AccountService>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// 設定から各サービスを組み立てる（画像はローカルディスクに保存）
    pub fn new(db_pool: DbPool, config: AppConfig) -> AppResult<Self> {
        let storage: Arc<dyn ImageStorage> =
            Arc::new(LocalImageStorage::from_config(&config.storage));
        Self::with_storage(db_pool, config, storage)
    }

    pub fn with_storage(
        db_pool: DbPool,
        config: AppConfig,
        storage: Arc<dyn ImageStorage>,
    ) -> AppResult<Self> {
        // Argon2 のパラメータが不正な場合はここで失敗する
        let password_manager = Arc::new(PasswordManager::new(config.argon2.clone())?);

        let directory_service = Arc::new(DirectoryService::new(
            db_pool.clone(),
            password_manager.clone(),
            storage,
            config.storage.public_base_url.clone(),
        ));
        let booking_service = Arc::new(BookingService::new(db_pool.clone()));
        let account_service = Arc::new(AccountService::new(
            db_pool,
            password_manager,
            config.admin.clone(),
        ));

        Ok(Self {
            directory_service,
            booking_service,
            account_service,
            config: Arc::new(config),
        })
    }
}

/// 全ルートとミドルウェアをまとめたルーター
pub fn app_router(app_state: AppState) -> Router {
    let static_dir = app_state.config.storage.static_dir.clone();
    let body_limit = app_state.config.server.body_limit;

    Router::new()
        .merge(directory_router(app_state.clone()))
        .merge(booking_router(app_state.clone()))
        .merge(admin_router(app_state.clone()))
        .merge(auth_router(app_state))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(inject_request_context))
        .layer(TraceLayer::new_for_http())
        // ブラウザフロントエンドから任意のオリジンで呼ばれる
        .layer(CorsLayer::very_permissive())
}
