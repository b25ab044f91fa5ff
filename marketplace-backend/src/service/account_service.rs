// src/service/account_service.rs

use crate::api::dto::auth_dto::{LoginRequest, SignupRequest, UserRecord};
use crate::config::AdminConfig;
use crate::db::DbPool;
use crate::error::{map_unique_violation, AppError, AppResult};
use crate::repository::user_repository::{CreateUser, UserRepository};
use crate::utils::password::PasswordManager;
use std::sync::Arc;
use tracing::{info, warn};
use validator::Validate;

const DUPLICATE_EMAIL: &str = "Email already registered";

/// 初期管理者の作成結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminBootstrap {
    Created(String),
    AlreadyExists,
}

impl AdminBootstrap {
    pub fn message(&self) -> String {
        match self {
            AdminBootstrap::Created(email) => format!("Admin created: {}", email),
            AdminBootstrap::AlreadyExists => "Admin already exists".to_string(),
        }
    }
}

/// 利用者の登録・ログインと初期管理者の作成
pub struct AccountService {
    user_repo: Arc<UserRepository>,
    password_manager: Arc<PasswordManager>,
    admin: AdminConfig,
}

impl AccountService {
    pub fn new(db_pool: DbPool, password_manager: Arc<PasswordManager>, admin: AdminConfig) -> Self {
        Self {
            user_repo: Arc::new(UserRepository::new(db_pool)),
            password_manager,
            admin,
        }
    }

    pub async fn signup(&self, payload: SignupRequest) -> AppResult<UserRecord> {
        payload.validate()?;

        if self.user_repo.find_by_email(&payload.email).await?.is_some() {
            return Err(AppError::Conflict(DUPLICATE_EMAIL.to_string()));
        }

        let password_hash = self
            .password_manager
            .hash_password_async(&payload.password)
            .await?;

        let user = self
            .user_repo
            .create(CreateUser {
                full_name: payload.full_name,
                email: payload.email,
                password_hash,
                phone: payload.phone,
                address: payload.address,
                is_admin: false,
            })
            .await
            .map_err(|e| map_unique_violation(e, DUPLICATE_EMAIL))?;

        info!(user_id = %user.id, "User signed up");

        Ok(user.into())
    }

    /// メール未登録とパスワード不一致はどちらも InvalidCredentials
    pub async fn login(&self, payload: LoginRequest) -> AppResult<UserRecord> {
        let Some(user) = self.user_repo.find_by_email(&payload.email).await? else {
            warn!("Login failed");
            return Err(AppError::InvalidCredentials);
        };

        if !self
            .password_manager
            .verify_password_async(&payload.password, &user.password_hash)
            .await?
        {
            warn!(user_id = %user.id, "Login failed");
            return Err(AppError::InvalidCredentials);
        }

        info!(user_id = %user.id, is_admin = user.is_admin, "User logged in");

        Ok(user.into())
    }

    /// 既知のメールアドレスで管理者が存在しなければ作成する（何度呼んでもよい）
    pub async fn ensure_default_admin(&self) -> AppResult<AdminBootstrap> {
        if self.user_repo.find_by_email(&self.admin.email).await?.is_some() {
            return Ok(AdminBootstrap::AlreadyExists);
        }

        let password_hash = self
            .password_manager
            .hash_password_async(&self.admin.password)
            .await?;

        let created = self
            .user_repo
            .create(CreateUser {
                full_name: self.admin.full_name.clone(),
                email: self.admin.email.clone(),
                password_hash,
                phone: None,
                address: None,
                is_admin: true,
            })
            .await;

        match created {
            Ok(admin) => {
                info!(user_id = %admin.id, email = %admin.email, "Default admin created");
                Ok(AdminBootstrap::Created(admin.email))
            }
            // 同時に呼ばれた場合は一意制約で弾かれる
            Err(e) => match map_unique_violation(e, DUPLICATE_EMAIL) {
                AppError::Conflict(_) => Ok(AdminBootstrap::AlreadyExists),
                other => Err(other),
            },
        }
    }
}
