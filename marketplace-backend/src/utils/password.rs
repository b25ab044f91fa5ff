// src/utils/password.rs

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use std::env;
use std::sync::Arc;
use thiserror::Error;

/// パスワード関連のエラー
#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingError(#[from] argon2::password_hash::Error),

    #[error("Argon2 parameter error: {0}")]
    Argon2Error(#[from] argon2::Error),

    #[error("Password hashing task failed: {0}")]
    TaskFailed(String),
}

/// Argon2 設定
#[derive(Debug, Clone)]
pub struct Argon2Config {
    /// メモリコスト（KB）
    pub memory_cost: u32,
    /// 時間コスト（反復回数）
    pub time_cost: u32,
    /// 並列度
    pub parallelism: u32,
    /// 出力長
    pub output_length: usize,
}

impl Default for Argon2Config {
    fn default() -> Self {
        Self {
            memory_cost: 65536, // 64MB
            time_cost: 3,       // 3回反復
            parallelism: 4,     // 4並列
            output_length: 32,  // 32バイト出力
        }
    }
}

impl Argon2Config {
    /// 環境変数から設定を読み込み
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let memory_cost = env::var("ARGON2_MEMORY_COST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.memory_cost);

        let time_cost = env::var("ARGON2_TIME_COST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.time_cost);

        let parallelism = env::var("ARGON2_PARALLELISM")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.parallelism);

        Self {
            memory_cost,
            time_cost,
            parallelism,
            output_length: defaults.output_length,
        }
    }
}

/// パスワードハッシュマネージャー
///
/// 平文パスワードはハッシュ化と検証の入力にのみ使い、保存もログ出力もしない。
pub struct PasswordManager {
    argon2: Argon2<'static>,
}

impl PasswordManager {
    /// 新しいPasswordManagerを作成
    pub fn new(argon2_config: Argon2Config) -> Result<Self, PasswordError> {
        let argon2 = Argon2::new(
            argon2::Algorithm::Argon2id,
            argon2::Version::V0x13,
            argon2::Params::new(
                argon2_config.memory_cost,
                argon2_config.time_cost,
                argon2_config.parallelism,
                Some(argon2_config.output_length),
            )
            .map_err(PasswordError::Argon2Error)?,
        );

        Ok(Self { argon2 })
    }

    /// パスワードをハッシュ化
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        // ソルト生成
        let salt = SaltString::generate(&mut OsRng);

        let password_hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(PasswordError::HashingError)?;

        Ok(password_hash.to_string())
    }

    /// パスワードを検証（比較は argon2 の定数時間比較）
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash = PasswordHash::new(hash).map_err(PasswordError::HashingError)?;

        match self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
        {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(PasswordError::HashingError(e)),
        }
    }
}

// 非同期コンテキストからはブロッキング用スレッドで実行する
impl PasswordManager {
    /// `hash_password` をブロッキング用スレッドで実行
    pub async fn hash_password_async(
        self: &Arc<Self>,
        password: &str,
    ) -> Result<String, PasswordError> {
        let manager = Arc::clone(self);
        let password = password.to_owned();

        tokio::task::spawn_blocking(move || manager.hash_password(&password))
            .await
            .map_err(|e| PasswordError::TaskFailed(e.to_string()))?
    }

    /// `verify_password` をブロッキング用スレッドで実行
    pub async fn verify_password_async(
        self: &Arc<Self>,
        password: &str,
        hash: &str,
    ) -> Result<bool, PasswordError> {
        let manager = Arc::clone(self);
        let password = password.to_owned();
        let hash = hash.to_owned();

        tokio::task::spawn_blocking(move || manager.verify_password(&password, &hash))
            .await
            .map_err(|e| PasswordError::TaskFailed(e.to_string()))?
    }
}
