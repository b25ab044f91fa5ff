// src/service/storage_service.rs

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;
use uuid::Uuid;

use crate::config::StorageConfig;
use crate::error::AppResult;

/// 画像ストレージのトレイト定義
#[async_trait]
pub trait ImageStorage: Send + Sync {
    /// 画像を保存し、DB に保存する相対パスを返す
    async fn store(&self, original_file_name: &str, data: &[u8]) -> AppResult<String>;
}

/// 元ファイル名の拡張子を保ったまま、衝突しないファイル名を生成
pub fn unique_file_name(original_file_name: &str) -> String {
    let extension = Path::new(original_file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext))
        .unwrap_or_default();

    format!("{}{}", Uuid::new_v4(), extension)
}

/// ローカルディスクに保存し `/static` 配下で配信するストレージ
pub struct LocalImageStorage {
    upload_dir: PathBuf,
    /// 保存する相対パスの接頭辞（例: static/uploads）
    relative_prefix: String,
}

impl LocalImageStorage {
    pub fn new(upload_dir: PathBuf, relative_prefix: impl Into<String>) -> Self {
        Self {
            upload_dir,
            relative_prefix: relative_prefix.into(),
        }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(
            config.upload_dir(),
            format!("static/{}", config.upload_subdir.trim_matches('/')),
        )
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }
}

#[async_trait]
impl ImageStorage for LocalImageStorage {
    async fn store(&self, original_file_name: &str, data: &[u8]) -> AppResult<String> {
        fs::create_dir_all(&self.upload_dir).await?;

        let file_name = unique_file_name(original_file_name);
        fs::write(self.upload_dir.join(&file_name), data).await?;

        info!(file_name = %file_name, size = data.len(), "Stored uploaded image");

        Ok(format!("{}/{}", self.relative_prefix, file_name))
    }
}
