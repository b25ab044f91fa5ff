// src/config/app.rs
use crate::utils::password::Argon2Config;
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub max_connections: u32,
    pub min_connections: u32,
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub body_limit: usize,
    /// 起動時にマイグレーションを実行するか
    pub auto_migrate: bool,
}

/// アップロード画像の保存先と公開URLの設定
#[derive(Clone, Debug)]
pub struct StorageConfig {
    /// `/static` として配信するディレクトリ
    pub static_dir: PathBuf,
    /// プロバイダー画像を置く static_dir 配下のサブディレクトリ
    pub upload_subdir: String,
    /// 検索結果の画像パスに付与するベースURL
    pub public_base_url: String,
}

/// 初期管理者アカウントの設定
#[derive(Clone, Debug)]
pub struct AdminConfig {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            email: "admin@hussboss.com".to_string(),
            password: "adminhoni".to_string(),
            full_name: "Super Admin".to_string(),
        }
    }
}

impl StorageConfig {
    /// 画像ファイルを書き込むディレクトリ
    pub fn upload_dir(&self) -> PathBuf {
        self.static_dir.join(&self.upload_subdir)
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub admin: AdminConfig,
    pub argon2: Argon2Config,
}

fn parse_env<T: FromStr>(key: &str, default: T) -> Result<T, String> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| format!("Invalid {} value: {}", key, value)),
        Err(_) => Ok(default),
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok(); // .env ファイルを読み込む (存在しなくてもエラーにしない)

        let defaults = AdminConfig::default();

        Ok(Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_env("PORT", 8000)?,
            database_url: env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?,
            database: DatabaseConfig {
                max_connections: parse_env("DB_MAX_CONNECTIONS", 20)?,
                min_connections: parse_env("DB_MIN_CONNECTIONS", 1)?,
            },
            server: ServerConfig {
                body_limit: parse_env("BODY_LIMIT_BYTES", 10 * 1024 * 1024)?, // 10MB
                auto_migrate: parse_env("AUTO_MIGRATE", true)?,
            },
            storage: StorageConfig {
                static_dir: PathBuf::from(
                    env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()),
                ),
                upload_subdir: env::var("UPLOAD_SUBDIR").unwrap_or_else(|_| "uploads".to_string()),
                public_base_url: env::var("PUBLIC_BASE_URL")
                    .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            },
            admin: AdminConfig {
                email: env::var("ADMIN_EMAIL").unwrap_or(defaults.email),
                password: env::var("ADMIN_PASSWORD").unwrap_or(defaults.password),
                full_name: defaults.full_name,
            },
            argon2: Argon2Config::from_env(),
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// テスト用の設定を作成
    ///
    /// 画像の保存先はテストごとに一時ディレクトリを割り当てる
    pub fn for_testing() -> Self {
        let static_dir = env::temp_dir().join(format!("marketplace_test_{}", uuid::Uuid::new_v4()));

        Self {
            environment: "test".to_string(),
            host: "127.0.0.1".to_string(),
            port: 8000,
            database_url: "sqlite::memory:".to_string(),
            database: DatabaseConfig {
                max_connections: 1,
                min_connections: 1,
            },
            server: ServerConfig {
                body_limit: 10 * 1024 * 1024,
                auto_migrate: true,
            },
            storage: StorageConfig {
                static_dir,
                upload_subdir: "uploads".to_string(),
                public_base_url: "https://cdn.test.local".to_string(),
            },
            admin: AdminConfig::default(),
            // テストではハッシュコストを下げる
            argon2: Argon2Config {
                memory_cost: 1024,
                time_cost: 1,
                parallelism: 1,
                output_length: 32,
            },
        }
    }
}
