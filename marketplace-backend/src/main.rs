// src/main.rs
use marketplace_backend::api::{app_router, AppState};
use marketplace_backend::config::AppConfig;
use marketplace_backend::db::{create_db_pool, run_migrations};
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // トレーシングの設定
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "marketplace_backend=info,tower_http=info".into()),
        )
        .with(fmt::layer())
        .init();

    tracing::info!("Starting marketplace backend server...");

    // 設定を読み込む
    let app_config = AppConfig::from_env()?;
    tracing::info!(
        environment = %app_config.environment,
        public_base_url = %app_config.storage.public_base_url,
        static_dir = %app_config.storage.static_dir.display(),
        "Configuration loaded"
    );

    // データベース接続を作成
    let db_pool = create_db_pool(&app_config).await?;
    tracing::info!("Database pool created successfully.");

    if app_config.server.auto_migrate {
        run_migrations(&db_pool).await?;
        tracing::info!("Database migrations applied.");
    }

    // 配信ディレクトリを用意しておく（ServeDir は存在しないディレクトリを 404 にする）
    tokio::fs::create_dir_all(app_config.storage.upload_dir()).await?;

    let server_addr = app_config.server_addr();
    let app_state = AppState::new(db_pool, app_config)?;
    let app = app_router(app_state);

    tracing::info!("Router configured. Server listening on {}", server_addr);

    let listener = TcpListener::bind(&server_addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
