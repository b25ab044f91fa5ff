// migration/src/lib.rs
pub use sea_orm_migration::prelude::*;

// 基本テーブル
mod m20250801_000001_create_services_table;
mod m20250801_000002_create_providers_table;
mod m20250801_000003_create_users_table;
mod m20250801_000004_create_service_requests_table;

// 初期データ
mod m20250801_000005_seed_default_services;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            // 1. サービスカテゴリとプロバイダー
            Box::new(m20250801_000001_create_services_table::Migration),
            Box::new(m20250801_000002_create_providers_table::Migration),
            // 2. 利用者と予約リクエスト
            Box::new(m20250801_000003_create_users_table::Migration),
            Box::new(m20250801_000004_create_service_requests_table::Migration),
            // 3. サービスカテゴリの初期投入
            Box::new(m20250801_000005_seed_default_services::Migration),
        ]
    }
}
