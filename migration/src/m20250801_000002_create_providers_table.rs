use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // service_id は外部キー制約を張らない（登録時にサービスの存在チェックはしない）
        manager
            .create_table(
                Table::create()
                    .table(Providers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Providers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Providers::Name).text().not_null())
                    .col(
                        ColumnDef::new(Providers::Email)
                            .text()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Providers::PasswordHash)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Providers::Phone).text().not_null())
                    .col(
                        ColumnDef::new(Providers::Location)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Providers::ServiceId).integer().not_null())
                    .col(ColumnDef::new(Providers::Description).text().not_null())
                    .col(
                        ColumnDef::new(Providers::Rating)
                            .text()
                            .not_null()
                            .default("New"),
                    )
                    .col(ColumnDef::new(Providers::ProfileImage).text().null())
                    .to_owned(),
            )
            .await?;

        // 検索条件で使うカラムにインデックスを作成
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(Providers::Table)
                    .name("idx_providers_location")
                    .col(Providers::Location)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(Providers::Table)
                    .name("idx_providers_service_id")
                    .col(Providers::ServiceId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Providers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Providers {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    Phone,
    Location,
    ServiceId,
    Description,
    Rating,
    ProfileImage,
}
