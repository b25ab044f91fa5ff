use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Services::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Services::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Services::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Services::ImageUrl).text().not_null())
                    .to_owned(),
            )
            .await?;

        // サービス名検索用のインデックス
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(Services::Table)
                    .name("idx_services_name")
                    .col(Services::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Services::Table).to_owned())
            .await
    }
}

/// Iden Enum for the 'services' table and its columns
#[derive(DeriveIden)]
enum Services {
    Table,
    Id,
    Name,
    ImageUrl,
}
