use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // user_id は外部キー制約を張らない（予約作成時に利用者の存在チェックはしない）
        manager
            .create_table(
                Table::create()
                    .table(ServiceRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ServiceRequests::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ServiceRequests::UserId).integer().not_null())
                    .col(
                        ColumnDef::new(ServiceRequests::UserName)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ServiceRequests::Phone)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ServiceRequests::Address).text().not_null())
                    .col(
                        ColumnDef::new(ServiceRequests::ServiceType)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ServiceRequests::Location)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ServiceRequests::Status)
                            .text()
                            .not_null()
                            .default("Pending"),
                    )
                    .col(
                        ColumnDef::new(ServiceRequests::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // ユーザー別の履歴取得（新しい順）用の複合インデックス
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(ServiceRequests::Table)
                    .name("idx_service_requests_user_created")
                    .col(ServiceRequests::UserId)
                    .col(ServiceRequests::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(ServiceRequests::Table)
                    .name("idx_service_requests_created_at")
                    .col(ServiceRequests::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServiceRequests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ServiceRequests {
    Table,
    Id,
    UserId,
    UserName,
    Phone,
    Address,
    ServiceType,
    Location,
    Status,
    CreatedAt,
}
