use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// 初期投入するサービスカテゴリ（名前, アイコンURL）
const DEFAULT_SERVICES: [(&str, &str); 12] = [
    ("AC Repair", "https://cdn-icons-png.flaticon.com/512/11549/11549747.png"),
    ("Appliance Repair", "https://cdn-icons-png.flaticon.com/512/307/307907.png"),
    ("Carpenter", "https://cdn-icons-png.flaticon.com/512/2061/2061956.png"),
    ("Cleaning Services", "https://cdn-icons-png.flaticon.com/512/995/995053.png"),
    ("Electrician", "https://cdn-icons-png.flaticon.com/512/2933/2933116.png"),
    ("Gardening", "https://cdn-icons-png.flaticon.com/512/1518/1518965.png"),
    ("Home Security", "https://cdn-icons-png.flaticon.com/512/2645/2645897.png"),
    ("Interior Design", "https://cdn-icons-png.flaticon.com/512/2558/2558062.png"),
    ("Masonry", "https://cdn-icons-png.flaticon.com/512/3100/3100652.png"),
    ("Painter", "https://cdn-icons-png.flaticon.com/512/2972/2972106.png"),
    ("Pest Control", "https://cdn-icons-png.flaticon.com/512/2316/2316885.png"),
    ("Plumber", "https://cdn-icons-png.flaticon.com/512/307/307882.png"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert
            .into_table(Services::Table)
            .columns([Services::Name, Services::ImageUrl]);

        // 並び順（id順）が一覧表示の順序になる
        for (name, image_url) in DEFAULT_SERVICES {
            insert.values_panic([name.into(), image_url.into()]);
        }

        manager.exec_stmt(insert.to_owned()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Services::Table)
                    .and_where(
                        Expr::col(Services::Name)
                            .is_in(DEFAULT_SERVICES.iter().map(|(name, _)| *name)),
                    )
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Services {
    Table,
    Name,
    ImageUrl,
}
