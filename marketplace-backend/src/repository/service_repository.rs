// src/repository/service_repository.rs
use crate::domain::service_model::{self, Entity as ServiceEntity};
use sea_orm::{entity::*, query::*, DbConn, DbErr};

pub struct ServiceRepository {
    db: DbConn,
}

impl ServiceRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    /// 全サービスを登録順で取得
    pub async fn find_all(&self) -> Result<Vec<service_model::Model>, DbErr> {
        ServiceEntity::find()
            .order_by_asc(service_model::Column::Id)
            .all(&self.db)
            .await
    }
}
