// src/repository/service_request_repository.rs
use crate::api::dto::booking_dto::CreateBookingRequest;
use crate::domain::service_request_model::{
    self, ActiveModel as ServiceRequestActiveModel, Entity as ServiceRequestEntity,
};
use sea_orm::{entity::*, query::*, DbConn, DbErr, Set};

pub struct ServiceRequestRepository {
    db: DbConn,
}

impl ServiceRequestRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    /// 全リクエストを新しい順で取得（同時刻は id の降順）
    pub async fn find_all(&self) -> Result<Vec<service_request_model::Model>, DbErr> {
        ServiceRequestEntity::find()
            .order_by_desc(service_request_model::Column::CreatedAt)
            .order_by_desc(service_request_model::Column::Id)
            .all(&self.db)
            .await
    }

    pub async fn find_all_for_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<service_request_model::Model>, DbErr> {
        ServiceRequestEntity::find()
            .filter(service_request_model::Column::UserId.eq(user_id))
            .order_by_desc(service_request_model::Column::CreatedAt)
            .order_by_desc(service_request_model::Column::Id)
            .all(&self.db)
            .await
    }

    /// リクエストを作成（status = "Pending", created_at = 現在時刻）
    pub async fn create(
        &self,
        payload: CreateBookingRequest,
    ) -> Result<service_request_model::Model, DbErr> {
        let mut active_model = ServiceRequestActiveModel::new();
        active_model.user_id = Set(payload.user_id);
        active_model.user_name = Set(payload.user_name);
        active_model.phone = Set(payload.phone);
        active_model.address = Set(payload.address);
        active_model.service_type = Set(payload.service_type);
        active_model.location = Set(payload.location);

        active_model.insert(&self.db).await
    }

    /// ステータスを更新。対象が存在しなければ None
    pub async fn update_status(
        &self,
        id: i32,
        status: &str,
    ) -> Result<Option<service_request_model::Model>, DbErr> {
        let Some(existing) = ServiceRequestEntity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active_model: ServiceRequestActiveModel = existing.into();
        active_model.status = Set(status.to_string());

        let updated = active_model.update(&self.db).await?;
        Ok(Some(updated))
    }
}
