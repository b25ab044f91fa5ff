// src/service/booking_service.rs

use crate::api::dto::booking_dto::{CreateBookingRequest, ServiceRequestDto};
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::repository::service_request_repository::ServiceRequestRepository;
use std::sync::Arc;
use tracing::info;

/// 予約リクエストの作成・一覧・ステータス更新
pub struct BookingService {
    repo: Arc<ServiceRequestRepository>,
}

impl BookingService {
    pub fn new(db_pool: DbPool) -> Self {
        Self {
            repo: Arc::new(ServiceRequestRepository::new(db_pool)),
        }
    }

    pub async fn create_booking(&self, payload: CreateBookingRequest) -> AppResult<ServiceRequestDto> {
        let created = self.repo.create(payload).await?;

        info!(
            request_id = %created.id,
            user_id = %created.user_id,
            service_type = %created.service_type,
            "Service request created"
        );

        Ok(created.into())
    }

    /// 利用者の予約履歴（新しい順）
    pub async fn list_bookings_for_user(&self, user_id: i32) -> AppResult<Vec<ServiceRequestDto>> {
        let requests = self.repo.find_all_for_user(user_id).await?;
        Ok(requests.into_iter().map(Into::into).collect())
    }

    /// 管理者用の全件一覧（新しい順）
    pub async fn list_all_bookings(&self) -> AppResult<Vec<ServiceRequestDto>> {
        let requests = self.repo.find_all().await?;
        Ok(requests.into_iter().map(Into::into).collect())
    }

    /// ステータスを任意の文字列に更新する（値の妥当性は検証しない）
    pub async fn update_booking_status(
        &self,
        request_id: i32,
        status: &str,
    ) -> AppResult<ServiceRequestDto> {
        let updated = self
            .repo
            .update_status(request_id, status)
            .await?
            .ok_or_else(|| AppError::NotFound("Request not found".to_string()))?;

        info!(request_id = %updated.id, status = %updated.status, "Service request status updated");

        Ok(updated.into())
    }
}
