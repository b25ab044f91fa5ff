// src/api/dto/booking_dto.rs
use crate::domain::service_request_model;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 予約リクエスト作成（POST /book_service）
///
/// user_id / service_type の存在チェックは行わない
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub user_id: i32,
    pub user_name: String,
    pub phone: String,
    pub address: String,
    pub service_type: String,
    pub location: String,
}

/// ステータス更新（PUT /admin/requests/{id}?status=...）
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusQuery {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceRequestDto {
    pub id: i32,
    pub user_id: i32,
    pub user_name: String,
    pub phone: String,
    pub address: String,
    pub service_type: String,
    pub location: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<service_request_model::Model> for ServiceRequestDto {
    fn from(model: service_request_model::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            user_name: model.user_name,
            phone: model.phone,
            address: model.address,
            service_type: model.service_type,
            location: model.location,
            status: model.status,
            created_at: model.created_at,
        }
    }
}
