// src/domain/service_request_model.rs
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

/// 予約リクエスト作成時のステータス
pub const INITIAL_STATUS: &str = "Pending";

/// 利用者からの予約リクエスト
///
/// ステータスは自由文字列で、管理画面からの更新でのみ変化する
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_requests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub user_name: String,
    pub phone: String,
    #[sea_orm(column_type = "Text")]
    pub address: String,
    /// サービス名の自由入力（services テーブルへの参照ではない）
    pub service_type: String,
    pub location: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            status: Set(INITIAL_STATUS.to_string()),
            created_at: Set(Utc::now()),
            ..ActiveModelTrait::default()
        }
    }
}
