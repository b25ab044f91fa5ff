// src/domain/provider_model.rs
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

/// 新規プロバイダーの評価の初期値
pub const DEFAULT_RATING: &str = "New";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "providers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub phone: String,
    pub location: String,
    pub service_id: i32,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// 集計値ではなく不透明な文字列として保持する
    pub rating: String,
    /// static 配下の相対パス（例: static/uploads/<uuid>.png）
    #[sea_orm(column_type = "Text", nullable)]
    pub profile_image: Option<String>,
}

// service_id は DB 上の外部キー制約を持たない。検索時の JOIN のためだけの関連定義
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::service_model::Entity",
        from = "Column::ServiceId",
        to = "super::service_model::Column::Id"
    )]
    Service,
}

impl Related<super::service_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Service.def()
    }
}

impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            rating: Set(DEFAULT_RATING.to_string()),
            profile_image: Set(None),
            ..ActiveModelTrait::default()
        }
    }
}
