// src/domain/service_model.rs
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// サービスカテゴリ（配管工、電気工事など）。マイグレーションで投入され以後変更されない
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub image_url: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::provider_model::Entity")]
    Providers,
}

impl Related<super::provider_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Providers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
