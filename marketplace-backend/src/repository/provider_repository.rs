// src/repository/provider_repository.rs
use crate::api::dto::provider_dto::ProviderSearchQuery;
use crate::domain::location::location_filter;
use crate::domain::provider_model::{
    self, ActiveModel as ProviderActiveModel, Entity as ProviderEntity,
};
use crate::domain::service_model::{self, Entity as ServiceEntity};
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{entity::*, query::*, Condition, DbConn, DbErr, JoinType, Set};

/// プロバイダー登録用の入力（パスワードはハッシュ化済み）
#[derive(Debug, Clone)]
pub struct CreateProvider {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: String,
    pub location: String,
    pub service_id: i32,
    pub description: String,
    pub profile_image: Option<String>,
}

pub struct ProviderRepository {
    db: DbConn,
}

impl ProviderRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    /// プロバイダーをメールアドレスで検索
    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<provider_model::Model>, DbErr> {
        ProviderEntity::find()
            .filter(provider_model::Column::Email.eq(email))
            .one(&self.db)
            .await
    }

    pub async fn create(&self, input: CreateProvider) -> Result<provider_model::Model, DbErr> {
        let mut active_model = ProviderActiveModel::new();
        active_model.name = Set(input.name);
        active_model.email = Set(input.email);
        active_model.password_hash = Set(input.password_hash);
        active_model.phone = Set(input.phone);
        active_model.location = Set(input.location);
        active_model.service_id = Set(input.service_id);
        active_model.description = Set(input.description);
        active_model.profile_image = Set(input.profile_image);

        active_model.insert(&self.db).await
    }

    /// サービス名・地域でプロバイダーを検索（services と INNER JOIN）
    ///
    /// - location: 完全一致（大文字小文字を区別）。"All Nepal" は絞り込みなし
    /// - service_name: サービス名の部分一致（大文字小文字を区別しない）
    pub async fn find_with_filter(
        &self,
        filter: &ProviderSearchQuery,
    ) -> Result<Vec<(provider_model::Model, service_model::Model)>, DbErr> {
        let mut conditions = Condition::all();

        // 地域フィルタ
        if let Some(location) = location_filter(filter.location.as_deref()) {
            conditions = conditions.add(provider_model::Column::Location.eq(location));
        }

        // サービス名検索（LOWER を取って LIKE する。Postgres / SQLite 共通）
        if let Some(service_name) = filter.service_name.as_deref().filter(|s| !s.is_empty()) {
            conditions = conditions.add(
                Expr::expr(Func::lower(Expr::col((
                    ServiceEntity,
                    service_model::Column::Name,
                ))))
                .like(format!("%{}%", service_name.to_lowercase())),
            );
        }

        let rows = ProviderEntity::find()
            .select_also(ServiceEntity)
            .join(JoinType::InnerJoin, provider_model::Relation::Service.def())
            .filter(conditions)
            .order_by_asc(provider_model::Column::Id)
            .all(&self.db)
            .await?;

        // INNER JOIN なのでサービスは必ず存在する
        Ok(rows
            .into_iter()
            .filter_map(|(provider, service)| service.map(|service| (provider, service)))
            .collect())
    }
}
