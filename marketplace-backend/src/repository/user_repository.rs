// src/repository/user_repository.rs

use crate::domain::user_model::{self, ActiveModel as UserActiveModel, Entity as UserEntity};
use sea_orm::{entity::*, query::*, DbConn, DbErr, Set};

/// ユーザー作成用の入力（パスワードはハッシュ化済み）
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub is_admin: bool,
}

#[derive(Debug)]
pub struct UserRepository {
    db: DbConn,
}

impl UserRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    // --- 基本CRUD操作 ---

    /// ユーザーをメールアドレスで検索
    pub async fn find_by_email(&self, email: &str) -> Result<Option<user_model::Model>, DbErr> {
        UserEntity::find()
            .filter(user_model::Column::Email.eq(email))
            .one(&self.db)
            .await
    }

    pub async fn create(&self, input: CreateUser) -> Result<user_model::Model, DbErr> {
        let mut active_model = UserActiveModel::new();
        active_model.full_name = Set(input.full_name);
        active_model.email = Set(input.email);
        active_model.password_hash = Set(input.password_hash);
        active_model.phone = Set(input.phone);
        active_model.address = Set(input.address);
        active_model.is_admin = Set(input.is_admin);

        active_model.insert(&self.db).await
    }
}
