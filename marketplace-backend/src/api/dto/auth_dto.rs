// src/api/dto/auth_dto.rs

use crate::domain::user_model;
use serde::{Deserialize, Serialize};
use validator::Validate;

// --- リクエストDTO ---

/// 利用者登録リクエスト
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, max = 255, message = "Full name is required"))]
    pub full_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub address: Option<String>,
}

/// ログインリクエスト
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

// --- レスポンスDTO ---

/// signup / login 共通のユーザー情報
///
/// signup 直後にクライアント側でセッションを確立できるよう、login と同じ形で返す
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRecord {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub is_admin: bool,
}

impl From<user_model::Model> for UserRecord {
    fn from(user: user_model::Model) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            phone: user.phone,
            address: user.address,
            is_admin: user.is_admin,
        }
    }
}
