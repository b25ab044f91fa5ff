// src/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;
use validator::ValidationErrors;

use crate::utils::password::PasswordError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DbErr(#[from] DbErr),

    #[error("File storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Password hashing error: {0}")]
    Password(#[from] PasswordError),

    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("Validation failed")]
    ValidationFailure(#[from] ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// メールアドレス重複など。既存クライアントとの互換のため 400 で返す
    #[error("Conflict: {0}")]
    Conflict(String),

    /// ログイン失敗。メール未登録とパスワード不一致を区別しない
    #[error("Invalid credentials")]
    InvalidCredentials,
}

impl AppError {
    /// クライアントに返すステータスコード
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationFailure(_)
            | AppError::BadRequest(_)
            | AppError::Conflict(_)
            | AppError::InvalidCredentials => StatusCode::BAD_REQUEST,
            AppError::DbErr(DbErr::RecordNotFound(_)) => StatusCode::NOT_FOUND,
            AppError::DbErr(_)
            | AppError::Io(_)
            | AppError::Password(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::DbErr(_) => "database_error",
            AppError::Io(_) => "storage_error",
            AppError::Password(_) => "internal_server_error",
            AppError::NotFound(_) => "not_found",
            AppError::ValidationFailure(_) => "validation_errors",
            AppError::BadRequest(_) => "bad_request",
            AppError::Conflict(_) => "conflict",
            AppError::InvalidCredentials => "invalid_credentials",
        }
    }
}

/// INSERT 時の一意制約違反を Conflict に変換する（事前チェックをすり抜けた同時登録用）
pub fn map_unique_violation(err: DbErr, message: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::Conflict(message.to_string()),
        _ => AppError::DbErr(err),
    }
}

// axum でエラーをHTTPレスポンスに変換するための実装
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_type = self.error_type().to_string();

        let error_response = match self {
            AppError::DbErr(ref db_err) => {
                tracing::error!(error = ?db_err, "Database error"); // サーバーログには詳細を出す
                let detail = match db_err {
                    DbErr::RecordNotFound(_) => "The requested resource was not found",
                    _ => "An internal server error occurred",
                };
                ErrorResponse::new(detail.to_string(), error_type)
            }
            AppError::Io(ref io_err) => {
                tracing::error!(error = %io_err, "File storage error");
                ErrorResponse::new("An internal server error occurred".to_string(), error_type)
            }
            AppError::Password(ref password_err) => {
                tracing::error!(error = %password_err, "Password hashing error");
                ErrorResponse::new("An internal server error occurred".to_string(), error_type)
            }
            AppError::ValidationFailure(ref errors) => {
                let field_errors: HashMap<String, Vec<String>> = errors
                    .field_errors()
                    .into_iter()
                    .map(|(field, errors)| {
                        let messages = errors
                            .iter()
                            .map(|e| {
                                e.message
                                    .as_ref()
                                    .map_or_else(|| "Invalid value".to_string(), |m| m.to_string())
                            })
                            .collect();
                        (field.to_string(), messages)
                    })
                    .collect();
                ErrorResponse {
                    validation_errors: Some(field_errors),
                    ..ErrorResponse::new("Validation failed".to_string(), error_type)
                }
            }
            AppError::NotFound(message)
            | AppError::BadRequest(message)
            | AppError::Conflict(message) => ErrorResponse::new(message, error_type),
            AppError::InvalidCredentials => {
                ErrorResponse::new("Invalid credentials".to_string(), error_type)
            }
        };

        (status, Json(error_response)).into_response()
    }
}

// Result 型のエイリアス
pub type AppResult<T> = Result<T, AppError>;

/// 統一的なエラーレスポンス構造
///
/// `detail` は既存フロントエンドが参照するフィールド
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub detail: String,
    pub error_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<HashMap<String, Vec<String>>>,
}

impl ErrorResponse {
    fn new(detail: String, error_type: String) -> Self {
        Self {
            success: false,
            detail,
            error_type,
            validation_errors: None,
        }
    }
}
