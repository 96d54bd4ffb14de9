use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::ClassyError;
use crate::models::ErrorCode;

// 统一的API响应结构
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub struct ApiResponse<T: TS> {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl<T: TS> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Success as i32,
            message: message.into(),
            data: Some(data),
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn error(code: ErrorCode, data: T, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            data: Some(data),
            timestamp: chrono::Utc::now(),
        }
    }
}

impl ApiResponse<()> {
    pub fn error_empty(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            data: None,
            timestamp: chrono::Utc::now(),
        }
    }
}

/// 服务层错误到 HTTP 状态与业务码的映射
///
/// - `Validation` -> 400
/// - `NotFound` -> 404，`not_found_code` 指定具体资源的业务码
/// - 其余（存储、序列化等） -> 500
pub fn error_http_response(err: &ClassyError, not_found_code: ErrorCode) -> HttpResponse {
    let (status, code) = match err {
        ClassyError::Validation(_) => (StatusCode::BAD_REQUEST, ErrorCode::ValidationFailed),
        ClassyError::NotFound(_) => (StatusCode::NOT_FOUND, not_found_code),
        ClassyError::Delivery(_) => (StatusCode::BAD_GATEWAY, ErrorCode::CommentDeliveryFailed),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::InternalServerError,
        ),
    };

    HttpResponse::build(status).json(ApiResponse::error_empty(code, err.format_simple()))
}
