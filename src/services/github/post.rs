use actix_web::{HttpResponse, Result as ActixResult};
use serde_json::Value;

use super::GitHubService;
use crate::models::common::response::error_http_response;
use crate::models::{ApiResponse, ErrorCode};

/// 投递 Markdown 评论
/// POST /github/comments
pub async fn post_comment(service: &GitHubService, payload: &Value) -> ActixResult<HttpResponse> {
    match service.post_markdown(payload).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success(true, "评论已投递"))),
        Ok(false) => Ok(HttpResponse::BadGateway().json(ApiResponse::error(
            ErrorCode::CommentDeliveryFailed,
            false,
            "评论投递失败",
        ))),
        Err(e) => Ok(error_http_response(&e, ErrorCode::CommentDeliveryFailed)),
    }
}
