use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;

use super::AssignmentService;
use crate::models::common::response::error_http_response;
use crate::models::{ApiResponse, ErrorCode};

/// 提交评分细则
/// PUT /assignments/{assignment_id}/repositories/{repository_id}
pub async fn set_assignment_grade(
    service: &AssignmentService,
    request: &HttpRequest,
    repository_id: &str,
    assignment_id: &str,
    payload: &Value,
) -> ActixResult<HttpResponse> {
    let grader = service.grader(request);

    match grader
        .set_assignment_grade(repository_id, assignment_id, payload)
        .await
    {
        Ok(success) => Ok(HttpResponse::Ok().json(ApiResponse::success(success, "评分已保存"))),
        // 仓库不存在
        Err(e) => Ok(error_http_response(&e, ErrorCode::RepositoryNotFound)),
    }
}
