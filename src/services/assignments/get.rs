use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::models::common::response::error_http_response;
use crate::models::{ApiResponse, ErrorCode};

/// 获取评分细则
/// GET /assignments/{assignment_id}/students/{student_id}
pub async fn get_assignment_grade(
    service: &AssignmentService,
    request: &HttpRequest,
    student_id: &str,
    assignment_id: &str,
) -> ActixResult<HttpResponse> {
    let grader = service.grader(request);

    match grader.get_assignment_grade(student_id, assignment_id).await {
        Ok(Some(record)) => Ok(HttpResponse::Ok().json(ApiResponse::success(record, "查询成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AssignmentGradeNotFound,
            "该学生此作业尚未评分",
        ))),
        Err(e) => Ok(error_http_response(&e, ErrorCode::AssignmentGradeNotFound)),
    }
}
