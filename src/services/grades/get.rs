use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeService;
use crate::models::common::response::error_http_response;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_grade(
    service: &GradeService,
    request: &HttpRequest,
    student_id: &str,
    assignment_id: &str,
) -> ActixResult<HttpResponse> {
    let ledger = service.ledger(request);

    match ledger.get_grade(student_id, assignment_id).await {
        Ok(Some(grade)) => Ok(HttpResponse::Ok().json(ApiResponse::success(grade, "查询成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GradeNotFound,
            "该学生此作业尚无成绩",
        ))),
        Err(e) => Ok(error_http_response(&e, ErrorCode::GradeNotFound)),
    }
}
