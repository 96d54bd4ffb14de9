use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeService;
use crate::models::common::response::error_http_response;
use crate::models::grades::entities::Grade;
use crate::models::{ApiResponse, ErrorCode};

pub async fn set_grade(
    service: &GradeService,
    request: &HttpRequest,
    grade: Grade,
) -> ActixResult<HttpResponse> {
    let ledger = service.ledger(request);

    match ledger.set_grade(grade).await {
        Ok(success) => Ok(HttpResponse::Ok().json(ApiResponse::success(success, "成绩已保存"))),
        Err(e) => Ok(error_http_response(&e, ErrorCode::GradeNotFound)),
    }
}
