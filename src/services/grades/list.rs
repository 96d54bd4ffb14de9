use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeService;
use crate::models::common::response::error_http_response;
use crate::models::grades::responses::GradeListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_grades(
    service: &GradeService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let ledger = service.ledger(request);

    match ledger.get_all_grades().await {
        Ok(grades) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            GradeListResponse::from(grades),
            "查询成功",
        ))),
        Err(e) => Ok(error_http_response(&e, ErrorCode::GradeNotFound)),
    }
}
