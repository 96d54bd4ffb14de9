use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RosterService;
use crate::models::common::response::error_http_response;
use crate::models::roster::requests::CreateRepositoryRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_repository(
    service: &RosterService,
    request: &HttpRequest,
    req: CreateRepositoryRequest,
) -> ActixResult<HttpResponse> {
    match service.roster(request).create_repository(req).await {
        Ok(repository) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(repository, "仓库已保存")))
        }
        Err(e) => Ok(error_http_response(&e, ErrorCode::RepositoryNotFound)),
    }
}

pub async fn get_repository(
    service: &RosterService,
    request: &HttpRequest,
    name: &str,
) -> ActixResult<HttpResponse> {
    match service.roster(request).get_repository(name).await {
        Ok(Some(repository)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(repository, "查询成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::RepositoryNotFound,
            "仓库不存在",
        ))),
        Err(e) => Ok(error_http_response(&e, ErrorCode::RepositoryNotFound)),
    }
}
