use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RosterService;
use crate::models::common::response::error_http_response;
use crate::models::roster::requests::CreateTeamRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_team(
    service: &RosterService,
    request: &HttpRequest,
    req: CreateTeamRequest,
) -> ActixResult<HttpResponse> {
    match service.roster(request).create_team(req).await {
        Ok(team) => Ok(HttpResponse::Created().json(ApiResponse::success(team, "团队已保存"))),
        Err(e) => Ok(error_http_response(&e, ErrorCode::TeamNotFound)),
    }
}

pub async fn get_team(
    service: &RosterService,
    request: &HttpRequest,
    name: &str,
) -> ActixResult<HttpResponse> {
    match service.roster(request).get_team(name).await {
        Ok(Some(team)) => Ok(HttpResponse::Ok().json(ApiResponse::success(team, "查询成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TeamNotFound,
            "团队不存在",
        ))),
        Err(e) => Ok(error_http_response(&e, ErrorCode::TeamNotFound)),
    }
}
