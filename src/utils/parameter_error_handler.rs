//! 请求参数解析失败时的统一响应

use actix_web::error::{InternalError, JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{Error, HttpRequest, HttpResponse};
use tracing::debug;

use crate::models::{ApiResponse, ErrorCode};

fn bad_request(message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, message))
}

/// JSON 请求体解析错误处理器
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    debug!("JSON payload error on {}: {}", req.path(), err);
    let response = bad_request(format!("请求体格式错误: {err}"));
    InternalError::from_response(err, response).into()
}

/// 查询参数解析错误处理器
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    debug!("Query error on {}: {}", req.path(), err);
    let response = bad_request(format!("查询参数错误: {err}"));
    InternalError::from_response(err, response).into()
}

/// 路径参数解析错误处理器
pub fn path_error_handler(err: PathError, req: &HttpRequest) -> Error {
    debug!("Path error on {}: {}", req.path(), err);
    let response = bad_request(format!("路径参数错误: {err}"));
    InternalError::from_response(err, response).into()
}
