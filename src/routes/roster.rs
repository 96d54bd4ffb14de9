use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::roster::requests::{CreateRepositoryRequest, CreateTeamRequest};
use crate::services::RosterService;

// 懒加载的全局 RosterService 实例
static ROSTER_SERVICE: Lazy<RosterService> = Lazy::new(RosterService::new_lazy);

// 创建团队
pub async fn create_team(
    req: HttpRequest,
    body: web::Json<CreateTeamRequest>,
) -> ActixResult<HttpResponse> {
    ROSTER_SERVICE.create_team(&req, body.into_inner()).await
}

// 获取团队
pub async fn get_team(req: HttpRequest, path: web::Path<String>) -> ActixResult<HttpResponse> {
    ROSTER_SERVICE.get_team(&req, path.into_inner()).await
}

// 创建仓库
pub async fn create_repository(
    req: HttpRequest,
    body: web::Json<CreateRepositoryRequest>,
) -> ActixResult<HttpResponse> {
    ROSTER_SERVICE
        .create_repository(&req, body.into_inner())
        .await
}

// 获取仓库
pub async fn get_repository(
    req: HttpRequest,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    ROSTER_SERVICE
        .get_repository(&req, path.into_inner())
        .await
}

// 配置路由
pub fn configure_roster_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/teams")
            .route("", web::post().to(create_team))
            .route("/{name}", web::get().to(get_team)),
    );

    cfg.service(
        web::scope("/api/v1/repositories")
            .route("", web::post().to(create_repository))
            .route("/{name}", web::get().to(get_repository)),
    );
}
