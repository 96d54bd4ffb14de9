use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;
use serde_json::Value;

use crate::services::AssignmentService;

// 懒加载的全局 AssignmentService 实例
static ASSIGNMENT_SERVICE: Lazy<AssignmentService> = Lazy::new(AssignmentService::new_lazy);

// 获取学生作业评分细则
pub async fn get_assignment_grade(
    req: HttpRequest,
    path: web::Path<(String, String)>, // (assignment_id, student_id)
) -> ActixResult<HttpResponse> {
    let (assignment_id, student_id) = path.into_inner();
    ASSIGNMENT_SERVICE
        .get_assignment_grade(&req, student_id, assignment_id)
        .await
}

// 提交仓库作业评分细则，载荷结构在服务层校验
pub async fn set_assignment_grade(
    req: HttpRequest,
    path: web::Path<(String, String)>, // (assignment_id, repository_id)
    body: web::Json<Value>,
) -> ActixResult<HttpResponse> {
    let (assignment_id, repository_id) = path.into_inner();
    ASSIGNMENT_SERVICE
        .set_assignment_grade(&req, repository_id, assignment_id, body.into_inner())
        .await
}

// 配置路由
pub fn configure_assignments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/assignments/{assignment_id}")
            .route("/students/{student_id}", web::get().to(get_assignment_grade))
            .route(
                "/repositories/{repository_id}",
                web::put().to(set_assignment_grade),
            ),
    );
}
