use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::grades::entities::Grade;
use crate::services::GradeService;

// 懒加载的全局 GradeService 实例
static GRADE_SERVICE: Lazy<GradeService> = Lazy::new(GradeService::new_lazy);

// 列出全部成绩
pub async fn list_grades(req: HttpRequest) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.list_grades(&req).await
}

// 写入成绩
pub async fn set_grade(req: HttpRequest, body: web::Json<Grade>) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.set_grade(&req, body.into_inner()).await
}

// 获取单个成绩
pub async fn get_grade(
    req: HttpRequest,
    path: web::Path<(String, String)>, // (student_id, assignment_id)
) -> ActixResult<HttpResponse> {
    let (student_id, assignment_id) = path.into_inner();
    GRADE_SERVICE
        .get_grade(&req, student_id, assignment_id)
        .await
}

// 配置路由
pub fn configure_grades_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/grades")
            .route("", web::get().to(list_grades))
            .route("", web::put().to(set_grade))
            .route("/{student_id}/{assignment_id}", web::get().to(get_grade)),
    );
}
