pub mod get;
pub mod grader;
pub mod set;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;
use std::sync::Arc;

pub use grader::AssignmentGrader;

use crate::storage::Storage;

pub struct AssignmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl AssignmentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub(crate) fn grader(&self, request: &HttpRequest) -> AssignmentGrader {
        AssignmentGrader::new(self.get_storage(request))
    }

    /// 获取学生作业评分细则
    pub async fn get_assignment_grade(
        &self,
        request: &HttpRequest,
        student_id: String,
        assignment_id: String,
    ) -> ActixResult<HttpResponse> {
        get::get_assignment_grade(self, request, &student_id, &assignment_id).await
    }

    /// 提交仓库作业评分细则
    pub async fn set_assignment_grade(
        &self,
        request: &HttpRequest,
        repository_id: String,
        assignment_id: String,
        payload: Value,
    ) -> ActixResult<HttpResponse> {
        set::set_assignment_grade(self, request, &repository_id, &assignment_id, &payload).await
    }
}
