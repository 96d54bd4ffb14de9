pub mod get;
pub mod ledger;
pub mod list;
pub mod set;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

pub use ledger::GradeLedger;

use crate::models::grades::entities::Grade;
use crate::storage::Storage;

pub struct GradeService {
    storage: Option<Arc<dyn Storage>>,
}

impl GradeService {
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

    pub(crate) fn ledger(&self, request: &HttpRequest) -> GradeLedger {
        GradeLedger::new(self.get_storage(request))
    }

    /// 获取单个成绩
    pub async fn get_grade(
        &self,
        request: &HttpRequest,
        student_id: String,
        assignment_id: String,
    ) -> ActixResult<HttpResponse> {
        get::get_grade(self, request, &student_id, &assignment_id).await
    }

    /// 写入成绩
    pub async fn set_grade(&self, request: &HttpRequest, grade: Grade) -> ActixResult<HttpResponse> {
        set::set_grade(self, request, grade).await
    }

    /// 列出全部成绩
    pub async fn list_grades(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_grades(self, request).await
    }
}
