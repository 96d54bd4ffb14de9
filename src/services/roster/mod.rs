pub mod directory;
pub mod repositories;
pub mod teams;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

pub use directory::Roster;

use crate::models::roster::requests::{CreateRepositoryRequest, CreateTeamRequest};
use crate::storage::Storage;

pub struct RosterService {
    storage: Option<Arc<dyn Storage>>,
}

impl RosterService {
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

    pub(crate) fn roster(&self, request: &HttpRequest) -> Roster {
        Roster::new(self.get_storage(request))
    }

    /// 创建团队
    pub async fn create_team(
        &self,
        request: &HttpRequest,
        req: CreateTeamRequest,
    ) -> ActixResult<HttpResponse> {
        teams::create_team(self, request, req).await
    }

    /// 获取团队
    pub async fn get_team(&self, request: &HttpRequest, name: String) -> ActixResult<HttpResponse> {
        teams::get_team(self, request, &name).await
    }

    /// 创建仓库
    pub async fn create_repository(
        &self,
        request: &HttpRequest,
        req: CreateRepositoryRequest,
    ) -> ActixResult<HttpResponse> {
        repositories::create_repository(self, request, req).await
    }

    /// 获取仓库
    pub async fn get_repository(
        &self,
        request: &HttpRequest,
        name: String,
    ) -> ActixResult<HttpResponse> {
        repositories::get_repository(self, request, &name).await
    }
}
