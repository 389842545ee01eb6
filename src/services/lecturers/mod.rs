pub mod assignments;
pub mod dashboard;
pub mod profile;
pub mod publications;
pub mod students;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::Action;
use crate::models::lecturers::requests::LecturerQuery;
use crate::storage::Storage;

pub struct LecturerService {
    storage: Option<Arc<dyn Storage>>,
}

impl LecturerService {
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

    // 仪表盘汇总
    pub async fn dashboard(
        &self,
        query: LecturerQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        dashboard::handle_dashboard(self, query, request).await
    }

    // 讲师资料
    pub async fn profile(
        &self,
        query: LecturerQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        profile::handle_profile(self, query, request).await
    }

    // 讲师名下的学生
    pub async fn list_students(
        &self,
        query: LecturerQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        students::list_students(self, query, request).await
    }

    // 讲师名下的作业
    pub async fn list_assignments(
        &self,
        query: LecturerQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        assignments::list_assignments(self, query, request).await
    }

    // 论文相关动作（占位）
    pub async fn publications(&self, action: Action) -> ActixResult<HttpResponse> {
        publications::handle_publications(action).await
    }
}
