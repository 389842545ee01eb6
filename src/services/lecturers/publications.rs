use actix_web::{HttpResponse, Result as ActixResult};

use crate::models::{Action, ApiResponse, publications::PublicationListResponse};

// 论文表尚未建立，增删查统一返回空列表
pub async fn handle_publications(action: Action) -> ActixResult<HttpResponse> {
    tracing::debug!("Publication action '{}' is a no-op", action);
    Ok(HttpResponse::Ok().json(ApiResponse::success_data(
        PublicationListResponse::default(),
    )))
}
