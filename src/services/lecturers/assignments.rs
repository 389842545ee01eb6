use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::errors::Result;
use crate::models::{
    ApiResponse,
    assignments::responses::{AssignmentListItem, AssignmentListResponse},
    lecturers::requests::LecturerQuery,
};
use crate::utils::require_id;

use super::LecturerService;

pub async fn list_assignments(
    service: &LecturerService,
    query: LecturerQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    match fetch_assignments(service, query, request).await {
        Ok(assignments) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success_data(AssignmentListResponse { assignments }))),
        Err(e) => {
            tracing::warn!("Failed to list assignments: {}", e);
            Ok(HttpResponse::Ok().json(ApiResponse::from_error(&e)))
        }
    }
}

async fn fetch_assignments(
    service: &LecturerService,
    query: LecturerQuery,
    request: &HttpRequest,
) -> Result<Vec<AssignmentListItem>> {
    let lecturer_id = require_id(query.lecturer_id, "lecturer_id")?;
    service
        .get_storage(request)
        .list_assignments_by_lecturer(lecturer_id)
        .await
}
