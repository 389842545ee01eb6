use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::errors::Result;
use crate::models::{
    ApiResponse,
    lecturers::requests::LecturerQuery,
    students::responses::{StudentListItem, StudentListResponse},
};
use crate::utils::require_id;

use super::LecturerService;

pub async fn list_students(
    service: &LecturerService,
    query: LecturerQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    match fetch_students(service, query, request).await {
        Ok(students) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success_data(StudentListResponse { students }))),
        Err(e) => {
            tracing::warn!("Failed to list students: {}", e);
            Ok(HttpResponse::Ok().json(ApiResponse::from_error(&e)))
        }
    }
}

async fn fetch_students(
    service: &LecturerService,
    query: LecturerQuery,
    request: &HttpRequest,
) -> Result<Vec<StudentListItem>> {
    let lecturer_id = require_id(query.lecturer_id, "lecturer_id")?;
    service
        .get_storage(request)
        .list_students_by_lecturer(lecturer_id)
        .await
}
