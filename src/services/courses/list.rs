use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::errors::Result;
use crate::models::{
    ApiResponse,
    courses::responses::{CourseListItem, CourseListResponse},
    lecturers::requests::LecturerQuery,
};
use crate::utils::require_id;

use super::CourseService;

pub async fn list_courses(
    service: &CourseService,
    query: LecturerQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    match fetch_courses(service, query, request).await {
        Ok(courses) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_data(CourseListResponse { courses })))
        }
        Err(e) => {
            tracing::warn!("Failed to list courses: {}", e);
            Ok(HttpResponse::Ok().json(ApiResponse::from_error(&e)))
        }
    }
}

async fn fetch_courses(
    service: &CourseService,
    query: LecturerQuery,
    request: &HttpRequest,
) -> Result<Vec<CourseListItem>> {
    let lecturer_id = require_id(query.lecturer_id, "lecturer_id")?;
    service
        .get_storage(request)
        .list_courses_with_counts(lecturer_id)
        .await
}
