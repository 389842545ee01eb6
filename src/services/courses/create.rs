use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::errors::Result;
use crate::models::{
    ApiResponse,
    courses::{
        requests::{AddCourseRequest, CreateCourseRequest},
        responses::AddCourseResponse,
    },
};
use crate::utils::{require_id, require_text};

use super::CourseService;

pub async fn add_course(
    service: &CourseService,
    add_request: AddCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    match create_course(service, add_request, request).await {
        Ok(course_id) => {
            tracing::info!("Course {} created", course_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                AddCourseResponse { course_id },
                "Course added successfully",
            )))
        }
        Err(e) => {
            tracing::warn!("Failed to add course: {}", e);
            Ok(HttpResponse::Ok().json(ApiResponse::from_error(&e)))
        }
    }
}

async fn create_course(
    service: &CourseService,
    add_request: AddCourseRequest,
    request: &HttpRequest,
) -> Result<i64> {
    let course = CreateCourseRequest {
        lecturer_id: require_id(add_request.lecturer_id, "lecturer_id")?,
        course_code: require_text(add_request.course_code, "course_code")?,
        title: require_text(add_request.title, "title")?,
        level: require_text(add_request.level, "level")?,
    };

    service.get_storage(request).create_course(course).await
}
