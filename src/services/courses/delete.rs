use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::errors::Result;
use crate::models::{ApiResponse, courses::requests::DeleteCourseRequest};
use crate::utils::require_id;

use super::CourseService;

pub async fn delete_course(
    service: &CourseService,
    delete_request: DeleteCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    match remove_course(service, delete_request, request).await {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Course deleted successfully",
        ))),
        Err(e) => {
            tracing::warn!("Failed to delete course: {}", e);
            Ok(HttpResponse::Ok().json(ApiResponse::from_error(&e)))
        }
    }
}

async fn remove_course(
    service: &CourseService,
    delete_request: DeleteCourseRequest,
    request: &HttpRequest,
) -> Result<()> {
    let course_id = require_id(delete_request.course_id, "course_id")?;

    // 带 lecturer_id 时仅删除本人课程；零行受影响同样视为成功
    let affected = service
        .get_storage(request)
        .delete_course(course_id, delete_request.lecturer_id)
        .await?;

    if affected == 0 {
        tracing::warn!(
            "Delete matched no course (course_id={}, lecturer_id={:?})",
            course_id,
            delete_request.lecturer_id
        );
    }

    Ok(())
}
