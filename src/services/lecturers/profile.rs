use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse,
    lecturers::{requests::LecturerQuery, responses::LecturerResponse},
};
use crate::utils::require_id;

use super::LecturerService;

pub async fn handle_profile(
    service: &LecturerService,
    query: LecturerQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let lecturer_id = match require_id(query.lecturer_id, "lecturer_id") {
        Ok(id) => id,
        Err(e) => return Ok(HttpResponse::Ok().json(ApiResponse::from_error(&e))),
    };

    match service
        .get_storage(request)
        .get_lecturer_by_id(lecturer_id)
        .await
    {
        Ok(Some(lecturer)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_data(LecturerResponse { lecturer })))
        }
        Ok(None) => Ok(HttpResponse::Ok().json(ApiResponse::error_empty("Lecturer not found"))),
        Err(e) => {
            tracing::error!("Failed to load profile for lecturer {}: {}", lecturer_id, e);
            Ok(HttpResponse::Ok().json(ApiResponse::from_error(&e)))
        }
    }
}
