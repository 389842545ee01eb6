use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::errors::Result;
use crate::models::{
    ApiResponse,
    lecturers::{
        requests::LecturerQuery,
        responses::{DashboardResponse, DashboardStats},
    },
};
use crate::utils::require_id;

use super::LecturerService;

pub async fn handle_dashboard(
    service: &LecturerService,
    query: LecturerQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    match load_dashboard(service, query, request).await {
        Ok(dashboard) => Ok(HttpResponse::Ok().json(ApiResponse::success_data(dashboard))),
        Err(e) => {
            tracing::warn!("Failed to load dashboard: {}", e);
            Ok(HttpResponse::Ok().json(ApiResponse::from_error(&e)))
        }
    }
}

async fn load_dashboard(
    service: &LecturerService,
    query: LecturerQuery,
    request: &HttpRequest,
) -> Result<DashboardResponse> {
    let lecturer_id = require_id(query.lecturer_id, "lecturer_id")?;
    let storage = service.get_storage(request);

    // 1. 讲师信息
    let lecturer = storage.get_lecturer_by_id(lecturer_id).await?;
    if lecturer.is_none() {
        tracing::debug!("Dashboard requested for unknown lecturer {}", lecturer_id);
    }

    // 2. 统计
    let total_courses = storage.count_courses_by_lecturer(lecturer_id).await?;
    let total_students = storage.count_students_by_lecturer(lecturer_id).await?;

    // 3. 课程列表
    let courses = storage.list_course_summaries(lecturer_id).await?;

    Ok(DashboardResponse {
        lecturer,
        stats: DashboardStats {
            total_courses,
            total_students,
            pending_marking: 0,
        },
        courses,
    })
}
