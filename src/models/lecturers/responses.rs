use serde::Serialize;

use super::entities::Lecturer;
use crate::models::courses::responses::CourseSummary;

#[derive(Debug, Serialize)]
pub struct LecturerResponse {
    pub lecturer: Lecturer,
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub lecturer_id: i64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardStats {
    pub total_courses: i64,
    pub total_students: i64,
    // 暂无批改数据来源，固定为 0
    pub pending_marking: i64,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    // 讲师不存在时为 null，统计与课程按空集合计算
    pub lecturer: Option<Lecturer>,
    pub stats: DashboardStats,
    pub courses: Vec<CourseSummary>,
}
