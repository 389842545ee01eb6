use sea_orm::FromQueryResult;
use serde::Serialize;

// 仪表盘中的课程摘要
#[derive(Debug, Clone, Serialize, PartialEq, FromQueryResult)]
pub struct CourseSummary {
    pub course_id: i64,
    pub course_code: String,
    pub title: String,
    pub level: String,
    pub student_count: i64,
}

// 课程页列表项
#[derive(Debug, Clone, Serialize, PartialEq, FromQueryResult)]
pub struct CourseListItem {
    pub course_id: i64,
    pub course_code: String,
    pub title: String,
    pub level: String,
    pub student_count: i64,
    pub assignment_count: i64,
}

#[derive(Debug, Serialize)]
pub struct CourseListResponse {
    pub courses: Vec<CourseListItem>,
}

#[derive(Debug, Serialize)]
pub struct AddCourseResponse {
    pub course_id: i64,
}
