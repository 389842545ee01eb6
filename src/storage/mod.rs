use std::sync::Arc;

use crate::models::{
    assignments::responses::AssignmentListItem,
    courses::{
        requests::CreateCourseRequest,
        responses::{CourseListItem, CourseSummary},
    },
    lecturers::{entities::Lecturer, requests::CreateLecturerRequest},
    students::responses::StudentListItem,
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 讲师管理方法
    // 创建讲师，返回新 ID；邮箱重复时返回 Conflict
    async fn create_lecturer(&self, lecturer: CreateLecturerRequest) -> Result<i64>;
    // 通过ID获取讲师信息
    async fn get_lecturer_by_id(&self, lecturer_id: i64) -> Result<Option<Lecturer>>;
    // 通过邮箱获取讲师信息
    async fn get_lecturer_by_email(&self, email: &str) -> Result<Option<Lecturer>>;

    /// 课程管理方法
    // 统计讲师课程数量
    async fn count_courses_by_lecturer(&self, lecturer_id: i64) -> Result<i64>;
    // 课程摘要（含选课人数）
    async fn list_course_summaries(&self, lecturer_id: i64) -> Result<Vec<CourseSummary>>;
    // 课程列表（含学生数与作业数）
    async fn list_courses_with_counts(&self, lecturer_id: i64) -> Result<Vec<CourseListItem>>;
    // 创建课程，返回新 ID
    async fn create_course(&self, course: CreateCourseRequest) -> Result<i64>;
    // 删除课程，返回受影响行数
    async fn delete_course(&self, course_id: i64, lecturer_id: Option<i64>) -> Result<u64>;

    /// 学生与作业查询方法
    // 统计讲师课程中的去重学生数
    async fn count_students_by_lecturer(&self, lecturer_id: i64) -> Result<i64>;
    // 列出讲师课程中的学生
    async fn list_students_by_lecturer(&self, lecturer_id: i64) -> Result<Vec<StudentListItem>>;
    // 列出讲师课程中的作业
    async fn list_assignments_by_lecturer(
        &self,
        lecturer_id: i64,
    ) -> Result<Vec<AssignmentListItem>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
