//! 课程存储操作

use super::SeaOrmStorage;
use crate::entity::assignment::{Column as AssignmentColumn, Entity as Assignments};
use crate::entity::course::{ActiveModel, Column, Entity as Courses, Relation};
use crate::entity::student_courses::{Column as StudentCourseColumn, Entity as StudentCourses};
use crate::errors::{PortfolioError, Result};
use crate::models::courses::{
    requests::CreateCourseRequest,
    responses::{CourseListItem, CourseSummary},
};
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Set,
};

impl SeaOrmStorage {
    /// 统计讲师名下课程数量
    pub async fn count_courses_by_lecturer_impl(&self, lecturer_id: i64) -> Result<i64> {
        let count = Courses::find()
            .filter(Column::LecturerId.eq(lecturer_id))
            .count(&self.db)
            .await
            .map_err(|e| {
                PortfolioError::database_operation(format!("Failed to count courses: {e}"))
            })?;

        Ok(count as i64)
    }

    /// 课程摘要及选课人数（仪表盘）
    pub async fn list_course_summaries_impl(
        &self,
        lecturer_id: i64,
    ) -> Result<Vec<CourseSummary>> {
        Courses::find()
            .select_only()
            .columns([
                Column::CourseId,
                Column::CourseCode,
                Column::Title,
                Column::Level,
            ])
            .column_as(
                Expr::expr(Func::count(Expr::col((
                    StudentCourses,
                    StudentCourseColumn::StudentId,
                )))),
                "student_count",
            )
            .join(JoinType::LeftJoin, Relation::StudentCourses.def())
            .filter(Column::LecturerId.eq(lecturer_id))
            .group_by(Column::CourseId)
            .group_by(Column::CourseCode)
            .group_by(Column::Title)
            .group_by(Column::Level)
            .order_by_asc(Column::CourseId)
            .into_model::<CourseSummary>()
            .all(&self.db)
            .await
            .map_err(|e| {
                PortfolioError::database_operation(format!("Failed to list courses: {e}"))
            })
    }

    /// 课程列表，附带去重后的学生数与作业数
    ///
    /// 两次 LEFT JOIN 会产生笛卡尔积，因此两项计数都必须 DISTINCT。
    pub async fn list_courses_with_counts_impl(
        &self,
        lecturer_id: i64,
    ) -> Result<Vec<CourseListItem>> {
        Courses::find()
            .select_only()
            .columns([
                Column::CourseId,
                Column::CourseCode,
                Column::Title,
                Column::Level,
            ])
            .column_as(
                Expr::expr(Func::count_distinct(Expr::col((
                    StudentCourses,
                    StudentCourseColumn::StudentId,
                )))),
                "student_count",
            )
            .column_as(
                Expr::expr(Func::count_distinct(Expr::col((
                    Assignments,
                    AssignmentColumn::AssignmentId,
                )))),
                "assignment_count",
            )
            .join(JoinType::LeftJoin, Relation::StudentCourses.def())
            .join(JoinType::LeftJoin, Relation::Assignments.def())
            .filter(Column::LecturerId.eq(lecturer_id))
            .group_by(Column::CourseId)
            .group_by(Column::CourseCode)
            .group_by(Column::Title)
            .group_by(Column::Level)
            .order_by_asc(Column::CourseId)
            .into_model::<CourseListItem>()
            .all(&self.db)
            .await
            .map_err(|e| {
                PortfolioError::database_operation(format!("Failed to list courses: {e}"))
            })
    }

    /// 创建课程
    pub async fn create_course_impl(&self, req: CreateCourseRequest) -> Result<i64> {
        let model = ActiveModel {
            lecturer_id: Set(req.lecturer_id),
            course_code: Set(req.course_code),
            title: Set(req.title),
            level: Set(req.level),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            PortfolioError::database_operation(format!("Failed to create course: {e}"))
        })?;

        Ok(result.course_id)
    }

    /// 删除课程，返回受影响行数
    pub async fn delete_course_impl(
        &self,
        course_id: i64,
        lecturer_id: Option<i64>,
    ) -> Result<u64> {
        let mut delete = Courses::delete_many().filter(Column::CourseId.eq(course_id));

        if let Some(lecturer_id) = lecturer_id {
            delete = delete.filter(Column::LecturerId.eq(lecturer_id));
        }

        let result = delete.exec(&self.db).await.map_err(|e| {
            PortfolioError::database_operation(format!("Failed to delete course: {e}"))
        })?;

        Ok(result.rows_affected)
    }
}
