//! 学生存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::course::Column as CourseColumn;
use crate::entity::student::{Column, Entity as Students, Relation};
use crate::entity::student_courses::{
    Column as StudentCourseColumn, Entity as StudentCourses, Relation as StudentCourseRelation,
};
use crate::errors::{PortfolioError, Result};
use crate::models::students::responses::StudentListItem;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ColumnTrait, EntityTrait, FromQueryResult, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};

#[derive(Debug, FromQueryResult)]
struct EnrollmentRow {
    student_id: i64,
    full_name: String,
    matric_no: String,
    email: String,
    course_code: String,
}

/// 把每条选课记录合并为每个学生一行，课程代码以逗号连接，保持查询顺序
fn group_enrollments(rows: Vec<EnrollmentRow>) -> Vec<StudentListItem> {
    let mut students: Vec<StudentListItem> = Vec::new();
    let mut index: HashMap<i64, usize> = HashMap::new();

    for row in rows {
        match index.get(&row.student_id) {
            Some(&pos) => {
                let student = &mut students[pos];
                student.course_code.push_str(", ");
                student.course_code.push_str(&row.course_code);
            }
            None => {
                index.insert(row.student_id, students.len());
                students.push(StudentListItem {
                    student_id: row.student_id,
                    full_name: row.full_name,
                    matric_no: row.matric_no,
                    email: row.email,
                    course_code: row.course_code,
                });
            }
        }
    }

    students
}

impl SeaOrmStorage {
    /// 统计讲师课程中的去重学生数
    pub async fn count_students_by_lecturer_impl(&self, lecturer_id: i64) -> Result<i64> {
        let total = StudentCourses::find()
            .select_only()
            .column_as(
                Expr::expr(Func::count_distinct(Expr::col((
                    StudentCourses,
                    StudentCourseColumn::StudentId,
                )))),
                "total_students",
            )
            .join(JoinType::InnerJoin, StudentCourseRelation::Course.def())
            .filter(CourseColumn::LecturerId.eq(lecturer_id))
            .into_tuple::<i64>()
            .one(&self.db)
            .await
            .map_err(|e| {
                PortfolioError::database_operation(format!("Failed to count students: {e}"))
            })?;

        Ok(total.unwrap_or(0))
    }

    /// 列出讲师任一课程中的学生（去重）
    pub async fn list_students_by_lecturer_impl(
        &self,
        lecturer_id: i64,
    ) -> Result<Vec<StudentListItem>> {
        let rows = Students::find()
            .select_only()
            .columns([
                Column::StudentId,
                Column::FullName,
                Column::MatricNo,
                Column::Email,
            ])
            .column(CourseColumn::CourseCode)
            .join(JoinType::InnerJoin, Relation::StudentCourses.def())
            .join(JoinType::InnerJoin, StudentCourseRelation::Course.def())
            .filter(CourseColumn::LecturerId.eq(lecturer_id))
            .order_by_asc(Column::FullName)
            .order_by_asc(Column::StudentId)
            .order_by_asc(CourseColumn::CourseCode)
            .into_model::<EnrollmentRow>()
            .all(&self.db)
            .await
            .map_err(|e| {
                PortfolioError::database_operation(format!("Failed to list students: {e}"))
            })?;

        Ok(group_enrollments(rows))
    }
}
