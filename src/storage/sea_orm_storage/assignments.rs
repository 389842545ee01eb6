//! 作业存储操作

use super::SeaOrmStorage;
use crate::entity::assignment::{Column, Entity as Assignments, Relation};
use crate::entity::course::Column as CourseColumn;
use crate::errors::{PortfolioError, Result};
use crate::models::assignments::responses::AssignmentListItem;
use sea_orm::prelude::DateTime;
use sea_orm::{
    ColumnTrait, EntityTrait, FromQueryResult, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};

const DUE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, FromQueryResult)]
struct AssignmentRow {
    assignment_id: i64,
    course_id: i64,
    course_code: String,
    title: String,
    description: Option<String>,
    due_date: Option<DateTime>,
}

impl AssignmentRow {
    fn into_list_item(self) -> AssignmentListItem {
        AssignmentListItem {
            assignment_id: self.assignment_id,
            course_id: self.course_id,
            course_code: self.course_code,
            title: self.title,
            description: self.description,
            due_date: self.due_date.map(|d| d.format(DUE_DATE_FORMAT).to_string()),
            total_submissions: 0,
            pending_grading: 0,
        }
    }
}

impl SeaOrmStorage {
    /// 列出讲师名下所有作业，按截止时间倒序
    pub async fn list_assignments_by_lecturer_impl(
        &self,
        lecturer_id: i64,
    ) -> Result<Vec<AssignmentListItem>> {
        let rows = Assignments::find()
            .select_only()
            .columns([
                Column::AssignmentId,
                Column::CourseId,
                Column::Title,
                Column::Description,
                Column::DueDate,
            ])
            .column(CourseColumn::CourseCode)
            .join(JoinType::InnerJoin, Relation::Course.def())
            .filter(CourseColumn::LecturerId.eq(lecturer_id))
            .order_by_desc(Column::DueDate)
            .order_by_desc(Column::AssignmentId)
            .into_model::<AssignmentRow>()
            .all(&self.db)
            .await
            .map_err(|e| {
                PortfolioError::database_operation(format!("Failed to list assignments: {e}"))
            })?;

        Ok(rows.into_iter().map(AssignmentRow::into_list_item).collect())
    }
}
