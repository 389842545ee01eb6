//! 讲师存储操作

use super::SeaOrmStorage;
use crate::entity::lecturer::{ActiveModel, Column, Entity as Lecturers};
use crate::errors::{PortfolioError, Result};
use crate::models::lecturers::{entities::Lecturer, requests::CreateLecturerRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, SqlErr};

impl SeaOrmStorage {
    /// 创建讲师，邮箱冲突由唯一约束判定
    pub async fn create_lecturer_impl(&self, req: CreateLecturerRequest) -> Result<i64> {
        let model = ActiveModel {
            name: Set(req.name),
            email: Set(req.email),
            password: Set(req.password),
            bio: Set(Some(String::new())),
            education: Set(Some(String::new())),
            experience: Set(Some(String::new())),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                PortfolioError::conflict("Email already registered")
            }
            _ => PortfolioError::database_operation(format!("Failed to create lecturer: {e}")),
        })?;

        Ok(result.lecturer_id)
    }

    /// 通过 ID 获取讲师
    pub async fn get_lecturer_by_id_impl(&self, lecturer_id: i64) -> Result<Option<Lecturer>> {
        let result = Lecturers::find_by_id(lecturer_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                PortfolioError::database_operation(format!("Failed to query lecturer: {e}"))
            })?;

        Ok(result.map(|m| m.into_lecturer()))
    }

    /// 通过邮箱获取讲师
    pub async fn get_lecturer_by_email_impl(&self, email: &str) -> Result<Option<Lecturer>> {
        let result = Lecturers::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| {
                PortfolioError::database_operation(format!("Failed to query lecturer: {e}"))
            })?;

        Ok(result.map(|m| m.into_lecturer()))
    }
}
