//! 讲师实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "lecturer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub lecturer_id: i64,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub bio: Option<String>,
    pub education: Option<String>,
    pub experience: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course::Entity")]
    Courses,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Courses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_lecturer(self) -> crate::models::lecturers::entities::Lecturer {
        use crate::models::lecturers::entities::Lecturer;

        Lecturer {
            lecturer_id: self.lecturer_id,
            name: self.name,
            email: self.email,
            password: self.password,
            bio: self.bio,
            education: self.education,
            experience: self.experience,
        }
    }
}
