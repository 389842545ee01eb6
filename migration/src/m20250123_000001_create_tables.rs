use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建讲师表（邮箱唯一约束由数据库保证）
        manager
            .create_table(
                Table::create()
                    .table(Lecturer::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Lecturer::LecturerId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Lecturer::Name).string().not_null())
                    .col(
                        ColumnDef::new(Lecturer::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Lecturer::Password).string().not_null())
                    .col(ColumnDef::new(Lecturer::Bio).text().null())
                    .col(ColumnDef::new(Lecturer::Education).text().null())
                    .col(ColumnDef::new(Lecturer::Experience).text().null())
                    .to_owned(),
            )
            .await?;

        // 创建课程表
        manager
            .create_table(
                Table::create()
                    .table(Course::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Course::CourseId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Course::LecturerId).big_integer().not_null())
                    .col(ColumnDef::new(Course::CourseCode).string().not_null())
                    .col(ColumnDef::new(Course::Title).string().not_null())
                    .col(ColumnDef::new(Course::Level).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Course::Table, Course::LecturerId)
                            .to(Lecturer::Table, Lecturer::LecturerId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建学生表
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Student::StudentId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Student::FullName).string().not_null())
                    .col(ColumnDef::new(Student::MatricNo).string().not_null())
                    .col(ColumnDef::new(Student::Email).string().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建选课关联表
        manager
            .create_table(
                Table::create()
                    .table(StudentCourses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentCourses::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentCourses::CourseId)
                            .big_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(StudentCourses::StudentId)
                            .col(StudentCourses::CourseId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentCourses::Table, StudentCourses::StudentId)
                            .to(Student::Table, Student::StudentId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentCourses::Table, StudentCourses::CourseId)
                            .to(Course::Table, Course::CourseId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建作业表
        manager
            .create_table(
                Table::create()
                    .table(Assignment::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assignment::AssignmentId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Assignment::CourseId).big_integer().not_null())
                    .col(ColumnDef::new(Assignment::Title).string().not_null())
                    .col(ColumnDef::new(Assignment::Description).text().null())
                    .col(ColumnDef::new(Assignment::DueDate).date_time().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Assignment::Table, Assignment::CourseId)
                            .to(Course::Table, Course::CourseId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_course_lecturer_id")
                    .table(Course::Table)
                    .col(Course::LecturerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_student_courses_course_id")
                    .table(StudentCourses::Table)
                    .col(StudentCourses::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_assignment_course_id")
                    .table(Assignment::Table)
                    .col(Assignment::CourseId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按依赖关系逆序删除
        manager
            .drop_table(Table::drop().table(Assignment::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentCourses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Course::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Lecturer::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Lecturer {
    #[sea_orm(iden = "lecturer")]
    Table,
    LecturerId,
    Name,
    Email,
    Password,
    Bio,
    Education,
    Experience,
}

#[derive(DeriveIden)]
enum Course {
    #[sea_orm(iden = "course")]
    Table,
    CourseId,
    LecturerId,
    CourseCode,
    Title,
    Level,
}

#[derive(DeriveIden)]
enum Student {
    #[sea_orm(iden = "student")]
    Table,
    StudentId,
    FullName,
    MatricNo,
    Email,
}

#[derive(DeriveIden)]
enum StudentCourses {
    #[sea_orm(iden = "student_courses")]
    Table,
    StudentId,
    CourseId,
}

#[derive(DeriveIden)]
enum Assignment {
    #[sea_orm(iden = "assignment")]
    Table,
    AssignmentId,
    CourseId,
    Title,
    Description,
    DueDate,
}
