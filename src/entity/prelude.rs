//! 预导入模块，方便使用

pub use super::assignment::{
    ActiveModel as AssignmentActiveModel, Entity as Assignments, Model as AssignmentModel,
};
pub use super::course::{ActiveModel as CourseActiveModel, Entity as Courses, Model as CourseModel};
pub use super::lecturer::{
    ActiveModel as LecturerActiveModel, Entity as Lecturers, Model as LecturerModel,
};
pub use super::student::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};
pub use super::student_courses::{
    ActiveModel as StudentCourseActiveModel, Entity as StudentCourses,
    Model as StudentCourseModel,
};
