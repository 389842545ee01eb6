use serde::Serialize;

// 学生列表项，course_code 为该学生在本讲师名下所选课程代码（逗号分隔）
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StudentListItem {
    pub student_id: i64,
    pub full_name: String,
    pub matric_no: String,
    pub email: String,
    pub course_code: String,
}

#[derive(Debug, Serialize)]
pub struct StudentListResponse {
    pub students: Vec<StudentListItem>,
}
