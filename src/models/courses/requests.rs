use serde::Deserialize;

use crate::models::common::lenient::{deserialize_optional_id, deserialize_optional_text};

// 新增课程请求
#[derive(Debug, Deserialize)]
pub struct AddCourseRequest {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub lecturer_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub course_code: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub level: Option<String>,
}

// 删除课程请求，lecturer_id 存在时限定为本人课程
#[derive(Debug, Deserialize)]
pub struct DeleteCourseRequest {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub course_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub lecturer_id: Option<i64>,
}

// 存储层创建课程
#[derive(Debug, Clone)]
pub struct CreateCourseRequest {
    pub lecturer_id: i64,
    pub course_code: String,
    pub title: String,
    pub level: String,
}
