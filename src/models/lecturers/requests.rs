use serde::Deserialize;

use crate::models::common::lenient::{deserialize_optional_id, deserialize_optional_text};

// 讲师登录请求
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub password: Option<String>,
}

// 讲师注册请求
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub password: Option<String>,
}

// 仅携带讲师 ID 的查询（dashboard/courses/assignments/students/profile）
#[derive(Debug, Deserialize)]
pub struct LecturerQuery {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub lecturer_id: Option<i64>,
}

// 存储层创建讲师（密码已按配置方案处理）
#[derive(Debug, Clone)]
pub struct CreateLecturerRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}
