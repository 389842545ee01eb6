use serde::{Deserialize, Serialize};

// 讲师实体
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Lecturer {
    pub lecturer_id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    pub password: String,
    pub bio: Option<String>,
    pub education: Option<String>,
    pub experience: Option<String>,
}
