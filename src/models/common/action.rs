//! 请求动作与载荷
//!
//! 所有请求都发往同一个入口，由 `action` 字段选择处理函数，
//! `data` 字段携带该动作的参数。

use once_cell::sync::Lazy;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;

use crate::errors::{PortfolioError, Result};

/// 支持的动作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Login,
    Signup,
    Dashboard,
    Courses,
    Assignments,
    Students,
    Profile,
    AddCourse,
    DeleteCourse,
    Publications,
    AddPublication,
    DeletePublication,
}

impl Action {
    pub const ALL: [Action; 12] = [
        Action::Login,
        Action::Signup,
        Action::Dashboard,
        Action::Courses,
        Action::Assignments,
        Action::Students,
        Action::Profile,
        Action::AddCourse,
        Action::DeleteCourse,
        Action::Publications,
        Action::AddPublication,
        Action::DeletePublication,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Login => "login",
            Action::Signup => "signup",
            Action::Dashboard => "dashboard",
            Action::Courses => "courses",
            Action::Assignments => "assignments",
            Action::Students => "students",
            Action::Profile => "profile",
            Action::AddCourse => "add_course",
            Action::DeleteCourse => "delete_course",
            Action::Publications => "publications",
            Action::AddPublication => "add_publication",
            Action::DeletePublication => "delete_publication",
        }
    }

    /// 按名称精确匹配（区分大小写）
    pub fn from_name(name: &str) -> Option<Self> {
        ACTION_TABLE.get(name).copied()
    }
}

// 动作名称表，首次使用时构建
static ACTION_TABLE: Lazy<HashMap<&'static str, Action>> =
    Lazy::new(|| Action::ALL.iter().map(|a| (a.as_str(), *a)).collect());

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// 表单载荷：data 是 JSON 字符串
#[derive(Debug, Default, Deserialize)]
pub struct ActionForm {
    pub action: Option<String>,
    pub data: Option<String>,
}

// JSON 载荷：data 是对象
#[derive(Debug, Default, Deserialize)]
pub struct ActionJson {
    pub action: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}

/// 解析后的请求
#[derive(Debug, Clone, PartialEq)]
pub struct ActionRequest {
    pub action: Option<String>,
    pub data: Value,
}

impl ActionRequest {
    /// 从表单构建，data 不是合法 JSON 时返回序列化错误
    pub fn from_form(form: ActionForm) -> Result<Option<Self>> {
        if form.action.is_none() && form.data.is_none() {
            return Ok(None);
        }

        let data = match form.data.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => serde_json::from_str(raw)?,
            _ => empty_object(),
        };

        Ok(Some(Self {
            action: form.action,
            data,
        }))
    }

    pub fn from_json(json: ActionJson) -> Option<Self> {
        if json.action.is_none() && json.data.is_none() {
            return None;
        }

        Some(Self {
            action: json.action,
            data: match json.data {
                Some(Value::Null) | None => empty_object(),
                Some(value) => value,
            },
        })
    }

    /// 解析动作名称，未知或缺失时返回 None
    pub fn resolve_action(&self) -> Option<Action> {
        self.action.as_deref().and_then(Action::from_name)
    }

    /// 将 data 解码为具体的请求结构
    pub fn decode<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(self.data.clone())
            .map_err(|e| PortfolioError::validation(format!("Invalid request data: {e}")))
    }
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}
