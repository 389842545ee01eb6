use serde::Serialize;

use crate::errors::PortfolioError;

// 统一的API响应结构
//
// 业务数据直接展开到顶层，例如 `{"success": true, "courses": [...]}`
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }

    pub fn success_data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn success_empty(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn error_empty(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn from_error(err: &PortfolioError) -> Self {
        Self::error_empty(err.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Payload {
        course_id: i64,
    }

    #[test]
    fn test_success_flattens_payload() {
        let body = serde_json::to_value(ApiResponse::success(
            Payload { course_id: 3 },
            "Course added successfully",
        ))
        .unwrap();
        assert_eq!(
            body,
            json!({ "success": true, "message": "Course added successfully", "course_id": 3 })
        );
    }

    #[test]
    fn test_success_data_omits_message() {
        let body =
            serde_json::to_value(ApiResponse::success_data(Payload { course_id: 1 })).unwrap();
        assert_eq!(body, json!({ "success": true, "course_id": 1 }));
    }

    #[test]
    fn test_error_envelope() {
        let body = serde_json::to_value(ApiResponse::error_empty("Unknown action")).unwrap();
        assert_eq!(body, json!({ "success": false, "message": "Unknown action" }));
    }

    #[test]
    fn test_from_error_uses_raw_message() {
        let err = PortfolioError::not_found("Lecturer not found");
        let body = serde_json::to_value(ApiResponse::from_error(&err)).unwrap();
        assert_eq!(body["message"], "Lecturer not found");
    }
}
