use crate::errors::{PortfolioError, Result};

/// 取出必填字段，缺失或为空白时返回校验错误
pub fn require_text(value: Option<String>, field: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(missing(field)),
    }
}

/// 取出必填 ID
pub fn require_id(value: Option<i64>, field: &str) -> Result<i64> {
    value.ok_or_else(|| missing(field))
}

fn missing(field: &str) -> PortfolioError {
    PortfolioError::validation(format!("Missing required field: {field}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text() {
        assert_eq!(require_text(Some("Ada".into()), "name").unwrap(), "Ada");
        let err = require_text(Some("   ".into()), "name").unwrap_err();
        assert_eq!(err.message(), "Missing required field: name");
        assert!(require_text(None, "email").is_err());
    }

    #[test]
    fn test_require_id() {
        assert_eq!(require_id(Some(5), "lecturer_id").unwrap(), 5);
        let err = require_id(None, "course_id").unwrap_err();
        assert_eq!(err.message(), "Missing required field: course_id");
    }
}
