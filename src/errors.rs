//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。
//! 对外的 JSON 信封只携带 `message()`，代码和类型名用于日志。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_portfolio_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum PortfolioError {
            $($variant(String),)*
        }

        impl PortfolioError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(PortfolioError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(PortfolioError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(PortfolioError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl PortfolioError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        PortfolioError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_portfolio_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Conflict("E004", "Resource Conflict"),
    Validation("E005", "Validation Error"),
    NotFound("E006", "Resource Not Found"),
    Serialization("E007", "Serialization Error"),
    Authentication("E008", "Authentication Error"),
}

impl PortfolioError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for PortfolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for PortfolioError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for PortfolioError {
    fn from(err: sea_orm::DbErr) -> Self {
        PortfolioError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for PortfolioError {
    fn from(err: serde_json::Error) -> Self {
        PortfolioError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(PortfolioError::database_config("test").code(), "E001");
        assert_eq!(PortfolioError::conflict("test").code(), "E004");
        assert_eq!(PortfolioError::validation("test").code(), "E005");
        assert_eq!(PortfolioError::authentication("test").code(), "E008");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            PortfolioError::not_found("test").error_type(),
            "Resource Not Found"
        );
        assert_eq!(
            PortfolioError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = PortfolioError::conflict("Email already registered");
        assert_eq!(err.message(), "Email already registered");
    }

    #[test]
    fn test_format_simple() {
        let err = PortfolioError::validation("Missing required field: email");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Missing required field: email"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let err: PortfolioError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert_eq!(err.code(), "E007");
        assert!(!err.message().is_empty());
    }
}
