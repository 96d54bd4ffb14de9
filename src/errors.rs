//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_classy_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum ClassyError {
            $($variant(String),)*
        }

        impl ClassyError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(ClassyError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(ClassyError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(ClassyError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl ClassyError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        ClassyError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_classy_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Validation("E004", "Validation Error"),
    NotFound("E005", "Resource Not Found"),
    Serialization("E006", "Serialization Error"),
    Delivery("E007", "Comment Delivery Error"),
}

impl ClassyError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ClassyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ClassyError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for ClassyError {
    fn from(err: sea_orm::DbErr) -> Self {
        ClassyError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for ClassyError {
    fn from(err: serde_json::Error) -> Self {
        ClassyError::Serialization(err.to_string())
    }
}

impl From<reqwest::Error> for ClassyError {
    fn from(err: reqwest::Error) -> Self {
        ClassyError::Delivery(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClassyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ClassyError::database_config("test").code(), "E001");
        assert_eq!(ClassyError::database_operation("test").code(), "E003");
        assert_eq!(ClassyError::validation("test").code(), "E004");
        assert_eq!(ClassyError::delivery("test").code(), "E007");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            ClassyError::not_found("test").error_type(),
            "Resource Not Found"
        );
        assert_eq!(
            ClassyError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = ClassyError::validation("questions 缺失");
        assert_eq!(err.message(), "questions 缺失");
    }

    #[test]
    fn test_format_simple() {
        let err = ClassyError::validation("Invalid URL");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Invalid URL"));
    }

    #[test]
    fn test_from_serde_error() {
        let err: ClassyError = serde_json::from_str::<i32>("not json").unwrap_err().into();
        assert_eq!(err.code(), "E006");
    }
}
