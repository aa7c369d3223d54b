// ==========================================
// 食堂点餐系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 注意: 单条菜品解析失败属于诊断数据，不在此枚举中
// ==========================================

use crate::domain::dish::ParseDiagnostic;
use crate::i18n::t_with_args;
use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("文件编码无效: 既不是 UTF-8 也不是 Windows-1251")]
    InvalidEncoding,

    // ===== 内容错误 =====
    #[error("文件中未找到任何菜品 (跳过 {} 个分组)", .diagnostics.len())]
    NoDishesFound { diagnostics: Vec<ParseDiagnostic> },

    // ===== 配置错误 =====
    #[error("配置读取失败 (key: {key}): {message}")]
    ConfigReadError { key: String, message: String },

    #[error("配置值格式错误 (key: {key}, value: {value}): {message}")]
    ConfigValueError {
        key: String,
        value: String,
        message: String,
    },
}

impl ImportError {
    /// 面向用户的本地化消息
    pub fn localized_message(&self) -> String {
        match self {
            ImportError::InvalidEncoding => t_with_args("import.invalid_encoding", &[]),
            ImportError::NoDishesFound { .. } => t_with_args("import.no_dishes_found", &[]),
            ImportError::FileReadError(detail) => {
                t_with_args("import.file_read_error", &[("detail", detail.as_str())])
            }
            other => other.to_string(),
        }
    }
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<serde_json::Error>
impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        ImportError::ConfigReadError {
            key: "<root>".to_string(),
            message: err.to_string(),
        }
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
